pub mod admin;
pub mod bulk;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod kv;
pub mod storefront;

pub use admin::ProductDraft;
pub use bulk::{BulkSource, HttpBulkSource};
pub use cart::Cart;
pub use catalog::{CatalogOrigin, CatalogStore, CART_KEY, CATALOG_KEY};
pub use error::{BulkSourceError, CartError, CheckoutError, EditError, StoreError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use storefront::Storefront;
