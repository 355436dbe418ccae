pub mod collection;
pub mod describe;
pub mod normalize;
pub mod parse;
pub mod pricing;
pub mod text;

pub use collection::{
    admin_search, ensure_unique_ids, filter_catalog, sort_catalog, CatalogFilter, CatalogStats,
};
pub use describe::{build_description, build_tag};
pub use normalize::normalize_product;
pub use parse::{detect_bike_category, detect_item_type, parse_size};
pub use pricing::{estimate_price, round_price};
pub use text::{clean_text, clean_title, extract_number};
