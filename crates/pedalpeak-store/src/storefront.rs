//! The in-memory session over a [`CatalogStore`]: the loaded catalog plus the
//! reconciled cart. Every mutation is persisted before it returns.

use pedalpeak_catalog::{admin_search, filter_catalog, CatalogFilter, CatalogStats};
use pedalpeak_core::Product;

use crate::cart::Cart;
use crate::catalog::{CatalogOrigin, CatalogStore};
use crate::error::{CartError, StoreError};
use crate::kv::KeyValueStore;

pub struct Storefront<S> {
    pub(crate) store: CatalogStore<S>,
    pub(crate) products: Vec<Product>,
    pub(crate) cart: Cart,
    pub(crate) origin: CatalogOrigin,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Loads the catalog, then the persisted cart reconciled against it.
    pub async fn open(store: CatalogStore<S>) -> Self {
        let (products, origin) = store.load_catalog_with_origin().await;
        let cart = Cart::load(store.kv(), &products);
        tracing::debug!(
            products = products.len(),
            cart_lines = cart.lines().len(),
            ?origin,
            "storefront opened"
        );
        Self {
            store,
            products,
            cart,
            origin,
        }
    }

    /// True when nothing was persisted and the bulk source could not be
    /// loaded, so the empty catalog is a failure rather than a real state.
    #[must_use]
    pub fn catalog_unavailable(&self) -> bool {
        self.origin == CatalogOrigin::Unavailable
    }

    #[must_use]
    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn browse(&self, filter: &CatalogFilter) -> Vec<&Product> {
        filter_catalog(&self.products, filter)
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        admin_search(&self.products, query)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_catalog(&self.products)
    }

    /// Adds one unit of the product with `id` to the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: no product has this id.
    /// - [`CartError::Store`]: the cart could not be persisted.
    pub fn cart_add(&mut self, id: &str) -> Result<(), CartError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CartError::UnknownProduct { id: id.to_owned() })?;
        self.cart.add(product);
        self.persist_cart()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart could not be persisted.
    pub fn cart_update_qty(&mut self, id: &str, delta: i64) -> Result<(), StoreError> {
        self.cart.update_qty(id, delta);
        self.persist_cart()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart could not be persisted.
    pub fn cart_remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.cart.remove(id);
        self.persist_cart()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart could not be persisted.
    pub fn cart_clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist_cart()
    }

    /// Swaps in a new catalog and drops cart lines that no longer resolve.
    pub(crate) fn replace_products(
        &mut self,
        products: Vec<Product>,
        origin: CatalogOrigin,
    ) -> Result<(), StoreError> {
        self.products = products;
        self.origin = origin;
        let before = self.cart.clone();
        self.cart.reconcile(&self.products);
        if self.cart != before {
            self.persist_cart()?;
        }
        Ok(())
    }

    pub(crate) fn persist_cart(&mut self) -> Result<(), StoreError> {
        self.cart.persist(self.store.kv_mut())
    }
}
