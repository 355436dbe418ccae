//! Catalog persistence: the persisted-then-bulk load chain, wholesale saves,
//! and reset.

use std::collections::BTreeMap;

use pedalpeak_catalog::{ensure_unique_ids, extract_number, normalize_product, sort_catalog};
use pedalpeak_core::{PricingConfig, Product, RawProduct};

use crate::bulk::BulkSource;
use crate::error::{BulkSourceError, StoreError};
use crate::kv::KeyValueStore;

/// Storage key of the normalized catalog.
pub const CATALOG_KEY: &str = "pedalpeak-catalog-v2";
/// Storage key of the shopping cart.
pub const CART_KEY: &str = "pedalpeak-cart-v1";

const DEFAULT_IMAGE_DIR: &str = "downloaded_images";

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Saved admin edits.
    Persisted,
    /// Freshly built from the bulk source.
    Bulk,
    /// Nothing persisted and the bulk source failed; the catalog is empty.
    Unavailable,
}

pub struct CatalogStore<S> {
    kv: S,
    bulk: BulkSource,
    pricing: PricingConfig,
    image_dir: String,
}

impl<S: KeyValueStore> CatalogStore<S> {
    #[must_use]
    pub fn new(kv: S, bulk: BulkSource, pricing: PricingConfig) -> Self {
        Self {
            kv,
            bulk,
            pricing,
            image_dir: DEFAULT_IMAGE_DIR.to_owned(),
        }
    }

    /// Sets the directory prefix for images of bulk-source products.
    #[must_use]
    pub fn with_image_dir(mut self, image_dir: &str) -> Self {
        self.image_dir = image_dir.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    #[must_use]
    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    /// Loads the catalog: the persisted collection when it is present and
    /// non-empty, otherwise a fresh build from the bulk source.
    ///
    /// Never fails. Unreadable state or an unavailable bulk source degrade
    /// to an empty collection.
    pub async fn load_catalog(&self) -> Vec<Product> {
        self.load_catalog_with_origin().await.0
    }

    /// [`CatalogStore::load_catalog`], also reporting where the products came
    /// from so callers can tell a failed bulk load from an empty catalog.
    pub async fn load_catalog_with_origin(&self) -> (Vec<Product>, CatalogOrigin) {
        let persisted = self.load_persisted();
        if !persisted.is_empty() {
            tracing::debug!(count = persisted.len(), "loaded persisted catalog");
            return (persisted, CatalogOrigin::Persisted);
        }
        match self.load_from_bulk().await {
            Ok(products) => (products, CatalogOrigin::Bulk),
            Err(e) => {
                tracing::warn!(error = %e, "could not load bulk product source");
                (Vec::new(), CatalogOrigin::Unavailable)
            }
        }
    }

    /// Reads and re-normalizes the persisted catalog. Missing, unreadable,
    /// or malformed state yields an empty collection.
    #[must_use]
    pub fn load_persisted(&self) -> Vec<Product> {
        let raw = match self.kv.get(CATALOG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted catalog; ignoring it");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::debug!("persisted catalog is not an array; ignoring it");
                return Vec::new();
            }
            Err(e) => {
                tracing::debug!(error = %e, "persisted catalog is not valid JSON; ignoring it");
                return Vec::new();
            }
        };

        let products = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<RawProduct>(entry) {
                Ok(raw) => Some(normalize_product(&raw, index, &self.pricing)),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping malformed persisted product");
                    None
                }
            })
            .collect();

        sort_catalog(ensure_unique_ids(products))
    }

    /// Builds the catalog from the bulk source.
    ///
    /// # Errors
    ///
    /// Returns [`BulkSourceError`] if the title mapping cannot be read or
    /// parsed.
    pub async fn load_from_bulk(&self) -> Result<Vec<Product>, BulkSourceError> {
        let titles = self.bulk.load_titles().await?;
        let products = self.build_from_titles(titles);
        tracing::info!(count = products.len(), "built catalog from bulk source");
        Ok(products)
    }

    /// Normalizes a file-name → title mapping into a sorted catalog.
    ///
    /// Entries are ordered by the number in their file name; that number is
    /// the record's seed and its id is `p-<seed>`. Names without a number
    /// take seeds counting up from above the largest number present, so they
    /// never share an id with a numbered entry.
    #[must_use]
    pub fn build_from_titles(&self, titles: BTreeMap<String, String>) -> Vec<Product> {
        let mut entries: Vec<(String, String)> = titles.into_iter().collect();
        entries.sort_by_key(|(file_name, _)| extract_number(file_name));

        let mut next_free = entries
            .iter()
            .map(|(file_name, _)| extract_number(file_name))
            .max()
            .unwrap_or(0);

        let products = entries
            .into_iter()
            .enumerate()
            .map(|(index, (file_name, title))| {
                let seed = match extract_number(&file_name) {
                    0 => {
                        next_free = next_free.saturating_add(1);
                        next_free
                    }
                    n => n,
                };
                let raw = RawProduct {
                    id: Some(format!("p-{seed}")),
                    image: Some(format!("{}/{file_name}", self.image_dir)),
                    sku: Some(file_name),
                    name: Some(title),
                    ..RawProduct::default()
                };
                normalize_product(&raw, index, &self.pricing)
            })
            .collect();

        sort_catalog(ensure_unique_ids(products))
    }

    /// Re-normalizes every item (its index is the fallback seed), sorts, and
    /// overwrites the persisted catalog. Returns what was persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the catalog cannot be serialized or written.
    pub fn save_catalog(&mut self, items: Vec<RawProduct>) -> Result<Vec<Product>, StoreError> {
        let normalized = items
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_product(item, index, &self.pricing))
            .collect();
        let catalog = sort_catalog(ensure_unique_ids(normalized));

        let json = serde_json::to_string(&catalog).map_err(|e| StoreError::Serialize {
            key: CATALOG_KEY.to_owned(),
            source: e,
        })?;
        self.kv.set(CATALOG_KEY, &json)?;

        tracing::info!(count = catalog.len(), "saved catalog");
        Ok(catalog)
    }

    /// Deletes the persisted catalog so the next load rebuilds from the bulk
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key cannot be removed.
    pub fn reset_catalog(&mut self) -> Result<(), StoreError> {
        self.kv.remove(CATALOG_KEY)?;
        tracing::info!("catalog reset to bulk-source defaults");
        Ok(())
    }

    /// A blank adult-bicycle record with a time-based id, as a starting point
    /// for the admin "new product" form.
    #[must_use]
    pub fn create_product_template(&self) -> Product {
        let stamp = chrono::Utc::now().timestamp_millis();
        let raw = RawProduct {
            id: Some(format!("p-{stamp}")),
            sku: Some(format!("custom-{stamp}")),
            item_type: Some("bicycle".to_owned()),
            category: Some("adult".to_owned()),
            price: Some(serde_json::Value::from(0)),
            ..RawProduct::default()
        };
        normalize_product(&raw, 0, &self.pricing)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
