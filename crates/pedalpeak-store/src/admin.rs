//! Admin editing: validated drafts and the catalog mutations built on them.
//!
//! Each mutation re-saves the whole catalog through
//! [`CatalogStore::save_catalog`](crate::CatalogStore::save_catalog), so every
//! edited record passes through normalization again.

use pedalpeak_core::{Category, ItemType, Product, RawProduct};

use crate::catalog::CatalogOrigin;
use crate::error::EditError;
use crate::kv::KeyValueStore;
use crate::storefront::Storefront;

/// Form input for creating or editing a product. Optional fields left unset
/// (or blank) fall back to detection on create and to the current value on
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    /// Wire value such as `"ride-on"`.
    pub item_type: Option<String>,
    /// Wire value such as `"mountain"`.
    pub category: Option<String>,
    /// Decimal string; blank means no explicit price.
    pub price: Option<String>,
    pub image: Option<String>,
}

/// A draft that passed validation.
#[derive(Debug)]
struct CheckedDraft {
    name: String,
    item_type: Option<ItemType>,
    category: Option<Category>,
    price: Option<f64>,
    image: Option<String>,
}

impl ProductDraft {
    fn check(&self) -> Result<CheckedDraft, EditError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EditError::InvalidInput(
                "product name is required".to_owned(),
            ));
        }

        let item_type = match non_blank(self.item_type.as_deref()) {
            Some(value) => Some(ItemType::parse(value).ok_or_else(|| {
                EditError::InvalidInput(format!("unknown item type \"{value}\""))
            })?),
            None => None,
        };

        let category = match non_blank(self.category.as_deref()) {
            Some(value) => Some(Category::parse(value).ok_or_else(|| {
                EditError::InvalidInput(format!("unknown category \"{value}\""))
            })?),
            None => None,
        };

        let price = match non_blank(self.price.as_deref()) {
            Some(value) => {
                let parsed = value
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite() && *p >= 0.0)
                    .ok_or_else(|| {
                        EditError::InvalidInput(format!(
                            "price must be a non-negative number, got \"{value}\""
                        ))
                    })?;
                Some(parsed)
            }
            None => None,
        };

        Ok(CheckedDraft {
            name: name.to_owned(),
            item_type,
            category,
            price,
            image: non_blank(self.image.as_deref()).map(ToOwned::to_owned),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl<S: KeyValueStore> Storefront<S> {
    /// Creates a product from `draft` and saves the catalog.
    ///
    /// # Errors
    ///
    /// - [`EditError::InvalidInput`]: blank name, unknown type or category,
    ///   or a price that is not a non-negative number. Nothing is saved.
    /// - [`EditError::Store`]: the catalog could not be persisted.
    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<Product, EditError> {
        let checked = draft.check()?;

        let template = self.store.create_product_template();
        let (id, sku) = self.unused_identity(&template.id, &template.sku);

        let raw = RawProduct {
            id: Some(id.clone()),
            sku: Some(sku),
            name: Some(checked.name),
            item_type: checked.item_type.map(|t| t.as_str().to_owned()),
            category: checked.category.map(|c| c.as_str().to_owned()),
            image: checked.image,
            price: checked.price.map(serde_json::Value::from),
            ..RawProduct::default()
        };

        let mut items: Vec<RawProduct> = self.products.iter().map(RawProduct::from).collect();
        items.push(raw);
        let saved = self.save(items)?;

        tracing::info!(%id, "product added");
        saved
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(EditError::NotFound { id })
    }

    /// Applies `draft` to the product with `id` and saves the catalog.
    /// Unset draft fields keep the product's current values.
    ///
    /// # Errors
    ///
    /// - [`EditError::InvalidInput`]: see [`Storefront::add_product`].
    /// - [`EditError::NotFound`]: no product has this id.
    /// - [`EditError::Store`]: the catalog could not be persisted.
    pub fn update_product(&mut self, id: &str, draft: &ProductDraft) -> Result<Product, EditError> {
        let checked = draft.check()?;
        let current = self
            .find(id)
            .ok_or_else(|| EditError::NotFound { id: id.to_owned() })?;

        let mut edited = RawProduct::from(current);
        edited.name = Some(checked.name);
        if let Some(item_type) = checked.item_type {
            edited.item_type = Some(item_type.as_str().to_owned());
        }
        if let Some(category) = checked.category {
            edited.category = Some(category.as_str().to_owned());
        }
        if let Some(price) = checked.price {
            edited.price = Some(serde_json::Value::from(price));
        }
        if let Some(image) = checked.image {
            edited.image = Some(image);
        }

        let items: Vec<RawProduct> = self
            .products
            .iter()
            .map(|p| {
                if p.id == id {
                    edited.clone()
                } else {
                    RawProduct::from(p)
                }
            })
            .collect();
        let saved = self.save(items)?;

        tracing::info!(%id, "product updated");
        saved
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EditError::NotFound { id: id.to_owned() })
    }

    /// Removes the product with `id`, saves the catalog, and drops it from
    /// the cart.
    ///
    /// # Errors
    ///
    /// - [`EditError::NotFound`]: no product has this id.
    /// - [`EditError::Store`]: the catalog or cart could not be persisted.
    pub fn delete_product(&mut self, id: &str) -> Result<(), EditError> {
        if self.find(id).is_none() {
            return Err(EditError::NotFound { id: id.to_owned() });
        }
        let items: Vec<RawProduct> = self
            .products
            .iter()
            .filter(|p| p.id != id)
            .map(RawProduct::from)
            .collect();
        self.save(items)?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }

    /// Discards every admin edit and reloads the bulk-source catalog.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Store`] if the persisted catalog cannot be
    /// removed or the reconciled cart cannot be written.
    pub async fn reset_catalog(&mut self) -> Result<(), EditError> {
        self.store.reset_catalog()?;
        let (products, origin) = self.store.load_catalog_with_origin().await;
        self.replace_products(products, origin)?;
        Ok(())
    }

    fn save(&mut self, items: Vec<RawProduct>) -> Result<Vec<Product>, EditError> {
        let saved = self.store.save_catalog(items)?;
        self.replace_products(saved.clone(), CatalogOrigin::Persisted)?;
        Ok(saved)
    }

    /// Suffixes the template identity until it collides with no existing id.
    fn unused_identity(&self, id: &str, sku: &str) -> (String, String) {
        if self.find(id).is_none() {
            return (id.to_owned(), sku.to_owned());
        }
        (2_u32..)
            .map(|n| (format!("{id}-{n}"), format!("{sku}-{n}")))
            .find(|(candidate, _)| self.find(candidate).is_none())
            .unwrap_or_else(|| (id.to_owned(), sku.to_owned()))
    }
}
