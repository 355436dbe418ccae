//! Operations over whole catalogs: ordering, id de-duplication, storefront
//! filtering, admin search, and summary counts.

use std::collections::HashSet;

use pedalpeak_core::{Category, ItemType, Product};
use serde::Serialize;

use crate::text::extract_number;

/// Orders a catalog for display: bicycles first, then everything else; each
/// group by ascending numeric id. The sort is stable, so records with equal
/// numeric ids keep their relative order.
#[must_use]
pub fn sort_catalog(mut items: Vec<Product>) -> Vec<Product> {
    items.sort_by_key(|item| (!item.is_bicycle(), extract_number(&item.id)));
    items
}

/// Drops every record whose `id` was already seen earlier in `items`.
///
/// Duplicate ids can come from bulk-source file names that share a number
/// (`"7.jpg"` and `"7.png"`); the first occurrence wins.
#[must_use]
pub fn ensure_unique_ids(items: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.id.clone());
            if !fresh {
                tracing::warn!(id = %item.id, sku = %item.sku, "dropping product with duplicate id");
            }
            fresh
        })
        .collect()
}

/// Storefront browsing filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub item_type: Option<ItemType>,
    pub category: Option<Category>,
    pub max_price: Option<u64>,
    /// Case-insensitive substring matched against `search_text`.
    pub query: Option<String>,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let by_type = self.item_type.is_none_or(|t| product.item_type == t);
        let by_category = self.category.is_none_or(|c| product.category == c);
        let by_price = self.max_price.is_none_or(|max| product.price <= max);
        let by_query = self
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
            .is_none_or(|q| product.search_text.contains(&q));
        by_type && by_category && by_price && by_query
    }
}

/// Returns the products matching `filter`, in catalog order.
#[must_use]
pub fn filter_catalog<'a>(items: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Admin-panel search: case-insensitive substring over name, sku, and tag.
/// A blank query matches every product.
#[must_use]
pub fn admin_search<'a>(items: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item.sku.to_lowercase().contains(&query)
                || item.tag.to_lowercase().contains(&query)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub bicycles: usize,
    pub others: usize,
}

impl CatalogStats {
    #[must_use]
    pub fn from_catalog(items: &[Product]) -> Self {
        let bicycles = items.iter().filter(|item| item.is_bicycle()).count();
        Self {
            total: items.len(),
            bicycles,
            others: items.len() - bicycles,
        }
    }
}
