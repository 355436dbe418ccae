//! Normalization from loosely-typed [`RawProduct`] records to
//! [`pedalpeak_core::Product`].
//!
//! Title parsing is delegated to [`crate::parse`] and [`crate::text`]; this
//! module decides which input fields are honored and which are re-derived.

use pedalpeak_core::{Category, ItemType, PricingConfig, Product, RawProduct};

use crate::describe::{build_description, build_tag};
use crate::parse::{detect_bike_category, detect_item_type, parse_size};
use crate::pricing::{estimate_price, round_price};
use crate::text::{clean_title, extract_number};

/// Normalizes a raw record into a [`Product`].
///
/// `position_index` is the record's index in its collection; it seeds the
/// price variation when neither `id` nor `sku` contains a number.
///
/// Overrides for `item_type`, `category`, and `price` are honored only when
/// valid. `description`, `tag`, and `search_text` are always re-synthesized,
/// so the output is a fixed point: normalizing it again at the same index
/// yields the same record.
#[must_use]
pub fn normalize_product(
    raw: &RawProduct,
    position_index: usize,
    pricing: &PricingConfig,
) -> Product {
    let seed = derive_seed(raw, position_index);

    let name = raw
        .display_name()
        .map(clean_title)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("محصول {seed}"));

    let item_type = match non_blank(raw.item_type.as_deref()) {
        Some(value) => ItemType::parse(value).unwrap_or(ItemType::Other),
        None => detect_item_type(&name),
    };

    let size = parse_size(&name);

    let category = if item_type == ItemType::Bicycle {
        non_blank(raw.category.as_deref())
            .and_then(Category::parse)
            .filter(|category| category.is_bicycle_category())
            .unwrap_or_else(|| detect_bike_category(&name, size))
    } else {
        Category::Other
    };

    let price = raw.price_override().map_or_else(
        || estimate_price(item_type, category, size, seed, pricing),
        |price| round_price(price, pricing.rounding_unit),
    );

    let id = non_blank(raw.id.as_deref())
        .map_or_else(|| format!("p-{seed}"), ToString::to_string);
    let sku = non_blank(raw.sku.as_deref())
        .map_or_else(|| format!("{seed}.jpg"), ToString::to_string);
    let image = raw.image.as_deref().map(str::trim).unwrap_or_default().to_string();

    let description = build_description(item_type, size);
    let tag = build_tag(item_type, category).to_string();
    let search_text = format!("{name} {description} {tag}").to_lowercase();

    Product {
        id,
        sku,
        name,
        description,
        item_type,
        category,
        image,
        price,
        tag,
        search_text,
    }
}

/// First number found in `id`, then in `sku`, else `position_index + 1`.
fn derive_seed(raw: &RawProduct, position_index: usize) -> u64 {
    [raw.id.as_deref(), raw.sku.as_deref()]
        .into_iter()
        .flatten()
        .map(extract_number)
        .find(|n| *n > 0)
        .unwrap_or_else(|| {
            u64::try_from(position_index)
                .unwrap_or(u64::MAX)
                .saturating_add(1)
        })
}

/// Trimmed value, or `None` when absent or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
