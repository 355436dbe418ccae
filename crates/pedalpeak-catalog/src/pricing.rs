//! Deterministic price estimation for records without an explicit price.

use pedalpeak_core::{BicyclePricing, Category, ItemType, PricingConfig};

/// Number of distinct variation steps derived from the seed.
const VARIATION_STEPS: u64 = 7;

/// Estimates a price from the resolved taxonomy, wheel size, and seed.
///
/// `base + category surcharge + (seed % 7) * variation_unit`, rounded to the
/// configured unit. The same inputs always produce the same price.
#[must_use]
pub fn estimate_price(
    item_type: ItemType,
    category: Category,
    size: Option<f64>,
    seed: u64,
    pricing: &PricingConfig,
) -> u64 {
    let variation = (seed % VARIATION_STEPS).saturating_mul(pricing.variation_unit);

    let base = match item_type {
        ItemType::Bicycle => {
            bicycle_base(size, &pricing.bicycle).saturating_add(surcharge(category, pricing))
        }
        ItemType::Scooter => pricing.bases.scooter,
        ItemType::RideOn => pricing.bases.ride_on,
        ItemType::Board => pricing.bases.board,
        ItemType::Other => pricing.bases.other,
    };

    round_price_units(base.saturating_add(variation), pricing.rounding_unit)
}

/// Rounds `value` to the nearest multiple of `unit`, halves rounding up.
/// Negative and NaN values round to zero; results never overflow `u64`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn round_price(value: f64, unit: u64) -> u64 {
    let unit = unit.max(1);
    let max_units = u64::MAX / unit;
    let units = (value / unit as f64).round();
    if units.is_nan() || units <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates, so huge values clamp to `max_units`.
    (units as u64).min(max_units) * unit
}

fn round_price_units(value: u64, unit: u64) -> u64 {
    let unit = unit.max(1);
    let units = value / unit + u64::from(value % unit >= unit.div_ceil(2));
    units.min(u64::MAX / unit) * unit
}

fn bicycle_base(size: Option<f64>, bicycle: &BicyclePricing) -> u64 {
    let Some(size) = size else {
        return bicycle.unknown_size;
    };
    bicycle
        .bands
        .iter()
        .find(|band| size <= band.max_size)
        .map_or(bicycle.above_bands, |band| band.base)
}

fn surcharge(category: Category, pricing: &PricingConfig) -> u64 {
    match category {
        Category::Mountain => pricing.surcharges.mountain,
        Category::Folding => pricing.surcharges.folding,
        Category::Kids | Category::Adult | Category::Other => 0,
    }
}
