//! Price-table configuration for the catalog's price estimator.
//!
//! The defaults are the store's canonical Toman scale. A YAML file can
//! override any subset of the table, which is how a different currency scale
//! is configured; there is no second built-in scale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A bicycle wheel-size band: sizes `<= max_size` (and above the previous
/// band) start at `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub max_size: f64,
    pub base: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BicyclePricing {
    /// Base used when no wheel size could be extracted from the title.
    pub unknown_size: u64,
    /// Ascending by `max_size`.
    pub bands: Vec<PriceBand>,
    /// Base for sizes larger than the last band.
    pub above_bands: u64,
}

impl Default for BicyclePricing {
    fn default() -> Self {
        Self {
            unknown_size: 9_800_000,
            bands: vec![
                PriceBand {
                    max_size: 16.0,
                    base: 4_200_000,
                },
                PriceBand {
                    max_size: 20.0,
                    base: 5_900_000,
                },
                PriceBand {
                    max_size: 24.0,
                    base: 7_700_000,
                },
                PriceBand {
                    max_size: 26.0,
                    base: 10_200_000,
                },
            ],
            above_bands: 12_800_000,
        }
    }
}

/// Additive surcharges for bicycle categories. Kids and adult add nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySurcharges {
    pub mountain: u64,
    pub folding: u64,
}

impl Default for CategorySurcharges {
    fn default() -> Self {
        Self {
            mountain: 1_800_000,
            folding: 1_100_000,
        }
    }
}

/// Fixed bases for non-bicycle item types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeBases {
    pub scooter: u64,
    pub ride_on: u64,
    pub board: u64,
    pub other: u64,
}

impl Default for TypeBases {
    fn default() -> Self {
        Self {
            scooter: 6_400_000,
            ride_on: 10_900_000,
            board: 2_900_000,
            other: 3_500_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Every price is rounded to the nearest multiple of this unit.
    pub rounding_unit: u64,
    /// Multiplied by `seed % 7` to spread otherwise identical prices.
    pub variation_unit: u64,
    pub bicycle: BicyclePricing,
    pub surcharges: CategorySurcharges,
    pub bases: TypeBases,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rounding_unit: 10_000,
            variation_unit: 120_000,
            bicycle: BicyclePricing::default(),
            surcharges: CategorySurcharges::default(),
            bases: TypeBases::default(),
        }
    }
}

impl PricingConfig {
    /// Checks the structural rules the estimator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounding_unit == 0 {
            return Err(ConfigError::Validation(
                "rounding_unit must be greater than zero".to_string(),
            ));
        }

        let bands = &self.bicycle.bands;
        if bands.is_empty() {
            return Err(ConfigError::Validation(
                "bicycle pricing needs at least one size band".to_string(),
            ));
        }
        for pair in bands.windows(2) {
            if pair[1].max_size <= pair[0].max_size {
                return Err(ConfigError::Validation(format!(
                    "size bands must ascend: {} follows {}",
                    pair[1].max_size, pair[0].max_size
                )));
            }
            if pair[1].base <= pair[0].base {
                return Err(ConfigError::Validation(format!(
                    "band base for size <= {} must exceed the previous band",
                    pair[1].max_size
                )));
            }
        }
        if let Some(last) = bands.last() {
            if self.bicycle.above_bands <= last.base {
                return Err(ConfigError::Validation(
                    "above_bands must exceed the largest band base".to_string(),
                ));
            }
        }

        let b = &self.bases;
        if !(b.ride_on > b.scooter && b.scooter > b.board && b.board > b.other) {
            return Err(ConfigError::Validation(
                "type bases must be ordered ride_on > scooter > board > other".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a pricing table from a YAML file. Missing keys keep
/// their default values.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_pricing(path: &Path) -> Result<PricingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PricingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_pricing(&content)
}

fn parse_pricing(content: &str) -> Result<PricingConfig, ConfigError> {
    let pricing: PricingConfig = serde_yaml::from_str(content)?;
    pricing.validate()?;
    Ok(pricing)
}
