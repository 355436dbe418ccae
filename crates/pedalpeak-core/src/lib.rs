pub mod app_config;
pub mod cart;
pub mod config;
pub mod pricing;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::CartLine;
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{
    load_pricing, BicyclePricing, CategorySurcharges, PriceBand, PricingConfig, TypeBases,
};
pub use products::{Category, ItemType, Product, RawProduct};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read pricing file {path}: {source}")]
    PricingFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pricing file: {0}")]
    PricingFileParse(#[from] serde_yaml::Error),

    #[error("pricing validation failed: {0}")]
    Validation(String),
}
