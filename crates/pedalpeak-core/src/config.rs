use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so a storefront runs out of the box against
/// `./product_data.json` and a `./data` directory.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PEDALPEAK_ENV", "development"));
    let log_level = or_default("PEDALPEAK_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("PEDALPEAK_DATA_DIR", "./data"));

    let bulk_source = or_default("PEDALPEAK_BULK_SOURCE", "./product_data.json");
    if bulk_source.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PEDALPEAK_BULK_SOURCE".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let image_dir = or_default("PEDALPEAK_IMAGE_DIR", "downloaded_images");
    let pricing_path = lookup("PEDALPEAK_PRICING_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let http_timeout_secs = parse_u64("PEDALPEAK_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PEDALPEAK_USER_AGENT", "pedalpeak/0.1 (catalog-loader)");

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        bulk_source,
        image_dir,
        pricing_path,
        http_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
