mod cart;
mod catalog;

use clap::{Parser, Subcommand};
use pedalpeak_core::{AppConfig, PricingConfig, RawProduct};
use pedalpeak_store::{BulkSource, CatalogStore, FileStore, Storefront};
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::catalog::CatalogCommands;

#[derive(Debug, Parser)]
#[command(name = "pedalpeak-cli")]
#[command(about = "PedalPeak storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and edit the product catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Inspect and change the shopping cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Submit the cart as an order request
    Checkout {
        /// Customer name for the order request
        #[arg(long)]
        name: String,
    },
    /// Print the normalized record for a single raw title as JSON
    Normalize {
        /// Raw product title, e.g. "دوچرخه سایز 20 (پس کرایه)"
        title: String,
        /// Explicit product id (seeds the price estimate)
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = pedalpeak_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pricing = load_pricing(&config)?;

    match cli.command {
        Some(Commands::Normalize { title, id }) => run_normalize(&title, id, &pricing)?,
        Some(Commands::Catalog { command }) => {
            let mut shop = open_storefront(&config, pricing).await?;
            catalog::run(&mut shop, command).await?;
        }
        Some(Commands::Cart { command }) => {
            let mut shop = open_storefront(&config, pricing).await?;
            cart::run(&mut shop, command)?;
        }
        Some(Commands::Checkout { name }) => {
            let mut shop = open_storefront(&config, pricing).await?;
            let message = shop.checkout(&name)?;
            println!("{message}");
        }
        None => println!("pedalpeak-cli ready; run with --help to list commands"),
    }

    Ok(())
}

fn load_pricing(config: &AppConfig) -> anyhow::Result<PricingConfig> {
    match &config.pricing_path {
        Some(path) => {
            let pricing = pedalpeak_core::load_pricing(path)?;
            tracing::info!(path = %path.display(), "loaded pricing table");
            Ok(pricing)
        }
        None => Ok(PricingConfig::default()),
    }
}

async fn open_storefront(
    config: &AppConfig,
    pricing: PricingConfig,
) -> anyhow::Result<Storefront<FileStore>> {
    let bulk = BulkSource::from_location(
        &config.bulk_source,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let store = CatalogStore::new(FileStore::new(&config.data_dir), bulk, pricing)
        .with_image_dir(&config.image_dir);
    tracing::debug!(
        env = %config.env,
        data_dir = %config.data_dir.display(),
        bulk_source = %config.bulk_source,
        "opening storefront"
    );
    Ok(Storefront::open(store).await)
}

fn run_normalize(title: &str, id: Option<String>, pricing: &PricingConfig) -> anyhow::Result<()> {
    let raw = RawProduct {
        id,
        name: Some(title.to_owned()),
        ..RawProduct::default()
    };
    let product = pedalpeak_catalog::normalize_product(&raw, 0, pricing);
    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}

/// Formats an amount with thousands separators, e.g. `12,360,000`.
pub(crate) fn fmt_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests;
