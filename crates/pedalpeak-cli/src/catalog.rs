//! Catalog command handlers: storefront browsing, admin search, and admin
//! edits. Edits are persisted by the storefront before the handler prints.

use clap::{Args, Subcommand};
use pedalpeak_catalog::CatalogFilter;
use pedalpeak_core::{Category, ItemType, Product};
use pedalpeak_store::{FileStore, ProductDraft, Storefront};

use crate::fmt_price;

/// Sub-commands available under `catalog`.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// List products in display order (bicycles first)
    List {
        /// Case-insensitive text matched against name, description, and tag
        #[arg(long)]
        query: Option<String>,
        /// Restrict to one item type (bicycle, scooter, ride-on, board, other)
        #[arg(long = "type", value_parser = parse_item_type)]
        item_type: Option<ItemType>,
        /// Restrict to one category (kids, adult, mountain, folding, other)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        /// Upper price bound, inclusive
        #[arg(long)]
        max_price: Option<u64>,
    },
    /// Show catalog counts
    Stats,
    /// Admin search over name, sku, and tag
    Search { query: String },
    /// Add a product
    Add {
        /// Display name; type, category, and size are detected from it
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Edit a product; omitted flags keep the current values
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Delete a product
    Delete { id: String },
    /// Discard all edits and rebuild the catalog from the bulk source
    Reset,
}

/// Optional draft fields shared by `add` and `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct DraftFields {
    /// Item type override (bicycle, scooter, ride-on, board, other)
    #[arg(long = "type")]
    pub item_type: Option<String>,
    /// Category override, honored for bicycles only
    #[arg(long)]
    pub category: Option<String>,
    /// Explicit price; omit to estimate one
    #[arg(long)]
    pub price: Option<String>,
    /// Image path or URL
    #[arg(long)]
    pub image: Option<String>,
}

impl DraftFields {
    fn into_draft(self, name: String) -> ProductDraft {
        ProductDraft {
            name,
            item_type: self.item_type,
            category: self.category,
            price: self.price,
            image: self.image,
        }
    }
}

pub(crate) fn parse_item_type(value: &str) -> Result<ItemType, String> {
    ItemType::parse(value).ok_or_else(|| {
        let allowed: Vec<&str> = ItemType::ALL.iter().map(|t| t.as_str()).collect();
        format!("expected one of: {}", allowed.join(", "))
    })
}

pub(crate) fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).ok_or_else(|| {
        let allowed: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("expected one of: {}", allowed.join(", "))
    })
}

/// # Errors
///
/// Returns an error if an edit is rejected or cannot be persisted.
pub(crate) async fn run(
    shop: &mut Storefront<FileStore>,
    command: CatalogCommands,
) -> anyhow::Result<()> {
    match command {
        CatalogCommands::List {
            query,
            item_type,
            category,
            max_price,
        } => {
            let filter = CatalogFilter {
                item_type,
                category,
                max_price,
                query,
            };
            if !report_unavailable(shop) {
                print_products(&shop.browse(&filter));
            }
        }
        CatalogCommands::Stats => {
            let stats = shop.stats();
            println!(
                "total: {}  bicycles: {}  others: {}",
                stats.total, stats.bicycles, stats.others
            );
        }
        CatalogCommands::Search { query } => {
            if !report_unavailable(shop) {
                print_products(&shop.search(&query));
            }
        }
        CatalogCommands::Add { name, fields } => {
            let product = shop.add_product(&fields.into_draft(name))?;
            println!("added {} ({} تومان)", product.id, fmt_price(product.price));
        }
        CatalogCommands::Edit { id, name, fields } => {
            let name = match name {
                Some(name) => name,
                None => shop
                    .find(&id)
                    .map(|p| p.name.clone())
                    .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?,
            };
            let product = shop.update_product(&id, &fields.into_draft(name))?;
            println!("updated {} ({} تومان)", product.id, fmt_price(product.price));
        }
        CatalogCommands::Delete { id } => {
            shop.delete_product(&id)?;
            println!("deleted {id}");
        }
        CatalogCommands::Reset => {
            shop.reset_catalog().await?;
            if !report_unavailable(shop) {
                println!("catalog reset; {} products loaded", shop.products().len());
            }
        }
    }
    Ok(())
}

const CATALOG_UNAVAILABLE: &str =
    "could not load the product catalog; check PEDALPEAK_BULK_SOURCE and try again";

/// Prints the could-not-load notice when the catalog failed to load.
fn report_unavailable(shop: &Storefront<FileStore>) -> bool {
    if shop.catalog_unavailable() {
        println!("{CATALOG_UNAVAILABLE}");
    }
    shop.catalog_unavailable()
}

fn print_products(products: &[&Product]) {
    if products.is_empty() {
        println!("no products match");
        return;
    }

    println!(
        "{:<16}{:<10}{:<10}{:>14}  NAME",
        "ID", "TYPE", "CATEGORY", "PRICE"
    );
    for product in products {
        println!(
            "{:<16}{:<10}{:<10}{:>14}  {}",
            product.id,
            product.item_type.as_str(),
            product.category.as_str(),
            fmt_price(product.price),
            product.name
        );
    }
}
