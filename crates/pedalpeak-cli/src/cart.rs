//! Cart command handlers. Every change is persisted before it is printed.

use clap::Subcommand;
use pedalpeak_store::{FileStore, Storefront};

use crate::fmt_price;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a product
    Add { id: String },
    /// Increase a line's quantity by one
    Inc { id: String },
    /// Decrease a line's quantity by one, removing it at zero
    Dec { id: String },
    /// Remove a line
    Remove { id: String },
    /// Empty the cart
    Clear,
}

/// # Errors
///
/// Returns an error if the product is unknown or the cart cannot be persisted.
pub(crate) fn run(shop: &mut Storefront<FileStore>, command: CartCommands) -> anyhow::Result<()> {
    match command {
        CartCommands::Show => {}
        CartCommands::Add { id } => shop.cart_add(&id)?,
        CartCommands::Inc { id } => shop.cart_update_qty(&id, 1)?,
        CartCommands::Dec { id } => shop.cart_update_qty(&id, -1)?,
        CartCommands::Remove { id } => shop.cart_remove(&id)?,
        CartCommands::Clear => shop.cart_clear()?,
    }
    print_cart(shop);
    Ok(())
}

fn print_cart(shop: &Storefront<FileStore>) {
    let cart = shop.cart();
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    println!("{:<16}{:>5}{:>14}{:>16}  NAME", "ID", "QTY", "EACH", "TOTAL");
    for line in cart.lines() {
        println!(
            "{:<16}{:>5}{:>14}{:>16}  {}",
            line.id,
            line.qty,
            fmt_price(line.price),
            fmt_price(line.line_total()),
            line.name
        );
    }
    println!(
        "{} items, total {} تومان",
        cart.total_qty(),
        fmt_price(cart.total_price())
    );
}
