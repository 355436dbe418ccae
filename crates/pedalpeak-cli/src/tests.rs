use super::*;
use crate::catalog::{parse_category, parse_item_type};
use pedalpeak_core::{Category, ItemType};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["pedalpeak-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_catalog_list_without_filters() {
    let cli = Cli::try_parse_from(["pedalpeak-cli", "catalog", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::List {
                query: None,
                item_type: None,
                category: None,
                max_price: None,
            }
        })
    ));
}

#[test]
fn parses_catalog_list_filters() {
    let cli = Cli::try_parse_from([
        "pedalpeak-cli",
        "catalog",
        "list",
        "--type",
        "bicycle",
        "--category",
        "mountain",
        "--max-price",
        "12000000",
        "--query",
        "کوهستان",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::List {
                item_type: Some(ItemType::Bicycle),
                category: Some(Category::Mountain),
                max_price: Some(12_000_000),
                query: Some(ref q),
            }
        }) if q == "کوهستان"
    ));
}

#[test]
fn rejects_unknown_item_type_filter() {
    let result = Cli::try_parse_from(["pedalpeak-cli", "catalog", "list", "--type", "unicycle"]);
    assert!(result.is_err());
}

#[test]
fn parses_catalog_add_with_overrides() {
    let cli = Cli::try_parse_from([
        "pedalpeak-cli",
        "catalog",
        "add",
        "--name",
        "دوچرخه سایز 20",
        "--type",
        "bicycle",
        "--price",
        "6500000",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::Add {
                ref name,
                fields: catalog::DraftFields {
                    item_type: Some(ref t),
                    category: None,
                    price: Some(ref p),
                    image: None,
                },
            }
        }) if name == "دوچرخه سایز 20" && t == "bicycle" && p == "6500000"
    ));
}

#[test]
fn catalog_add_requires_name() {
    let result = Cli::try_parse_from(["pedalpeak-cli", "catalog", "add"]);
    assert!(result.is_err());
}

#[test]
fn parses_catalog_edit_with_only_image() {
    let cli = Cli::try_parse_from([
        "pedalpeak-cli",
        "catalog",
        "edit",
        "p-3",
        "--image",
        "downloaded_images/3.png",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::Edit {
                ref id,
                name: None,
                fields: catalog::DraftFields { image: Some(_), .. },
            }
        }) if id == "p-3"
    ));
}

#[test]
fn parses_catalog_delete_and_reset() {
    let cli = Cli::try_parse_from(["pedalpeak-cli", "catalog", "delete", "p-7"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::Delete { ref id }
        }) if id == "p-7"
    ));

    let cli = Cli::try_parse_from(["pedalpeak-cli", "catalog", "reset"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog {
            command: CatalogCommands::Reset
        })
    ));
}

#[test]
fn parses_cart_commands() {
    let cli = Cli::try_parse_from(["pedalpeak-cli", "cart", "dec", "p-2"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Dec { ref id }
        }) if id == "p-2"
    ));

    let cli = Cli::try_parse_from(["pedalpeak-cli", "cart", "show"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Show
        })
    ));
}

#[test]
fn checkout_requires_name_flag() {
    assert!(Cli::try_parse_from(["pedalpeak-cli", "checkout"]).is_err());

    let cli = Cli::try_parse_from(["pedalpeak-cli", "checkout", "--name", "سارا"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Checkout { ref name }) if name == "سارا"
    ));
}

#[test]
fn parses_normalize_title() {
    let cli = Cli::try_parse_from(["pedalpeak-cli", "normalize", "اسکوتر", "--id", "p-4"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Normalize { ref title, id: Some(ref id) }) if title == "اسکوتر" && id == "p-4"
    ));
}

#[test]
fn value_parsers_accept_wire_names() {
    assert_eq!(parse_item_type("ride-on"), Ok(ItemType::RideOn));
    assert!(parse_item_type("Ride-On").is_err());
    assert_eq!(parse_category("folding"), Ok(Category::Folding));
    assert!(parse_category("road").is_err());
}

#[test]
fn fmt_price_groups_thousands() {
    assert_eq!(fmt_price(0), "0");
    assert_eq!(fmt_price(999), "999");
    assert_eq!(fmt_price(1_000), "1,000");
    assert_eq!(fmt_price(12_360_000), "12,360,000");
}
