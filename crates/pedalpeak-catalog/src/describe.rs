use pedalpeak_core::{Category, ItemType};

/// Synthesizes the one-sentence product description shown on cards.
#[must_use]
pub fn build_description(item_type: ItemType, size: Option<f64>) -> String {
    match item_type {
        ItemType::Bicycle => match size {
            Some(size) => format!("دوچرخه سایز {size} اینچ از محصولات فروشگاه."),
            None => "دوچرخه از محصولات فروشگاه.".to_string(),
        },
        ItemType::Scooter => "اسکوتر از محصولات فروشگاه.".to_string(),
        ItemType::RideOn => "موتور شارژی از محصولات فروشگاه.".to_string(),
        ItemType::Board => "اسکیت برد از محصولات فروشگاه.".to_string(),
        ItemType::Other => "محصول متفرقه فروشگاه.".to_string(),
    }
}

/// Short display label for a type/category pair.
#[must_use]
pub fn build_tag(item_type: ItemType, category: Category) -> &'static str {
    match (item_type, category) {
        (ItemType::Bicycle, Category::Kids) => "دوچرخه کودک",
        (ItemType::Bicycle, Category::Mountain) => "دوچرخه کوهستان",
        (ItemType::Bicycle, Category::Folding) => "دوچرخه تاشو",
        (ItemType::Bicycle, _) => "دوچرخه",
        (ItemType::Scooter, _) => "اسکوتر",
        (ItemType::RideOn, _) => "موتور شارژی",
        (ItemType::Board, _) => "اسکیت",
        (ItemType::Other, _) => "سایر",
    }
}
