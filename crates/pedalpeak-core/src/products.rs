use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of product kinds sold by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Bicycle,
    Scooter,
    RideOn,
    Board,
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Bicycle,
        ItemType::Scooter,
        ItemType::RideOn,
        ItemType::Board,
        ItemType::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Bicycle => "bicycle",
            ItemType::Scooter => "scooter",
            ItemType::RideOn => "ride-on",
            ItemType::Board => "board",
            ItemType::Other => "other",
        }
    }

    /// Parses the wire value (`"ride-on"`, ...). Returns `None` for anything
    /// outside the closed set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-classification of a product. Only the first four variants are
/// meaningful for bicycles; every other item type carries `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kids,
    Adult,
    Mountain,
    Folding,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Kids,
        Category::Adult,
        Category::Mountain,
        Category::Folding,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Kids => "kids",
            Category::Adult => "adult",
            Category::Mountain => "mountain",
            Category::Folding => "folding",
            Category::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    #[must_use]
    pub fn is_bicycle_category(self) -> bool {
        !matches!(self, Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully normalized catalog record. This is the only shape that is ever
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// `p-<n>` for generated records; admin-created records keep their own id.
    pub id: String,
    /// Source file name or admin-assigned code.
    pub sku: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub category: Category,
    /// Relative image path or an inline `data:` URL, stored verbatim.
    pub image: String,
    pub price: u64,
    pub tag: String,
    pub search_text: String,
}

impl Product {
    #[must_use]
    pub fn is_bicycle(&self) -> bool {
        self.item_type == ItemType::Bicycle
    }

    /// Returns `true` when the image is an embedded upload rather than a path.
    #[must_use]
    pub fn has_uploaded_image(&self) -> bool {
        self.image.starts_with("data:")
    }
}

/// A partially-populated product record, as read from persisted state, the
/// bulk source, or an admin form. Every field is optional and loosely typed;
/// [`Product`] is produced from it by normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Legacy alias for `name`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    /// Number or numeric string; anything else is ignored.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

impl RawProduct {
    /// The display name, preferring `name` over the legacy `title`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref()).or_else(|| non_blank(self.title.as_deref()))
    }

    /// The explicit price, if it is a finite non-negative number.
    #[must_use]
    pub fn price_override(&self) -> Option<f64> {
        let value = match self.price.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64()?,
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            _ => return None,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

impl From<Product> for RawProduct {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            sku: Some(product.sku),
            name: Some(product.name),
            title: None,
            item_type: Some(product.item_type.as_str().to_string()),
            category: Some(product.category.as_str().to_string()),
            image: Some(product.image),
            price: Some(serde_json::Value::from(product.price)),
        }
    }
}

impl From<&Product> for RawProduct {
    fn from(product: &Product) -> Self {
        Self::from(product.clone())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Accepts strings, numbers, and booleans as text; `null` becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: "p-7".to_string(),
            sku: "7.jpg".to_string(),
            name: "دوچرخه سایز 20".to_string(),
            description: "دوچرخه سایز 20 اینچ از محصولات فروشگاه.".to_string(),
            item_type: ItemType::Bicycle,
            category: Category::Kids,
            image: "downloaded_images/7.jpg".to_string(),
            price: 6_740_000,
            tag: "دوچرخه کودک".to_string(),
            search_text: "دوچرخه سایز 20".to_string(),
        }
    }

    #[test]
    fn item_type_parse_accepts_wire_values() {
        assert_eq!(ItemType::parse("ride-on"), Some(ItemType::RideOn));
        assert_eq!(ItemType::parse("bicycle"), Some(ItemType::Bicycle));
        assert_eq!(ItemType::parse("Bicycle"), None);
        assert_eq!(ItemType::parse("car"), None);
    }

    #[test]
    fn category_parse_and_bicycle_membership() {
        assert_eq!(Category::parse("folding"), Some(Category::Folding));
        assert_eq!(Category::parse("road"), None);
        assert!(Category::Mountain.is_bicycle_category());
        assert!(!Category::Other.is_bicycle_category());
    }

    #[test]
    fn product_serializes_with_camel_case_wire_names() {
        let json = serde_json::to_value(make_product()).unwrap();
        assert_eq!(json["itemType"], "bicycle");
        assert_eq!(json["category"], "kids");
        assert!(json.get("searchText").is_some());
        assert!(json.get("item_type").is_none());
    }

    #[test]
    fn ride_on_serializes_kebab_case() {
        let json = serde_json::to_string(&ItemType::RideOn).unwrap();
        assert_eq!(json, "\"ride-on\"");
    }

    #[test]
    fn raw_product_accepts_numeric_id_and_title_alias() {
        let raw: RawProduct =
            serde_json::from_str(r#"{"id": 42, "title": "اسکوتر", "price": "1200"}"#).unwrap();
        assert_eq!(raw.id.as_deref(), Some("42"));
        assert_eq!(raw.display_name(), Some("اسکوتر"));
        assert_eq!(raw.price_override(), Some(1200.0));
    }

    #[test]
    fn raw_product_prefers_name_over_title() {
        let raw = RawProduct {
            name: Some("name".to_string()),
            title: Some("title".to_string()),
            ..RawProduct::default()
        };
        assert_eq!(raw.display_name(), Some("name"));
    }

    #[test]
    fn raw_product_blank_name_falls_back_to_title() {
        let raw = RawProduct {
            name: Some("   ".to_string()),
            title: Some("title".to_string()),
            ..RawProduct::default()
        };
        assert_eq!(raw.display_name(), Some("title"));
    }

    #[test]
    fn price_override_rejects_negative_and_garbage() {
        let mut raw = RawProduct {
            price: Some(serde_json::json!(-5)),
            ..RawProduct::default()
        };
        assert_eq!(raw.price_override(), None);
        raw.price = Some(serde_json::json!("abc"));
        assert_eq!(raw.price_override(), None);
        raw.price = Some(serde_json::json!(""));
        assert_eq!(raw.price_override(), None);
        raw.price = Some(serde_json::json!(null));
        assert_eq!(raw.price_override(), None);
        raw.price = Some(serde_json::json!(0));
        assert_eq!(raw.price_override(), Some(0.0));
    }

    #[test]
    fn raw_from_product_keeps_overridable_fields() {
        let raw = RawProduct::from(make_product());
        assert_eq!(raw.id.as_deref(), Some("p-7"));
        assert_eq!(raw.item_type.as_deref(), Some("bicycle"));
        assert_eq!(raw.category.as_deref(), Some("kids"));
        assert_eq!(raw.price_override(), Some(6_740_000.0));
    }

    #[test]
    fn uploaded_image_detected_by_data_prefix() {
        let mut product = make_product();
        assert!(!product.has_uploaded_image());
        product.image = "data:image/png;base64,AAAA".to_string();
        assert!(product.has_uploaded_image());
    }
}
