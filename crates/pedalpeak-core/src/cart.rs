use serde::{Deserialize, Serialize};

/// One line of the shopping cart, as persisted under the cart key.
///
/// `qty` is signed on purpose: persisted carts may carry zero or negative
/// quantities, which are clamped during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: u64,
    #[serde(default = "default_qty")]
    pub qty: i64,
}

impl CartLine {
    /// Line total in currency units. Non-positive quantities contribute nothing.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price
            .saturating_mul(u64::try_from(self.qty).unwrap_or(0))
    }
}

fn default_qty() -> i64 {
    1
}
