//! The persisted shopping cart.

use std::collections::HashSet;

use pedalpeak_core::{CartLine, Product};

use crate::catalog::CART_KEY;
use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from lines and reconciles it against `catalog`.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>, catalog: &[Product]) -> Self {
        let mut cart = Self { lines };
        cart.reconcile(catalog);
        cart
    }

    /// Reads the persisted cart and reconciles it against `catalog`.
    ///
    /// Missing or malformed state yields an empty cart; individual malformed
    /// lines are dropped.
    #[must_use]
    pub fn load<S: KeyValueStore>(kv: &S, catalog: &[Product]) -> Self {
        let raw = match kv.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted cart; starting empty");
                return Self::new();
            }
        };

        let entries = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::debug!("persisted cart is not an array; starting empty");
                return Self::new();
            }
            Err(e) => {
                tracing::debug!(error = %e, "persisted cart is not valid JSON; starting empty");
                return Self::new();
            }
        };

        let lines = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<CartLine>(entry).ok())
            .collect();

        Self::from_lines(lines, catalog)
    }

    /// Drops lines whose product is no longer in `catalog` and clamps every
    /// quantity to at least one.
    pub fn reconcile(&mut self, catalog: &[Product]) {
        let known: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        let before = self.lines.len();
        self.lines.retain(|line| known.contains(line.id.as_str()));
        for line in &mut self.lines {
            line.qty = line.qty.max(1);
        }
        let dropped = before - self.lines.len();
        if dropped > 0 {
            tracing::debug!(dropped, "removed cart lines for products no longer in the catalog");
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product`: increments an existing line or appends a
    /// new one carrying the product's current name and price.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.qty = line.qty.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty: 1,
        });
    }

    /// Changes a line's quantity by `delta`, removing it when the result
    /// drops to zero or below. Unknown ids are ignored.
    pub fn update_qty(&mut self, id: &str, delta: i64) {
        let Some(pos) = self.lines.iter().position(|line| line.id == id) else {
            return;
        };
        let qty = self.lines[pos].qty.saturating_add(delta);
        if qty <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].qty = qty;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_qty(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::try_from(line.qty).unwrap_or(0))
            .fold(0, u64::saturating_add)
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Writes the cart under [`CART_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be serialized or written.
    pub fn persist<S: KeyValueStore>(&self, kv: &mut S) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.lines).map_err(|e| StoreError::Serialize {
            key: CART_KEY.to_owned(),
            source: e,
        })?;
        kv.set(CART_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use pedalpeak_core::{Category, ItemType};

    use super::*;
    use crate::kv::MemoryStore;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: id.to_owned(),
            sku: format!("{id}.jpg"),
            name: format!("محصول {id}"),
            description: "محصول متفرقه فروشگاه.".to_owned(),
            item_type: ItemType::Other,
            category: Category::Other,
            image: String::new(),
            price,
            tag: "سایر".to_owned(),
            search_text: String::new(),
        }
    }

    fn line(id: &str, qty: i64) -> CartLine {
        CartLine {
            id: id.to_owned(),
            name: String::new(),
            price: 100,
            qty,
        }
    }

    #[test]
    fn reconcile_drops_missing_products_silently() {
        let catalog = [product("p-1", 100)];
        let cart = Cart::from_lines(vec![line("p-9", -3)], &catalog);
        assert!(cart.is_empty());
    }

    #[test]
    fn reconcile_clamps_quantity_to_one() {
        let catalog = [product("p-1", 100), product("p-2", 100)];
        let cart = Cart::from_lines(vec![line("p-1", 0), line("p-2", -4)], &catalog);
        assert_eq!(cart.lines().iter().map(|l| l.qty).collect::<Vec<_>>(), [1, 1]);
    }

    #[test]
    fn add_increments_existing_line() {
        let p = product("p-1", 250_000);
        let mut cart = Cart::new();
        cart.add(&p);
        cart.add(&p);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
        assert_eq!(cart.lines()[0].name, "محصول p-1");
        assert_eq!(cart.total_price(), 500_000);
    }

    #[test]
    fn update_qty_removes_line_at_zero() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 100));
        cart.update_qty("p-1", 2);
        assert_eq!(cart.total_qty(), 3);
        cart.update_qty("p-1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_qty_ignores_unknown_id() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 100));
        cart.update_qty("p-2", -1);
        assert_eq!(cart.total_qty(), 1);
    }

    #[test]
    fn totals_over_several_lines() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 1_000));
        cart.add(&product("p-2", 2_500));
        cart.update_qty("p-2", 1);
        assert_eq!(cart.total_qty(), 3);
        assert_eq!(cart.total_price(), 6_000);
        cart.remove("p-1");
        assert_eq!(cart.total_price(), 5_000);
        cart.clear();
        assert_eq!(cart.total_qty(), 0);
    }

    #[test]
    fn persist_then_load_roundtrips() {
        let catalog = [product("p-1", 100), product("p-2", 200)];
        let mut kv = MemoryStore::new();
        let mut cart = Cart::new();
        cart.add(&catalog[0]);
        cart.add(&catalog[1]);
        cart.persist(&mut kv).unwrap();

        assert_eq!(Cart::load(&kv, &catalog), cart);
    }

    #[test]
    fn load_treats_malformed_state_as_empty() {
        let catalog = [product("p-1", 100)];
        for garbage in ["not json", r#"{"id": "p-1"}"#, "null"] {
            let mut kv = MemoryStore::new();
            kv.set(CART_KEY, garbage).unwrap();
            assert!(Cart::load(&kv, &catalog).is_empty(), "input {garbage:?}");
        }
    }

    #[test]
    fn load_drops_malformed_lines() {
        let catalog = [product("p-1", 100)];
        let mut kv = MemoryStore::new();
        kv.set(CART_KEY, r#"[{"qty": 2}, "p-1", {"id": "p-1", "qty": 2}]"#)
            .unwrap();
        let cart = Cart::load(&kv, &catalog);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_qty(), 2);
    }
}
