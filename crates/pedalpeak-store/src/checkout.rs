use crate::error::CheckoutError;
use crate::kv::KeyValueStore;
use crate::storefront::Storefront;

impl<S: KeyValueStore> Storefront<S> {
    /// Submits the cart as an order request: clears and persists the cart and
    /// returns the confirmation shown to the customer. No payment is taken.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::MissingCustomerName`]: `customer_name` is blank.
    /// - [`CheckoutError::Store`]: the cleared cart could not be persisted.
    pub fn checkout(&mut self, customer_name: &str) -> Result<String, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let name = customer_name.trim();
        if name.is_empty() {
            return Err(CheckoutError::MissingCustomerName);
        }

        let items = self.cart.total_qty();
        let total = self.cart.total_price();
        self.cart.clear();
        self.persist_cart()?;

        tracing::info!(items, total, "order request received");
        Ok(format!(
            "ممنون {name}، درخواست سفارش شما ثبت شد. به‌زودی با شما تماس می‌گیریم."
        ))
    }
}
