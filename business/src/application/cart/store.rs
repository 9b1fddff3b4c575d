use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::application::shared::observable::Observable;
use crate::domain::cart::model::{CartLine, CartState, CheckoutSummary, NewCartLine};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

/// Shopping cart shared by every screen of a running app.
///
/// Build one per app in the composition root and hand it out as
/// `Arc<CartStore>`. None of the operations can fail: unknown ids are
/// silently ignored.
pub struct CartStore {
    state: Observable<CartState>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            state: Observable::new(CartState::default()),
            logger,
        }
    }

    pub fn state(&self) -> CartState {
        self.state.snapshot()
    }

    /// Receiver woken after every mutation that changed the cart.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.state.read(|cart| cart.lines().to_vec())
    }

    pub fn item_count(&self) -> u64 {
        self.state.read(CartState::item_count)
    }

    pub fn total_price(&self) -> Decimal {
        self.state.read(CartState::total_price)
    }

    pub fn add_item(&self, candidate: NewCartLine) {
        let id = candidate.id;
        let mut quantity = 0;
        self.state.update(|cart| {
            quantity = cart.add(candidate);
            true
        });
        self.logger.info(&format!(
            "Added product {} to cart (quantity {})",
            id, quantity
        ));
    }

    pub fn remove_item(&self, id: ProductId) {
        if self.state.update(|cart| cart.remove(id)) {
            self.logger
                .info(&format!("Removed product {} from cart", id));
        } else {
            self.logger
                .debug(&format!("Product {} not in cart, nothing to remove", id));
        }
    }

    /// Absolute set. Zero or a negative quantity removes the line.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        if self.state.update(|cart| cart.set_quantity(id, quantity)) {
            self.logger.info(&format!(
                "Set quantity of product {} to {}",
                id,
                quantity.max(0)
            ));
        }
    }

    /// Relative step used by the +/- buttons of the cart screen. Stepping
    /// below 1 removes the line; unknown ids are ignored.
    pub fn change_quantity(&self, id: ProductId, delta: i64) {
        let changed = self.state.update(|cart| {
            let Some(current) = cart.line(id).map(CartLine::quantity) else {
                return false;
            };
            cart.set_quantity(id, i64::from(current).saturating_add(delta))
        });
        if changed {
            self.logger.info(&format!(
                "Changed quantity of product {} by {}",
                id, delta
            ));
        }
    }

    pub fn clear_cart(&self) {
        if self.state.update(CartState::clear) {
            self.logger.info("Cart cleared");
        }
    }

    pub fn get_item_quantity(&self, id: ProductId) -> u32 {
        self.state.read(|cart| cart.quantity_of(id))
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        self.state.read(CartState::checkout_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProducerId;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn tomatoes() -> NewCartLine {
        NewCartLine {
            id: ProductId::new(1),
            name: "Organic Tomatoes".to_string(),
            price: "£3.50".to_string(),
            unit_price: Decimal::from_str("3.50").unwrap(),
            unit: "per kg".to_string(),
            image: "https://images.unsplash.com/photo-1546094096-0ec4ea203f13".to_string(),
            producer_id: ProducerId::new(1),
            producer_name: "Green Valley Farm".to_string(),
        }
    }

    fn cheddar() -> NewCartLine {
        NewCartLine {
            id: ProductId::new(5),
            name: "Cheddar Cheese".to_string(),
            price: "£6.80".to_string(),
            unit_price: Decimal::from_str("6.80").unwrap(),
            unit: "per 500g".to_string(),
            image: "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d".to_string(),
            producer_id: ProducerId::new(3),
            producer_name: "Heritage Dairy".to_string(),
        }
    }

    #[test]
    fn should_create_empty_cart() {
        let store = CartStore::new(mock_logger());

        assert!(store.lines().is_empty());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total_price(), Decimal::ZERO);
    }

    #[test]
    fn should_increment_quantity_when_adding_same_product_twice() {
        let store = CartStore::new(mock_logger());

        store.add_item(tomatoes());
        store.add_item(tomatoes());

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.get_item_quantity(ProductId::new(1)), 2);
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_price(), Decimal::from_str("7.00").unwrap());
    }

    #[test]
    fn should_remove_line_when_updated_to_zero_or_negative() {
        let store = CartStore::new(mock_logger());
        store.add_item(tomatoes());
        store.add_item(cheddar());

        store.update_quantity(ProductId::new(1), 0);
        store.update_quantity(ProductId::new(5), -5);

        assert!(store.lines().is_empty());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total_price(), Decimal::ZERO);
    }

    #[test]
    fn should_treat_remove_of_absent_product_as_noop() {
        let store = CartStore::new(mock_logger());
        store.add_item(cheddar());
        let before = store.state();

        store.remove_item(ProductId::new(99));

        assert_eq!(store.state(), before);
    }

    #[test]
    fn should_return_zero_quantity_for_unknown_product() {
        let store = CartStore::new(mock_logger());

        assert_eq!(store.get_item_quantity(ProductId::new(3)), 0);
    }

    #[test]
    fn should_step_quantity_and_remove_below_one() {
        let store = CartStore::new(mock_logger());
        store.add_item(cheddar());

        store.change_quantity(ProductId::new(5), 2);
        assert_eq!(store.get_item_quantity(ProductId::new(5)), 3);

        store.change_quantity(ProductId::new(5), -3);
        assert_eq!(store.get_item_quantity(ProductId::new(5)), 0);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn should_ignore_step_for_product_not_in_cart() {
        let store = CartStore::new(mock_logger());

        store.change_quantity(ProductId::new(5), 1);

        assert!(store.lines().is_empty());
    }

    #[test]
    fn should_zero_totals_on_clear() {
        let store = CartStore::new(mock_logger());
        store.add_item(tomatoes());
        store.update_quantity(ProductId::new(1), 4);
        store.add_item(cheddar());

        store.clear_cart();

        assert!(store.lines().is_empty());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total_price(), Decimal::ZERO);
        assert!(store.checkout_summary().is_empty());
    }

    #[test]
    fn should_summarize_checkout_total() {
        let store = CartStore::new(mock_logger());
        store.add_item(tomatoes());
        store.add_item(cheddar());
        store.add_item(cheddar());

        let summary = store.checkout_summary();

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.formatted_total(), "£17.10");
    }

    #[tokio::test]
    async fn should_notify_subscribers_after_mutation() {
        let store = CartStore::new(mock_logger());
        let mut rx = store.subscribe();

        store.add_item(tomatoes());

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().item_count(), 1);

        store.remove_item(ProductId::new(42));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn should_log_each_addition() {
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .withf(|message| message.contains("product 1"))
            .times(2)
            .returning(|_| ());

        let store = CartStore::new(Arc::new(logger));
        store.add_item(tomatoes());
        store.add_item(tomatoes());
    }
}
