use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{ProducerId, ProductId};

/// Everything a cart line carries except its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartLine {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub unit_price: Decimal,
    pub unit: String,
    pub image: String,
    pub producer_id: ProducerId,
    pub producer_name: String,
}

/// One product in the cart with its quantity.
///
/// The quantity is private: it is always at least 1 and only [`CartState`]
/// changes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub unit_price: Decimal,
    pub unit: String,
    pub image: String,
    pub producer_id: ProducerId,
    pub producer_name: String,
    quantity: u32,
}

impl CartLine {
    fn from_candidate(candidate: NewCartLine) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            price: candidate.price,
            unit_price: candidate.unit_price,
            unit: candidate.unit,
            image: candidate.image,
            producer_id: candidate.producer_id,
            producer_name: candidate.producer_name,
            quantity: 1,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Lines of the cart plus their cached aggregate.
///
/// `item_count` and `total_price` are recomputed from scratch after every
/// mutation, never adjusted incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
    item_count: u64,
    total_price: Decimal,
}

impl CartState {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Summed in `u64` so lines near `u32::MAX` cannot overflow the count.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Current quantity for `id`, 0 when the product is not in the cart.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map_or(0, CartLine::quantity)
    }

    /// Adds one unit of the candidate, appending a new line when the product
    /// is not in the cart yet. Returns the resulting quantity.
    pub fn add(&mut self, candidate: NewCartLine) -> u32 {
        let quantity = match self.lines.iter_mut().find(|line| line.id == candidate.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::from_candidate(candidate));
                1
            }
        };
        self.recompute();
        quantity
    }

    /// Removes the line for `id`. Returns `false` when there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        let removed = self.lines.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Sets an absolute quantity. Zero or below removes the line.
    /// Returns `false` when nothing changed (unknown id or same quantity).
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return false;
        };
        if line.quantity == quantity {
            return false;
        }
        line.quantity = quantity;
        self.recompute();
        true
    }

    /// Empties the cart. Returns `false` when it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        self.recompute();
        true
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        CheckoutSummary {
            item_count: self.item_count,
            total_price: self.total_price,
        }
    }

    fn recompute(&mut self) {
        let (item_count, total_price) = totals(&self.lines);
        self.item_count = item_count;
        self.total_price = total_price;
    }
}

/// Full fold over `lines`: (sum of quantities, sum of line totals).
pub fn totals(lines: &[CartLine]) -> (u64, Decimal) {
    lines
        .iter()
        .fold((0u64, Decimal::ZERO), |(count, total), line| {
            (count + u64::from(line.quantity), total + line.line_total())
        })
}

/// What the checkout confirmation shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub total_price: Decimal,
}

impl CheckoutSummary {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Total rendered with two decimals, e.g. `£9.70`.
    pub fn formatted_total(&self) -> String {
        format!("£{:.2}", self.total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn price(amount: &str) -> Decimal {
        Decimal::from_str(amount).unwrap()
    }

    fn candidate(id: u32, amount: &str) -> NewCartLine {
        NewCartLine {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: format!("£{}", amount),
            unit_price: price(amount),
            unit: "per kg".to_string(),
            image: format!("https://images.example/{}.jpg", id),
            producer_id: ProducerId::new(1),
            producer_name: "Green Valley Farm".to_string(),
        }
    }

    #[test]
    fn should_start_empty_with_zero_totals() {
        let cart = CartState::default();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn should_merge_same_product_into_one_line() {
        let mut cart = CartState::default();

        cart.add(candidate(1, "3.50"));
        let quantity = cart.add(candidate(1, "3.50"));

        assert_eq!(quantity, 2);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price(), price("7.00"));
    }

    #[test]
    fn should_append_new_products_in_insertion_order() {
        let mut cart = CartState::default();

        cart.add(candidate(3, "4.00"));
        cart.add(candidate(1, "3.50"));
        cart.add(candidate(2, "2.20"));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.total_price(), price("9.70"));
    }

    #[test]
    fn should_remove_line_when_quantity_set_to_zero() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "3.50"));

        assert!(cart.set_quantity(ProductId::new(1), 0));

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn should_remove_line_when_quantity_set_negative() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "3.50"));
        cart.add(candidate(2, "2.20"));

        assert!(cart.set_quantity(ProductId::new(1), -5));

        assert_eq!(cart.quantity_of(ProductId::new(1)), 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_price(), price("2.20"));
    }

    #[test]
    fn should_set_absolute_quantity() {
        let mut cart = CartState::default();
        cart.add(candidate(5, "6.80"));

        assert!(cart.set_quantity(ProductId::new(5), 3));

        assert_eq!(cart.quantity_of(ProductId::new(5)), 3);
        assert_eq!(cart.total_price(), price("20.40"));
    }

    #[test]
    fn should_ignore_quantity_update_for_unknown_product() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "3.50"));
        let before = cart.clone();

        assert!(!cart.set_quantity(ProductId::new(99), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn should_leave_state_unchanged_when_removing_absent_product() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "3.50"));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(42)));
        assert!(!cart.remove(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn should_reset_everything_on_clear() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "3.50"));
        cart.add(candidate(2, "2.20"));
        cart.set_quantity(ProductId::new(2), 9);

        assert!(cart.clear());

        assert!(cart.lines().is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(!cart.clear());
    }

    #[test]
    fn should_format_checkout_total_with_two_decimals() {
        let mut cart = CartState::default();
        cart.add(candidate(3, "4"));
        cart.add(candidate(4, "1.5"));

        let summary = cart.checkout_summary();

        assert!(!summary.is_empty());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.formatted_total(), "£5.50");
    }

    #[test]
    fn should_count_items_past_u32_range_when_lines_are_huge() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "1"));
        cart.add(candidate(2, "1"));

        cart.set_quantity(ProductId::new(1), 3_000_000_000);
        cart.set_quantity(ProductId::new(2), 3_000_000_000);

        assert_eq!(cart.item_count(), 6_000_000_000);
        assert_eq!(cart.total_price(), Decimal::from(6_000_000_000u64));
        assert_eq!(cart.checkout_summary().item_count, 6_000_000_000);
    }

    #[test]
    fn should_cap_single_line_at_u32_max() {
        let mut cart = CartState::default();
        cart.add(candidate(1, "1"));

        cart.set_quantity(ProductId::new(1), i64::MAX);
        cart.add(candidate(1, "1"));

        assert_eq!(cart.quantity_of(ProductId::new(1)), u32::MAX);
        assert_eq!(cart.item_count(), u64::from(u32::MAX));
    }

    #[derive(Debug, Clone)]
    enum CartOp {
        Add(u32),
        Remove(u32),
        Update(u32, i64),
        Clear,
    }

    const PRICES: [&str; 5] = ["3.50", "2.20", "4.00", "1.50", "6.80"];

    fn cart_op() -> impl Strategy<Value = CartOp> {
        prop_oneof![
            6 => (0u32..5).prop_map(CartOp::Add),
            2 => (0u32..6).prop_map(CartOp::Remove),
            3 => ((0u32..6), (-5i64..8)).prop_map(|(id, q)| CartOp::Update(id, q)),
            2 => ((0u32..6), near_limit()).prop_map(|(id, q)| CartOp::Update(id, q)),
            1 => Just(CartOp::Clear),
        ]
    }

    fn near_limit() -> impl Strategy<Value = i64> {
        let max = i64::from(u32::MAX);
        (max - 3)..=(max + 3)
    }

    proptest! {
        #[test]
        fn should_keep_aggregate_equal_to_fold_over_lines(ops in prop::collection::vec(cart_op(), 0..60)) {
            let mut cart = CartState::default();

            for op in ops {
                match op {
                    CartOp::Add(i) => {
                        cart.add(candidate(i, PRICES[i as usize]));
                    }
                    CartOp::Remove(i) => {
                        cart.remove(ProductId::new(i));
                    }
                    CartOp::Update(i, q) => {
                        cart.set_quantity(ProductId::new(i), q);
                    }
                    CartOp::Clear => {
                        cart.clear();
                    }
                }

                let expected_count: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();
                let expected_total: Decimal = cart
                    .lines()
                    .iter()
                    .map(|l| l.unit_price * Decimal::from(l.quantity()))
                    .sum();
                prop_assert_eq!(cart.item_count(), expected_count);
                prop_assert_eq!(cart.total_price(), expected_total);
                prop_assert!(cart.lines().iter().all(|l| l.quantity() >= 1));

                let mut ids: Vec<u32> = cart.lines().iter().map(|l| l.id.value()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.lines().len());
            }
        }
    }
}
