//! # Order
//!
//! An ordered collection of menu items bought together.
//!
//! ## Lifecycle
//! ```text
//! Order::new() ──► add_item() × N ──► total() / generate_receipt() ──► drop
//! ```
//! Items are only ever appended. Nothing is cached: `total()` walks the
//! items every time it is called.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::item::MenuItem;
use crate::money::Money;
use crate::receipt::ReceiptFormatter;
use crate::types::OrderSummary;

/// A single customer's order.
///
/// ## Example
/// ```rust
/// use cinos_core::{Menu, MenuItem, Money, Order};
///
/// let menu = Menu::cinos();
/// let mut order = Order::new();
/// order.add_item(MenuItem::food(&menu, "Corndog").unwrap());
/// order.add_item(MenuItem::drink("Lemonade", Money::from_cents(125)).unwrap());
///
/// assert_eq!(order.total().to_string(), "$3.25");
/// assert!(order.generate_receipt().ends_with("Total: $3.25"));
/// ```
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    created_at: DateTime<Utc>,
    items: Vec<MenuItem>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Appends an item. No limit, no dedup.
    pub fn add_item(&mut self, item: MenuItem) {
        debug!(order = %self.id, item = %item.name(), price = %item.price(), "Item added");
        self.items.push(item);
    }

    /// Sum of every item's price.
    pub fn total(&self) -> Money {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// Renders the receipt with the default layout.
    pub fn generate_receipt(&self) -> String {
        self.generate_receipt_with(&ReceiptFormatter::default())
    }

    /// Renders the receipt with a custom formatter.
    pub fn generate_receipt_with(&self, formatter: &ReceiptFormatter) -> String {
        formatter.format(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot for serialization.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id.clone(),
            created_at: self.created_at,
            item_count: self.item_count(),
            addon_count: self.items.iter().map(MenuItem::addon_count).sum(),
            lines: self.items.iter().map(MenuItem::summary).collect(),
            total_cents: self.total().cents(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_table::Menu;

    fn reference_order(menu: &Menu) -> Order {
        let mut hotdog = MenuItem::food(menu, "Hotdog").unwrap();
        hotdog.add_topping(menu, "Ketchup");
        hotdog.add_topping(menu, "Mustard");

        let mut cola = MenuItem::drink("Cola", Money::from_cents(175)).unwrap();
        cola.add_topping(menu, "Cherry");
        cola.add_topping(menu, "Whipped Cream");

        let mut storm = MenuItem::ice_storm("Ice Cream", "Regular").unwrap();
        storm.add_flavor(menu, "Chocolate");
        storm.add_flavor(menu, "Banana");
        storm.add_topping(menu, "Storios");

        let mut order = Order::new();
        order.add_item(hotdog);
        order.add_item(cola);
        order.add_item(storm);
        order
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_reference_order_total() {
        let menu = Menu::cinos();
        let order = reference_order(&menu);

        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total().cents(), 1155);

        let by_items: Money = order.items().iter().map(MenuItem::price).sum();
        assert_eq!(order.total(), by_items);
    }

    #[test]
    fn test_reference_order_receipt() {
        let menu = Menu::cinos();
        let receipt = reference_order(&menu).generate_receipt();

        assert!(receipt.contains("Hotdog"));
        assert!(receipt.contains("Cola"));
        assert!(receipt.contains("Ice Storm"));
        assert!(receipt.lines().any(|l| l.starts_with("Total: $11.55")));
    }

    #[test]
    fn test_total_tracks_added_items() {
        let menu = Menu::cinos();
        let mut order = Order::new();

        order.add_item(MenuItem::food(&menu, "Tater Tots").unwrap());
        assert_eq!(order.total().cents(), 170);

        // Same item twice is two lines
        order.add_item(MenuItem::food(&menu, "Tater Tots").unwrap());
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total().cents(), 340);
    }

    #[test]
    fn test_summary_matches_order() {
        let menu = Menu::cinos();
        let order = reference_order(&menu);
        let summary = order.summary();

        assert_eq!(summary.id, order.id());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.addon_count, 7);
        assert_eq!(summary.total().cents(), 1155);
        assert_eq!(summary.lines[2].addons, vec!["Chocolate", "Banana", "Storios"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalCents"], 1155);
        assert_eq!(json["lines"][1]["category"], "drink");
    }

    #[test]
    fn test_total_of_most_expensive_items() {
        let mut order = Order::new();
        order.add_item(MenuItem::drink("Punch Bowl", crate::MAX_PRICE).unwrap());
        order.add_item(MenuItem::drink("Punch Bowl", crate::MAX_PRICE).unwrap());

        assert_eq!(order.total().cents(), 2 * crate::MAX_PRICE.cents());
        // An out-of-range price never reaches an order
        assert!(MenuItem::drink("Cola", Money::from_cents(9_223_372_036_854_775_807)).is_err());
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        assert_ne!(Order::new().id(), Order::new().id());
    }
}
