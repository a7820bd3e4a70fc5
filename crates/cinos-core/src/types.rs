//! # Domain Types
//!
//! Small enums and summary types shared by the menu model.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Category     │   │   AddonKind     │   │    OrderSummary     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Food           │   │  Topping        │   │  id                 │   │
//! │  │  Drink          │   │  Flavor         │   │  lines[]            │   │
//! │  │  FrozenTreat    │   │                 │   │  total_cents        │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The receipt category of a menu item.
///
/// Derived from the item's variant, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Drink,
    FrozenTreat,
}

impl Category {
    /// Label printed on receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drink => "Drink",
            Category::FrozenTreat => "Frozen Treat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Addon Kind
// =============================================================================

/// Which price table an addon was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonKind {
    /// Sauces, condiments, candy pieces.
    Topping,
    /// Ice cream flavors.
    Flavor,
}

impl AddonKind {
    /// Singular table name, used in error messages.
    pub const fn table_name(&self) -> &'static str {
        match self {
            AddonKind::Topping => "topping",
            AddonKind::Flavor => "flavor",
        }
    }
}

impl fmt::Display for AddonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One line of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineSummary {
    pub name: String,
    pub category: Category,
    pub base_price_cents: i64,
    /// Addon display names in attachment order.
    pub addons: Vec<String>,
    pub price_cents: i64,
}

impl OrderLineSummary {
    /// Returns the line price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Serializable snapshot of an order, for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub item_count: usize,
    pub addon_count: usize,
    pub lines: Vec<OrderLineSummary>,
    pub total_cents: i64,
}

impl OrderSummary {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Drink.to_string(), "Drink");
        assert_eq!(Category::FrozenTreat.to_string(), "Frozen Treat");
    }

    #[test]
    fn test_category_serde_is_snake_case() {
        let json = serde_json::to_string(&Category::FrozenTreat).unwrap();
        assert_eq!(json, "\"frozen_treat\"");
    }

    #[test]
    fn test_addon_kind_table_name() {
        assert_eq!(AddonKind::Topping.table_name(), "topping");
        assert_eq!(AddonKind::Flavor.to_string(), "flavor");
    }
}
