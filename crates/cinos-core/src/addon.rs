//! # Addons
//!
//! Toppings and flavors attached to menu items.
//!
//! ## Price Freezing
//! An addon's cost is copied out of the price table when the addon is
//! created. Later menu changes never reach an addon that already exists,
//! the same way a cart line keeps the price it was rung up at.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::price_table::{Menu, PriceTable};
use crate::types::AddonKind;

/// A topping or flavor with its frozen cost.
///
/// ## Example
/// ```rust
/// use cinos_core::{Addon, Menu};
///
/// let menu = Menu::cinos();
/// let chili = Addon::topping(&menu, "chili").unwrap();
///
/// assert_eq!(chili.to_string(), "Chili - $0.60");
/// assert!(Addon::topping(&menu, "Sprinkles").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    name: String,
    cost: Money,
    kind: AddonKind,
}

impl Addon {
    /// Resolves `name` in `table`. Strict: unknown names fail.
    pub fn from_table(table: &PriceTable, kind: AddonKind, name: &str) -> CoreResult<Self> {
        let entry = table.resolve(name)?;
        Ok(Addon {
            name: entry.name.clone(),
            cost: entry.cost,
            kind,
        })
    }

    /// Resolves a topping from the menu's topping table.
    pub fn topping(menu: &Menu, name: &str) -> CoreResult<Self> {
        Addon::from_table(menu.toppings(), AddonKind::Topping, name)
    }

    /// Resolves a flavor from the menu's flavor table.
    pub fn flavor(menu: &Menu, name: &str) -> CoreResult<Self> {
        Addon::from_table(menu.flavors(), AddonKind::Flavor, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn kind(&self) -> AddonKind {
        self.kind
    }
}

/// `"<name> - $<cost>"`, e.g. `Storios - $1.00`.
impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topping_uses_table_spelling() {
        let menu = Menu::cinos();
        let addon = Addon::topping(&menu, "WHIPPED cream").unwrap();

        assert_eq!(addon.name(), "Whipped Cream");
        assert_eq!(addon.cost(), Money::zero());
        assert_eq!(addon.kind(), AddonKind::Topping);
    }

    #[test]
    fn test_flavor_display() {
        let menu = Menu::cinos();
        let banana = Addon::flavor(&menu, "Banana").unwrap();

        assert_eq!(banana.to_string(), "Banana - $3.50");
        assert_eq!(banana.kind(), AddonKind::Flavor);
    }

    #[test]
    fn test_unknown_addon_is_rejected() {
        let menu = Menu::cinos();

        let err = Addon::topping(&menu, "Sprinkles").unwrap_err();
        assert!(err.is_unknown_name());
        assert_eq!(err.to_string(), "Unknown topping 'Sprinkles'");

        // Flavors and toppings are separate tables
        assert!(Addon::flavor(&menu, "Chili").is_err());
    }

    #[test]
    fn test_cost_is_frozen_at_creation() {
        let menu = Menu::cinos();
        let chili = Addon::topping(&menu, "Chili").unwrap();

        let repriced = PriceTable::new("topping", [("Chili", Money::from_cents(99))]);
        let updated = Menu::cinos().with_toppings(repriced);

        assert_eq!(Addon::topping(&updated, "Chili").unwrap().cost().cents(), 99);
        assert_eq!(chili.cost().cents(), 60);
    }
}
