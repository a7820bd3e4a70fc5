//! # Menu Items
//!
//! A single purchasable unit: food, drink, or frozen treat.
//!
//! ## Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Variant       Base price from          Example                         │
//! │  ───────       ───────────────          ───────                         │
//! │  Food          menu food table          Hotdog        $2.30             │
//! │  Drink         caller                   Cola          $1.75             │
//! │  FrozenTreat   caller                   Sundae        $2.00             │
//! │  IceStorm      always $0.00             Ice Storm     $0.00             │
//! │                                                                         │
//! │  price() = base_price + Σ addon.cost      (recomputed on every call)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Names
//! - `MenuItem::food` is strict: an unknown food is an error.
//! - `add_topping` / `add_flavor` are lenient: an unknown addon is skipped
//!   with a warning and the call returns `false`.
//! - `add_addon` takes an already resolved [`Addon`], so there is nothing
//!   left to check.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::addon::Addon;
use crate::error::CoreResult;
use crate::money::Money;
use crate::price_table::Menu;
use crate::types::{AddonKind, Category, OrderLineSummary};
use crate::validation::{validate_item_name, validate_price};

/// Default base of an Ice Storm.
pub const DEFAULT_STORM_BASE: &str = "Ice Cream";

/// Default size of an Ice Storm.
pub const DEFAULT_STORM_SIZE: &str = "Regular";

/// The concrete variant of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Drink,
    FrozenTreat,
    /// `base` and `size` are free text ("Frozen Yogurt", "Large").
    IceStorm { base: String, size: String },
}

impl ItemKind {
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Food => Category::Food,
            ItemKind::Drink => Category::Drink,
            ItemKind::FrozenTreat | ItemKind::IceStorm { .. } => Category::FrozenTreat,
        }
    }
}

/// A menu item with its ordered addons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    base_price: Money,
    kind: ItemKind,
    addons: Vec<Addon>,
}

impl MenuItem {
    /// Food priced from the menu's food table.
    ///
    /// ## Errors
    /// `CoreError::UnknownName` when the food is not on the menu.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::{Menu, MenuItem};
    ///
    /// let menu = Menu::cinos();
    /// let fries = MenuItem::food(&menu, "french fries").unwrap();
    ///
    /// assert_eq!(fries.name(), "French Fries");
    /// assert_eq!(fries.price().to_string(), "$1.50");
    /// assert!(MenuItem::food(&menu, "Pizza").is_err());
    /// ```
    pub fn food(menu: &Menu, name: &str) -> CoreResult<Self> {
        let entry = menu.food().resolve(name)?;
        Ok(MenuItem::build(entry.name.clone(), entry.cost, ItemKind::Food))
    }

    /// A drink at a caller-chosen price.
    pub fn drink(name: &str, base_price: Money) -> CoreResult<Self> {
        validate_item_name(name)?;
        validate_price(base_price)?;
        Ok(MenuItem::build(
            name.trim().to_string(),
            base_price,
            ItemKind::Drink,
        ))
    }

    /// A frozen treat at a caller-chosen price.
    pub fn frozen_treat(name: &str, base_price: Money) -> CoreResult<Self> {
        validate_item_name(name)?;
        validate_price(base_price)?;
        Ok(MenuItem::build(
            name.trim().to_string(),
            base_price,
            ItemKind::FrozenTreat,
        ))
    }

    /// An Ice Storm: named `"<size> <base> Ice Storm"`, base price $0.00,
    /// priced entirely by its flavors and toppings.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::{Menu, MenuItem};
    ///
    /// let menu = Menu::cinos();
    /// let mut storm = MenuItem::ice_storm("Ice Cream", "Regular").unwrap();
    /// storm.add_flavor(&menu, "Chocolate");
    /// storm.add_flavor(&menu, "Banana");
    /// storm.add_topping(&menu, "Storios");
    ///
    /// assert_eq!(storm.name(), "Regular Ice Cream Ice Storm");
    /// assert_eq!(storm.price().to_string(), "$7.50");
    /// ```
    pub fn ice_storm(base: &str, size: &str) -> CoreResult<Self> {
        validate_item_name(base)?;
        validate_item_name(size)?;
        let (base, size) = (base.trim().to_string(), size.trim().to_string());

        Ok(MenuItem::build(
            format!("{} {} Ice Storm", size, base),
            Money::zero(),
            ItemKind::IceStorm { base, size },
        ))
    }

    fn build(name: String, base_price: Money, kind: ItemKind) -> Self {
        MenuItem {
            name,
            base_price,
            kind,
            addons: Vec::new(),
        }
    }

    // =========================================================================
    // Addons
    // =========================================================================

    /// Appends a resolved addon. Duplicates are allowed and there is no cap.
    pub fn add_addon(&mut self, addon: Addon) {
        debug!(item = %self.name, addon = %addon.name(), cost = %addon.cost(), "Addon attached");
        self.addons.push(addon);
    }

    /// Attaches a topping by name. Unknown toppings are skipped.
    ///
    /// Returns `true` when the topping was attached.
    pub fn add_topping(&mut self, menu: &Menu, name: &str) -> bool {
        self.attach(menu, AddonKind::Topping, name)
    }

    /// Attaches a flavor by name. Unknown flavors are skipped.
    ///
    /// Returns `true` when the flavor was attached.
    pub fn add_flavor(&mut self, menu: &Menu, name: &str) -> bool {
        self.attach(menu, AddonKind::Flavor, name)
    }

    fn attach(&mut self, menu: &Menu, kind: AddonKind, name: &str) -> bool {
        match Addon::from_table(menu.addons(kind), kind, name) {
            Ok(addon) => {
                self.add_addon(addon);
                true
            }
            Err(_) => {
                warn!(item = %self.name, kind = %kind, name = %name, "Ignoring unknown addon");
                false
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Category derived from the variant.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Addons in attachment order.
    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn addon_count(&self) -> usize {
        self.addons.len()
    }

    pub fn toppings(&self) -> impl Iterator<Item = &Addon> {
        self.addons_of(AddonKind::Topping)
    }

    pub fn flavors(&self) -> impl Iterator<Item = &Addon> {
        self.addons_of(AddonKind::Flavor)
    }

    fn addons_of(&self, kind: AddonKind) -> impl Iterator<Item = &Addon> {
        self.addons.iter().filter(move |a| a.kind() == kind)
    }

    /// Base price plus every addon's cost.
    pub fn price(&self) -> Money {
        self.base_price + self.addons.iter().map(Addon::cost).sum::<Money>()
    }

    /// `"<name> (<category>) - $<price>"` followed by `"  + <addon>"` per addon.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::{Menu, MenuItem};
    ///
    /// let menu = Menu::cinos();
    /// let mut hotdog = MenuItem::food(&menu, "Hotdog").unwrap();
    /// hotdog.add_topping(&menu, "Ketchup");
    ///
    /// assert_eq!(
    ///     hotdog.receipt_line(),
    ///     "Hotdog (Food) - $2.30\n  + Ketchup - $0.00"
    /// );
    /// ```
    pub fn receipt_line(&self) -> String {
        let mut lines = vec![format!(
            "{} ({}) - {}",
            self.name,
            self.category(),
            self.price()
        )];
        lines.extend(self.addons.iter().map(|addon| format!("  + {}", addon)));
        lines.join("\n")
    }

    /// Serializable snapshot of this item.
    pub fn summary(&self) -> OrderLineSummary {
        OrderLineSummary {
            name: self.name.clone(),
            category: self.category(),
            base_price_cents: self.base_price.cents(),
            addons: self.addons.iter().map(|a| a.name().to_string()).collect(),
            price_cents: self.price().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::MAX_PRICE;

    #[test]
    fn test_hotdog_with_free_condiments() {
        let menu = Menu::cinos();
        let mut hotdog = MenuItem::food(&menu, "Hotdog").unwrap();
        assert!(hotdog.add_topping(&menu, "Ketchup"));
        assert!(hotdog.add_topping(&menu, "Mustard"));

        assert_eq!(hotdog.price().cents(), 230);
        assert_eq!(hotdog.category(), Category::Food);
    }

    #[test]
    fn test_cola_with_free_toppings() {
        let menu = Menu::cinos();
        let mut cola = MenuItem::drink("Cola", Money::from_cents(175)).unwrap();
        cola.add_topping(&menu, "Cherry");
        cola.add_topping(&menu, "Whipped Cream");

        assert_eq!(cola.price().cents(), 175);
        assert_eq!(cola.category(), Category::Drink);
    }

    #[test]
    fn test_ice_storm_priced_by_addons() {
        let menu = Menu::cinos();
        let mut storm = MenuItem::ice_storm(DEFAULT_STORM_BASE, DEFAULT_STORM_SIZE).unwrap();
        storm.add_flavor(&menu, "Chocolate");
        storm.add_flavor(&menu, "Banana");
        storm.add_topping(&menu, "Storios");

        assert_eq!(storm.base_price(), Money::zero());
        assert_eq!(storm.price().cents(), 750);
        assert_eq!(storm.category(), Category::FrozenTreat);
        assert_eq!(storm.flavors().count(), 2);
        assert_eq!(storm.toppings().count(), 1);
        assert_eq!(
            storm.kind(),
            &ItemKind::IceStorm {
                base: "Ice Cream".to_string(),
                size: "Regular".to_string(),
            }
        );
    }

    #[test]
    fn test_price_recomputed_after_each_addon() {
        let menu = Menu::cinos();
        let mut fries = MenuItem::food(&menu, "French Fries").unwrap();
        assert_eq!(fries.price().cents(), 150);

        fries.add_topping(&menu, "Nacho Cheese");
        assert_eq!(fries.price().cents(), 180);

        fries.add_topping(&menu, "Chili");
        assert_eq!(fries.price().cents(), 240);

        let expected = fries.base_price() + fries.addons().iter().map(Addon::cost).sum::<Money>();
        assert_eq!(fries.price(), expected);
    }

    #[test]
    fn test_duplicate_addons_are_kept() {
        let menu = Menu::cinos();
        let mut fries = MenuItem::food(&menu, "French Fries").unwrap();
        fries.add_topping(&menu, "Chili");
        fries.add_topping(&menu, "chili");

        assert_eq!(fries.addon_count(), 2);
        assert_eq!(fries.price().cents(), 270);
    }

    #[test]
    fn test_unknown_food_is_strict() {
        let menu = Menu::cinos();
        let err = MenuItem::food(&menu, "Pizza").unwrap_err();

        assert!(err.is_unknown_name());
    }

    #[test]
    fn test_unknown_addon_is_lenient() {
        let menu = Menu::cinos();
        let mut cola = MenuItem::drink("Cola", Money::from_cents(175)).unwrap();

        assert!(!cola.add_topping(&menu, "Sprinkles"));
        assert!(!cola.add_flavor(&menu, "Chili"));
        assert_eq!(cola.addon_count(), 0);
        assert_eq!(cola.price().cents(), 175);
    }

    #[test]
    fn test_receipt_line_preserves_addon_order() {
        let menu = Menu::cinos();
        let mut treat = MenuItem::frozen_treat("Sundae", Money::from_cents(200)).unwrap();
        treat.add_topping(&menu, "Pecans");
        treat.add_flavor(&menu, "Vanilla Bean");
        treat.add_topping(&menu, "Caramel Sauce");

        assert_eq!(
            treat.receipt_line(),
            "Sundae (Frozen Treat) - $6.00\n\
             \x20 + Pecans - $0.50\n\
             \x20 + Vanilla Bean - $3.00\n\
             \x20 + Caramel Sauce - $0.50"
        );
    }

    #[test]
    fn test_plain_frozen_treat_has_no_storm_details() {
        let sundae = MenuItem::frozen_treat("Sundae", Money::from_cents(200)).unwrap();

        assert_eq!(sundae.kind(), &ItemKind::FrozenTreat);
        assert_eq!(sundae.category(), Category::FrozenTreat);
        assert_eq!(sundae.name(), "Sundae");
    }

    #[test]
    fn test_caller_price_above_cap_is_rejected() {
        let err = MenuItem::drink("Cola", Money::from_cents(i64::MAX)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { .. })
        ));
        assert!(MenuItem::frozen_treat("Sundae", Money::from_cents(MAX_PRICE.cents() + 1)).is_err());
        assert!(MenuItem::drink("Cola", MAX_PRICE).is_ok());
    }

    #[test]
    fn test_caller_priced_items_are_validated() {
        assert!(MenuItem::drink("", Money::from_cents(100)).is_err());
        assert!(MenuItem::drink("Cola", Money::from_cents(-1)).is_err());
        assert!(MenuItem::frozen_treat("Sundae", Money::from_cents(-1)).is_err());
        assert!(MenuItem::ice_storm("", "Regular").is_err());
    }

    #[test]
    fn test_summary() {
        let menu = Menu::cinos();
        let mut hotdog = MenuItem::food(&menu, "Hotdog").unwrap();
        hotdog.add_topping(&menu, "Chili");

        let line = hotdog.summary();
        assert_eq!(line.name, "Hotdog");
        assert_eq!(line.category, Category::Food);
        assert_eq!(line.base_price_cents, 230);
        assert_eq!(line.addons, vec!["Chili".to_string()]);
        assert_eq!(line.price().cents(), 290);
    }
}
