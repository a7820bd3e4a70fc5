//! # Price Tables
//!
//! Immutable name → price mappings, and the [`Menu`] that bundles the three
//! tables a stand needs.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller name        Normalized key       Entry                          │
//! │  ───────────        ──────────────       ─────                          │
//! │  "Whipped Cream" ─┐                                                     │
//! │  "whipped cream" ─┼─► "whipped cream" ─► { "Whipped Cream", $0.00 }     │
//! │  " WHIPPED CREAM"─┘                                                     │
//! │                                                                         │
//! │  lookup()  unknown → Err(CoreError::UnknownName)                        │
//! │  entry()   unknown → None                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The entry keeps the table's own spelling so receipts read the same no
//! matter how the cashier typed the name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::AddonKind;
use crate::validation::{parse_price, validate_item_name};

/// Normalizes a name into its lookup key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Price Entry
// =============================================================================

/// A single priced name as shown on the menu board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Display spelling.
    pub name: String,
    pub cost: Money,
}

// =============================================================================
// Price Table
// =============================================================================

/// Immutable mapping from case-normalized name to [`PriceEntry`].
///
/// ## Example
/// ```rust
/// use cinos_core::{Money, PriceTable};
///
/// let toppings = PriceTable::new(
///     "topping",
///     [("Chili", Money::from_cents(60)), ("Ketchup", Money::zero())],
/// );
///
/// assert_eq!(toppings.lookup("CHILI").unwrap().cents(), 60);
/// assert!(toppings.lookup("Sprinkles").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    label: String,
    entries: BTreeMap<String, PriceEntry>,
}

impl PriceTable {
    /// Builds a table from trusted `(name, cost)` pairs.
    ///
    /// `label` names the table in errors ("food", "topping", ...). A later
    /// pair whose name matches an earlier one case-insensitively replaces it.
    pub fn new<I, S>(label: &str, prices: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, cost) in prices {
            let name = name.into().trim().to_string();
            entries.insert(normalize_name(&name), PriceEntry { name, cost });
        }

        PriceTable {
            label: label.to_string(),
            entries,
        }
    }

    /// Builds a table from untrusted text, as found in config files.
    ///
    /// Every name is validated and every price parsed with
    /// [`parse_price`]; the first failure aborts the whole table.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::PriceTable;
    ///
    /// let food = PriceTable::parse("food", [("Hotdog", "2.30")]).unwrap();
    /// assert_eq!(food.lookup("hotdog").unwrap().to_string(), "$2.30");
    ///
    /// assert!(PriceTable::parse("food", [("Hotdog", "-1")]).is_err());
    /// ```
    pub fn parse<I, K, V>(label: &str, prices: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (name, price) in prices {
            let name = name.as_ref();
            validate_item_name(name)?;
            let cost = parse_price(price.as_ref())?;
            parsed.push((name.to_string(), cost));
        }

        Ok(PriceTable::new(label, parsed))
    }

    /// Table label used in error messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Strict lookup of a cost.
    ///
    /// ## Errors
    /// [`CoreError::UnknownName`] when the table has no such name.
    pub fn lookup(&self, name: &str) -> CoreResult<Money> {
        self.resolve(name).map(|entry| entry.cost)
    }

    /// Strict lookup returning the full entry (display name and cost).
    pub fn resolve(&self, name: &str) -> CoreResult<&PriceEntry> {
        self.entry(name).ok_or_else(|| CoreError::UnknownName {
            table: self.label.clone(),
            name: name.trim().to_string(),
        })
    }

    /// Lenient lookup: `None` when the name is unknown.
    pub fn entry(&self, name: &str) -> Option<&PriceEntry> {
        self.entries.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceEntry> {
        self.entries.values()
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The three price tables of a stand.
///
/// Passed by reference into every constructor that needs prices, so a menu
/// change is a data change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    food: PriceTable,
    toppings: PriceTable,
    flavors: PriceTable,
}

impl Menu {
    pub fn new(food: PriceTable, toppings: PriceTable, flavors: PriceTable) -> Self {
        Menu {
            food,
            toppings,
            flavors,
        }
    }

    /// The Cinos stand's standard price lists.
    pub fn cinos() -> Self {
        Menu::new(
            PriceTable::new("food", cents_table(CINOS_FOOD)),
            PriceTable::new("topping", cents_table(CINOS_TOPPINGS)),
            PriceTable::new("flavor", cents_table(CINOS_FLAVORS)),
        )
    }

    /// Base prices of food items.
    pub fn food(&self) -> &PriceTable {
        &self.food
    }

    pub fn toppings(&self) -> &PriceTable {
        &self.toppings
    }

    pub fn flavors(&self) -> &PriceTable {
        &self.flavors
    }

    /// The addon table for a kind.
    pub fn addons(&self, kind: AddonKind) -> &PriceTable {
        match kind {
            AddonKind::Topping => &self.toppings,
            AddonKind::Flavor => &self.flavors,
        }
    }

    /// Returns a copy with the food table replaced.
    pub fn with_food(mut self, food: PriceTable) -> Self {
        self.food = food;
        self
    }

    pub fn with_toppings(mut self, toppings: PriceTable) -> Self {
        self.toppings = toppings;
        self
    }

    pub fn with_flavors(mut self, flavors: PriceTable) -> Self {
        self.flavors = flavors;
        self
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::cinos()
    }
}

// =============================================================================
// Built-in Price Lists
// =============================================================================

const CINOS_FOOD: &[(&str, i64)] = &[
    ("Hotdog", 230),
    ("Corndog", 200),
    ("Ice Cream", 300),
    ("Onion Rings", 175),
    ("French Fries", 150),
    ("Tater Tots", 170),
    ("Nacho Chips", 190),
];

const CINOS_TOPPINGS: &[(&str, i64)] = &[
    ("Cherry", 0),
    ("Whipped Cream", 0),
    ("Caramel Sauce", 50),
    ("Chocolate Sauce", 50),
    ("Nacho Cheese", 30),
    ("Chili", 60),
    ("Bacon Bits", 30),
    ("Ketchup", 0),
    ("Mustard", 0),
    ("Storios", 100),
    ("Dig Dogs", 100),
    ("T&T's", 100),
    ("Cookie Dough", 100),
    ("Pecans", 50),
];

const CINOS_FLAVORS: &[(&str, i64)] = &[
    ("Mint Chocolate Chip", 400),
    ("Chocolate", 300),
    ("Vanilla Bean", 300),
    ("Banana", 350),
    ("Butter Pecan", 350),
    ("S'more", 400),
];

fn cents_table(
    list: &'static [(&'static str, i64)],
) -> impl Iterator<Item = (&'static str, Money)> {
    list.iter()
        .map(|&(name, cents)| (name, Money::from_cents(cents)))
}

// =============================================================================
// Unit Tests
// =============================================================================
