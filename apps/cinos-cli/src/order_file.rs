//! # Order Files
//!
//! TOML description of an order, turned into a [`cinos_core::Order`].
//!
//! ```toml
//! [[items]]
//! kind = "food"
//! name = "Hotdog"
//! toppings = ["Ketchup", "Mustard"]
//!
//! [[items]]
//! kind = "drink"
//! name = "Cola"
//! price = "1.75"
//! toppings = ["Cherry", "Whipped Cream"]
//!
//! [[items]]
//! kind = "ice_storm"
//! flavors = ["Chocolate", "Banana"]
//! toppings = ["Storios"]
//! ```
//!
//! Unknown foods abort the whole order. Unknown toppings and flavors are
//! skipped with a warning, the same as at the counter. Unknown fields are a
//! parse error.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use cinos_core::item::{DEFAULT_STORM_BASE, DEFAULT_STORM_SIZE};
use cinos_core::validation::parse_price;
use cinos_core::{CoreError, Menu, MenuItem, Order};

use crate::config::read_toml;
use crate::error::CliResult;

/// A whole order file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFile {
    #[serde(default)]
    pub items: Vec<OrderEntry>,
}

/// One `[[items]]` entry.
///
/// Fields a kind does not take are rejected, so `flavors` on a food or a
/// misspelled `topings` fails the file instead of dropping addons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum OrderEntry {
    Food {
        name: String,
        #[serde(default)]
        toppings: Vec<String>,
    },
    Drink {
        name: String,
        price: String,
        #[serde(default)]
        toppings: Vec<String>,
    },
    FrozenTreat {
        name: String,
        price: String,
        #[serde(default)]
        flavors: Vec<String>,
        #[serde(default)]
        toppings: Vec<String>,
    },
    IceStorm {
        #[serde(default = "default_storm_base")]
        base: String,
        #[serde(default = "default_storm_size")]
        size: String,
        #[serde(default)]
        flavors: Vec<String>,
        #[serde(default)]
        toppings: Vec<String>,
    },
}

fn default_storm_base() -> String {
    DEFAULT_STORM_BASE.to_string()
}

fn default_storm_size() -> String {
    DEFAULT_STORM_SIZE.to_string()
}

impl OrderEntry {
    /// Builds the menu item, flavors first then toppings.
    pub fn to_item(&self, menu: &Menu) -> CliResult<MenuItem> {
        let no_flavors: &[String] = &[];
        let (mut item, flavors, toppings) = match self {
            OrderEntry::Food { name, toppings } => {
                (MenuItem::food(menu, name)?, no_flavors, toppings)
            }
            OrderEntry::Drink {
                name,
                price,
                toppings,
            } => (
                MenuItem::drink(name, parse_price(price).map_err(CoreError::from)?)?,
                no_flavors,
                toppings,
            ),
            OrderEntry::FrozenTreat {
                name,
                price,
                flavors,
                toppings,
            } => (
                MenuItem::frozen_treat(name, parse_price(price).map_err(CoreError::from)?)?,
                flavors.as_slice(),
                toppings,
            ),
            OrderEntry::IceStorm {
                base,
                size,
                flavors,
                toppings,
            } => (MenuItem::ice_storm(base, size)?, flavors.as_slice(), toppings),
        };

        for flavor in flavors {
            item.add_flavor(menu, flavor);
        }
        for topping in toppings {
            item.add_topping(menu, topping);
        }

        Ok(item)
    }
}

impl OrderFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let file: OrderFile = read_toml(path)?;
        info!(?path, items = file.items.len(), "Order file loaded");
        Ok(file)
    }

    /// Builds the order, failing on the first item that cannot be built.
    pub fn to_order(&self, menu: &Menu) -> CliResult<Order> {
        let mut order = Order::new();
        for entry in &self.items {
            order.add_item(entry.to_item(menu)?);
        }
        Ok(order)
    }
}
