//! # cinos-core: Pricing Model for the Cinos Stand
//!
//! This crate holds the whole pricing and composition model of the stand:
//! how items, toppings and flavors combine into a price and a receipt. It
//! has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cinos Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cinos-cli (apps/)                            │   │
//! │  │    stand.toml ──► Menu      order.toml ──► Order ──► stdout    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinos-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │price_table│  │   addon   │  │   item    │  │   order   │  │   │
//! │  │   │ PriceTable│  │   Addon   │  │ MenuItem  │  │   Order   │  │   │
//! │  │   │   Menu    │  │           │  │ ItemKind  │  │  receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`price_table`] - Case-insensitive price tables and the [`Menu`]
//! - [`addon`] - Toppings and flavors
//! - [`item`] - Food, drinks and frozen treats
//! - [`order`] - Orders and totals
//! - [`receipt`] - Receipt text
//! - [`types`] - Small shared enums and summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Name and price checks
//!
//! ## Example Usage
//!
//! ```rust
//! use cinos_core::{Menu, MenuItem, Money, Order};
//!
//! let menu = Menu::cinos();
//!
//! let mut hotdog = MenuItem::food(&menu, "Hotdog")?;
//! hotdog.add_topping(&menu, "Ketchup");
//!
//! let mut cola = MenuItem::drink("Cola", Money::from_cents(175))?;
//! cola.add_topping(&menu, "Cherry");
//!
//! let mut order = Order::new();
//! order.add_item(hotdog);
//! order.add_item(cola);
//!
//! assert_eq!(order.total().to_string(), "$4.05");
//! println!("{}", order.generate_receipt());
//! # Ok::<(), cinos_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod addon;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod price_table;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use addon::Addon;
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{ItemKind, MenuItem};
pub use money::Money;
pub use order::Order;
pub use price_table::{Menu, PriceEntry, PriceTable};
pub use receipt::ReceiptFormatter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted item, addon, base or size name.
pub const MAX_NAME_LEN: usize = 100;

/// Highest accepted single price, base or addon ($10,000.00).
///
/// Keeps every order total far from `i64` overflow.
pub const MAX_PRICE: Money = Money::from_cents(1_000_000);
