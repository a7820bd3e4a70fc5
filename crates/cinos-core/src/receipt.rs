//! # Receipt Formatting
//!
//! Renders an [`Order`] as plain text.
//!
//! ## Layout
//! ```text
//! === Cinos Receipt ===                         ◄── header
//! Hotdog (Food) - $2.30                         ◄── item block
//!   + Ketchup - $0.00
//!   + Mustard - $0.00
//! Cola (Drink) - $1.75
//!   + Cherry - $0.00
//!   + Whipped Cream - $0.00
//! Regular Ice Cream Ice Storm (Frozen Treat) - $7.50
//!   + Chocolate - $3.00
//!   + Banana - $3.50
//!   + Storios - $1.00
//! ----------------------                        ◄── separator
//! Total: $11.55                                 ◄── total
//! ```
//! Output is deterministic: same order, same text. Lines are joined with
//! `\n` and there is no trailing newline.

use crate::order::Order;

/// Default header line.
pub const DEFAULT_HEADER: &str = "=== Cinos Receipt ===";

/// Default line between the items and the total.
pub const DEFAULT_SEPARATOR: &str = "----------------------";

/// Turns an order into receipt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFormatter {
    header: String,
    separator: String,
}

impl ReceiptFormatter {
    pub fn new(header: impl Into<String>, separator: impl Into<String>) -> Self {
        ReceiptFormatter {
            header: header.into(),
            separator: separator.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Renders `order`.
    pub fn format(&self, order: &Order) -> String {
        let mut lines = Vec::with_capacity(order.item_count() + 3);
        lines.push(self.header.clone());
        lines.extend(order.items().iter().map(|item| item.receipt_line()));
        lines.push(self.separator.clone());
        lines.push(format!("Total: {}", order.total()));
        lines.join("\n")
    }
}

impl Default for ReceiptFormatter {
    fn default() -> Self {
        ReceiptFormatter::new(DEFAULT_HEADER, DEFAULT_SEPARATOR)
    }
}
