//! # Error Types
//!
//! Domain-specific error types for cinos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cinos-core errors (this file)                                         │
//! │  ├── CoreError        - Menu lookup failures                           │
//! │  └── ValidationError  - Malformed names and prices                     │
//! │                                                                         │
//! │  cinos-cli errors (separate crate)                                     │
//! │  └── CliError         - Config/order file failures, wraps CoreError    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table, name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A name has no entry in the price table it was looked up in.
    ///
    /// ## When This Occurs
    /// - `PriceTable::lookup` with a name the table does not carry
    /// - `MenuItem::food` for something that is not on the food menu
    /// - `Addon::topping` / `Addon::flavor` with an unknown name
    ///
    /// Lenient attach (`MenuItem::add_topping`) never raises this; it skips
    /// the addon instead.
    #[error("Unknown {table} '{name}'")]
    UnknownName { table: String, name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for the unknown-name lookup failure.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, CoreError::UnknownName { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for names and prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount is above the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: Money },

    /// Amount must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
