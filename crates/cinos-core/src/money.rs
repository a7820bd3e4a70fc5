//! # Money Module
//!
//! Provides the `Money` type for handling menu prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    2.30 + 1.75 + 7.50 = 11.549999999999999  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    230 + 175 + 750 = 1155 cents → "$11.55"                              │
//! │    Two decimals are produced only by Display, never stored             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinos_core::money::Money;
//!
//! // Create from cents (preferred)
//! let hotdog = Money::from_cents(230); // $2.30
//!
//! // Or parse a decimal price as written on the menu board
//! let cola: Money = "1.75".parse().unwrap();
//!
//! assert_eq!((hotdog + cola).to_string(), "$4.05");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing can report a negative amount, which
///   validation then rejects where prices enter the system
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PriceTable entry ──► Addon.cost ─────┐                                 │
/// │                                       ├──► MenuItem.price() ──┐        │
/// │  Food table / caller ──► base_price ──┘                       │        │
/// │                                                               ▼        │
/// │                                   Order.total() ──► "Total: $11.55"    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::money::Money;
    ///
    /// let price = Money::from_cents(230); // Represents $2.30
    /// assert_eq!(price.cents(), 230);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1155).cents_part(), 55);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal price such as `"2.30"`, `"$1.75"`, `"3"` or `".5"`.
///
/// ## Rules
/// - Optional leading `-`, then an optional `$`
/// - At most two fractional digits (sub-cent prices are rejected, not rounded)
/// - No exponents, no thousands separators
///
/// ## Example
/// ```rust
/// use cinos_core::money::Money;
///
/// assert_eq!("2.30".parse::<Money>().unwrap().cents(), 230);
/// assert_eq!("$7.5".parse::<Money>().unwrap().cents(), 750);
/// assert!("1.999".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' {}", s, reason),
        };

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (major_str, minor_str) = match rest.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (rest, ""),
        };

        if major_str.is_empty() && minor_str.is_empty() {
            return Err(invalid("is not a number"));
        }
        if !major_str.chars().all(|c| c.is_ascii_digit())
            || !minor_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must contain only digits and one decimal point"));
        }
        if minor_str.len() > 2 {
            return Err(invalid("has more than two decimal places"));
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str.parse().map_err(|_| invalid("is too large"))?
        };
        // "5" means 50 cents, "05" means 5 cents
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| invalid("is not a number"))? * 10,
            _ => minor_str.parse().map_err(|_| invalid("is not a number"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders exactly two decimals: `$11.55`, `$0.00`, `-$5.50`.
///
/// Money is whole cents, so this is the only place decimals appear and no
/// rounding ever takes place.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Summing prices: `items.iter().map(MenuItem::price).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
