//! # Validation Module
//!
//! Input validation for names and prices entering the menu model.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  stand.toml [menu.*] ──► parse_price() ──► PriceTable                   │
//! │                                                                         │
//! │  order file / caller ──► validate_item_name() ─┐                        │
//! │                      ──► validate_price() ─────┴──► MenuItem::drink()   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinos_core::validation::{parse_price, validate_item_name};
//!
//! validate_item_name("Cola").unwrap();
//! assert_eq!(parse_price("1.75").unwrap().cents(), 175);
//! assert!(parse_price("-1.00").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_NAME_LEN, MAX_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu item or addon name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most `MAX_NAME_LEN` (100) characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free toppings such as Ketchup)
/// - Must be at most `MAX_PRICE` ($10,000.00)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Parses a decimal price string and validates it.
///
/// Used for every price that comes from text (config files, order files).
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    let price: Money = text.parse()?;
    validate_price(price)?;
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Hotdog").is_ok());
        assert!(validate_item_name("T&T's").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert_eq!(
            validate_item_name(&"A".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LEN,
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(175)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());

        assert!(validate_price(MAX_PRICE).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_PRICE.cents() + 1)),
            Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: MAX_PRICE,
            })
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.30").unwrap().cents(), 230);
        assert_eq!(parse_price("0").unwrap(), Money::zero());

        assert!(matches!(
            parse_price("-0.50"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        // Parses fine as cents, but far above any menu price
        assert!(matches!(
            parse_price("92233720368547758.07"),
            Err(ValidationError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_price("two dollars"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
