//! # Validation Module
//!
//! Input validation utilities for Grocer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  ├── Type parsing: price is an integer, category is a known label      │
//! │  └── Immediate usage errors                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: grocer-core                                                  │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: grocer-store                                                 │
//! │  └── Load-time checks (parseable snapshots, consistent bill totals)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::validation::{validate_item_name, validate_price};
//!
//! assert!(validate_item_name("Basmati Rice").is_ok());
//! assert!(validate_price(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::LineSelection;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters after trimming
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name_field("name", name)
}

/// Validates the customer name on a bill. Same rules as item names.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name_field("customer name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be at least 1 (no free items)
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_price;
///
/// assert!(validate_price(1).is_ok());
/// assert!(validate_price(0).is_err());
/// assert!(validate_price(-10).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 1 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a billing selection list.
///
/// ## Rules
/// - At least one selection
/// - Every selection names an item and has a positive quantity
///
/// Whether the named items exist is checked later, against the catalog.
pub fn validate_selections(selections: &[LineSelection]) -> ValidationResult<()> {
    if selections.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for selection in selections {
        if selection.item_name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "item name".to_string(),
            });
        }
        validate_quantity(selection.qty)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Apple").is_ok());
        assert!(validate_item_name("  Green Tea  ").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(matches!(
            validate_item_name(&"A".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        assert!(validate_item_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Asha").is_ok());
        assert_eq!(
            validate_customer_name(""),
            Err(ValidationError::Required {
                field: "customer name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(1).is_ok());
        assert!(validate_price(999_999).is_ok());

        assert!(validate_price(0).is_err());
        assert!(validate_price(-5).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(250).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_selections() {
        assert!(validate_selections(&[LineSelection::new("Apple", 2)]).is_ok());

        assert!(matches!(
            validate_selections(&[]),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_selections(&[LineSelection::new("", 1)]).is_err());
        assert!(matches!(
            validate_selections(&[LineSelection::new("Apple", 0)]),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
