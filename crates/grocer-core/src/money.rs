//! # Money Module
//!
//! Provides the `Money` type for prices, line totals, and bill totals.
//!
//! ## Whole Currency Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are entered and stored as whole units (₹50, never ₹49.99).     │
//! │                                                                         │
//! │    Item.price (i64) ──► BillLine.price ──► price × qty ──► Bill.total   │
//! │                                                                         │
//! │  Integer math end to end: no rounding, no fractions, no floats.        │
//! │  Only checked arithmetic is offered, so a total can never wrap.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//!
//! let price = Money::from_units(50);
//! let line = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line.units(), 150);
//! assert_eq!(line.to_string(), "₹150");
//! ```

use std::fmt;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// Records keep plain `i64` fields; `Money` is the view used for totals and
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let unit_price = Money::from_units(40);
    /// assert_eq!(unit_price.checked_multiply_quantity(3).map(|m| m.units()), Some(120));
    /// assert!(Money::from_units(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

/// Shows the amount with the store's fixed currency symbol: `₹150`, `-₹5`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, self.0.unsigned_abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        assert_eq!(Money::from_units(50).units(), 50);
        assert_eq!(Money::zero().units(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(150)), "₹150");
        assert_eq!(format!("{}", Money::zero()), "₹0");
        assert_eq!(format!("{}", Money::from_units(-20)), "-₹20");
        assert_eq!(format!("{}", Money::from_units(i64::MIN)), "-₹9223372036854775808");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(25);
        assert_eq!(a.checked_add(b), Some(Money::from_units(125)));
        assert_eq!(
            Money::from_units(7).checked_multiply_quantity(6),
            Some(Money::from_units(42))
        );
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let big = Money::from_units(i64::MAX);
        assert!(big.checked_multiply_quantity(2).is_none());
        assert!(big.checked_add(Money::from_units(1)).is_none());
        assert!(Money::from_units(i64::MIN).checked_multiply_quantity(-1).is_none());
    }
}
