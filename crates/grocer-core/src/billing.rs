//! # Billing
//!
//! Turns a customer name and a list of selections into a [`Bill`].
//!
//! ## Bill Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  build_bill("Asha", [("Apple", 3), ("Milk", 2)], catalog, now)         │
//! │       │                                                                 │
//! │       ├── customer blank?        → ValidationError::Required           │
//! │       ├── no selections / qty<1? → ValidationError                     │
//! │       │                                                                 │
//! │       ▼  for each selection, in order                                   │
//! │  catalog lookup (case-insensitive, first match)                        │
//! │       ├── miss → CoreError::ItemNotFound                               │
//! │       └── hit  → BillLine { name, qty, price } ← price COPIED          │
//! │                                                                         │
//! │       ▼                                                                 │
//! │  total = Σ price × qty   (checked, integer units)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is only read. Quantities on items are never decremented.

use chrono::NaiveDateTime;

use crate::catalog::find_by_name;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Bill, BillLine, Item, LineSelection};
use crate::validation::{validate_customer_name, validate_selections};

/// Builds a bill from `selections`, pricing each line from `catalog`.
///
/// ## Arguments
/// * `customer` - Customer name (trimmed into the bill)
/// * `selections` - Items and quantities, in purchase order
/// * `catalog` - Current item list
/// * `at` - Timestamp to stamp on the bill
///
/// ## Errors
/// * `CoreError::Validation` - blank customer, no selections, qty < 1
/// * `CoreError::ItemNotFound` - a selection names an unknown item
/// * `CoreError::AmountOverflow` - a line or the total overflows
pub fn build_bill(
    customer: &str,
    selections: &[LineSelection],
    catalog: &[Item],
    at: NaiveDateTime,
) -> CoreResult<Bill> {
    validate_customer_name(customer)?;
    validate_selections(selections)?;

    let mut lines = Vec::with_capacity(selections.len());
    let mut total = Money::zero();

    for selection in selections {
        let item = find_by_name(catalog, &selection.item_name)
            .ok_or_else(|| CoreError::ItemNotFound(selection.item_name.trim().to_string()))?;

        let line = BillLine {
            name: item.name.clone(),
            qty: selection.qty,
            price: item.price,
        };

        let line_total = line.line_total().ok_or_else(|| CoreError::AmountOverflow {
            context: format!("line total for {}", line.name),
        })?;
        total = total
            .checked_add(line_total)
            .ok_or_else(|| CoreError::AmountOverflow {
                context: "bill total".to_string(),
            })?;

        lines.push(line);
    }

    Ok(Bill {
        name: customer.trim().to_string(),
        date: at,
        items: lines,
        total: total.units(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{Category, QuantityLabel};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn catalog() -> Vec<Item> {
        vec![
            Item {
                name: "Apple".to_string(),
                category: Category::Fruits,
                quantity: QuantityLabel::OneKg,
                price: 50,
            },
            Item {
                name: "Milk".to_string(),
                category: Category::Dairy,
                quantity: QuantityLabel::FiveHundredMl,
                price: 30,
            },
        ]
    }

    #[test]
    fn test_single_line_bill() {
        let bill = build_bill("Asha", &[LineSelection::new("Apple", 3)], &catalog(), now()).unwrap();

        assert_eq!(bill.name, "Asha");
        assert_eq!(bill.date, now());
        assert_eq!(
            bill.items,
            vec![BillLine {
                name: "Apple".to_string(),
                qty: 3,
                price: 50
            }]
        );
        assert_eq!(bill.total, 150);
        assert!(bill.is_consistent());
    }

    #[test]
    fn test_multi_line_total() {
        let selections = [LineSelection::new("apple", 2), LineSelection::new("MILK", 4)];
        let bill = build_bill("Ravi", &selections, &catalog(), now()).unwrap();

        assert_eq!(bill.items.len(), 2);
        // Line names come from the catalog, not from the selection text
        assert_eq!(bill.items[0].name, "Apple");
        assert_eq!(bill.items[1].name, "Milk");
        assert_eq!(bill.total, 2 * 50 + 4 * 30);
    }

    #[test]
    fn test_repeated_selection_makes_two_lines() {
        let selections = [LineSelection::new("Milk", 1), LineSelection::new("Milk", 2)];
        let bill = build_bill("Ravi", &selections, &catalog(), now()).unwrap();
        assert_eq!(bill.items.len(), 2);
        assert_eq!(bill.total, 90);
    }

    #[test]
    fn test_empty_customer_rejected() {
        let err = build_bill("", &[LineSelection::new("Apple", 1)], &catalog(), now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let err = build_bill("  ", &[LineSelection::new("Apple", 1)], &catalog(), now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = build_bill("Asha", &[], &catalog(), now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = build_bill("Asha", &[LineSelection::new("Apple", 0)], &catalog(), now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_unknown_item() {
        let err = build_bill("Asha", &[LineSelection::new("Ghost", 1)], &catalog(), now()).unwrap_err();
        assert_eq!(err, CoreError::ItemNotFound("Ghost".to_string()));
    }

    #[test]
    fn test_overflow_rejected() {
        let catalog = vec![Item {
            name: "Gold".to_string(),
            category: Category::Other,
            quantity: QuantityLabel::OneKg,
            price: i64::MAX / 2,
        }];

        let err = build_bill("Asha", &[LineSelection::new("Gold", 3)], &catalog, now()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        let selections = [LineSelection::new("Gold", 2), LineSelection::new("Gold", 2)];
        let err = build_bill("Asha", &selections, &catalog, now()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }

    #[test]
    fn test_catalog_is_not_modified() {
        let items = catalog();
        let before = items.clone();
        build_bill("Asha", &[LineSelection::new("Apple", 5)], &items, now()).unwrap();
        assert_eq!(items, before);
    }
}
