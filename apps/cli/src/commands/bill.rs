//! # Bill Commands
//!
//! Bill generation and history.
//!
//! Selections arrive as repeated `--item NAME[=QTY]` flags. A missing
//! quantity means one unit; the name may itself contain `=`, only the last
//! one splits.

use grocer_core::{LineSelection, ValidationError};
use grocer_store::Store;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::error::CliResult;
use crate::render;

/// Parses one `NAME[=QTY]` selection.
///
/// Used as a clap value parser, so a malformed quantity is reported
/// before the store is touched. Range checks (qty ≥ 1, non-blank name)
/// stay with the billing rules.
pub fn parse_selection(raw: &str) -> Result<LineSelection, ValidationError> {
    match raw.rsplit_once('=') {
        Some((name, qty)) => {
            let qty = qty
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidFormat {
                    field: "item".to_string(),
                    reason: format!("quantity '{}' for '{}' is not a whole number", qty, name.trim()),
                })?;
            Ok(LineSelection::new(name.trim(), qty))
        }
        None => Ok(LineSelection::new(raw.trim(), 1)),
    }
}

/// `grocer bill --customer C --item NAME[=QTY]...`
pub async fn generate_bill(
    store: &Store,
    customer: &str,
    selections: &[LineSelection],
    display: &DisplayConfig,
) -> CliResult<String> {
    debug!(customer = %customer, lines = selections.len(), "Billing");
    let bill = store.bills().generate(customer, selections).await?;
    Ok(render::receipt(&bill, display))
}

/// `grocer bills [--oldest-first]`
///
/// Prints every stored bill with its lines, newest first unless asked
/// otherwise.
pub async fn list_bills(store: &Store, oldest_first: bool) -> CliResult<String> {
    let bills = if oldest_first {
        store.bills().list().await
    } else {
        store.bills().list_latest_first().await
    };
    debug!(count = bills.len(), oldest_first, "Listing bills");
    Ok(render::bill_history(&bills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use grocer_core::{Category, ItemDraft, QuantityLabel};
    use grocer_store::StoreConfig;
    use tempfile::TempDir;

    #[test]
    fn test_parse_selection_with_quantity() {
        assert_eq!(parse_selection("Apple=3").unwrap(), LineSelection::new("Apple", 3));
        assert_eq!(
            parse_selection(" Orange Juice = 2 ").unwrap(),
            LineSelection::new("Orange Juice", 2)
        );
    }

    #[test]
    fn test_parse_selection_defaults_to_one() {
        assert_eq!(parse_selection("Apple").unwrap(), LineSelection::new("Apple", 1));
    }

    #[test]
    fn test_parse_selection_splits_on_last_equals() {
        assert_eq!(parse_selection("A=B=4").unwrap(), LineSelection::new("A=B", 4));
    }

    #[test]
    fn test_parse_selection_rejects_bad_quantity() {
        let err = parse_selection("Apple=three").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(err.to_string().contains("'three'"));
    }

    #[test]
    fn test_parse_selection_leaves_range_checks_to_billing() {
        assert_eq!(parse_selection("Apple=0").unwrap().qty, 0);
        assert_eq!(parse_selection("Apple=-2").unwrap().qty, -2);
    }

    async fn stocked(dir: &TempDir) -> Store {
        let store = Store::open(StoreConfig::new(dir.path())).await.unwrap();
        store
            .items()
            .add(ItemDraft::new("Apple", Category::Fruits, QuantityLabel::OneKg, 50))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_generate_prints_receipt() {
        let dir = TempDir::new().unwrap();
        let store = stocked(&dir).await;

        let out = generate_bill(
            &store,
            "Asha",
            &[parse_selection("apple=3").unwrap()],
            &DisplayConfig::default(),
        )
        .await
        .unwrap();

        assert!(out.contains("Customer: Asha"));
        assert!(out.contains("Apple x 3 = ₹150"));
        assert!(out.contains("Total: ₹150"));
    }

    #[tokio::test]
    async fn test_generate_errors() {
        let dir = TempDir::new().unwrap();
        let store = stocked(&dir).await;
        let display = DisplayConfig::default();

        let err = generate_bill(&store, "Asha", &[LineSelection::new("Ghost", 1)], &display)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: Ghost");

        let err = generate_bill(&store, "Asha", &[], &display).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = generate_bill(&store, "", &[LineSelection::new("Apple", 1)], &display)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_list_bills_order() {
        let dir = TempDir::new().unwrap();
        let store = stocked(&dir).await;

        assert_eq!(list_bills(&store, false).await.unwrap(), "No bills yet.\n");

        for customer in ["First", "Second"] {
            store
                .bills()
                .generate(customer, &[LineSelection::new("Apple", 1)])
                .await
                .unwrap();
        }

        let newest = list_bills(&store, false).await.unwrap();
        let oldest = list_bills(&store, true).await.unwrap();
        assert!(newest.lines().next().unwrap().starts_with("Second - ₹50"));
        assert!(oldest.lines().next().unwrap().starts_with("First - ₹50"));
    }

    #[tokio::test]
    async fn test_list_bills_shows_stored_lines() {
        let dir = TempDir::new().unwrap();
        let store = stocked(&dir).await;
        store
            .items()
            .add(ItemDraft::new("Milk", Category::Dairy, QuantityLabel::OneLitre, 30))
            .await
            .unwrap();
        store
            .bills()
            .generate(
                "Asha",
                &[LineSelection::new("Apple", 3), LineSelection::new("Milk", 2)],
            )
            .await
            .unwrap();

        // Later catalog edits must not leak into the printed history
        store
            .items()
            .edit(
                "Apple",
                ItemDraft::new("Apple", Category::Fruits, QuantityLabel::OneKg, 99),
            )
            .await
            .unwrap();

        let out = list_bills(&store, false).await.unwrap();
        assert!(out.starts_with("Asha - ₹210 on "));
        assert!(out.contains("  - Apple x 3 = ₹150\n"));
        assert!(out.contains("  - Milk x 2 = ₹60\n"));
        assert!(out.ends_with("  Total: ₹210\n"));
    }
}
