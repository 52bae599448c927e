//! # Bill Repository
//!
//! The Billing Engine: turns a customer name and a list of item selections
//! into a persisted bill.
//!
//! ## Bill Generation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    generate(customer, selections)                       │
//! │                                                                         │
//! │  1. Stamp the local time (whole seconds)                               │
//! │  2. Lock collections                                                   │
//! │  3. build_bill against the CURRENT catalog                             │
//! │       ├── empty customer / no lines / qty < 1 → Validation             │
//! │       └── unknown item                         → ItemNotFound          │
//! │  4. Save bills + new bill   ── fails ──► nothing recorded              │
//! │  5. Append to memory                                                   │
//! │                                                                         │
//! │  Line names and prices are copied at this moment. Later catalog edits  │
//! │  never touch an issued bill.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, Timelike};
use grocer_core::billing::build_bill;
use grocer_core::{Bill, LineSelection};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::snapshot::{Collection, SnapshotStore};
use crate::store::Collections;

/// Repository for bill operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    snapshots: SnapshotStore,
    state: Arc<Mutex<Collections>>,
}

impl BillRepository {
    pub(crate) fn new(snapshots: SnapshotStore, state: Arc<Mutex<Collections>>) -> Self {
        BillRepository { snapshots, state }
    }

    /// Generates, stores, and returns a bill dated now (local time).
    pub async fn generate(&self, customer: &str, selections: &[LineSelection]) -> StoreResult<Bill> {
        let now = Local::now().naive_local();
        let at = now.with_nanosecond(0).unwrap_or(now);
        self.generate_at(customer, selections, at).await
    }

    /// Generates, stores, and returns a bill with an explicit timestamp.
    ///
    /// ## Returns
    /// * `Ok(Bill)` - The bill exactly as appended to history
    /// * `Err(StoreError::Core(Validation))` - Empty customer, no lines, or qty < 1
    /// * `Err(StoreError::Core(ItemNotFound))` - A selection names no catalog item
    /// * `Err(StoreError::Core(AmountOverflow))` - Totals exceed the money range
    pub async fn generate_at(
        &self,
        customer: &str,
        selections: &[LineSelection],
        at: NaiveDateTime,
    ) -> StoreResult<Bill> {
        debug!(customer = %customer, lines = selections.len(), "Generating bill");

        let mut state = self.state.lock().await;
        let bill = build_bill(customer, selections, &state.items, at)?;

        let mut next = state.bills.clone();
        next.push(bill.clone());

        self.snapshots.save_collection(Collection::Bills, &next).await?;
        state.bills = next;

        info!(
            customer = %bill.name,
            lines = bill.items.len(),
            total = bill.total,
            date = %bill.date_string(),
            "Bill generated"
        );
        Ok(bill)
    }

    /// All bills in creation order.
    pub async fn list(&self) -> Vec<Bill> {
        self.state.lock().await.bills.clone()
    }

    /// All bills, most recently created first.
    pub async fn list_latest_first(&self) -> Vec<Bill> {
        let mut bills = self.list().await;
        bills.reverse();
        bills
    }

    /// Number of bills in history.
    pub async fn count(&self) -> usize {
        self.state.lock().await.bills.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
