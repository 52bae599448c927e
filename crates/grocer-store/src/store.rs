//! # Store Handle
//!
//! The explicit owner of both in-memory collections.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Store Lifecycle                                │
//! │                                                                         │
//! │  CLI startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(StoreConfig) ← load items + bills, verify bill totals     │
//! │       │                    (any corrupt collection → refuse to start)   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │   Arc<Mutex<Collections>>               │                           │
//! │  │   ┌──────────────┐ ┌──────────────┐     │                           │
//! │  │   │ items: Vec   │ │ bills: Vec   │     │                           │
//! │  │   └──────────────┘ └──────────────┘     │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                    │                                            │
//! │  store.items()        store.bills()   ← cheap handles sharing the state │
//! │  ItemRepository       BillRepository                                   │
//! │                                                                         │
//! │  The mutex is the single-writer gate: each mutation holds it through   │
//! │  validate → save snapshot → commit to memory.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use grocer_core::{Bill, Item};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::repository::bill::BillRepository;
use crate::repository::item::ItemRepository;
use crate::snapshot::{Collection, SnapshotStore, StoreConfig};

/// Both collections as held in memory.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) items: Vec<Item>,
    pub(crate) bills: Vec<Bill>,
}

/// Main store handle providing repository access.
///
/// ## Usage
/// ```rust,no_run
/// # async fn demo() -> grocer_store::StoreResult<()> {
/// use grocer_store::{Store, StoreConfig};
///
/// let store = Store::open(StoreConfig::new("./data")).await?;
/// let items = store.items().list().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    snapshots: SnapshotStore,
    state: Arc<Mutex<Collections>>,
}

impl Store {
    /// Opens the store, loading both collections from disk.
    ///
    /// ## Errors
    /// * `StoreError::Corrupt` - a snapshot is unreadable, or a stored bill's
    ///   total disagrees with its lines
    /// * `StoreError::Io` - the files exist but cannot be read
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(data_dir = %config.data_dir.display(), "Opening store");

        let snapshots = SnapshotStore::new(config);
        let items: Vec<Item> = snapshots.load_collection(Collection::Items).await?;
        let bills: Vec<Bill> = snapshots.load_collection(Collection::Bills).await?;

        verify_bill_totals(&bills)?;

        info!(items = items.len(), bills = bills.len(), "Store opened");

        Ok(Store {
            snapshots,
            state: Arc::new(Mutex::new(Collections { items, bills })),
        })
    }

    /// Returns the item repository.
    pub fn items(&self) -> ItemRepository {
        ItemRepository::new(self.snapshots.clone(), Arc::clone(&self.state))
    }

    /// Returns the bill repository.
    pub fn bills(&self) -> BillRepository {
        BillRepository::new(self.snapshots.clone(), Arc::clone(&self.state))
    }
}

fn verify_bill_totals(bills: &[Bill]) -> StoreResult<()> {
    for (idx, bill) in bills.iter().enumerate() {
        if bill.is_consistent() {
            continue;
        }
        let computed = bill
            .computed_total()
            .map(|t| t.units().to_string())
            .unwrap_or_else(|| "an overflowing amount".to_string());
        return Err(StoreError::corrupt(
            Collection::Bills.name(),
            format!(
                "bill #{} for '{}' records total {} but its lines sum to {}",
                idx + 1,
                bill.name,
                bill.total,
                computed
            ),
        ));
    }
    Ok(())
}
