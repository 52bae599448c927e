//! # grocer-store: Persistence Layer for Grocer
//!
//! This crate keeps the item catalog and the bill history in memory and
//! mirrors each of them to a JSON snapshot file after every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Grocer Data Flow                                │
//! │                                                                         │
//! │  `grocer bill --customer Asha --item Apple=3`                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   grocer-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │  Snapshots   │  │   │
//! │  │   │  (store.rs)   │    │  (item.rs)    │    │ (snapshot.rs)│  │   │
//! │  │   │               │    │  (bill.rs)    │    │              │  │   │
//! │  │   │ Arc<Mutex<    │◄───│ ItemRepo      │───►│ load / save  │  │   │
//! │  │   │  Collections>>│    │ BillRepo      │    │ atomic write │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/items_data.json     <data_dir>/bills_data.json    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The store handle that owns both collections
//! - [`snapshot`] - Snapshot file loading and atomic saving
//! - [`error`] - Store error types
//! - [`repository`] - Item and bill repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo() -> grocer_store::StoreResult<()> {
//! use grocer_core::{Category, ItemDraft, LineSelection, QuantityLabel};
//! use grocer_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("./data")).await?;
//!
//! store
//!     .items()
//!     .add(ItemDraft::new("Apple", Category::Fruits, QuantityLabel::OneKg, 50))
//!     .await?;
//!
//! let bill = store
//!     .bills()
//!     .generate("Asha", &[LineSelection::new("Apple", 3)])
//!     .await?;
//! assert_eq!(bill.total, 150);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use snapshot::{Collection, SnapshotStore, StoreConfig, BILLS_FILE, ITEMS_FILE};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::bill::BillRepository;
pub use repository::item::ItemRepository;
