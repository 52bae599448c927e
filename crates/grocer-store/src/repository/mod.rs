//! # Repository Module
//!
//! Repository handles over the shared in-memory collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  store.items().add(draft)                                      │
//! │       ▼                                                                 │
//! │  ItemRepository                   BillRepository                       │
//! │  ├── list()                       ├── generate(customer, selections)   │
//! │  ├── add(draft)                   ├── list()                           │
//! │  ├── find_by_name(name)           └── list_latest_first()              │
//! │  └── edit(name, draft)                                                 │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  grocer-core rules (validation, catalog lookup, build_bill)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SnapshotStore::save_collection  (whole list, atomic)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Item Catalog
//! - [`BillRepository`](bill::BillRepository) - Billing Engine

pub mod bill;
pub mod item;
