//! # grocer-core: Pure Business Logic for Grocer
//!
//! This crate holds the data model and the rules of the grocery store:
//! what an item is, what a bill is, how a bill total is computed, and which
//! inputs are acceptable. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Grocer Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 `grocer` CLI (presentation)                     │   │
//! │  │    items ──► add ──► search ──► edit ──► bill ──► bills         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                grocer-store (snapshots + repositories)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ grocer-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  billing  │  │   │
//! │  │   │   Item    │  │   Money   │  │  lookup   │  │ build_bill│  │   │
//! │  │   │   Bill    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Bill, Category, QuantityLabel, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`catalog`] - Case-insensitive item lookup
//! - [`billing`] - Bill computation with snapshot pricing
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use grocer_core::billing::build_bill;
//! use grocer_core::{Category, Item, LineSelection, QuantityLabel};
//!
//! let catalog = vec![Item {
//!     name: "Apple".to_string(),
//!     category: Category::Fruits,
//!     quantity: QuantityLabel::OneKg,
//!     price: 50,
//! }];
//!
//! let at = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//!
//! let bill = build_bill("Asha", &[LineSelection::new("Apple", 3)], &catalog, at).unwrap();
//! assert_eq!(bill.total, 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The single currency symbol the store prices in.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Timestamp layout of `Bill::date`, both on disk and on receipts.
pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum length of an item or customer name.
pub const MAX_NAME_LEN: usize = 200;
