//! # Catalog Lookup
//!
//! Name matching over the in-memory item list.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search "MILK"                                                          │
//! │       │                                                                 │
//! │       ▼  trim the query, lowercase both sides                           │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ 0  Apple    Fruits   1 kg    ₹50        │                           │
//! │  │ 1  milk     Dairy    500 ml  ₹30        │ ← first match wins        │
//! │  │ 2  Milk     Dairy    1 L     ₹55        │   (duplicates allowed)    │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  Exact match only: "mil" does not find "milk". Linear scan.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A miss is an ordinary `None`, not an error.

use crate::types::Item;

/// True when `item_name` matches `query` case-insensitively.
///
/// Only the query is trimmed; a stored name is compared as stored.
pub fn name_matches(item_name: &str, query: &str) -> bool {
    item_name.to_lowercase() == query.trim().to_lowercase()
}

/// Index of the first item whose name matches `query`.
pub fn position_by_name(items: &[Item], query: &str) -> Option<usize> {
    items.iter().position(|item| name_matches(&item.name, query))
}

/// The first item whose name matches `query`.
pub fn find_by_name<'a>(items: &'a [Item], query: &str) -> Option<&'a Item> {
    position_by_name(items, query).map(|idx| &items[idx])
}
