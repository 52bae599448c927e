//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Lookup misses and arithmetic limits            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  grocer-store errors (separate crate)                                  │
//! │  └── StoreError       - Snapshot I/O, corruption, edit misses          │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees + exit code             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → Operator  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A billing selection names an item that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - The selection was made against a stale view of the catalog
    /// - The item was renamed after the operator picked it
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A line total or bill total does not fit in the money type.
    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned before any state changes, so a rejected input never reaches
/// the snapshot files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Invalid format (e.g. a malformed `NAME=QTY` selection).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
