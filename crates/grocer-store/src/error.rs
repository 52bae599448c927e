//! # Store Error Types
//!
//! Error types for snapshot and repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error        CoreError / ValidationError │
//! │       │                                            │                    │
//! │       ▼                                            ▼                    │
//! │  StoreError (this module) ← Adds path / collection context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Operator-facing message + exit code               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use grocer_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the collection.
    ///
    /// ## When This Occurs
    /// - Editing an item whose name no longer resolves
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A snapshot exists but cannot be read as the expected structure.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited JSON
    /// - A record with an unknown category or a malformed date
    /// - A stored bill whose total disagrees with its lines
    ///
    /// Fatal at startup: the store refuses to open rather than discard data.
    #[error("{collection} snapshot is corrupt: {reason}")]
    Corrupt { collection: String, reason: String },

    /// Reading or writing a snapshot file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a collection to JSON failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Domain rule violation (validation, unknown item, overflow).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for a collection.
    pub fn corrupt(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for lookup misses (`NotFound` and `ItemNotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::Core(CoreError::ItemNotFound(_))
        )
    }

    /// True for rejected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::Validation(_)))
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
