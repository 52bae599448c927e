//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer                                 │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<String, CliError>                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Snapshot I/O failed? ── StoreError::Io ──────────┐ (logged in full)   │
//! │         │                                          │                    │
//! │         ▼                                          ▼                    │
//! │  Bad input? ─── CoreError::Validation ───────► CliError { code, msg }  │
//! │         │                                          │                    │
//! │         ▼                                          ▼                    │
//! │  Success → stdout                     stderr: "error: <msg>"           │
//! │                                       exit:   code.exit_code()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use grocer_core::{CoreError, ValidationError};
use grocer_store::StoreError;

use crate::config::ConfigError;

/// Error returned from a command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Machine-readable error code, also the exit status
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Item not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Snapshot read/write failed or data is corrupt
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::ValidationError => 3,
            ErrorCode::NotFound => 4,
            ErrorCode::StorageError => 5,
            ErrorCode::ConfigError => 6,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => CliError::not_found(&entity, &id),
            StoreError::Corrupt { collection, reason } => {
                tracing::error!(%collection, %reason, "Snapshot is corrupt");
                CliError::new(
                    ErrorCode::StorageError,
                    format!(
                        "The {} file is corrupt ({}). Fix or restore it; nothing was changed.",
                        collection, reason
                    ),
                )
            }
            StoreError::Io { path, source } => {
                // Log the actual error but return a short message
                tracing::error!(path = %path.display(), error = %source, "Snapshot I/O failed");
                CliError::new(
                    ErrorCode::StorageError,
                    format!("Could not access {}: {}", path.display(), source),
                )
            }
            StoreError::Serialization(e) => {
                tracing::error!("Snapshot serialization failed: {}", e);
                CliError::internal("Could not encode data for saving")
            }
            StoreError::Core(e) => e.into(),
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(name) => CliError::not_found("Item", &name),
            CoreError::AmountOverflow { context } => {
                CliError::validation(format!("Amount too large while computing {}", context))
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CliError {}
