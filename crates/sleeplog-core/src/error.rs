//! Error types for sleeplog core operations.
//!
//! The analysis functions are total and never return errors. Everything
//! here comes from parsing user input or from the storage layer; the CLI
//! maps these to user-facing messages and exit codes.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for sleeplog operations.
pub type Result<T> = std::result::Result<T, SleepError>;

/// Core error type for sleeplog operations.
#[derive(Debug, Error)]
pub enum SleepError {
    /// Data validation error (out-of-range quality, malformed time, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entry not found by ID
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    /// Generic resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
