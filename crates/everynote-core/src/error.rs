//! Error types for everynote-core

use thiserror::Error;

/// Result type alias using everynote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in everynote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// `SQLite` error from the local storage database
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage handle lock was poisoned by a panicking holder
    #[error("Storage lock poisoned")]
    LockPoisoned,
}
