//! Error types for dictionary persistence

use thiserror::Error;

/// Errors that can occur while reading or writing a dictionary slot
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Slot name is empty or contains path separators
    #[error("Invalid slot name: {0:?}")]
    InvalidSlot(String),
}
