//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using client-side storage.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Storage is not available (no window, private mode, disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to serialize or parse a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
