//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Entry is not selectable at the current booking step.
    #[error("Entry not available at this step: {0}")]
    UnknownEntry(String),

    /// Booking has not reached the review step.
    #[error("Booking incomplete: missing {0}")]
    BookingIncomplete(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for CommerceError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
