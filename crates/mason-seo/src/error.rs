//! SEO error types.

use thiserror::Error;

/// Errors raised while building page metadata.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeoError {
    /// Product data cannot be described as a schema.org `Product`.
    #[error("Invalid product {field}: {reason}")]
    InvalidProduct { field: &'static str, reason: String },

    /// Structured data could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SeoError {
    fn from(e: serde_json::Error) -> Self {
        SeoError::SerializationError(e.to_string())
    }
}
