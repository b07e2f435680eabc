//! Error types for Mason core services.

use crate::widget::WidgetError;
use thiserror::Error;

/// Errors that can occur in Mason core services.
#[derive(Error, Debug)]
pub enum MasonError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Third-party widget could not be mounted.
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    /// Browser storage failure.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Remote API failure.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Logging could not be installed.
    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<toml::de::Error> for MasonError {
    fn from(err: toml::de::Error) -> Self {
        MasonError::ConfigError(err.to_string())
    }
}
