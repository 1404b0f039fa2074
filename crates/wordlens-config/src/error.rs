//! Configuration error types.

use thiserror::Error;
use wordlens_core::CoreError;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// A core type rejected its configured value.
    #[error(transparent)]
    Core(#[from] CoreError),
}
