//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting was present but could not be parsed or combined.
    #[error("invalid configuration value for {name}: {message}")]
    Invalid { name: String, message: String },

    /// A required setting was absent when a call needed it.
    #[error("missing required configuration: {field}")]
    Missing { field: &'static str },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
