//! Runtime error types

use conditionals_core::ConfigurationError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Malformed condition declaration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A property source could not be built
    #[error("Property source error: {0}")]
    PropertySource(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
