//! SDK error types

use conditionals_core::ConfigurationError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Malformed condition declaration
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigurationError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] conditionals_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML document error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON document error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Definition document that parses but cannot be used
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// No component with this id was defined
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
