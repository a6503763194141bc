//! Error types for Conditionals Core

use thiserror::Error;

/// A malformed condition declaration.
///
/// Raised while a declaration is turned into a [`crate::PropertySpec`], before
/// any property source is consulted. Never recovered by the evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("The name or value attribute of {condition} must be specified")]
    NameOrValueRequired { condition: String },

    #[error("The name and value attributes of {condition} are exclusive")]
    NameAndValueExclusive { condition: String },

    #[error("Missing required attribute '{attribute}' on {condition}")]
    MissingAttribute { condition: String, attribute: String },

    #[error("Invalid attribute '{attribute}' on {condition}: {reason}")]
    InvalidAttribute {
        condition: String,
        attribute: String,
        reason: String,
    },

    #[error("Unknown match type '{token}' for {condition}")]
    UnknownMatchType { condition: String, token: String },

    #[error("Unknown enum type: {0}")]
    UnknownEnumType(String),
}

/// A present property value that cannot be converted to the declared kind.
///
/// The evaluator treats this as a non-match for the offending key.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("Cannot convert '{value}' to {target}")]
    InvalidNumber { value: String, target: &'static str },

    #[error("Value '{value}' is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error(transparent)]
    InvalidDuration(#[from] DurationParseError),

    #[error("'{value}' is not a member of enum {enum_type}")]
    UnknownEnumMember { value: String, enum_type: String },

    #[error("Cannot convert {found} value to {target}")]
    UnsupportedShape {
        found: &'static str,
        target: &'static str,
    },
}

/// Duration literal parse failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationParseError {
    #[error("'{0}' is not a valid duration")]
    Invalid(String),

    #[error("Duration '{0}' is out of range")]
    Overflow(String),
}

/// Result type for declaration parsing
pub type Result<T> = std::result::Result<T, ConfigurationError>;
