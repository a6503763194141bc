//! Conditionals Core - Core types and definitions for the conditionals engine
//!
//! This crate provides the fundamental types used across the workspace:
//! - Raw values as supplied by declarations and property sources
//! - Value kinds, match types and duration literals
//! - Raw declarations and parsed condition specifications
//! - Error types

pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::{
    Declaration, EnumRegistry, EnumType, PropertyPredicate, PropertySpec, SpecParser,
};
pub use error::{CoercionError, ConfigurationError};
pub use types::{FromValue, Value, ValueKind};
