//! Conditionals SDK
//!
//! High-level API for deciding which components are active from
//! declarative conditions over configuration properties.

pub mod builder;
pub mod condition_engine;
pub mod config;
pub mod definition;
pub mod error;

// Re-export main types
pub use builder::ConditionEngineBuilder;
pub use condition_engine::{ActivationDecision, ConditionEngine};
pub use config::{EngineConfig, EnumConfig, EnvironmentConfig};
pub use definition::{ComponentDefinition, ConditionDefinition, ConditionKind, DefinitionDocument};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use conditionals_core::{Declaration, EnumType, Value};
pub use conditionals_runtime::{ConditionMessage, ConditionOutcome, MapPropertySource, PropertyResolver};
