//! Conditionals Runtime - Evaluation of condition specifications
//!
//! This crate resolves configuration properties and decides whether parsed
//! condition specifications hold:
//! - Property sources (flat maps, nested documents, environment variables)
//! - Per-kind matchers with negation
//! - AND aggregation over names and instances
//! - Outcomes with human-readable explanations

pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod os;
pub mod resolver;
pub mod result;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use evaluator::{ConditionEvaluator, ConditionGroup};
pub use os::{OsCondition, OS_NAME_PROPERTY};
pub use resolver::{CompositePropertyResolver, EnvironmentPropertySource, MapPropertySource, PropertyResolver};
pub use result::{ConditionMessage, ConditionOutcome, MatchOutcome};
