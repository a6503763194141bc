//! ConditionEngine - Main API for component activation
//!
//! # Architecture
//!
//! The module is organized into:
//! - `types`: Activation decisions
//! - `loader`: Definition and property source loading
//! - `engine`: Core ConditionEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod loader;
mod types;

// Re-export public types
pub use engine::ConditionEngine;
pub use types::ActivationDecision;

// Tests module (only compiled in test mode)
#[cfg(test)]
mod tests;
