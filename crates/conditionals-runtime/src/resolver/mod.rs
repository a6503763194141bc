//! Property resolution
//!
//! The evaluator only needs two questions answered about a configuration
//! key: is it present, and what is its raw value. Sources:
//! - [`MapPropertySource`]: flat keys, or a nested document flattened to dotted keys
//! - [`EnvironmentPropertySource`]: process environment variables
//! - [`CompositePropertyResolver`]: ordered sources, first hit wins

mod composite;
mod document;
mod env_vars;

pub use composite::CompositePropertyResolver;
pub use document::MapPropertySource;
pub use env_vars::EnvironmentPropertySource;

use conditionals_core::Value;
use std::collections::HashMap;

/// Read-only view over configuration properties
///
/// Implementations must be safe for concurrent reads.
pub trait PropertyResolver: Send + Sync {
    /// Raw value of `key`, if present
    fn get_property(&self, key: &str) -> Option<&Value>;

    /// Returns true if `key` is present
    fn contains_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }
}

impl PropertyResolver for HashMap<String, Value> {
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<T: PropertyResolver + ?Sized> PropertyResolver for Box<T> {
    fn get_property(&self, key: &str) -> Option<&Value> {
        (**self).get_property(key)
    }

    fn contains_property(&self, key: &str) -> bool {
        (**self).contains_property(key)
    }
}

impl<T: PropertyResolver + ?Sized> PropertyResolver for std::sync::Arc<T> {
    fn get_property(&self, key: &str) -> Option<&Value> {
        (**self).get_property(key)
    }

    fn contains_property(&self, key: &str) -> bool {
        (**self).contains_property(key)
    }
}
