//! Builder pattern for ConditionEngine

use crate::condition_engine::ConditionEngine;
use crate::config::EngineConfig;
use crate::error::Result;
use conditionals_core::{EnumType, Value};
use conditionals_runtime::PropertyResolver;
use std::path::PathBuf;

/// Builder for ConditionEngine
///
/// # Example
///
/// ```rust,ignore
/// use conditionals_sdk::ConditionEngineBuilder;
///
/// let engine = ConditionEngineBuilder::new()
///     .add_definition_file("conditions.yaml")
///     .add_property_file("application.yaml")
///     .with_environment("APP_")
///     .build()?;
///
/// let decision = engine.evaluate("metrics-exporter")?;
/// ```
pub struct ConditionEngineBuilder {
    config: EngineConfig,
    enums: Vec<EnumType>,
    sources: Vec<Box<dyn PropertyResolver>>,
}

impl ConditionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            enums: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a definition file
    pub fn add_definition_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.definition_files.push(path.into());
        self
    }

    /// Add definition content directly (alternative to file path)
    ///
    /// # Arguments
    /// * `id` - Identifier used in error messages
    /// * `content` - YAML definition document
    pub fn add_definition_content(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.config.definition_contents.push((id.into(), content.into()));
        self
    }

    /// Add a YAML or JSON property file
    pub fn add_property_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.property_files.push(path.into());
        self
    }

    /// Set an inline property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.properties.insert(key.into(), value.into());
        self
    }

    /// Read environment variables starting with `prefix`
    pub fn with_environment(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.with_environment(prefix);
        self
    }

    /// Add a custom property source, ranked below the configured ones
    pub fn with_property_source(mut self, source: impl PropertyResolver + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Register an enum type for `enumType` references
    pub fn register_enum(mut self, enum_type: EnumType) -> Self {
        self.enums.push(enum_type);
        self
    }

    /// Stop at the first failing condition
    pub fn short_circuit(mut self, enable: bool) -> Self {
        self.config.short_circuit = enable;
        self
    }

    /// Build the condition engine
    ///
    /// Every declaration is parsed here; a malformed one fails the build.
    pub fn build(self) -> Result<ConditionEngine> {
        ConditionEngine::with_sources(self.config, self.enums, self.sources)
    }
}

impl Default for ConditionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_empty() {
        let engine = ConditionEngineBuilder::new().build().unwrap();
        assert_eq!(engine.component_ids().count(), 0);
        assert!(engine.evaluate_all().is_empty());
    }

    #[test]
    fn test_builder_with_multiple_options() {
        let builder = ConditionEngineBuilder::new()
            .add_definition_file("a.yaml")
            .add_definition_file("b.yaml")
            .add_property_file("application.yaml")
            .with_property("app.count", 5)
            .with_environment("APP_")
            .short_circuit(false);

        assert_eq!(builder.config.definition_files.len(), 2);
        assert_eq!(builder.config.property_files.len(), 1);
        assert_eq!(builder.config.environment.as_ref().unwrap().prefix, "APP_");
        assert!(!builder.config.short_circuit);
    }

    #[test]
    fn test_builder_missing_file_fails() {
        let result = ConditionEngineBuilder::new()
            .add_definition_file("/nonexistent/conditions.yaml")
            .build();
        assert!(matches!(result, Err(crate::SdkError::IoError(_))));
    }
}
