//! Configuration types for ConditionEngine

use crate::error::Result;
use conditionals_core::{EnumType, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main engine configuration
///
/// Property sources are consulted in this order, the first one holding a
/// key wins: inline properties, environment variables, property files in
/// listed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Definition file path(s)
    pub definition_files: Vec<PathBuf>,

    /// Definition contents (id, content) - alternative to file paths
    #[serde(skip)]
    pub definition_contents: Vec<(String, String)>,

    /// YAML or JSON property documents, flattened to dotted keys
    pub property_files: Vec<PathBuf>,

    /// Inline properties with dotted keys
    pub properties: HashMap<String, Value>,

    /// Environment variable source
    pub environment: Option<EnvironmentConfig>,

    /// Enum types that declarations may name in `enumType`
    pub enums: Vec<EnumConfig>,

    /// Stop evaluating a group or component at its first failing condition
    pub short_circuit: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            definition_files: Vec::new(),
            definition_contents: Vec::new(),
            property_files: Vec::new(),
            properties: HashMap::new(),
            environment: None,
            enums: Vec::new(),
            short_circuit: true,
        }
    }

    /// Parse a YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Add a definition file
    pub fn with_definition_file(mut self, path: PathBuf) -> Self {
        self.definition_files.push(path);
        self
    }

    /// Add a property file
    pub fn with_property_file(mut self, path: PathBuf) -> Self {
        self.property_files.push(path);
        self
    }

    /// Set an inline property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Read environment variables starting with `prefix`
    pub fn with_environment(mut self, prefix: impl Into<String>) -> Self {
        self.environment = Some(EnvironmentConfig { prefix: prefix.into() });
        self
    }

    /// Register an enum type
    pub fn with_enum(mut self, name: impl Into<String>, members: Vec<String>) -> Self {
        self.enums.push(EnumConfig {
            name: name.into(),
            members,
        });
        self
    }

    /// Set short-circuit evaluation
    pub fn short_circuit(mut self, enable: bool) -> Self {
        self.short_circuit = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Variable name prefix (e.g. `APP_`); empty reads every variable
    #[serde(default)]
    pub prefix: String,
}

/// Enum type declared in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumConfig {
    pub name: String,
    pub members: Vec<String>,
}

impl From<&EnumConfig> for EnumType {
    fn from(config: &EnumConfig) -> Self {
        EnumType::new(config.name.clone(), config.members.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.short_circuit);
        assert!(config.definition_files.is_empty());
        assert!(config.environment.is_none());
    }

    #[test]
    fn test_from_yaml() {
        let config = EngineConfig::from_yaml_str(
            r#"
definition_files:
  - conditions.yaml
property_files:
  - application.yaml
properties:
  app.count: 5
environment:
  prefix: APP_
enums:
  - name: Environment
    members: [DEV, PROD]
short_circuit: false
"#,
        )
        .unwrap();

        assert_eq!(config.definition_files, vec![PathBuf::from("conditions.yaml")]);
        assert_eq!(config.properties.get("app.count"), Some(&Value::Integer(5)));
        assert_eq!(config.environment.unwrap().prefix, "APP_");
        assert_eq!(config.enums[0].members, vec!["DEV", "PROD"]);
        assert!(!config.short_circuit);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::new()
            .with_definition_file(PathBuf::from("a.yaml"))
            .with_property("app.name", "demo")
            .with_environment("APP_")
            .with_enum("Environment", vec!["DEV".to_string()])
            .short_circuit(false);

        assert_eq!(config.definition_files.len(), 1);
        assert_eq!(config.properties.len(), 1);
        assert_eq!(config.enums.len(), 1);
        assert!(!config.short_circuit);
    }
}
