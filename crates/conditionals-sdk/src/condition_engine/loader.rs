//! Definition and property source loading

use crate::config::EngineConfig;
use crate::definition::{ComponentDefinition, DefinitionDocument};
use crate::error::{Result, SdkError};
use conditionals_core::Value;
use conditionals_runtime::{CompositePropertyResolver, EnvironmentPropertySource, MapPropertySource};
use std::path::Path;

/// Definition loading utilities
pub(super) struct DefinitionLoader;

impl DefinitionLoader {
    /// Load every configured definition file and inline content, in order
    pub(super) fn load_all(config: &EngineConfig) -> Result<Vec<ComponentDefinition>> {
        let mut components = Vec::new();

        for path in &config.definition_files {
            let content = std::fs::read_to_string(path).map_err(|e| {
                tracing::warn!("Failed to read definition file {:?}: {}", path, e);
                SdkError::IoError(e)
            })?;
            components.extend(Self::parse(&path.display().to_string(), &content)?);
        }

        for (id, content) in &config.definition_contents {
            components.extend(Self::parse(id, content)?);
        }

        Ok(components)
    }

    /// Parse one definition document; an empty document defines nothing
    pub(super) fn parse(id: &str, content: &str) -> Result<Vec<ComponentDefinition>> {
        if content.trim().is_empty() {
            tracing::debug!("Definition '{}' is empty", id);
            return Ok(Vec::new());
        }

        let document: DefinitionDocument = serde_yaml::from_str(content)
            .map_err(|e| SdkError::InvalidDefinition(format!("{}: {}", id, e)))?;
        tracing::debug!("Loaded {} component(s) from '{}'", document.components.len(), id);
        Ok(document.components)
    }
}

/// Property source assembly
pub(super) struct PropertyLoader;

impl PropertyLoader {
    /// Sources in precedence order: inline, environment, files
    pub(super) fn load_all(config: &EngineConfig) -> Result<CompositePropertyResolver> {
        let mut resolver = CompositePropertyResolver::new();

        if !config.properties.is_empty() {
            resolver.add_source(MapPropertySource::from_map("inline", config.properties.clone()));
        }

        if let Some(environment) = &config.environment {
            resolver.add_source(EnvironmentPropertySource::load(environment.prefix.clone()));
        }

        for path in &config.property_files {
            resolver.add_source(Self::load_file(path)?);
        }

        Ok(resolver)
    }

    /// `.json` files are read as JSON, anything else as YAML
    pub(super) fn load_file(path: &Path) -> Result<MapPropertySource> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!("Failed to read property file {:?}: {}", path, e);
            SdkError::IoError(e)
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let document: Value = if is_json {
            serde_json::from_str(&content)?
        } else if content.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_yaml::from_str(&content)?
        };

        let source = MapPropertySource::from_document(path.display().to_string(), &document)?;
        tracing::debug!("Loaded {} properties from {:?}", source.len(), path);
        Ok(source)
    }
}
