//! Environment variable property source
//!
//! Loads process environment variables as properties:
//! - only variables starting with the configured prefix (all, if empty)
//! - `APP_FEATURE_COUNT` is exposed as `app.feature.count`
//! - values stay raw strings; each condition coerces them to its own kind

use super::PropertyResolver;
use conditionals_core::Value;
use std::collections::HashMap;
use std::ffi::OsString;

/// Snapshot of environment variables taken at construction
#[derive(Debug, Clone, Default)]
pub struct EnvironmentPropertySource {
    prefix: String,
    properties: HashMap<String, Value>,
}

impl EnvironmentPropertySource {
    /// Load variables from the current process environment
    pub fn load(prefix: impl Into<String>) -> Self {
        Self::from_os_vars(prefix, std::env::vars_os())
    }

    /// Build from raw OS variables; entries that are not valid UTF-8 are skipped
    pub fn from_os_vars<I>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars
            .into_iter()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    let name = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                    tracing::debug!("Skipping environment variable '{}': not valid UTF-8", name);
                    None
                }
            });
        Self::from_vars(prefix, vars)
    }

    /// Build from an explicit variable list
    pub fn from_vars<I>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = prefix.into();
        let mut properties = HashMap::new();

        for (key, value) in vars {
            if !key.starts_with(&prefix) {
                continue;
            }
            properties.insert(property_key(&key), Value::String(value));
        }
        tracing::debug!(
            "Loaded {} environment properties with prefix '{}'",
            properties.len(),
            prefix
        );

        Self { prefix, properties }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyResolver for EnvironmentPropertySource {
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Map an environment variable name to a dotted property key
fn property_key(variable: &str) -> String {
    variable.to_lowercase().replace('_', ".")
}
