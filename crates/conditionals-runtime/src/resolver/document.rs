//! Map-backed property source
//!
//! Holds flat dotted keys. Nested documents (parsed YAML/JSON) are flattened:
//! objects contribute `parent.child` keys, arrays are kept whole under their
//! own key and each element is also indexed as `key[i]`.

use super::PropertyResolver;
use crate::error::{Result, RuntimeError};
use conditionals_core::Value;
use std::collections::HashMap;

/// In-memory property source
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    name: String,
    properties: HashMap<String, Value>,
}

impl MapPropertySource {
    /// Create an empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Create a source from flat keys
    pub fn from_map(name: impl Into<String>, properties: HashMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Create a source by flattening a nested document
    ///
    /// The root must be an object.
    pub fn from_document(name: impl Into<String>, document: &Value) -> Result<Self> {
        let name = name.into();
        let Value::Object(root) = document else {
            return Err(RuntimeError::PropertySource(format!(
                "{}: expected an object at the document root, found {}",
                name,
                document.type_name()
            )));
        };

        let mut properties = HashMap::new();
        for (key, value) in root {
            flatten_into(&mut properties, key.clone(), value);
        }
        tracing::debug!("Flattened document '{}' into {} properties", name, properties.len());

        Ok(Self { name, properties })
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a property in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyResolver for MapPropertySource {
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Null leaves become empty strings, the way an empty YAML value reads as `""`.
fn flatten_into(properties: &mut HashMap<String, Value>, path: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(properties, format!("{}.{}", path, key), child);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(properties, format!("{}[{}]", path, i), item);
            }
            properties.insert(path, value.clone());
        }
        Value::Null => {
            properties.insert(path, Value::String(String::new()));
        }
        scalar => {
            properties.insert(path, scalar.clone());
        }
    }
}
