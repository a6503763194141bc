//! Raw condition declarations
//!
//! A declaration is the attribute map a metadata source (definition file,
//! builder call, ...) supplies for one condition instance. Attribute names are
//! camelCase (`havingValue`); snake_case spellings (`having_value`) are
//! accepted as well.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default property name list
pub const VALUE: &str = "value";
/// Key prefix shared by every name
pub const PREFIX: &str = "prefix";
/// Alternate property name list
pub const NAME: &str = "name";
/// Expected value
pub const HAVING_VALUE: &str = "havingValue";
/// Policy for absent keys
pub const MATCH_IF_MISSING: &str = "matchIfMissing";
/// Negation flag
pub const NOT: &str = "not";
/// Comparison mode token
pub const MATCH_TYPE: &str = "matchType";
/// Case folding for string conditions
pub const IGNORE_CASE: &str = "ignoreCase";
/// Whitespace trimming for string conditions
pub const TRIM: &str = "trim";
/// Expected element count for collection conditions
pub const SIZE: &str = "size";
/// Target enum for enum conditions
pub const ENUM_TYPE: &str = "enumType";

/// Raw attribute set of one condition declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declaration {
    attributes: HashMap<String, Value>,
}

impl Declaration {
    /// Create an empty declaration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an attribute in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute by its camelCase name, falling back to snake_case
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .get(name)
            .or_else(|| self.attributes.get(&to_snake_case(name)))
    }

    /// Returns true if the attribute is present under either spelling
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attribute names, normalized to camelCase
    pub fn attribute_names(&self) -> impl Iterator<Item = String> + '_ {
        self.attributes.keys().map(|key| to_camel_case(key))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<HashMap<String, Value>> for Declaration {
    fn from(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
