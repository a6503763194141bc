//! Enum types referenced by enum conditions

use crate::error::CoercionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A named, closed set of upper-case member names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a token to a member index.
    ///
    /// The token is upper-cased before lookup, so `dev` finds `DEV`; members
    /// are compared exactly.
    pub fn value_of(&self, token: &str) -> Result<usize, CoercionError> {
        let upper = token.to_uppercase();
        self.members
            .iter()
            .position(|member| *member == upper)
            .ok_or_else(|| CoercionError::UnknownEnumMember {
                value: token.to_string(),
                enum_type: self.name.clone(),
            })
    }

    /// Member name at `index`
    pub fn member(&self, index: usize) -> Option<&str> {
        self.members.get(index).map(String::as_str)
    }
}

/// Enum types available to declarations, by name
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    types: HashMap<String, Arc<EnumType>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enum type, replacing any previous type of the same name
    pub fn register(&mut self, enum_type: EnumType) {
        self.types.insert(enum_type.name.clone(), Arc::new(enum_type));
    }

    pub fn with(mut self, enum_type: EnumType) -> Self {
        self.register(enum_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<EnumType>> {
        self.types.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
