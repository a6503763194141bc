//! Component definition documents
//!
//! ```yaml
//! components:
//!   - id: metrics-exporter
//!     conditions:
//!       - kind: integer
//!         declarations:
//!           - prefix: app.metrics
//!             name: port
//!             matchType: POSITIVE
//!       - kind: os
//!         declarations:
//!           - value: [linux, mac]
//! ```

use conditionals_core::{Declaration, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level definition document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
}

/// A component gated by condition groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub id: String,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Groups combined with AND; a component without conditions is always active
    #[serde(default)]
    pub conditions: Vec<ConditionDefinition>,
}

/// Declarations of one condition kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    pub kind: ConditionKind,

    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

/// Condition kinds available in definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Duration,
    Enum,
    #[serde(alias = "string_collection")]
    Collection,
    Os,
}

impl ConditionKind {
    /// Value kind of a property condition; `None` for the OS condition
    pub fn value_kind(self) -> Option<ValueKind> {
        match self {
            ConditionKind::String => Some(ValueKind::String),
            ConditionKind::Integer => Some(ValueKind::Integer),
            ConditionKind::Long => Some(ValueKind::Long),
            ConditionKind::Float => Some(ValueKind::Float),
            ConditionKind::Double => Some(ValueKind::Double),
            ConditionKind::Duration => Some(ValueKind::Duration),
            ConditionKind::Enum => Some(ValueKind::Enum),
            ConditionKind::Collection => Some(ValueKind::Collection),
            ConditionKind::Os => None,
        }
    }
}

impl From<ValueKind> for ConditionKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::String => ConditionKind::String,
            ValueKind::Integer => ConditionKind::Integer,
            ValueKind::Long => ConditionKind::Long,
            ValueKind::Float => ConditionKind::Float,
            ValueKind::Double => ConditionKind::Double,
            ValueKind::Duration => ConditionKind::Duration,
            ValueKind::Enum => ConditionKind::Enum,
            ValueKind::Collection => ConditionKind::Collection,
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "os"),
        }
    }
}
