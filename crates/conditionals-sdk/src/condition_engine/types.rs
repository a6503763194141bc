//! Activation decision types

use conditionals_runtime::{ConditionMessage, ConditionOutcome};
use serde::{Deserialize, Serialize};

/// Whether a component is active, with the outcome of each evaluated group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationDecision {
    /// Component id
    pub component: String,

    /// True when every condition group matched
    pub active: bool,

    /// Outcomes in definition order; stops after the first failing group
    /// when short-circuiting
    pub outcomes: Vec<ConditionOutcome>,
}

impl ActivationDecision {
    pub fn new(component: impl Into<String>, outcomes: Vec<ConditionOutcome>) -> Self {
        let active = outcomes.iter().all(|outcome| outcome.matched);
        Self {
            component: component.into(),
            active,
            outcomes,
        }
    }

    /// Combined explanation of all evaluated groups
    pub fn message(&self) -> ConditionMessage {
        ConditionMessage::join(self.outcomes.iter().map(|outcome| outcome.message.clone()))
    }
}
