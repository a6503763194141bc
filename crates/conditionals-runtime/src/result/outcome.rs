//! Per-instance and per-group evaluation outcomes

use super::message::{ConditionMessage, ItemStyle};
use conditionals_core::PropertySpec;
use serde::{Deserialize, Serialize};

/// Result of evaluating one condition specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Condition name of the spec's kind (e.g. "OnIntegerProperty")
    pub condition: String,

    /// Display form of the evaluated spec
    pub spec: String,

    /// True when no key was missing and no key differed
    pub matched: bool,

    /// Names whose value satisfied the predicate, in declared order
    pub matched_keys: Vec<String>,

    /// Names absent from the resolver while `matchIfMissing` is false
    pub missing_keys: Vec<String>,

    /// Names whose value failed the predicate or could not be coerced
    pub non_matching_keys: Vec<String>,
}

impl MatchOutcome {
    pub(crate) fn new(spec: &PropertySpec) -> Self {
        Self {
            condition: spec.kind().condition_name().to_string(),
            spec: spec.to_string(),
            matched: true,
            matched_keys: Vec::new(),
            missing_keys: Vec::new(),
            non_matching_keys: Vec::new(),
        }
    }

    pub(crate) fn record_matched(&mut self, name: &str) {
        self.matched_keys.push(name.to_string());
    }

    pub(crate) fn record_missing(&mut self, name: &str) {
        self.missing_keys.push(name.to_string());
        self.matched = false;
    }

    pub(crate) fn record_non_matching(&mut self, name: &str) {
        self.non_matching_keys.push(name.to_string());
        self.matched = false;
    }

    /// A full match reads `matched`; otherwise every non-empty key list is
    /// named: found, then missing, then differing
    pub fn message(&self) -> ConditionMessage {
        let builder = ConditionMessage::for_condition(&self.condition).with_details(&self.spec);
        if self.matched {
            return builder.matched();
        }

        let mut clauses = Vec::with_capacity(3);
        if !self.matched_keys.is_empty() {
            clauses.push(
                builder
                    .clone()
                    .found("property", "properties")
                    .describe(ItemStyle::Quoted, &self.matched_keys),
            );
        }
        if !self.missing_keys.is_empty() {
            clauses.push(
                builder
                    .clone()
                    .did_not_find("property", "properties")
                    .describe(ItemStyle::Quoted, &self.missing_keys),
            );
        }
        if !self.non_matching_keys.is_empty() {
            clauses.push(
                builder
                    .clone()
                    .found("different value in property", "different value in properties")
                    .describe(ItemStyle::Quoted, &self.non_matching_keys),
            );
        }
        builder.because(clauses.join(", "))
    }
}

/// Verdict of a condition group together with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionOutcome {
    pub matched: bool,
    pub message: ConditionMessage,

    /// Outcomes of the evaluated instances; empty for conditions that are
    /// not property based
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<MatchOutcome>,
}

impl ConditionOutcome {
    pub fn matched(message: ConditionMessage) -> Self {
        Self {
            matched: true,
            message,
            instances: Vec::new(),
        }
    }

    pub fn no_match(message: ConditionMessage) -> Self {
        Self {
            matched: false,
            message,
            instances: Vec::new(),
        }
    }

    /// Combine instance outcomes: matched only if there is at least one
    /// instance and every instance matched
    pub fn from_instances(instances: Vec<MatchOutcome>) -> Self {
        let matched = !instances.is_empty() && instances.iter().all(|i| i.matched);
        let message = ConditionMessage::join(instances.iter().map(MatchOutcome::message));
        Self {
            matched,
            message,
            instances,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}
