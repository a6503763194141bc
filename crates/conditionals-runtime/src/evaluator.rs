//! Aggregation of condition instances into a verdict
//!
//! A spec matches when every one of its names resolves to a matching value
//! (or is absent while `matchIfMissing` is set). A group matches when every
//! spec matches; an empty group never matches.

use crate::error::{Result, RuntimeError};
use crate::matcher;
use crate::resolver::PropertyResolver;
use crate::result::{ConditionMessage, ConditionOutcome, MatchOutcome};
use conditionals_core::{Declaration, PropertySpec, SpecParser, ValueKind};

/// Ordered specs of one kind, combined with AND
#[derive(Debug, Clone)]
pub struct ConditionGroup {
    kind: ValueKind,
    specs: Vec<PropertySpec>,
}

impl ConditionGroup {
    /// Every spec must be of `kind`
    pub fn new(kind: ValueKind, specs: Vec<PropertySpec>) -> Result<Self> {
        if let Some(other) = specs.iter().find(|spec| spec.kind() != kind) {
            return Err(RuntimeError::InvalidOperation(format!(
                "{} group cannot hold a {} condition",
                kind,
                other.kind()
            )));
        }
        Ok(Self { kind, specs })
    }

    /// Parse every declaration; the first malformed one fails the group
    pub fn parse(parser: &SpecParser, kind: ValueKind, declarations: &[Declaration]) -> Result<Self> {
        let specs = parser.parse_all(kind, declarations)?;
        Ok(Self { kind, specs })
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn specs(&self) -> &[PropertySpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Evaluates specs and groups against a property resolver
#[derive(Debug, Clone, Copy)]
pub struct ConditionEvaluator {
    short_circuit: bool,
}

impl Default for ConditionEvaluator {
    fn default() -> Self {
        Self { short_circuit: true }
    }
}

impl ConditionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// With `short_circuit` off, every instance of a group is evaluated and
    /// reported even after one failed. The verdict is the same either way.
    pub fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }

    pub fn short_circuit(&self) -> bool {
        self.short_circuit
    }

    /// Evaluate one spec, name by name, in declared order
    pub fn evaluate_spec<R>(&self, spec: &PropertySpec, resolver: &R) -> MatchOutcome
    where
        R: PropertyResolver + ?Sized,
    {
        let mut outcome = MatchOutcome::new(spec);

        for name in spec.names() {
            let key = spec.key(name);
            let value = match resolver.get_property(&key) {
                Some(value) if resolver.contains_property(&key) => value,
                _ => {
                    if spec.match_if_missing() {
                        tracing::debug!("Property '{}' is missing, treated as a match", key);
                    } else {
                        tracing::debug!("Property '{}' is missing", key);
                        outcome.record_missing(name);
                    }
                    continue;
                }
            };

            match matcher::matches(spec.predicate(), value) {
                Ok(true) => outcome.record_matched(name),
                Ok(false) => {
                    tracing::debug!("Property '{}' = {} does not match {}", key, value, spec);
                    outcome.record_non_matching(name);
                }
                Err(e) => {
                    tracing::debug!("Property '{}' cannot be read as {}: {}", key, spec.kind(), e);
                    outcome.record_non_matching(name);
                }
            }
        }

        outcome
    }

    /// Evaluate a group; an empty group does not match
    pub fn evaluate_group<R>(&self, group: &ConditionGroup, resolver: &R) -> ConditionOutcome
    where
        R: PropertyResolver + ?Sized,
    {
        if group.is_empty() {
            return ConditionOutcome::no_match(
                ConditionMessage::for_condition(group.kind().condition_name()).because("has no declarations"),
            );
        }

        let mut instances = Vec::with_capacity(group.len());
        for spec in group.specs() {
            let outcome = self.evaluate_spec(spec, resolver);
            let failed = !outcome.matched;
            instances.push(outcome);
            if failed && self.short_circuit {
                break;
            }
        }

        let outcome = ConditionOutcome::from_instances(instances);
        tracing::debug!(
            "{} group of {} resolved to {}",
            group.kind().condition_name(),
            group.len(),
            outcome.matched
        );
        outcome
    }

    /// Parse and evaluate raw declarations in one step
    ///
    /// Configuration errors are returned before the resolver is consulted.
    pub fn evaluate_declarations<R>(
        &self,
        parser: &SpecParser,
        kind: ValueKind,
        declarations: &[Declaration],
        resolver: &R,
    ) -> Result<ConditionOutcome>
    where
        R: PropertyResolver + ?Sized,
    {
        let group = ConditionGroup::parse(parser, kind, declarations)?;
        Ok(self.evaluate_group(&group, resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapPropertySource;
    use conditionals_core::condition::declaration::{HAVING_VALUE, MATCH_IF_MISSING, MATCH_TYPE, NAME, PREFIX};

    fn create_resolver() -> MapPropertySource {
        MapPropertySource::new("test")
            .with_property("app.a", 5)
            .with_property("app.b", 7)
            .with_property("app.text", "abc")
    }

    fn integer(names: Vec<&str>, expected: i32) -> Declaration {
        Declaration::new()
            .with(PREFIX, "app")
            .with(NAME, names)
            .with(HAVING_VALUE, expected)
    }

    fn parse(declaration: Declaration) -> PropertySpec {
        SpecParser::new().parse(ValueKind::Integer, &declaration).unwrap()
    }

    #[test]
    fn test_all_names_must_match() {
        let evaluator = ConditionEvaluator::new();
        let spec = parse(integer(vec!["a", "b"], 0).with(MATCH_TYPE, "POSITIVE"));
        let outcome = evaluator.evaluate_spec(&spec, &create_resolver());
        assert!(outcome.matched);
        assert_eq!(outcome.matched_keys, vec!["a", "b"]);

        let spec = parse(integer(vec!["a", "b"], 5));
        let outcome = evaluator.evaluate_spec(&spec, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.matched_keys, vec!["a"]);
        assert_eq!(outcome.non_matching_keys, vec!["b"]);
    }

    #[test]
    fn test_missing_policy() {
        let evaluator = ConditionEvaluator::new();
        let strict = parse(integer(vec!["absent"], 5));
        let outcome = evaluator.evaluate_spec(&strict, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.missing_keys, vec!["absent"]);

        let lenient = parse(integer(vec!["absent"], 5).with(MATCH_IF_MISSING, true));
        let outcome = evaluator.evaluate_spec(&lenient, &create_resolver());
        assert!(outcome.matched);
        assert!(outcome.missing_keys.is_empty());
        assert!(outcome.matched_keys.is_empty());
    }

    #[test]
    fn test_coercion_failure_is_non_match() {
        let spec = parse(integer(vec!["text"], 5));
        let outcome = ConditionEvaluator::new().evaluate_spec(&spec, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.non_matching_keys, vec!["text"]);
    }

    #[test]
    fn test_group_short_circuits() {
        let group = ConditionGroup::parse(
            &SpecParser::new(),
            ValueKind::Integer,
            &[integer(vec!["a"], 1), integer(vec!["b"], 7)],
        )
        .unwrap();

        let outcome = ConditionEvaluator::new().evaluate_group(&group, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.instances.len(), 1);

        let outcome = ConditionEvaluator::new()
            .with_short_circuit(false)
            .evaluate_group(&group, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.instances.len(), 2);
        assert_eq!(
            outcome.message.to_string(),
            "OnIntegerProperty (app.a=1) found different value in property 'a'; \
             OnIntegerProperty (app.b=7) matched"
        );
    }

    #[test]
    fn test_empty_group_is_non_match() {
        let group = ConditionGroup::new(ValueKind::String, Vec::new()).unwrap();
        let outcome = ConditionEvaluator::new().evaluate_group(&group, &create_resolver());
        assert!(!outcome.matched);
        assert_eq!(outcome.message.to_string(), "OnStringProperty has no declarations");
    }

    #[test]
    fn test_group_rejects_mixed_kinds() {
        let spec = parse(integer(vec!["a"], 5));
        let result = ConditionGroup::new(ValueKind::Long, vec![spec]);
        assert!(matches!(result, Err(RuntimeError::InvalidOperation(_))));
    }

    #[test]
    fn test_configuration_error_propagates() {
        let result = ConditionEvaluator::new().evaluate_declarations(
            &SpecParser::new(),
            ValueKind::Integer,
            &[Declaration::new().with(HAVING_VALUE, 5)],
            &create_resolver(),
        );
        assert!(matches!(result, Err(RuntimeError::Configuration(_))));
    }
}
