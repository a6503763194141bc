//! Operating system condition
//!
//! Matches when the current OS name contains any of the declared fragments,
//! compared lower-cased. The name comes from the `os.name` property when the
//! resolver has one, otherwise from the host.

use crate::resolver::PropertyResolver;
use crate::result::{ConditionMessage, ConditionOutcome, ItemStyle};
use conditionals_core::condition::declaration::VALUE;
use conditionals_core::types::FromValue;
use conditionals_core::{ConfigurationError, Declaration};

/// Property overriding the detected OS name
pub const OS_NAME_PROPERTY: &str = "os.name";

const CONDITION_NAME: &str = "OnOs";

/// One parsed OS declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsCondition {
    fragments: Vec<String>,
}

impl OsCondition {
    pub fn new<I, S>(fragments: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        if fragments.is_empty() {
            return Err(ConfigurationError::MissingAttribute {
                condition: CONDITION_NAME.to_string(),
                attribute: VALUE.to_string(),
            });
        }
        Ok(Self { fragments })
    }

    /// Parse from a declaration carrying only `value`
    pub fn parse(declaration: &Declaration) -> Result<Self, ConfigurationError> {
        let invalid = |attribute: &str, reason: String| ConfigurationError::InvalidAttribute {
            condition: CONDITION_NAME.to_string(),
            attribute: attribute.to_string(),
            reason,
        };

        if let Some(other) = declaration.attribute_names().into_iter().find(|name| name != VALUE) {
            return Err(invalid(other.as_str(), format!("not supported by {}", CONDITION_NAME)));
        }

        let fragments = match declaration.get(VALUE) {
            None => Vec::new(),
            Some(value) => Vec::<String>::from_value(value).map_err(|e| invalid(VALUE, e.to_string()))?,
        };
        Self::new(fragments)
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn evaluate<R>(&self, resolver: &R) -> ConditionOutcome
    where
        R: PropertyResolver + ?Sized,
    {
        let os_name = current_os_name(resolver);
        let matched = self
            .fragments
            .iter()
            .any(|fragment| os_name.contains(&fragment.to_lowercase()));

        let message = ConditionMessage::for_condition(CONDITION_NAME);
        if matched {
            ConditionOutcome::matched(message.found("OS", "OS").items(ItemStyle::Normal, &[&os_name]))
        } else {
            ConditionOutcome::no_match(message.because(format!(
                "OS '{}' did not match any of [{}]",
                os_name,
                self.fragments.join(", ")
            )))
        }
    }

    /// AND of several OS declarations; none at all does not match
    pub fn evaluate_all<R>(conditions: &[OsCondition], resolver: &R, short_circuit: bool) -> ConditionOutcome
    where
        R: PropertyResolver + ?Sized,
    {
        if conditions.is_empty() {
            return ConditionOutcome::no_match(
                ConditionMessage::for_condition(CONDITION_NAME).because("has no declarations"),
            );
        }

        let mut matched = true;
        let mut messages = Vec::with_capacity(conditions.len());
        for condition in conditions {
            let outcome = condition.evaluate(resolver);
            matched &= outcome.matched;
            messages.push(outcome.message);
            if !matched && short_circuit {
                break;
            }
        }

        let message = ConditionMessage::join(messages);
        if matched {
            ConditionOutcome::matched(message)
        } else {
            ConditionOutcome::no_match(message)
        }
    }
}

/// Lower-cased OS name, from `os.name` or the host
fn current_os_name<R>(resolver: &R) -> String
where
    R: PropertyResolver + ?Sized,
{
    let configured = resolver
        .get_property(OS_NAME_PROPERTY)
        .and_then(|value| String::from_value(value).ok());
    match configured {
        Some(name) => name.to_lowercase(),
        None => {
            tracing::debug!("No '{}' property, using host OS", OS_NAME_PROPERTY);
            std::env::consts::OS.to_lowercase()
        }
    }
}
