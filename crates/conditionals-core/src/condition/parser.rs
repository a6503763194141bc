//! Declaration parser
//!
//! Turns raw [`Declaration`]s into [`PropertySpec`]s. Every literal is parsed
//! here, once: numeric ranges are checked, duration literals are converted,
//! enum members are resolved and `MATCHES` patterns are compiled. Evaluation
//! never re-parses a declaration.

use super::declaration::{
    Declaration, ENUM_TYPE, HAVING_VALUE, IGNORE_CASE, MATCH_IF_MISSING, MATCH_TYPE, NAME, NOT,
    PREFIX, SIZE, TRIM, VALUE,
};
use super::enums::{EnumRegistry, EnumType};
use super::types::{
    CollectionPredicate, DurationPredicate, EnumPredicate, FloatPredicate, NumberPredicate,
    PropertyPredicate, PropertySpec, StringPredicate, PREFIX_SEPARATOR,
};
use crate::error::{ConfigurationError, Result};
use crate::types::{parse_duration, FromValue, StringMatch, UnknownMatchType, Value, ValueKind};
use regex::RegexBuilder;
use std::str::FromStr;
use std::sync::Arc;

const COMMON_ATTRIBUTES: [&str; 5] = [VALUE, PREFIX, NAME, HAVING_VALUE, MATCH_IF_MISSING];
const MATCHING_ATTRIBUTES: [&str; 2] = [NOT, MATCH_TYPE];

/// Parser for condition declarations
#[derive(Debug, Clone, Default)]
pub struct SpecParser {
    enums: EnumRegistry,
}

impl SpecParser {
    /// Create a parser without registered enum types
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser resolving `enumType` references against `enums`
    pub fn with_enums(enums: EnumRegistry) -> Self {
        Self { enums }
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    /// Parse every declaration of a group, failing on the first malformed one
    pub fn parse_all(&self, kind: ValueKind, declarations: &[Declaration]) -> Result<Vec<PropertySpec>> {
        declarations
            .iter()
            .map(|declaration| self.parse(kind, declaration))
            .collect()
    }

    /// Parse one declaration of the given kind
    pub fn parse(&self, kind: ValueKind, declaration: &Declaration) -> Result<PropertySpec> {
        let reader = AttributeReader::new(kind.condition_name(), declaration);
        reader.check_recognized(kind)?;

        let prefix = normalize_prefix(&reader.string(PREFIX)?.unwrap_or_default());
        let names = reader.names()?;
        let match_if_missing = reader.bool(MATCH_IF_MISSING)?;
        let predicate = self.parse_predicate(kind, &reader)?;

        Ok(PropertySpec {
            prefix,
            names,
            predicate,
            match_if_missing,
        })
    }

    fn parse_predicate(&self, kind: ValueKind, reader: &AttributeReader<'_>) -> Result<PropertyPredicate> {
        let predicate = match kind {
            ValueKind::String => {
                let expected = reader.having_value(String::new())?;
                let match_type: StringMatch = reader.match_type()?;
                let ignore_case = reader.bool(IGNORE_CASE)?;
                let trim = reader.bool(TRIM)?;
                let pattern = match match_type {
                    StringMatch::Matches => Some(reader.compile_pattern(&expected, ignore_case, trim)?),
                    _ => None,
                };
                PropertyPredicate::String(StringPredicate {
                    expected,
                    match_type,
                    ignore_case,
                    trim,
                    negate: reader.bool(NOT)?,
                    pattern,
                })
            }
            ValueKind::Integer => PropertyPredicate::Integer(NumberPredicate {
                expected: reader.having_value(0_i32)?,
                match_type: reader.match_type()?,
                negate: reader.bool(NOT)?,
            }),
            ValueKind::Long => PropertyPredicate::Long(NumberPredicate {
                expected: reader.having_value(0_i64)?,
                match_type: reader.match_type()?,
                negate: reader.bool(NOT)?,
            }),
            ValueKind::Float => PropertyPredicate::Float(FloatPredicate {
                expected: reader.having_value(0.0_f32)?,
                match_type: reader.match_type()?,
                negate: reader.bool(NOT)?,
            }),
            ValueKind::Double => PropertyPredicate::Double(FloatPredicate {
                expected: reader.having_value(0.0_f64)?,
                match_type: reader.match_type()?,
                negate: reader.bool(NOT)?,
            }),
            ValueKind::Duration => {
                let literal: String = reader.having_value("0ms".to_string())?;
                let expected = parse_duration(&literal).map_err(|e| reader.invalid(HAVING_VALUE, e))?;
                PropertyPredicate::Duration(DurationPredicate {
                    expected,
                    match_type: reader.match_type()?,
                    negate: reader.bool(NOT)?,
                })
            }
            ValueKind::Enum => {
                let enum_type = self.enum_type(reader)?;
                let token: String = reader.required(HAVING_VALUE)?;
                let expected = enum_type
                    .value_of(&token)
                    .map_err(|e| reader.invalid(HAVING_VALUE, e))?;
                PropertyPredicate::Enum(EnumPredicate { enum_type, expected })
            }
            ValueKind::Collection => {
                let size = reader.optional::<i64>(SIZE)?.unwrap_or(-1);
                PropertyPredicate::Collection(CollectionPredicate {
                    expected: reader.having_value(Vec::new())?,
                    match_type: reader.match_type()?,
                    size: usize::try_from(size).ok(),
                    negate: reader.bool(NOT)?,
                })
            }
        };
        Ok(predicate)
    }

    /// `enumType` is either the name of a registered type or an inline member list
    fn enum_type(&self, reader: &AttributeReader<'_>) -> Result<Arc<EnumType>> {
        match reader.declaration.get(ENUM_TYPE) {
            None => Err(reader.missing(ENUM_TYPE)),
            Some(Value::String(name)) => self
                .enums
                .get(name)
                .ok_or_else(|| ConfigurationError::UnknownEnumType(name.clone())),
            Some(members @ Value::Array(_)) => {
                let members = Vec::<String>::from_value(members).map_err(|e| reader.invalid(ENUM_TYPE, e))?;
                Ok(Arc::new(EnumType::new(reader.condition, members)))
            }
            Some(other) => Err(reader.invalid(
                ENUM_TYPE,
                format!("expected enum name or member list, found {}", other.type_name()),
            )),
        }
    }
}

/// Trim and terminate a non-empty prefix with the separator
pub fn normalize_prefix(prefix: &str) -> String {
    let mut prefix = prefix.trim().to_string();
    if !prefix.is_empty() && !prefix.ends_with(PREFIX_SEPARATOR) {
        prefix.push(PREFIX_SEPARATOR);
    }
    prefix
}

/// Typed access to declaration attributes, reporting errors against a condition
struct AttributeReader<'a> {
    condition: &'static str,
    declaration: &'a Declaration,
}

impl<'a> AttributeReader<'a> {
    fn new(condition: &'static str, declaration: &'a Declaration) -> Self {
        Self {
            condition,
            declaration,
        }
    }

    fn invalid(&self, attribute: &str, reason: impl ToString) -> ConfigurationError {
        ConfigurationError::InvalidAttribute {
            condition: self.condition.to_string(),
            attribute: attribute.to_string(),
            reason: reason.to_string(),
        }
    }

    fn missing(&self, attribute: &str) -> ConfigurationError {
        ConfigurationError::MissingAttribute {
            condition: self.condition.to_string(),
            attribute: attribute.to_string(),
        }
    }

    fn check_recognized(&self, kind: ValueKind) -> Result<()> {
        let extras: &[&str] = match kind {
            ValueKind::String => &[IGNORE_CASE, TRIM],
            ValueKind::Enum => &[ENUM_TYPE],
            ValueKind::Collection => &[SIZE],
            _ => &[],
        };
        for name in self.declaration.attribute_names() {
            let recognized = COMMON_ATTRIBUTES.contains(&name.as_str())
                || extras.contains(&name.as_str())
                || (kind.supports_negation() && MATCHING_ATTRIBUTES.contains(&name.as_str()));
            if !recognized {
                return Err(self.invalid(&name, format!("not supported by {}", self.condition)));
            }
        }
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        let value = self.string_array(VALUE)?;
        let name = self.string_array(NAME)?;
        if value.is_empty() && name.is_empty() {
            return Err(ConfigurationError::NameOrValueRequired {
                condition: self.condition.to_string(),
            });
        }
        if !value.is_empty() && !name.is_empty() {
            return Err(ConfigurationError::NameAndValueExclusive {
                condition: self.condition.to_string(),
            });
        }
        Ok(if value.is_empty() { name } else { value })
    }

    fn string_array(&self, attribute: &str) -> Result<Vec<String>> {
        match self.declaration.get(attribute) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(single)) => Ok(vec![single.clone()]),
            Some(value @ Value::Array(_)) => {
                Vec::<String>::from_value(value).map_err(|e| self.invalid(attribute, e))
            }
            Some(other) => Err(self.invalid(
                attribute,
                format!("expected string or string array, found {}", other.type_name()),
            )),
        }
    }

    fn string(&self, attribute: &str) -> Result<Option<String>> {
        match self.declaration.get(attribute) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.invalid(attribute, format!("expected string, found {}", other.type_name()))),
        }
    }

    fn bool(&self, attribute: &str) -> Result<bool> {
        match self.declaration.get(attribute) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.invalid(attribute, format!("expected boolean, found {}", other.type_name()))),
        }
    }

    fn optional<T: FromValue>(&self, attribute: &str) -> Result<Option<T>> {
        match self.declaration.get(attribute) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value).map(Some).map_err(|e| self.invalid(attribute, e)),
        }
    }

    fn required<T: FromValue>(&self, attribute: &str) -> Result<T> {
        self.optional(attribute)?.ok_or_else(|| self.missing(attribute))
    }

    fn having_value<T: FromValue>(&self, default: T) -> Result<T> {
        Ok(self.optional(HAVING_VALUE)?.unwrap_or(default))
    }

    fn match_type<T>(&self) -> Result<T>
    where
        T: FromStr<Err = UnknownMatchType> + Default,
    {
        match self.string(MATCH_TYPE)? {
            None => Ok(T::default()),
            Some(token) => token.parse().map_err(|_| ConfigurationError::UnknownMatchType {
                condition: self.condition.to_string(),
                token,
            }),
        }
    }

    fn compile_pattern(&self, expected: &str, ignore_case: bool, trim: bool) -> Result<regex::Regex> {
        let pattern = if trim { expected.trim() } else { expected };
        RegexBuilder::new(&format!("^(?:{})$", pattern))
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| self.invalid(HAVING_VALUE, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionMatch, NumberMatch, OrderingMatch};
    use chrono::Duration;

    fn named(name: &str) -> Declaration {
        Declaration::new().with(NAME, vec![name])
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(normalize_prefix("  app "), "app.");
        assert_eq!(normalize_prefix("app."), "app.");
        assert_eq!(normalize_prefix("   "), "");
        assert_eq!(normalize_prefix(""), "");
    }

    #[test]
    fn test_value_takes_precedence_slot() {
        let declaration = Declaration::new().with(VALUE, vec!["a", "b"]).with(PREFIX, "app");
        let spec = SpecParser::new().parse(ValueKind::String, &declaration).unwrap();
        assert_eq!(spec.names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(spec.prefix(), "app.");
        assert_eq!(spec.key("a"), "app.a");
    }

    #[test]
    fn test_single_string_name() {
        let declaration = Declaration::new().with(NAME, "enabled");
        let spec = SpecParser::new().parse(ValueKind::String, &declaration).unwrap();
        assert_eq!(spec.names(), &["enabled".to_string()]);
    }

    #[test]
    fn test_name_and_value_required() {
        let err = SpecParser::new()
            .parse(ValueKind::Integer, &Declaration::new())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NameOrValueRequired { .. }));

        let empty_lists = Declaration::new()
            .with(NAME, Value::Array(vec![]))
            .with(VALUE, Value::Array(vec![]));
        assert!(matches!(
            SpecParser::new().parse(ValueKind::Integer, &empty_lists),
            Err(ConfigurationError::NameOrValueRequired { .. })
        ));
    }

    #[test]
    fn test_name_and_value_exclusive() {
        let declaration = Declaration::new().with(NAME, vec!["a"]).with(VALUE, vec!["b"]);
        let err = SpecParser::new().parse(ValueKind::Long, &declaration).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The name and value attributes of OnLongProperty are exclusive"
        );
    }

    #[test]
    fn test_defaults() {
        let spec = SpecParser::new().parse(ValueKind::Integer, &named("count")).unwrap();
        assert!(!spec.match_if_missing());
        match spec.predicate() {
            PropertyPredicate::Integer(p) => {
                assert_eq!(p.expected, 0);
                assert_eq!(p.match_type, NumberMatch::Equals);
                assert!(!p.negate);
            }
            other => panic!("unexpected predicate {:?}", other),
        }
    }

    #[test]
    fn test_integer_range_is_checked_eagerly() {
        let declaration = named("count").with(HAVING_VALUE, i64::from(i32::MAX) + 1);
        assert!(matches!(
            SpecParser::new().parse(ValueKind::Integer, &declaration),
            Err(ConfigurationError::InvalidAttribute { .. })
        ));
        assert!(SpecParser::new().parse(ValueKind::Long, &declaration).is_ok());
    }

    #[test]
    fn test_duration_parsed_at_construction() {
        let declaration = named("timeout")
            .with(HAVING_VALUE, "500ms")
            .with(MATCH_TYPE, "GREATER_THAN");
        let spec = SpecParser::new().parse(ValueKind::Duration, &declaration).unwrap();
        match spec.predicate() {
            PropertyPredicate::Duration(p) => {
                assert_eq!(p.expected, Duration::milliseconds(500));
                assert_eq!(p.match_type, OrderingMatch::GreaterThan);
            }
            other => panic!("unexpected predicate {:?}", other),
        }

        let bad = named("timeout").with(HAVING_VALUE, "soon");
        assert!(SpecParser::new().parse(ValueKind::Duration, &bad).is_err());
    }

    #[test]
    fn test_default_duration_is_zero() {
        let spec = SpecParser::new().parse(ValueKind::Duration, &named("timeout")).unwrap();
        assert_eq!(spec.predicate().expected_display(), Duration::zero().to_string());
    }

    #[test]
    fn test_unknown_match_type() {
        let declaration = named("ratio").with(MATCH_TYPE, "POSITIVE");
        let err = SpecParser::new().parse(ValueKind::Double, &declaration).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownMatchType {
                condition: "OnDoubleProperty".to_string(),
                token: "POSITIVE".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_attribute_shape() {
        let declaration = named("count").with(NOT, "yes");
        assert!(matches!(
            SpecParser::new().parse(ValueKind::Integer, &declaration),
            Err(ConfigurationError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_unrecognized_attribute() {
        let declaration = named("count").with(SIZE, 2);
        assert!(SpecParser::new().parse(ValueKind::Integer, &declaration).is_err());
        assert!(SpecParser::new().parse(ValueKind::Collection, &declaration).is_ok());
    }

    #[test]
    fn test_enum_rejects_negation() {
        let declaration = named("env")
            .with(ENUM_TYPE, vec!["DEV", "PROD"])
            .with(HAVING_VALUE, "dev")
            .with(NOT, true);
        assert!(SpecParser::new().parse(ValueKind::Enum, &declaration).is_err());
    }

    #[test]
    fn test_enum_resolution() {
        let parser = SpecParser::with_enums(
            EnumRegistry::new().with(EnumType::new("Environment", ["DEV", "PROD"])),
        );
        let declaration = named("env")
            .with(ENUM_TYPE, "Environment")
            .with(HAVING_VALUE, "prod");
        let spec = parser.parse(ValueKind::Enum, &declaration).unwrap();
        assert_eq!(spec.to_string(), "(env=PROD)");

        let unknown_member = named("env").with(ENUM_TYPE, "Environment").with(HAVING_VALUE, "qa");
        assert!(parser.parse(ValueKind::Enum, &unknown_member).is_err());

        let unknown_type = named("env").with(ENUM_TYPE, "Region").with(HAVING_VALUE, "eu");
        assert_eq!(
            parser.parse(ValueKind::Enum, &unknown_type).unwrap_err(),
            ConfigurationError::UnknownEnumType("Region".to_string())
        );

        let no_value = named("env").with(ENUM_TYPE, "Environment");
        assert!(matches!(
            parser.parse(ValueKind::Enum, &no_value),
            Err(ConfigurationError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_collection_size_and_values() {
        let declaration = named("tags")
            .with(HAVING_VALUE, vec!["a", "b"])
            .with(SIZE, 3)
            .with(MATCH_TYPE, "CONTAINS_ALL");
        let spec = SpecParser::new().parse(ValueKind::Collection, &declaration).unwrap();
        match spec.predicate() {
            PropertyPredicate::Collection(p) => {
                assert_eq!(p.expected, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(p.size, Some(3));
                assert_eq!(p.match_type, CollectionMatch::ContainsAll);
            }
            other => panic!("unexpected predicate {:?}", other),
        }

        let no_size = named("tags").with(SIZE, -1);
        match SpecParser::new().parse(ValueKind::Collection, &no_size).unwrap().predicate() {
            PropertyPredicate::Collection(p) => assert_eq!(p.size, None),
            other => panic!("unexpected predicate {:?}", other),
        }
    }

    #[test]
    fn test_regex_compiled_eagerly() {
        let declaration = named("name").with(HAVING_VALUE, "demo-(").with(MATCH_TYPE, "MATCHES");
        assert!(SpecParser::new().parse(ValueKind::String, &declaration).is_err());

        let valid = named("name").with(HAVING_VALUE, r"demo-\d+").with(MATCH_TYPE, "MATCHES");
        let spec = SpecParser::new().parse(ValueKind::String, &valid).unwrap();
        match spec.predicate() {
            PropertyPredicate::String(p) => {
                let pattern = p.pattern().unwrap();
                assert!(pattern.is_match("demo-123"));
                assert!(!pattern.is_match("xdemo-123"));
            }
            other => panic!("unexpected predicate {:?}", other),
        }
    }

    #[test]
    fn test_display_multiple_names() {
        let declaration = Declaration::new()
            .with(PREFIX, "app")
            .with(NAME, vec!["one", "two"])
            .with(HAVING_VALUE, "yes");
        let spec = SpecParser::new().parse(ValueKind::String, &declaration).unwrap();
        assert_eq!(spec.to_string(), "(app.[one, two]=yes)");
    }

    #[test]
    fn test_parse_all_fails_fast() {
        let declarations = vec![named("a"), Declaration::new(), named("b")];
        assert!(SpecParser::new().parse_all(ValueKind::Integer, &declarations).is_err());
    }
}
