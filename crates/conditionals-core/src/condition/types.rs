//! Parsed condition specifications

use super::enums::EnumType;
use crate::types::{CollectionMatch, NumberMatch, OrderingMatch, StringMatch, ValueKind};
use chrono::Duration;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Separator appended to a non-empty prefix
pub const PREFIX_SEPARATOR: char = '.';

/// One parsed, immutable condition declaration
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub(crate) prefix: String,
    pub(crate) names: Vec<String>,
    pub(crate) predicate: PropertyPredicate,
    pub(crate) match_if_missing: bool,
}

impl PropertySpec {
    /// Empty, or ending with [`PREFIX_SEPARATOR`]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Property names relative to the prefix; never empty
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn predicate(&self) -> &PropertyPredicate {
        &self.predicate
    }

    pub fn match_if_missing(&self) -> bool {
        self.match_if_missing
    }

    pub fn kind(&self) -> ValueKind {
        self.predicate.kind()
    }

    /// Full configuration key for `name`
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl fmt::Display for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.prefix)?;
        if let [single] = self.names.as_slice() {
            write!(f, "{}", single)?;
        } else {
            write!(f, "[{}]", self.names.join(", "))?;
        }
        write!(f, "={})", self.predicate.expected_display())
    }
}

/// Kind-specific comparison: expected value, mode and flags
#[derive(Debug, Clone)]
pub enum PropertyPredicate {
    String(StringPredicate),
    Integer(NumberPredicate<i32>),
    Long(NumberPredicate<i64>),
    Float(FloatPredicate<f32>),
    Double(FloatPredicate<f64>),
    Duration(DurationPredicate),
    Enum(EnumPredicate),
    Collection(CollectionPredicate),
}

impl PropertyPredicate {
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyPredicate::String(_) => ValueKind::String,
            PropertyPredicate::Integer(_) => ValueKind::Integer,
            PropertyPredicate::Long(_) => ValueKind::Long,
            PropertyPredicate::Float(_) => ValueKind::Float,
            PropertyPredicate::Double(_) => ValueKind::Double,
            PropertyPredicate::Duration(_) => ValueKind::Duration,
            PropertyPredicate::Enum(_) => ValueKind::Enum,
            PropertyPredicate::Collection(_) => ValueKind::Collection,
        }
    }

    /// Negation flag; always false for enum predicates
    pub fn negate(&self) -> bool {
        match self {
            PropertyPredicate::String(p) => p.negate,
            PropertyPredicate::Integer(p) => p.negate,
            PropertyPredicate::Long(p) => p.negate,
            PropertyPredicate::Float(p) => p.negate,
            PropertyPredicate::Double(p) => p.negate,
            PropertyPredicate::Duration(p) => p.negate,
            PropertyPredicate::Enum(_) => false,
            PropertyPredicate::Collection(p) => p.negate,
        }
    }

    /// Expected value as shown in messages
    pub fn expected_display(&self) -> String {
        match self {
            PropertyPredicate::String(p) => p.expected.clone(),
            PropertyPredicate::Integer(p) => p.expected.to_string(),
            PropertyPredicate::Long(p) => p.expected.to_string(),
            PropertyPredicate::Float(p) => p.expected.to_string(),
            PropertyPredicate::Double(p) => p.expected.to_string(),
            PropertyPredicate::Duration(p) => p.expected.to_string(),
            PropertyPredicate::Enum(p) => p.expected_name().to_string(),
            PropertyPredicate::Collection(p) => format!("[{}]", p.expected.join(", ")),
        }
    }
}

/// String comparison
#[derive(Debug, Clone)]
pub struct StringPredicate {
    pub expected: String,
    pub match_type: StringMatch,
    pub ignore_case: bool,
    pub trim: bool,
    pub negate: bool,
    /// Anchored pattern, compiled when `match_type` is `Matches`
    pub(crate) pattern: Option<Regex>,
}

impl StringPredicate {
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

/// Integer or long comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPredicate<T> {
    pub expected: T,
    pub match_type: NumberMatch,
    pub negate: bool,
}

/// Float or double comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPredicate<T> {
    pub expected: T,
    pub match_type: OrderingMatch,
    pub negate: bool,
}

/// Duration comparison; the expected literal is parsed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPredicate {
    pub expected: Duration,
    pub match_type: OrderingMatch,
    pub negate: bool,
}

/// Enum member identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumPredicate {
    pub enum_type: Arc<EnumType>,
    /// Index of the expected member in `enum_type`
    pub expected: usize,
}

impl EnumPredicate {
    pub fn expected_name(&self) -> &str {
        self.enum_type.member(self.expected).unwrap_or_default()
    }
}

/// String collection comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPredicate {
    pub expected: Vec<String>,
    pub match_type: CollectionMatch,
    /// Required element count; `None` disables the size gate
    pub size: Option<usize>,
    pub negate: bool,
}
