//! Value kinds and per-kind match types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declared type a condition coerces property values into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Duration,
    Enum,
    #[serde(alias = "string_collection")]
    Collection,
}

impl ValueKind {
    /// All kinds, in declaration order
    pub const ALL: [ValueKind; 8] = [
        ValueKind::String,
        ValueKind::Integer,
        ValueKind::Long,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::Duration,
        ValueKind::Enum,
        ValueKind::Collection,
    ];

    /// Name used to identify the condition in messages and errors
    pub fn condition_name(&self) -> &'static str {
        match self {
            ValueKind::String => "OnStringProperty",
            ValueKind::Integer => "OnIntegerProperty",
            ValueKind::Long => "OnLongProperty",
            ValueKind::Float => "OnFloatProperty",
            ValueKind::Double => "OnDoubleProperty",
            ValueKind::Duration => "OnDurationProperty",
            ValueKind::Enum => "OnEnumProperty",
            ValueKind::Collection => "OnCollectionProperty",
        }
    }

    /// Returns true if declarations of this kind accept `not` and `matchType`
    pub fn supports_negation(&self) -> bool {
        !matches!(self, ValueKind::Enum)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Duration => "duration",
            ValueKind::Enum => "enum",
            ValueKind::Collection => "collection",
        };
        f.write_str(name)
    }
}

/// Unrecognized match type token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMatchType(pub String);

impl fmt::Display for UnknownMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match type '{}'", self.0)
    }
}

impl std::error::Error for UnknownMatchType {}

/// Tokens are matched case-insensitively with `-` and `_` treated alike.
fn normalize_token(token: &str) -> String {
    token.trim().to_ascii_uppercase().replace('-', "_")
}

/// String comparison modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StringMatch {
    #[default]
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    /// Whole-value regular expression match
    Matches,
}

impl FromStr for StringMatch {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "EQUALS" => Ok(StringMatch::Equals),
            "CONTAINS" => Ok(StringMatch::Contains),
            "STARTS_WITH" => Ok(StringMatch::StartsWith),
            "ENDS_WITH" => Ok(StringMatch::EndsWith),
            "MATCHES" => Ok(StringMatch::Matches),
            _ => Err(UnknownMatchType(s.to_string())),
        }
    }
}

/// Integer and long comparison modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberMatch {
    #[default]
    Equals,
    /// Property is strictly greater than zero; the expected value is ignored
    Positive,
    /// Property is strictly less than zero; the expected value is ignored
    Negative,
    GreaterThan,
    LessThan,
    #[serde(alias = "GREATER_OR_EQUAL")]
    GreaterThanOrEqual,
    #[serde(alias = "LESS_OR_EQUAL")]
    LessThanOrEqual,
}

impl FromStr for NumberMatch {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "POSITIVE" => Ok(NumberMatch::Positive),
            "NEGATIVE" => Ok(NumberMatch::Negative),
            other => OrderingMatch::from_token(other)
                .map(NumberMatch::from)
                .ok_or_else(|| UnknownMatchType(s.to_string())),
        }
    }
}

impl From<OrderingMatch> for NumberMatch {
    fn from(value: OrderingMatch) -> Self {
        match value {
            OrderingMatch::Equals => NumberMatch::Equals,
            OrderingMatch::GreaterThan => NumberMatch::GreaterThan,
            OrderingMatch::LessThan => NumberMatch::LessThan,
            OrderingMatch::GreaterThanOrEqual => NumberMatch::GreaterThanOrEqual,
            OrderingMatch::LessThanOrEqual => NumberMatch::LessThanOrEqual,
        }
    }
}

/// Comparison modes for float, double and duration conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderingMatch {
    #[default]
    Equals,
    GreaterThan,
    LessThan,
    #[serde(alias = "GREATER_OR_EQUAL")]
    GreaterThanOrEqual,
    #[serde(alias = "LESS_OR_EQUAL")]
    LessThanOrEqual,
}

impl OrderingMatch {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "EQUALS" => Some(OrderingMatch::Equals),
            "GREATER_THAN" => Some(OrderingMatch::GreaterThan),
            "LESS_THAN" => Some(OrderingMatch::LessThan),
            "GREATER_THAN_OR_EQUAL" | "GREATER_OR_EQUAL" => Some(OrderingMatch::GreaterThanOrEqual),
            "LESS_THAN_OR_EQUAL" | "LESS_OR_EQUAL" => Some(OrderingMatch::LessThanOrEqual),
            _ => None,
        }
    }
}

impl FromStr for OrderingMatch {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderingMatch::from_token(&normalize_token(s)).ok_or_else(|| UnknownMatchType(s.to_string()))
    }
}

/// String collection comparison modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionMatch {
    /// Element-wise, order-sensitive equality
    #[default]
    Equals,
    /// Every expected element occurs somewhere in the property
    ContainsAll,
    /// Expected elements occur as one contiguous run
    ContainsSequence,
    StartsWith,
    EndsWith,
}

impl FromStr for CollectionMatch {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "EQUALS" => Ok(CollectionMatch::Equals),
            "CONTAINS_ALL" => Ok(CollectionMatch::ContainsAll),
            "CONTAINS_SEQUENCE" => Ok(CollectionMatch::ContainsSequence),
            "STARTS_WITH" => Ok(CollectionMatch::StartsWith),
            "ENDS_WITH" => Ok(CollectionMatch::EndsWith),
            _ => Err(UnknownMatchType(s.to_string())),
        }
    }
}
