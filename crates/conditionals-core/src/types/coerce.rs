//! Value coercion into declared kinds
//!
//! Property sources hand out raw [`Value`]s. Conditions convert them into
//! their declared type through [`FromValue`]; a failed conversion is a
//! [`CoercionError`], which the evaluator reports as a non-matching key.

use super::duration::{duration_from_millis, parse_duration};
use super::value::Value;
use crate::error::CoercionError;
use chrono::Duration;

/// Conversion from a raw value into a typed property value
pub trait FromValue: Sized {
    /// Human readable name of the target type
    const TARGET: &'static str;

    fn from_value(value: &Value) -> Result<Self, CoercionError>;
}

fn unsupported<T: FromValue>(value: &Value) -> CoercionError {
    CoercionError::UnsupportedShape {
        found: value.type_name(),
        target: T::TARGET,
    }
}

/// Parse an integral literal, accepting surrounding whitespace and
/// `0x` / `#` hexadecimal prefixes.
fn parse_integral(text: &str, target: &'static str) -> Result<i128, CoercionError> {
    let invalid = || CoercionError::InvalidNumber {
        value: text.to_string(),
        target,
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (digits, radix) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (hex, 16)
    } else {
        (unsigned, 10)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid());
    }

    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn integral_from_value(value: &Value, target: &'static str) -> Result<i128, CoercionError> {
    match value {
        Value::Integer(i) => Ok(i128::from(*i)),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(*f as i128),
        Value::Float(f) => Err(CoercionError::InvalidNumber {
            value: f.to_string(),
            target,
        }),
        Value::String(s) => parse_integral(s, target),
        other => Err(CoercionError::UnsupportedShape {
            found: other.type_name(),
            target,
        }),
    }
}

impl FromValue for i32 {
    const TARGET: &'static str = "integer";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        let wide = integral_from_value(value, Self::TARGET)?;
        i32::try_from(wide).map_err(|_| CoercionError::OutOfRange {
            value: value.to_string(),
            target: Self::TARGET,
        })
    }
}

impl FromValue for i64 {
    const TARGET: &'static str = "long";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        let wide = integral_from_value(value, Self::TARGET)?;
        i64::try_from(wide).map_err(|_| CoercionError::OutOfRange {
            value: value.to_string(),
            target: Self::TARGET,
        })
    }
}

impl FromValue for f64 {
    const TARGET: &'static str = "double";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| CoercionError::InvalidNumber {
                value: s.clone(),
                target: Self::TARGET,
            }),
            other => Err(unsupported::<Self>(other)),
        }
    }
}

impl FromValue for f32 {
    const TARGET: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Float(f) => Ok(*f as f32),
            Value::Integer(i) => Ok(*i as f32),
            Value::String(s) => s.trim().parse::<f32>().map_err(|_| CoercionError::InvalidNumber {
                value: s.clone(),
                target: Self::TARGET,
            }),
            other => Err(unsupported::<Self>(other)),
        }
    }
}

impl FromValue for Duration {
    const TARGET: &'static str = "duration";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Integer(millis) => Ok(duration_from_millis(*millis)),
            Value::String(s) => Ok(parse_duration(s)?),
            other => Err(unsupported::<Self>(other)),
        }
    }
}

impl FromValue for String {
    const TARGET: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) => Ok(value.to_string()),
            other => Err(unsupported::<Self>(other)),
        }
    }
}

impl FromValue for Vec<String> {
    const TARGET: &'static str = "string collection";

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) | Value::Null => Err(unsupported::<Self>(item)),
                    scalar => String::from_value(scalar),
                })
                .collect(),
            Value::String(s) if s.is_empty() => Ok(Vec::new()),
            Value::String(s) => Ok(s.split(',').map(|part| part.trim().to_string()).collect()),
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) => Ok(vec![value.to_string()]),
            other => Err(unsupported::<Self>(other)),
        }
    }
}
