//! Per-kind comparison of a resolved property against its predicate
//!
//! Each kind coerces the raw property value first. A value that cannot be
//! coerced is reported as [`CoercionError`]; callers treat it as a non-match
//! whatever the negation flag says.

mod collection;
mod duration;
mod enumeration;
mod floating;
mod number;
mod string;

use conditionals_core::types::FromValue;
use conditionals_core::{CoercionError, PropertyPredicate, Value};

/// Evaluate `predicate` against one property value
pub fn matches(predicate: &PropertyPredicate, actual: &Value) -> Result<bool, CoercionError> {
    let matched = match predicate {
        PropertyPredicate::String(p) => string::matches(p, &String::from_value(actual)?),
        PropertyPredicate::Integer(p) => number::matches(p, i32::from_value(actual)?),
        PropertyPredicate::Long(p) => number::matches(p, i64::from_value(actual)?),
        PropertyPredicate::Float(p) => floating::matches(p, f32::from_value(actual)?),
        PropertyPredicate::Double(p) => floating::matches(p, f64::from_value(actual)?),
        PropertyPredicate::Duration(p) => duration::matches(p, chrono::Duration::from_value(actual)?),
        PropertyPredicate::Enum(p) => enumeration::matches(p, &String::from_value(actual)?)?,
        PropertyPredicate::Collection(p) => collection::matches(p, &Vec::<String>::from_value(actual)?),
    };
    Ok(matched)
}
