//! Enum member comparison

use conditionals_core::condition::EnumPredicate;
use conditionals_core::CoercionError;

/// Resolve `actual` against the predicate's enum and compare identities.
///
/// An unknown member is a coercion failure, not a plain mismatch.
pub(crate) fn matches(predicate: &EnumPredicate, actual: &str) -> Result<bool, CoercionError> {
    let member = predicate.enum_type.value_of(actual)?;
    Ok(member == predicate.expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conditionals_core::EnumType;
    use std::sync::Arc;

    fn predicate(expected: &str) -> EnumPredicate {
        let enum_type = Arc::new(EnumType::new("Environment", ["DEV", "PROD"]));
        let expected = enum_type.value_of(expected).unwrap();
        EnumPredicate { enum_type, expected }
    }

    #[test]
    fn test_case_insensitive_identity() {
        assert_eq!(matches(&predicate("DEV"), "dev"), Ok(true));
        assert_eq!(matches(&predicate("dev"), "Dev"), Ok(true));
        assert_eq!(matches(&predicate("DEV"), "prod"), Ok(false));
    }

    #[test]
    fn test_unknown_member_is_coercion_failure() {
        assert!(matches(&predicate("DEV"), "unknown").is_err());
    }
}
