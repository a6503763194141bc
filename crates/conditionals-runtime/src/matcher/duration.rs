//! Duration comparison

use chrono::Duration;
use conditionals_core::condition::DurationPredicate;
use conditionals_core::types::OrderingMatch;

pub(crate) fn matches(predicate: &DurationPredicate, actual: Duration) -> bool {
    let expected = predicate.expected;
    let result = match predicate.match_type {
        OrderingMatch::Equals => actual == expected,
        OrderingMatch::GreaterThan => actual > expected,
        OrderingMatch::LessThan => actual < expected,
        OrderingMatch::GreaterThanOrEqual => actual >= expected,
        OrderingMatch::LessThanOrEqual => actual <= expected,
    };
    result ^ predicate.negate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate(millis: i64, match_type: OrderingMatch) -> DurationPredicate {
        DurationPredicate {
            expected: Duration::milliseconds(millis),
            match_type,
            negate: false,
        }
    }

    #[test]
    fn test_one_second_exceeds_half_second() {
        assert!(matches(&predicate(500, OrderingMatch::GreaterThan), Duration::seconds(1)));
        assert!(!matches(&predicate(500, OrderingMatch::LessThan), Duration::seconds(1)));
    }

    #[test]
    fn test_equal_across_units() {
        assert!(matches(&predicate(60_000, OrderingMatch::Equals), Duration::minutes(1)));
        assert!(matches(&predicate(60_000, OrderingMatch::GreaterThanOrEqual), Duration::minutes(1)));
        assert!(matches(&predicate(60_000, OrderingMatch::LessThanOrEqual), Duration::minutes(1)));
    }

    #[test]
    fn test_negative_durations_order_below_zero() {
        assert!(matches(&predicate(0, OrderingMatch::LessThan), Duration::milliseconds(-1)));
    }
}
