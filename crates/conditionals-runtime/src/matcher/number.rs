//! Integer and long comparison

use conditionals_core::condition::NumberPredicate;
use conditionals_core::types::NumberMatch;

/// Compare an integral property against the predicate.
///
/// `POSITIVE` and `NEGATIVE` compare against zero and ignore the expected value.
pub(crate) fn matches<T>(predicate: &NumberPredicate<T>, actual: T) -> bool
where
    T: Ord + Copy + Default,
{
    let expected = predicate.expected;
    let zero = T::default();

    let result = match predicate.match_type {
        NumberMatch::Equals => actual == expected,
        NumberMatch::Positive => actual > zero,
        NumberMatch::Negative => actual < zero,
        NumberMatch::GreaterThan => actual > expected,
        NumberMatch::LessThan => actual < expected,
        NumberMatch::GreaterThanOrEqual => actual >= expected,
        NumberMatch::LessThanOrEqual => actual <= expected,
    };
    result ^ predicate.negate
}
