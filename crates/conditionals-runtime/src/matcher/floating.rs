//! Float and double comparison

use conditionals_core::condition::FloatPredicate;
use conditionals_core::types::OrderingMatch;

/// Floating point type with an equality tolerance
pub(crate) trait Tolerance: Copy + PartialOrd {
    /// Absolute difference below which two values are equal
    const PRECISION: Self;

    fn is_nan(self) -> bool;
    fn abs_diff(self, other: Self) -> Self;
}

impl Tolerance for f32 {
    const PRECISION: f32 = 0.00001;

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

impl Tolerance for f64 {
    const PRECISION: f64 = 0.000000001;

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

/// Compare a floating point property against the predicate.
///
/// NaN on either side yields `false` regardless of negation.
pub(crate) fn matches<T: Tolerance>(predicate: &FloatPredicate<T>, actual: T) -> bool {
    let expected = predicate.expected;
    if actual.is_nan() || expected.is_nan() {
        return false;
    }

    let result = match predicate.match_type {
        OrderingMatch::Equals => actual.abs_diff(expected) < T::PRECISION,
        OrderingMatch::GreaterThan => actual > expected,
        OrderingMatch::LessThan => actual < expected,
        OrderingMatch::GreaterThanOrEqual => actual >= expected,
        OrderingMatch::LessThanOrEqual => actual <= expected,
    };
    result ^ predicate.negate
}
