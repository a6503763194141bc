//! String comparison

use conditionals_core::condition::StringPredicate;
use conditionals_core::types::StringMatch;
use std::borrow::Cow;

/// Apply the predicate's `trim` and `ignoreCase` normalization
fn normalize<'a>(value: &'a str, predicate: &StringPredicate) -> Cow<'a, str> {
    let value = if predicate.trim { value.trim() } else { value };
    if predicate.ignore_case {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

pub(crate) fn matches(predicate: &StringPredicate, actual: &str) -> bool {
    let actual = normalize(actual, predicate);
    let expected = normalize(&predicate.expected, predicate);

    let result = match predicate.match_type {
        StringMatch::Equals => actual == expected,
        StringMatch::Contains => actual.contains(expected.as_ref()),
        StringMatch::StartsWith => actual.starts_with(expected.as_ref()),
        StringMatch::EndsWith => actual.ends_with(expected.as_ref()),
        StringMatch::Matches => predicate
            .pattern()
            .map(|pattern| pattern.is_match(&actual))
            .unwrap_or(false),
    };
    result ^ predicate.negate
}
