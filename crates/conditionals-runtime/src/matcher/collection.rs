//! String collection comparison

use conditionals_core::condition::CollectionPredicate;
use conditionals_core::types::CollectionMatch;

/// Compare a collection property against the predicate.
///
/// When a size is required and the actual length differs, the result is
/// the negation flag itself: a negated condition accepts any wrongly sized
/// collection.
pub(crate) fn matches(predicate: &CollectionPredicate, actual: &[String]) -> bool {
    if let Some(size) = predicate.size {
        if actual.len() != size {
            return predicate.negate;
        }
    }

    let expected = predicate.expected.as_slice();
    let result = match predicate.match_type {
        CollectionMatch::Equals => actual == expected,
        _ if expected.is_empty() => true,
        _ if actual.len() < expected.len() => false,
        CollectionMatch::ContainsAll => expected.iter().all(|item| actual.contains(item)),
        CollectionMatch::ContainsSequence => actual.windows(expected.len()).any(|window| window == expected),
        CollectionMatch::StartsWith => actual.starts_with(expected),
        CollectionMatch::EndsWith => actual.ends_with(expected),
    };
    result ^ predicate.negate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn predicate(expected: &[&str], match_type: CollectionMatch) -> CollectionPredicate {
        CollectionPredicate {
            expected: strings(expected),
            match_type,
            size: None,
            negate: false,
        }
    }

    #[test]
    fn test_equals_is_ordered() {
        let p = predicate(&["a", "b"], CollectionMatch::Equals);
        assert!(matches(&p, &strings(&["a", "b"])));
        assert!(!matches(&p, &strings(&["b", "a"])));
    }

    #[test]
    fn test_contains_all_ignores_order_and_duplicates() {
        let p = predicate(&["b", "a"], CollectionMatch::ContainsAll);
        assert!(matches(&p, &strings(&["a", "b", "c"])));
        assert!(!matches(&p, &strings(&["a", "c", "d"])));

        let duplicates = predicate(&["a", "a"], CollectionMatch::ContainsAll);
        assert!(matches(&duplicates, &strings(&["a", "b"])));
    }

    #[test]
    fn test_contains_sequence() {
        let p = predicate(&["b", "c"], CollectionMatch::ContainsSequence);
        assert!(matches(&p, &strings(&["a", "b", "c", "d"])));
        assert!(!matches(&p, &strings(&["b", "a", "c"])));
    }

    #[test]
    fn test_prefix_and_suffix() {
        let starts = predicate(&["a", "b"], CollectionMatch::StartsWith);
        assert!(matches(&starts, &strings(&["a", "b", "c"])));
        assert!(!matches(&starts, &strings(&["b", "a", "c"])));

        let ends = predicate(&["b", "c"], CollectionMatch::EndsWith);
        assert!(matches(&ends, &strings(&["a", "b", "c"])));
        assert!(!matches(&ends, &strings(&["a"])));
    }

    #[test]
    fn test_empty_expected_matches_non_equals_modes() {
        for match_type in [
            CollectionMatch::ContainsAll,
            CollectionMatch::ContainsSequence,
            CollectionMatch::StartsWith,
            CollectionMatch::EndsWith,
        ] {
            assert!(matches(&predicate(&[], match_type), &strings(&["x"])));
        }
        assert!(!matches(&predicate(&[], CollectionMatch::Equals), &strings(&["x"])));
        assert!(matches(&predicate(&[], CollectionMatch::Equals), &[]));
    }

    #[test]
    fn test_size_gate_returns_negate() {
        let mut p = predicate(&["a"], CollectionMatch::ContainsAll);
        p.size = Some(3);
        assert!(!matches(&p, &strings(&["a", "b"])));
        assert!(matches(&p, &strings(&["a", "b", "c"])));

        p.negate = true;
        assert!(matches(&p, &strings(&["a", "b"])));
        assert!(!matches(&p, &strings(&["a", "b", "c"])));
    }
}
