//! Ordered chain of property sources

use super::PropertyResolver;
use conditionals_core::Value;

/// Resolves a key against each source in order; the first source that
/// contains the key wins.
#[derive(Default)]
pub struct CompositePropertyResolver {
    sources: Vec<Box<dyn PropertyResolver>>,
}

impl CompositePropertyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than the existing ones
    pub fn with_source(mut self, source: impl PropertyResolver + 'static) -> Self {
        self.add_source(source);
        self
    }

    pub fn add_source(&mut self, source: impl PropertyResolver + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl PropertyResolver for CompositePropertyResolver {
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.sources.iter().find_map(|source| source.get_property(key))
    }

    fn contains_property(&self, key: &str) -> bool {
        self.sources.iter().any(|source| source.contains_property(key))
    }
}

impl std::fmt::Debug for CompositePropertyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositePropertyResolver")
            .field("sources", &self.sources.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapPropertySource;

    #[test]
    fn test_first_source_wins() {
        let resolver = CompositePropertyResolver::new()
            .with_source(MapPropertySource::new("overrides").with_property("app.count", 7))
            .with_source(
                MapPropertySource::new("defaults")
                    .with_property("app.count", 5)
                    .with_property("app.name", "demo"),
            );

        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.get_property("app.count"), Some(&Value::Integer(7)));
        assert_eq!(resolver.get_property("app.name"), Some(&Value::from("demo")));
        assert!(!resolver.contains_property("app.missing"));
    }

    #[test]
    fn test_empty_composite() {
        let resolver = CompositePropertyResolver::new();
        assert!(resolver.is_empty());
        assert!(resolver.get_property("anything").is_none());
    }
}
