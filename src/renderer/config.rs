//! Per-call resolution configuration

use std::collections::HashMap;
use std::fmt;

use super::resolver::Resolver;

/// How variables are resolved during a single render
///
/// The mapping is always consulted before the fallback, regardless of the
/// order the builder methods were called in.
#[derive(Clone, Copy, Default)]
pub struct ResolutionConfig<'a> {
    /// Exact-match table from variable name to replacement
    pub mapping: Option<&'a HashMap<String, String>>,

    /// Consulted only when the mapping has no entry for a name
    pub fallback: Option<&'a dyn Resolver>,

    /// Leave unresolved placeholders in the output instead of failing
    pub safe: bool,
}

impl<'a> ResolutionConfig<'a> {
    /// Create a configuration that resolves nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exact-match mapping
    pub fn with_mapping(mut self, mapping: &'a HashMap<String, String>) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Set the fallback resolver
    pub fn with_fallback(mut self, fallback: &'a dyn Resolver) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Enable or disable safe substitution
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }
}

impl fmt::Debug for ResolutionConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionConfig")
            .field("mapping", &self.mapping)
            .field("fallback", &self.fallback.map(|_| "<resolver>"))
            .field("safe", &self.safe)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolutionConfig::default();
        assert!(config.mapping.is_none());
        assert!(config.fallback.is_none());
        assert!(!config.safe);
    }

    #[test]
    fn test_builder_pattern() {
        let mapping = HashMap::from([("a".to_string(), "1".to_string())]);
        let fallback = |_: &str| Some("x".to_string());
        let config = ResolutionConfig::new()
            .with_safe(true)
            .with_fallback(&fallback)
            .with_mapping(&mapping);

        assert_eq!(config.mapping, Some(&mapping));
        assert!(config.fallback.is_some());
        assert!(config.safe);
    }

    #[test]
    fn test_debug_hides_resolver() {
        let fallback = |_: &str| -> Option<String> { None };
        let config = ResolutionConfig::new().with_fallback(&fallback);
        assert!(format!("{:?}", config).contains("<resolver>"));
    }
}
