//! Fallback resolvers consulted when the mapping has no entry

/// Resolves a variable name to its replacement text
///
/// Returning `None` means the name is unknown to this resolver.
pub trait Resolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Resolves variables from the process environment
///
/// With a prefix, `$HOME` looks up `<prefix>HOME`.
#[derive(Debug, Clone, Default)]
pub struct EnvResolver {
    prefix: Option<String>,
}

impl EnvResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn key(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

impl Resolver for EnvResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        std::env::var(self.key(name)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let upper = |name: &str| Some(name.to_uppercase());
        assert_eq!(upper.resolve("abc"), Some("ABC".to_string()));
    }

    #[test]
    fn test_env_resolver_uses_prefix() {
        let resolver = EnvResolver::with_prefix("PYTEMPLATE_TEST_");
        assert_eq!(resolver.key("HOME"), "PYTEMPLATE_TEST_HOME");
        assert_eq!(EnvResolver::new().key("HOME"), "HOME");
    }

    #[test]
    fn test_env_resolver_finds_set_variable() {
        std::env::set_var("PYTEMPLATE_RESOLVER_TEST_GREETING", "hello");
        let resolver = EnvResolver::with_prefix("PYTEMPLATE_RESOLVER_TEST_");
        assert_eq!(resolver.resolve("GREETING"), Some("hello".to_string()));
        assert_eq!(
            EnvResolver::new().resolve("PYTEMPLATE_RESOLVER_TEST_GREETING"),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_env_resolver_missing_variable() {
        let resolver = EnvResolver::with_prefix("PYTEMPLATE_SURELY_UNSET_");
        assert_eq!(resolver.resolve("NOTHING_HERE"), None);
    }
}
