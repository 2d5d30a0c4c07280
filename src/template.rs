//! Parsed, immutable templates

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{ParseError, SubstitutionError};
use crate::parser::{self, Segment};
use crate::renderer::{self, ResolutionConfig};

/// A template parsed once and rendered any number of times
///
/// There are no mutators, so a `Template` can be shared between threads and
/// rendered concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text
    ///
    /// # Example
    ///
    /// ```rust
    /// use pytemplate::Template;
    ///
    /// assert!(Template::parse("Hello, ${name}!").is_ok());
    /// assert!(Template::parse("trailing $").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Ok(Self {
            segments: parser::parse(source)?,
        })
    }

    /// Reconstruct a template from text produced by [`Template::to_text`]
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Self::parse(text)
    }

    /// The exact source text this template was parsed from
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            segment.write_text(&mut text);
        }
        text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Unique variable names in order of first appearance
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.segments.iter().filter_map(Segment::name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Substitute every variable
    ///
    /// Fails with the first unresolved variable unless `config.safe` is set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use pytemplate::{ResolutionConfig, Template};
    ///
    /// let template = Template::parse("Hello, $friend!").unwrap();
    /// let mapping = HashMap::from([("friend".to_string(), "World".to_string())]);
    ///
    /// let text = template
    ///     .render(&ResolutionConfig::new().with_mapping(&mapping))
    ///     .unwrap();
    /// assert_eq!(text, "Hello, World!");
    /// ```
    pub fn render(&self, config: &ResolutionConfig<'_>) -> Result<String, SubstitutionError> {
        renderer::substitute(&self.segments, config)
    }

    /// Substitute what can be resolved and leave the remaining placeholders as written
    pub fn render_safe(&self, config: &ResolutionConfig<'_>) -> String {
        renderer::substitute_safe(&self.segments, config)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_to_text_round_trip() {
        for source in [
            "",
            "plain",
            "$$",
            "a$$b$$$$c",
            "$x${y}$$z",
            "I really-really like $parameter and $$money$$!!!",
            "héllo ${name} ünïcode $$",
        ] {
            let template = Template::parse(source).unwrap();
            assert_eq!(template.to_text(), source);
        }
    }

    #[test]
    fn test_from_text_of_to_text_is_identity() {
        let template = Template::parse("x=${x}, $$y=$y").unwrap();
        assert_eq!(Template::from_text(&template.to_text()).unwrap(), template);
    }

    #[test]
    fn test_identifiers_in_first_appearance_order() {
        let template = Template::parse("$b ${a} $b $$c ${c}").unwrap();
        assert_eq!(template.identifiers(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(Template::parse("").unwrap().is_empty());
        assert_eq!(Template::parse("a $b c").unwrap().len(), 3);
    }

    #[test]
    fn test_display_and_from_str() {
        let template: Template = "cost: $$${price}".parse().unwrap();
        assert_eq!(template.to_string(), "cost: $$${price}");
    }

    #[test]
    fn test_render_safe_ignores_config_strictness() {
        let template = Template::parse("$known $unknown").unwrap();
        let map = HashMap::from([("known".to_string(), "yes".to_string())]);
        let config = ResolutionConfig::new().with_mapping(&map).with_safe(false);
        assert_eq!(template.render_safe(&config), "yes $unknown");
        assert!(template.render(&config).is_err());
    }

    #[derive(Serialize, Deserialize)]
    struct Messages {
        greeting: Template,
    }

    #[test]
    fn test_serde_as_text() {
        let messages: Messages = toml::from_str(r#"greeting = "Hi ${name}, that is $$5""#).unwrap();
        assert_eq!(messages.greeting.identifiers(), vec!["name"]);

        let text = toml::to_string(&messages).unwrap();
        assert_eq!(text.trim(), r#"greeting = "Hi ${name}, that is $$5""#);
    }

    #[test]
    fn test_deserialize_rejects_invalid_template() {
        let result: Result<Messages, _> = toml::from_str(r#"greeting = "broken ${""#);
        let err = result.err().expect("invalid template should not deserialize");
        assert!(err.to_string().contains("invalid placeholder"));
    }
}
