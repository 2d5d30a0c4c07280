//! Error types for parsing and substitution

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `$` not followed by `$`, an identifier, or `{identifier}`
    #[error("invalid placeholder in template string at offset {offset}")]
    InvalidPlaceholder { offset: usize },
}

impl ParseError {
    pub fn invalid_placeholder(offset: usize) -> Self {
        Self::InvalidPlaceholder { offset }
    }

    /// Byte offset of the offending `$`
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidPlaceholder { offset } => *offset,
        }
    }

    /// Source span of the offending `$`
    pub fn span(&self) -> Span {
        let offset = self.offset();
        offset..offset + 1
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str, color: bool) -> String {
        let mut buf = Vec::new();
        // ariadne spans count characters, not bytes
        let offset = self.offset();
        let start = source
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count());
        let span = start..start + 1;
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message("expected `$$`, `$name` or `${name}`")
                    .with_color(Color::Red),
            )
            .with_help("write `$$` for a literal dollar sign")
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// A variable that neither the mapping nor the fallback could resolve
///
/// Two errors are equal when they name the same variable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("failed to substitute variable {variable}")]
pub struct SubstitutionError {
    pub variable: String,
}

impl SubstitutionError {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}
