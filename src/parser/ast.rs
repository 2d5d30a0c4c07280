//! Parsed template segments

use std::fmt;

use crate::parser::lexer::DELIMITER;

/// One unit of a parsed template
///
/// Literal text stores `$$` from the source as a single `$`; the doubling is
/// restored by [`Segment::write_text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text copied verbatim into rendered output
    Literal(String),
    /// A placeholder to be substituted
    Variable {
        name: String,
        /// Whether the source used `${name}` rather than `$name`
        braced: bool,
    },
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn variable(name: impl Into<String>, braced: bool) -> Self {
        Segment::Variable {
            name: name.into(),
            braced,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable { .. })
    }

    /// Variable name, or None for literal text
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Variable { name, .. } => Some(name),
            Segment::Literal(_) => None,
        }
    }

    /// Append the surface syntax this segment was parsed from
    pub fn write_text(&self, out: &mut String) {
        match self {
            Segment::Literal(text) => {
                for c in text.chars() {
                    if c == DELIMITER {
                        out.push(DELIMITER);
                    }
                    out.push(c);
                }
            }
            Segment::Variable { name, braced: true } => {
                out.push(DELIMITER);
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            Segment::Variable {
                name,
                braced: false,
            } => {
                out.push(DELIMITER);
                out.push_str(name);
            }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.write_text(&mut text);
        f.write_str(&text)
    }
}
