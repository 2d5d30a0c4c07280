//! pytemplate - shell-style `$name` / `${name}` string templates
//!
//! A template is parsed once into literal and variable segments, then
//! rendered any number of times against a [`ResolutionConfig`]: an
//! exact-match mapping, an optional fallback [`Resolver`], and a safe flag
//! that keeps unresolved placeholders instead of failing. `$$` writes a
//! literal dollar sign.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use pytemplate::{parse, ResolutionConfig};
//!
//! let template = parse("I really-really like $parameter and $$money$$!!!").unwrap();
//! let mapping = HashMap::from([("parameter".to_string(), "wealth".to_string())]);
//!
//! let text = template
//!     .render(&ResolutionConfig::new().with_mapping(&mapping))
//!     .unwrap();
//! assert_eq!(text, "I really-really like wealth and $money$!!!");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod template;
pub mod variables;

pub use error::{ParseError, SubstitutionError};
pub use parser::Segment;
pub use renderer::{EnvResolver, ResolutionConfig, Resolver};
pub use template::Template;
pub use variables::{VariableFile, VariableFileError};

use thiserror::Error;

/// Errors from one-shot parse-and-render
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("substitution error: {0}")]
    Substitution(#[from] SubstitutionError),
}

/// Parse template text
pub fn parse(text: &str) -> Result<Template, ParseError> {
    Template::parse(text)
}

/// Reconstruct a template from its text form; same as [`parse`]
pub fn from_text(text: &str) -> Result<Template, ParseError> {
    Template::from_text(text)
}

/// Whether `text` parses as a template
pub fn is_valid(text: &str) -> bool {
    parser::parse(text).is_ok()
}

/// Parse and render in one step
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use pytemplate::{substitute, Error, ResolutionConfig, SubstitutionError};
///
/// let mapping = HashMap::from([("thing".to_string(), "pokemon".to_string())]);
/// let config = ResolutionConfig::new().with_mapping(&mapping);
///
/// let err = substitute("My favorite ${thing} is ${MISSING_NO}", &config).unwrap_err();
/// assert_eq!(err, Error::Substitution(SubstitutionError::new("MISSING_NO")));
/// ```
pub fn substitute(text: &str, config: &ResolutionConfig<'_>) -> Result<String, Error> {
    let template = Template::parse(text)?;
    Ok(template.render(config)?)
}

/// Parse and render in one step, leaving unresolved placeholders in place
pub fn safe_substitute(text: &str, config: &ResolutionConfig<'_>) -> Result<String, ParseError> {
    Ok(Template::parse(text)?.render_safe(config))
}
