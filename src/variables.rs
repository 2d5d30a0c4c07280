//! Variable files for supplying substitution values
//!
//! A variable file is a TOML document with a `[vars]` table. Values may be
//! strings, numbers, booleans or datetimes; non-string scalars are rendered
//! with their TOML display form.
//!
//! ```toml
//! [metadata]
//! name = "greetings"
//!
//! [vars]
//! friend = "World"
//! retries = 3
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::Resolver;

/// Errors that can occur when loading or parsing variable files
#[derive(Error, Debug)]
pub enum VariableFileError {
    #[error("Failed to read variable file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse variable file TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Variable '{name}' has unsupported {kind} value; expected a string, number, boolean or datetime")]
    UnsupportedValue { name: String, kind: &'static str },
}

/// A set of named substitution values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableFile {
    /// Optional name for the variable set
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Variable name -> replacement text
    pub vars: HashMap<String, String>,
}

/// TOML structure for deserializing variable files
#[derive(Deserialize)]
struct TomlVariableFile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    vars: HashMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

fn value_to_string(name: &str, value: toml::Value) -> Result<String, VariableFileError> {
    match value {
        toml::Value::String(s) => Ok(s),
        scalar @ (toml::Value::Integer(_)
        | toml::Value::Float(_)
        | toml::Value::Boolean(_)
        | toml::Value::Datetime(_)) => Ok(scalar.to_string()),
        other => Err(VariableFileError::UnsupportedValue {
            name: name.to_string(),
            kind: other.type_str(),
        }),
    }
}

impl VariableFile {
    /// Load variables from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, VariableFileError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Look up a single variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Add or replace a variable, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }
}

impl FromStr for VariableFile {
    type Err = VariableFileError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlVariableFile = toml::from_str(content)?;

        let vars = parsed
            .vars
            .into_iter()
            .map(|(name, value)| {
                let text = value_to_string(&name, value)?;
                Ok((name, text))
            })
            .collect::<Result<HashMap<_, _>, VariableFileError>>()?;

        tracing::debug!(count = vars.len(), "loaded variables");

        Ok(VariableFile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            vars,
        })
    }
}

impl Resolver for VariableFile {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}
