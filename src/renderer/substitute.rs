//! Substitution of parsed segments into output text

use std::borrow::Cow;

use crate::error::SubstitutionError;
use crate::parser::ast::Segment;

use super::config::ResolutionConfig;

/// Render segments in order, resolving each variable occurrence afresh
///
/// In strict mode the first unresolved variable aborts the render and no
/// partial output is returned. In safe mode it is written back in its
/// original placeholder form.
pub fn substitute(
    segments: &[Segment],
    config: &ResolutionConfig<'_>,
) -> Result<String, SubstitutionError> {
    let mut out = String::new();

    for segment in segments {
        if write_resolved(segment, config, &mut out) {
            continue;
        }
        match segment {
            Segment::Variable { name, .. } if !config.safe => {
                tracing::debug!(variable = %name, "unresolved variable");
                return Err(SubstitutionError::new(name.as_str()));
            }
            _ => write_unresolved(segment, &mut out),
        }
    }

    Ok(out)
}

/// Render segments, writing every unresolved variable back as it was written
pub fn substitute_safe(segments: &[Segment], config: &ResolutionConfig<'_>) -> String {
    let mut out = String::new();

    for segment in segments {
        if !write_resolved(segment, config, &mut out) {
            write_unresolved(segment, &mut out);
        }
    }

    out
}

/// Append a literal or a resolved variable, returning false if the variable is unresolved
fn write_resolved(segment: &Segment, config: &ResolutionConfig<'_>, out: &mut String) -> bool {
    match segment {
        Segment::Literal(text) => {
            out.push_str(text);
            true
        }
        Segment::Variable { name, .. } => match resolve(config, name) {
            Some(value) => {
                out.push_str(&value);
                true
            }
            None => false,
        },
    }
}

fn write_unresolved(segment: &Segment, out: &mut String) {
    if let Some(name) = segment.name() {
        tracing::debug!(variable = %name, "leaving placeholder unresolved");
    }
    segment.write_text(out);
}

/// Look a name up in the mapping, then the fallback
///
/// Presence in the mapping wins even when the mapped value is empty.
fn resolve<'c>(config: &ResolutionConfig<'c>, name: &str) -> Option<Cow<'c, str>> {
    if let Some(value) = config.mapping.and_then(|mapping| mapping.get(name)) {
        tracing::trace!(variable = %name, "resolved from mapping");
        return Some(Cow::Borrowed(value.as_str()));
    }

    let value = config.fallback?.resolve(name)?;
    tracing::trace!(variable = %name, "resolved from fallback");
    Some(Cow::Owned(value))
}
