//! Folds the token stream into segments

use crate::error::ParseError;
use crate::parser::ast::Segment;
use crate::parser::lexer::{lex, Placeholder, Token, DELIMITER};

/// Parse template text into its ordered segments
///
/// An escape closes the pending literal with a single `$`, so `a$$b` yields
/// two literals, `a$` and `b`. Fails on the first invalid placeholder.
pub fn parse(input: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut literal = String::new();

    for (token, span) in lex(input) {
        match token {
            Token::Text => literal.push_str(&input[span]),
            Token::Placeholder(Placeholder::Escape) => {
                literal.push(DELIMITER);
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            Token::Placeholder(Placeholder::Bare(name)) => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::variable(name, false));
            }
            Token::Placeholder(Placeholder::Braced(name)) => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::variable(name, true));
            }
            Token::Placeholder(Placeholder::Invalid) => {
                tracing::debug!(offset = span.start, "invalid placeholder");
                return Err(ParseError::invalid_placeholder(span.start));
            }
        }
    }
    flush(&mut segments, &mut literal);

    tracing::trace!(segments = segments.len(), "parsed template");
    Ok(segments)
}

fn flush(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_all_literal() {
        assert_eq!(
            parse("no placeholders here").unwrap(),
            vec![Segment::literal("no placeholders here")]
        );
    }

    #[test]
    fn test_parse_bare_and_braced() {
        assert_eq!(
            parse("Hi $name, ${greeting}!").unwrap(),
            vec![
                Segment::literal("Hi "),
                Segment::variable("name", false),
                Segment::literal(", "),
                Segment::variable("greeting", true),
                Segment::literal("!"),
            ]
        );
    }

    #[test]
    fn test_escape_closes_literal() {
        assert_eq!(
            parse("a$$b").unwrap(),
            vec![Segment::literal("a$"), Segment::literal("b")]
        );
        assert_eq!(
            parse("$$$$").unwrap(),
            vec![Segment::literal("$"), Segment::literal("$")]
        );
    }

    #[test]
    fn test_escape_before_identifier_is_literal() {
        assert_eq!(
            parse("$$money$$").unwrap(),
            vec![Segment::literal("$"), Segment::literal("money$")]
        );
    }

    #[test]
    fn test_adjacent_variables() {
        assert_eq!(
            parse("$a${b}$c").unwrap(),
            vec![
                Segment::variable("a", false),
                Segment::variable("b", true),
                Segment::variable("c", false),
            ]
        );
    }

    #[test]
    fn test_invalid_reports_offset_of_dollar() {
        assert_eq!(
            parse("invalid template $"),
            Err(ParseError::invalid_placeholder(17))
        );
        assert_eq!(parse("ok $$ ${x"), Err(ParseError::invalid_placeholder(6)));
        assert_eq!(parse("$$$"), Err(ParseError::invalid_placeholder(2)));
        assert_eq!(parse("cost: $5"), Err(ParseError::invalid_placeholder(6)));
    }

    #[test]
    fn test_first_invalid_wins() {
        assert_eq!(
            parse("$ok ${} $"),
            Err(ParseError::invalid_placeholder(4))
        );
    }
}
