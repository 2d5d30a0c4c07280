//! Lexer for template text using logos
//!
//! The source is split into runs of plain text and `$`-introduced
//! placeholders. What follows each `$` is classified by a callback.

use logos::{Lexer, Logos};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// The introducer character for every placeholder
pub const DELIMITER: char = '$';

/// What a single `$` turned out to introduce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `$$`
    Escape,
    /// `$name`
    Bare(String),
    /// `${name}`
    Braced(String),
    /// `$` followed by anything else; the span covers only the `$`
    Invalid,
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    #[token("$", placeholder)]
    Placeholder(Placeholder),

    #[regex(r"[^$]+")]
    Text,
}

/// Length in bytes of the identifier at the start of `s`, or 0 if there is none
///
/// Identifiers are `[A-Za-z_][A-Za-z0-9_]*`.
pub fn identifier_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    1 + bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

fn placeholder(lex: &mut Lexer<Token>) -> Placeholder {
    let rest = lex.remainder();

    if rest.starts_with(DELIMITER) {
        lex.bump(1);
        return Placeholder::Escape;
    }

    let len = identifier_len(rest);
    if len > 0 {
        let name = rest[..len].to_string();
        lex.bump(len);
        return Placeholder::Bare(name);
    }

    if let Some(inner) = rest.strip_prefix('{') {
        let len = identifier_len(inner);
        if len > 0 && inner[len..].starts_with('}') {
            let name = inner[..len].to_string();
            lex.bump(len + 2);
            return Placeholder::Braced(name);
        }
    }

    Placeholder::Invalid
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    // Every byte is covered by one of the two patterns, so a lexer error can
    // only ever be plain text.
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}
