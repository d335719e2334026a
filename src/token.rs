//! Lexical analysis for search expressions
//!
//! Splits expression text such as `S1+S2×Not[S3]` into a flat token list.
//! Scanning is permissive: anything that is not a recognised lexeme
//! (whitespace, stray letters, punctuation) is dropped rather than rejected.

use std::fmt;
use std::sync::LazyLock;

use miette::SourceSpan;
use regex::Regex;

/// Every lexeme the expression language knows about, leftmost alternative first.
static LEXEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"S[0-9]+|\+|×|Not|\[|\]|\(|\)").expect("lexeme pattern is a valid regex")
});

/// Classification of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier, // S1, S2, ...
    Or,         // +
    And,        // ×
    Not,        // Not
    LBracket,   // [
    RBracket,   // ]
    LParen,     // (
    RParen,     // )
}

impl TokenKind {
    fn classify(lexeme: &str) -> Self {
        match lexeme {
            "+" => TokenKind::Or,
            "×" => TokenKind::And,
            "Not" => TokenKind::Not,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            _ => TokenKind::Identifier,
        }
    }

    /// Literal text of a structural token, `None` for identifiers
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Identifier => None,
            TokenKind::Or => Some("+"),
            TokenKind::And => Some("×"),
            TokenKind::Not => Some("Not"),
            TokenKind::LBracket => Some("["),
            TokenKind::RBracket => Some("]"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "'{}'", symbol),
            None => write!(f, "condition identifier"),
        }
    }
}

/// A classified lexeme borrowed from the expression text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` within the scanned expression
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }

    /// Byte offset just past the end of this token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Scan `expression` left to right into tokens.
///
/// Never fails: unrecognised characters are silently skipped, so an input with
/// no lexemes at all yields an empty list.
pub fn tokenize(expression: &str) -> Vec<Token<'_>> {
    LEXEME
        .find_iter(expression)
        .map(|m| {
            let token = Token {
                kind: TokenKind::classify(m.as_str()),
                text: m.as_str(),
                offset: m.start(),
            };
            log::trace!("token {:?} {:?} at {}", token.kind, token.text, token.offset);
            token
        })
        .collect()
}
