//! Recursive descent parser for search expressions
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term ( '+' term )*
//! term       := factor ( '×' factor )*
//! factor     := 'Not' '[' expression ']'
//!             | '(' expression ')'
//!             | identifier
//! ```
//!
//! Both binary operators fold to the left, and `×` (AND) binds tighter than
//! `+` (OR). Negation only accepts a bracketed operand: `Not(S1)` and `Not S1`
//! are rejected.

use miette::SourceSpan;

use crate::error::SearchError;
use crate::expr::Expr;
use crate::options::SearchOptions;
use crate::token::{Token, TokenKind};

/// Parse with default [`SearchOptions`].
///
/// An empty token list parses to `None`, meaning "match everything".
pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Option<Expr<'a>>, SearchError> {
    parse_with(tokens, &SearchOptions::default())
}

/// Parse a token list into an expression tree.
///
/// # Errors
/// `UnexpectedToken` when an operand is missing, `ExpectedToken` when a
/// closing `]` or `)` (or the `[` after `Not`) is missing, `TrailingTokens`
/// when input remains after a complete expression, `NestingTooDeep` when
/// groups nest beyond `options.max_depth`, and `TooManyTokens` when the list
/// is longer than `options.max_tokens`.
pub fn parse_with<'a>(
    tokens: &[Token<'a>],
    options: &SearchOptions,
) -> Result<Option<Expr<'a>>, SearchError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() > options.max_tokens {
        return Err(SearchError::TooManyTokens {
            count: tokens.len(),
            max: options.max_tokens,
            span: tokens[options.max_tokens].span(),
        });
    }

    let mut cursor = Cursor::new(tokens, options.max_depth);
    let expr = expression(&mut cursor)?;

    if let Some(token) = cursor.peek() {
        return Err(SearchError::TrailingTokens {
            found: describe(Some(token)),
            span: token.span(),
        });
    }

    Ok(Some(expr))
}

/// Read position within one parse call's token list
struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Advance past the next token, which must be of kind `expected`
    fn consume(&mut self, expected: TokenKind) -> Result<&'t Token<'a>, SearchError> {
        match self.peek() {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token)
            }
            found => Err(SearchError::ExpectedToken {
                expected,
                found: describe(found),
                span: self.span_at_cursor(),
            }),
        }
    }

    /// Span of the token under the cursor, or an empty span at end of input
    fn span_at_cursor(&self) -> SourceSpan {
        match self.peek() {
            Some(token) => token.span(),
            None => {
                let end = self.tokens.last().map(Token::end).unwrap_or(0);
                (end, 0).into()
            }
        }
    }

    fn descend(&mut self, opener: &Token<'a>) -> Result<(), SearchError> {
        if self.depth >= self.max_depth {
            return Err(SearchError::NestingTooDeep {
                max: self.max_depth,
                span: opener.span(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }
}

fn describe(token: Option<&Token<'_>>) -> String {
    match token {
        Some(token) => format!("'{}'", token.text),
        None => "end of expression".to_string(),
    }
}

fn expression<'a>(cursor: &mut Cursor<'_, 'a>) -> Result<Expr<'a>, SearchError> {
    let mut lhs = term(cursor)?;
    while cursor.peek_is(TokenKind::Or) {
        cursor.advance();
        let rhs = term(cursor)?;
        lhs = Expr::or(lhs, rhs);
    }
    Ok(lhs)
}

fn term<'a>(cursor: &mut Cursor<'_, 'a>) -> Result<Expr<'a>, SearchError> {
    let mut lhs = factor(cursor)?;
    while cursor.peek_is(TokenKind::And) {
        cursor.advance();
        let rhs = factor(cursor)?;
        lhs = Expr::and(lhs, rhs);
    }
    Ok(lhs)
}

fn factor<'a>(cursor: &mut Cursor<'_, 'a>) -> Result<Expr<'a>, SearchError> {
    let Some(&token) = cursor.peek() else {
        return Err(SearchError::UnexpectedToken {
            found: describe(None),
            span: cursor.span_at_cursor(),
        });
    };

    match token.kind {
        TokenKind::Not => {
            cursor.advance();
            cursor.consume(TokenKind::LBracket)?;
            let inner = nested(cursor, &token)?;
            cursor.consume(TokenKind::RBracket)?;
            Ok(Expr::not(inner))
        }
        TokenKind::LParen => {
            cursor.advance();
            let inner = nested(cursor, &token)?;
            cursor.consume(TokenKind::RParen)?;
            Ok(Expr::group(inner))
        }
        TokenKind::Identifier => {
            cursor.advance();
            Ok(Expr::Identifier(token.text))
        }
        TokenKind::Or
        | TokenKind::And
        | TokenKind::LBracket
        | TokenKind::RBracket
        | TokenKind::RParen => Err(SearchError::UnexpectedToken {
            found: describe(Some(&token)),
            span: token.span(),
        }),
    }
}

fn nested<'a>(cursor: &mut Cursor<'_, 'a>, opener: &Token<'a>) -> Result<Expr<'a>, SearchError> {
    cursor.descend(opener)?;
    let inner = expression(cursor)?;
    cursor.ascend();
    Ok(inner)
}
