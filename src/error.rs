use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::token::TokenKind;

/// Errors raised while parsing or compiling a search expression.
///
/// Positional variants carry a span into the expression text; attach the text
/// with [`miette::Report::with_source_code`] to render a labelled diagnostic.
#[derive(Debug, Clone, Diagnostic, Error)]
pub enum SearchError {
    #[error("Unexpected {found}")]
    #[diagnostic(
        code(patsearch::unexpected_token),
        help("An operand must be a condition identifier like S1, a (...) group or Not[...]")
    )]
    UnexpectedToken {
        found: String,
        #[label("expected an operand here")]
        span: SourceSpan,
    },

    #[error("Expected {expected}, found {found}")]
    #[diagnostic(code(patsearch::expected_token))]
    ExpectedToken {
        expected: TokenKind,
        found: String,
        #[label("expected {expected}")]
        span: SourceSpan,
    },

    #[error("Unexpected {found} after a complete expression")]
    #[diagnostic(
        code(patsearch::trailing_tokens),
        help("Combine conditions with '+' (OR) or '×' (AND)")
    )]
    TrailingTokens {
        found: String,
        #[label("nothing may follow here")]
        span: SourceSpan,
    },

    #[error("Condition not found: {id}")]
    #[diagnostic(
        code(patsearch::unknown_condition),
        help("Every identifier in the expression needs an entry in the condition table")
    )]
    UnknownCondition { id: String },

    #[error("Expression is nested more than {max} levels deep")]
    #[diagnostic(code(patsearch::nesting_too_deep))]
    NestingTooDeep {
        max: usize,
        #[label("too deeply nested")]
        span: SourceSpan,
    },

    #[error("Expression is {len} characters long, the limit is {max}")]
    #[diagnostic(code(patsearch::expression_too_long))]
    ExpressionTooLong { len: usize, max: usize },

    #[error("Expression has {count} tokens, the limit is {max}")]
    #[diagnostic(code(patsearch::too_many_tokens))]
    TooManyTokens {
        count: usize,
        max: usize,
        #[label("limit reached here")]
        span: SourceSpan,
    },
}

impl SearchError {
    pub fn unknown_condition(id: impl Into<String>) -> Self {
        SearchError::UnknownCondition { id: id.into() }
    }

    /// Span into the expression text, if the error is positional
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            SearchError::UnexpectedToken { span, .. }
            | SearchError::ExpectedToken { span, .. }
            | SearchError::TrailingTokens { span, .. }
            | SearchError::NestingTooDeep { span, .. }
            | SearchError::TooManyTokens { span, .. } => Some(*span),
            SearchError::UnknownCondition { .. } | SearchError::ExpressionTooLong { .. } => None,
        }
    }
}
