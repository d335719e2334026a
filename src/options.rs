use crate::error::SearchError;

pub const DEFAULT_MAX_DEPTH: usize = 64;
pub const DEFAULT_MAX_EXPRESSION_LEN: usize = 4096;
pub const DEFAULT_MAX_TOKENS: usize = 1024;

/// Limits applied when parsing untrusted expression text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum nesting of `(...)` and `Not[...]`. This caps parser recursion
    /// only; operator chains are bounded by `max_tokens`.
    pub max_depth: usize,
    /// Maximum expression length in characters
    pub max_expression_len: usize,
    /// Maximum number of tokens accepted by the parser. A `+`/`×` chain
    /// builds a tree as deep as it is long, and dropping, cloning or
    /// comparing that tree recurses once per node.
    pub max_tokens: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expression_len: DEFAULT_MAX_EXPRESSION_LEN,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl SearchOptions {
    pub fn check_length(&self, expression: &str) -> Result<(), SearchError> {
        let len = expression.chars().count();
        if len > self.max_expression_len {
            return Err(SearchError::ExpressionTooLong {
                len,
                max: self.max_expression_len,
            });
        }
        Ok(())
    }
}
