//! Boolean search expressions over named patent-search conditions.
//!
//! Users combine previously defined conditions (`S1` = "applicant contains
//! Acme", `S2` = "title contains battery", ...) with `+` (OR), `×` (AND),
//! `Not[...]` and `(...)`. An expression goes through three pure stages:
//!
//! 1. [`tokenize`] scans the text into [`Token`]s,
//! 2. [`parse`] builds an [`Expr`] tree by recursive descent,
//! 3. [`compile`] resolves identifiers against a [`ConditionTable`] and emits
//!    a [`FilterPredicate`] for the record store.
//!
//! ```
//! use patsearch::{compile_expression, ConditionTable, FilterPredicate};
//!
//! let mut conditions = ConditionTable::new();
//! conditions.add("applicant", "Acme");
//! conditions.add("title", "battery");
//!
//! let predicate = compile_expression("S1×Not[S2]", &conditions).unwrap();
//! assert_eq!(
//!     predicate,
//!     FilterPredicate::and(
//!         FilterPredicate::contains("applicantName", "Acme"),
//!         FilterPredicate::not(FilterPredicate::contains("inventionTitle", "battery")),
//!     )
//! );
//! ```

pub mod compile;
pub mod condition;
mod error;
pub mod expr;
pub mod field;
pub mod options;
pub mod parser;
pub mod predicate;
mod time;
pub mod token;

#[cfg(test)]
mod proptest_generators;

pub use compile::{compile, compile_query};
pub use condition::{Condition, ConditionTable};
pub use error::SearchError;
pub use expr::Expr;
pub use field::SearchField;
pub use options::SearchOptions;
pub use parser::{parse, parse_with};
pub use predicate::{FilterPredicate, MatchOperator, MatchValue};
pub use time::parse_date_value;
pub use token::{tokenize, Token, TokenKind};

/// Tokenize, parse and compile `expression` with default limits
pub fn compile_expression(
    expression: &str,
    conditions: &ConditionTable,
) -> Result<FilterPredicate, SearchError> {
    compile_expression_with(expression, conditions, &SearchOptions::default())
}

/// Tokenize, parse and compile `expression`.
///
/// An expression with no recognisable tokens compiles to the empty
/// conjunction, matching every record.
pub fn compile_expression_with(
    expression: &str,
    conditions: &ConditionTable,
    options: &SearchOptions,
) -> Result<FilterPredicate, SearchError> {
    options.check_length(expression)?;

    let tokens = tokenize(expression);
    log::debug!("{} tokens from {:?}", tokens.len(), expression);

    let expr = parse_with(&tokens, options)?;
    match &expr {
        Some(e) => log::debug!("parsed: {}", e),
        None => log::debug!("empty expression, matching all records"),
    }

    let predicate = compile_query(expr.as_ref(), conditions)?;
    log::debug!("compiled: {}", predicate);
    Ok(predicate)
}
