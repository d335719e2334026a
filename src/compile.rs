//! Compilation of parsed expressions into filter predicates

use recursion::CollapsibleExt;

use crate::condition::{Condition, ConditionTable};
use crate::error::SearchError;
use crate::expr::frame::ExprFrame;
use crate::expr::Expr;
use crate::field::SearchField;
use crate::predicate::FilterPredicate;
use crate::time::parse_date_value;

/// Compile an expression against a condition table.
///
/// `Or`, `And` and `Not` map onto their predicate counterparts, groups are
/// dropped, and each identifier is replaced by the field match its condition
/// describes.
///
/// # Errors
/// Returns `UnknownCondition` for an identifier missing from `conditions`.
/// Unparseable dates and unmapped field keys are not errors.
pub fn compile(expr: &Expr<'_>, conditions: &ConditionTable) -> Result<FilterPredicate, SearchError> {
    expr.try_collapse_frames(|frame| match frame {
        ExprFrame::Identifier(id) => {
            let condition = conditions
                .get(id)
                .ok_or_else(|| SearchError::unknown_condition(id))?;
            Ok(condition_predicate(condition))
        }
        ExprFrame::Or(a, b) => Ok(FilterPredicate::or(a, b)),
        ExprFrame::And(a, b) => Ok(FilterPredicate::and(a, b)),
        ExprFrame::Not(x) => Ok(FilterPredicate::not(x)),
        ExprFrame::Group(x) => Ok(x),
    })
}

/// Compile parser output, where `None` (an empty expression) matches every
/// record and compiles to the empty conjunction.
pub fn compile_query(
    expr: Option<&Expr<'_>>,
    conditions: &ConditionTable,
) -> Result<FilterPredicate, SearchError> {
    match expr {
        Some(expr) => compile(expr, conditions),
        None => Ok(FilterPredicate::empty()),
    }
}

/// Field match for a single condition
pub fn condition_predicate(condition: &Condition) -> FilterPredicate {
    let field = SearchField::from_key(&condition.field);
    if let SearchField::Other(key) = &field {
        log::debug!(
            "condition {}: unmapped field '{}' passed through as-is",
            condition.id,
            key
        );
    }

    if field.is_date() {
        match parse_date_value(&condition.value) {
            Some(date) => FilterPredicate::date_equals(field.storage_name(), date),
            None => unparseable_date_predicate(&field, &condition.value),
        }
    } else {
        FilterPredicate::contains(field.storage_name(), condition.value.as_str())
    }
}

/// Predicate substituted for a date condition whose value does not parse.
///
/// Degrades to the empty conjunction instead of failing the search, logging
/// a warning naming the field and the rejected value.
pub fn unparseable_date_predicate(field: &SearchField, value: &str) -> FilterPredicate {
    log::warn!(
        "'{}' is not a date, {} filter degraded to an empty conjunction",
        value,
        field.storage_name()
    );
    FilterPredicate::empty()
}
