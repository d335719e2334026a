//! Backend-agnostic filter predicates
//!
//! The compiled form of a search expression, handed to the record store for
//! translation into its native query syntax.

use std::fmt::{self, Display};

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Boolean tree of field-level comparisons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterPredicate {
    And(Vec<FilterPredicate>),
    Or(Vec<FilterPredicate>),
    Not(Box<FilterPredicate>),
    #[serde(rename_all = "camelCase")]
    FieldMatch {
        field: String,
        operator: MatchOperator,
        value: MatchValue,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchOperator {
    Equals,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchValue {
    Text(String),
    Date(NaiveDate),
}

impl FilterPredicate {
    /// The empty conjunction
    pub fn empty() -> Self {
        FilterPredicate::And(Vec::new())
    }

    /// Conjunction of `a` and `b`. Non-empty `And` operands are spliced in, so
    /// a chain like `S1×S2×S3` yields one flat list.
    pub fn and(a: Self, b: Self) -> Self {
        let mut xs = Vec::new();
        for p in [a, b] {
            match p {
                FilterPredicate::And(ys) if !ys.is_empty() => xs.extend(ys),
                p => xs.push(p),
            }
        }
        FilterPredicate::And(xs)
    }

    /// Disjunction of `a` and `b`, flattening nested `Or` operands
    pub fn or(a: Self, b: Self) -> Self {
        let mut xs = Vec::new();
        for p in [a, b] {
            match p {
                FilterPredicate::Or(ys) if !ys.is_empty() => xs.extend(ys),
                p => xs.push(p),
            }
        }
        FilterPredicate::Or(xs)
    }

    pub fn not(a: Self) -> Self {
        FilterPredicate::Not(Box::new(a))
    }

    /// Substring match on a text field
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        FilterPredicate::FieldMatch {
            field: field.into(),
            operator: MatchOperator::Contains,
            value: MatchValue::Text(value.into()),
        }
    }

    /// Exact match on a date field
    pub fn date_equals(field: impl Into<String>, date: NaiveDate) -> Self {
        FilterPredicate::FieldMatch {
            field: field.into(),
            operator: MatchOperator::Equals,
            value: MatchValue::Date(date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterPredicate::And(xs) if xs.is_empty())
    }
}

impl Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPredicate::And(xs) => write!(f, "AND({})", xs.iter().join(", ")),
            FilterPredicate::Or(xs) => write!(f, "OR({})", xs.iter().join(", ")),
            FilterPredicate::Not(x) => write!(f, "NOT({})", x),
            FilterPredicate::FieldMatch {
                field,
                operator,
                value,
            } => write!(f, "{} {} {}", field, operator, value),
        }
    }
}

impl Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOperator::Equals => write!(f, "=="),
            MatchOperator::Contains => write!(f, "contains"),
        }
    }
}

impl Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValue::Text(s) => write!(f, "{:?}", s),
            MatchValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
