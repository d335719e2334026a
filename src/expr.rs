pub mod frame;

use std::fmt::Display;

use recursion::CollapsibleExt;

use self::frame::ExprFrame;

/// Parsed search expression over condition identifiers
///
/// Identifiers borrow from the expression text; the tree is transient and
/// only lives long enough to be compiled against a condition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'a> {
    // leaf referencing a condition by id
    Identifier(&'a str),
    // boolean operators
    Or(Box<Self>, Box<Self>),
    And(Box<Self>, Box<Self>),
    Not(Box<Self>),
    // parenthesized sub-expression, transparent to evaluation
    Group(Box<Self>),
}

impl<'a> Expr<'a> {
    pub fn or(a: Self, b: Self) -> Self {
        Self::Or(Box::new(a), Box::new(b))
    }
    pub fn and(a: Self, b: Self) -> Self {
        Self::And(Box::new(a), Box::new(b))
    }
    pub fn not(a: Self) -> Self {
        Self::Not(Box::new(a))
    }
    pub fn group(a: Self) -> Self {
        Self::Group(Box::new(a))
    }

    /// Condition identifiers referenced by this expression, in source order.
    /// Repeated references are listed once per occurrence.
    pub fn identifiers(&self) -> Vec<&'a str> {
        self.collapse_frames(|frame: ExprFrame<Vec<&'a str>, &'a str>| match frame {
            ExprFrame::Identifier(id) => vec![id],
            ExprFrame::Or(mut a, b) | ExprFrame::And(mut a, b) => {
                a.extend(b);
                a
            }
            ExprFrame::Not(x) | ExprFrame::Group(x) => x,
        })
    }
}

/// Canonical expression text: no whitespace, `+` for OR, `×` for AND,
/// `Not[...]` for negation and `(...)` for groups. Re-parsing the output of
/// any parsed expression yields the same tree.
impl<'a> Display for Expr<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: String = self.collapse_frames(|frame| match frame {
            ExprFrame::Identifier(id) => id.to_string(),
            ExprFrame::Or(a, b) => format!("{}+{}", a, b),
            ExprFrame::And(a, b) => format!("{}×{}", a, b),
            ExprFrame::Not(x) => format!("Not[{}]", x),
            ExprFrame::Group(x) => format!("({})", x),
        });
        write!(f, "{}", rendered)
    }
}
