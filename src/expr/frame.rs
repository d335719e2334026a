use super::Expr;
use recursion::{Collapsible, MappableFrame, PartiallyApplied};

/// short-lived single layer of a search expression, used for expressing
/// recursive algorithms over a single layer of a borrowed Expr
#[derive(Debug)]
pub enum ExprFrame<X, I> {
    // borrowed condition identifier
    Identifier(I),
    // boolean operators
    Not(X),
    And(X, X),
    Or(X, X),
    // parenthesized group
    Group(X),
}

impl<I> MappableFrame for ExprFrame<PartiallyApplied, I> {
    type Frame<X> = ExprFrame<X, I>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        use ExprFrame::*;
        match input {
            Identifier(id) => Identifier(id),
            Not(a) => Not(f(a)),
            And(a, b) => {
                let a = f(a);
                And(a, f(b))
            }
            Or(a, b) => {
                let a = f(a);
                Or(a, f(b))
            }
            Group(a) => Group(f(a)),
        }
    }
}

impl<'b, 'a> Collapsible for &'b Expr<'a> {
    type FrameToken = ExprFrame<PartiallyApplied, &'a str>;

    fn into_frame(self) -> ExprFrame<Self, &'a str> {
        match self {
            Expr::Identifier(id) => ExprFrame::Identifier(*id),
            Expr::Not(x) => ExprFrame::Not(x),
            Expr::And(a, b) => ExprFrame::And(a, b),
            Expr::Or(a, b) => ExprFrame::Or(a, b),
            Expr::Group(x) => ExprFrame::Group(x),
        }
    }
}
