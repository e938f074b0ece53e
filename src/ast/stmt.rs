//! Statement nodes.

use super::expr::Expr;
use super::Block;

/// A statement inside a function body.
#[derive(Debug)]
pub enum Stmt<'a> {
    /// `return <expr>;` — the expression is required.
    Return(Expr<'a>),
    /// `int <name> (= <expr>)? ;`
    VarDecl {
        name: &'a str,
        init: Option<Expr<'a>>,
    },
    /// `<name> = <expr>;`
    Assignment { target: &'a str, value: Expr<'a> },
    /// A nested `{ ... }` block. Declarations inside it still land in
    /// the enclosing function's flat local table — nesting is purely
    /// lexical grouping, not a new binding scope.
    Block(Block<'a>),
}
