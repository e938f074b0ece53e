//! Abstract syntax tree for nanocc.
//!
//! The tree is a strict ownership hierarchy: each node owns its children
//! exclusively, there are no back-pointers or shared children, and the
//! translation-unit root owns the whole forest. Dropping the root (or any
//! partial tree produced by a failed parse) is an ordinary, no-fault
//! structural drop — Rust's ownership model gives this for free, with no
//! manual free-list bookkeeping required.
//!
//! Identifier- and literal-bearing nodes hold slices borrowed from the
//! original source buffer rather than owned copies: the tree cannot
//! outlive the buffer it was parsed from, in exchange for one fewer
//! allocation per name or literal.

mod expr;
mod stmt;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub use stmt::Stmt;

/// The root of a parsed program: an ordered sequence of function
/// declarations.
#[derive(Debug, Default)]
pub struct TranslationUnit<'a> {
    pub functions: Vec<FunctionDecl<'a>>,
}

/// A single `int name() { ... }` function declaration.
#[derive(Debug)]
pub struct FunctionDecl<'a> {
    pub name: &'a str,
    pub body: Block<'a>,
}

/// A brace-delimited sequence of statements; a lexical scope.
#[derive(Debug, Default)]
pub struct Block<'a> {
    pub statements: Vec<Stmt<'a>>,
}
