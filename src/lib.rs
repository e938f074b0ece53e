//! nanocc — a minimal ahead-of-time compiler for a tiny imperative,
//! C-like subset, emitting GNU-syntax x86-64 assembly text.
//!
//! # Pipeline
//!
//! - [`token`] — token types and source positions
//! - [`lexer`] — the scanner: source bytes to tokens, one-token lookahead
//! - [`ast`] — the tagged-sum abstract syntax tree
//! - [`parser`] — recursive-descent parsing into an AST
//! - [`codegen`] — AST-walking emission of x86-64 assembly
//!
//! Assembling and linking the emitted text is left to an external
//! toolchain; this crate only produces the assembly.
//!
//! # Example
//!
//! ```
//! use nanocc::codegen::Codegen;
//! use nanocc::parser::{Parser, ParserStatus};
//!
//! let source = "int main() { return 42; }";
//! let mut parser = Parser::new(source);
//! let unit = parser.parse();
//! assert_eq!(parser.status(), ParserStatus::Ok);
//!
//! let mut assembly = Vec::new();
//! Codegen::new()
//!     .emit_translation_unit(&unit, &mut assembly)
//!     .expect("emission should succeed");
//! let assembly = String::from_utf8(assembly).unwrap();
//! assert!(assembly.contains("movl $42, %eax"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;
