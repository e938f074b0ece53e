//! x86-64 assembly emission for nanocc.
//!
//! [`Codegen`] walks a validated [`TranslationUnit`] and writes GNU-syntax
//! x86-64 assembly to a byte sink. It owns the return-label counter as an
//! instance field rather than a process-global `static`, so multiple
//! `Codegen` runs in the same process — as happens across this crate's
//! own test suite — stay independent and deterministic regardless of
//! execution order.
//!
//! # Module structure
//!
//! - [`error`] — [`CodegenError`]
//! - [`locals`] — per-function local symbol table and `align_to`
//! - [`expr`] — expression lowering (stack-based evaluation)
//! - [`stmt`] — statement lowering

mod error;
mod expr;
mod locals;
mod stmt;


pub use error::CodegenError;
pub use locals::align_to;

use std::io::Write;

use crate::ast::{FunctionDecl, TranslationUnit};
use locals::LocalTable;

/// Per-function frame alignment required by the System V ABI call-site
/// convention, even though this compiler emits no calls of its own.
const STACK_ALIGNMENT: u32 = 16;

/// Emits GNU-syntax x86-64 assembly for a validated AST.
pub struct Codegen {
    label_counter: u32,
}

impl Codegen {
    /// Creates a new `Codegen` with its return-label counter reset to 0.
    ///
    /// The counter lives on the instance rather than a process-global
    /// `static`, so separate `Codegen` runs in the same process stay
    /// independent: each starts labeling its own functions at
    /// `.Lreturn_0`.
    ///
    /// # Returns
    ///
    /// A new `Codegen` instance ready to emit one translation unit.
    pub fn new() -> Self {
        Codegen { label_counter: 0 }
    }

    /// Writes a complete assembly translation unit: the `.text` header,
    /// one emitted function per `FunctionDecl`, and the `.note.GNU-stack`
    /// footer.
    ///
    /// # Arguments
    ///
    /// * `unit` - The validated AST to emit.
    /// * `out` - The byte sink assembly text is written to.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError`] on the first write failure, unresolved
    /// assignment target, or unparseable number literal. Fails
    /// immediately; nothing already written to `out` is rolled back.
    pub fn emit_translation_unit<W: Write>(
        &mut self,
        unit: &TranslationUnit<'_>,
        out: &mut W,
    ) -> Result<(), CodegenError> {
        writeln!(out, ".text")?;
        for function in &unit.functions {
            self.emit_function(function, out)?;
        }
        writeln!(out, ".section .note.GNU-stack,\"\",@progbits")?;
        Ok(())
    }

    fn emit_function<W: Write>(
        &mut self,
        function: &FunctionDecl<'_>,
        out: &mut W,
    ) -> Result<(), CodegenError> {
        let (locals, raw_stack) = LocalTable::collect(&function.body);
        let aligned_stack = align_to(raw_stack, STACK_ALIGNMENT);

        let return_label = format!(".Lreturn_{}", self.label_counter);
        self.label_counter += 1;

        writeln!(out, ".globl {}", function.name)?;
        writeln!(out, "{}:", function.name)?;
        writeln!(out, "    push %rbp")?;
        writeln!(out, "    mov %rsp, %rbp")?;
        if aligned_stack > 0 {
            writeln!(out, "    sub ${aligned_stack}, %rsp")?;
        }

        stmt::emit_block(out, &function.body, &locals, &return_label)?;

        writeln!(out, "{return_label}:")?;
        writeln!(out, "    leave")?;
        writeln!(out, "    ret")?;
        writeln!(out)?;
        Ok(())
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Codegen::new()
    }
}
