//! Expression lowering.
//!
//! Every expression evaluates into `%eax`. Binary operators use a
//! stack-based scheme: evaluate the left operand, push it, evaluate the
//! right operand, pop the left operand back into `%rcx`, then shuffle
//! operands into the positions the instruction needs.

use std::io::Write;

use crate::ast::{BinaryOp, Expr, UnaryOp};

use super::error::CodegenError;
use super::locals::LocalTable;

pub(super) fn emit_expr<W: Write>(
    out: &mut W,
    expr: &Expr<'_>,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    match expr {
        Expr::NumberLiteral(lexeme) => emit_number_literal(out, lexeme),
        Expr::Identifier(name) => emit_identifier(out, name, locals),
        Expr::Unary { op, operand } => emit_unary(out, *op, operand, locals),
        Expr::Binary { op, left, right } => emit_binary(out, *op, left, right, locals),
    }
}

fn emit_number_literal<W: Write>(out: &mut W, lexeme: &str) -> Result<(), CodegenError> {
    let value: i64 = lexeme
        .parse()
        .map_err(|_| CodegenError::new(format!("invalid integer literal '{lexeme}'")))?;
    writeln!(out, "    movl ${value}, %eax")?;
    Ok(())
}

fn emit_identifier<W: Write>(
    out: &mut W,
    name: &str,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    match locals.lookup(name) {
        Some(offset) => writeln!(out, "    movl -{offset}(%rbp), %eax")?,
        // Not a local: treat as a RIP-relative global provided at link
        // time. Legal only in rvalue position; assignment targets are
        // resolved separately and fail if undeclared.
        None => writeln!(out, "    mov {name}(%rip), %eax")?,
    }
    Ok(())
}

fn emit_unary<W: Write>(
    out: &mut W,
    op: UnaryOp,
    operand: &Expr<'_>,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    emit_expr(out, operand, locals)?;
    if op == UnaryOp::Minus {
        writeln!(out, "    neg %eax")?;
    }
    Ok(())
}

fn emit_binary<W: Write>(
    out: &mut W,
    op: BinaryOp,
    left: &Expr<'_>,
    right: &Expr<'_>,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    emit_expr(out, left, locals)?;
    writeln!(out, "    push %rax")?;
    emit_expr(out, right, locals)?;
    writeln!(out, "    pop %rcx")?;
    // left is now in %ecx, right in %eax; move them into the positions
    // the add/sub instruction needs: left in %eax, right in %edx.
    writeln!(out, "    mov %eax, %edx")?;
    writeln!(out, "    mov %ecx, %eax")?;
    let mnemonic = match op {
        BinaryOp::Add => "add",
        BinaryOp::Sub => "sub",
    };
    writeln!(out, "    {mnemonic} %edx, %eax")?;
    Ok(())
}
