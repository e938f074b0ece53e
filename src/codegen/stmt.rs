//! Statement lowering.

use std::io::Write;

use crate::ast::{Block, Stmt};

use super::error::CodegenError;
use super::expr::emit_expr;
use super::locals::LocalTable;

pub(super) fn emit_block<W: Write>(
    out: &mut W,
    block: &Block<'_>,
    locals: &LocalTable,
    return_label: &str,
) -> Result<(), CodegenError> {
    for stmt in &block.statements {
        emit_stmt(out, stmt, locals, return_label)?;
    }
    Ok(())
}

fn emit_stmt<W: Write>(
    out: &mut W,
    stmt: &Stmt<'_>,
    locals: &LocalTable,
    return_label: &str,
) -> Result<(), CodegenError> {
    match stmt {
        Stmt::VarDecl { name, init } => emit_var_decl(out, name, init.as_ref(), locals),
        Stmt::Assignment { target, value } => emit_assignment(out, target, value, locals),
        Stmt::Return(expr) => emit_return(out, expr, locals, return_label),
        Stmt::Block(inner) => emit_block(out, inner, locals, return_label),
    }
}

fn emit_var_decl<W: Write>(
    out: &mut W,
    name: &str,
    init: Option<&crate::ast::Expr<'_>>,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    let offset = locals
        .lookup(name)
        .ok_or_else(|| CodegenError::new(format!("declaration for '{name}' not in local table")))?;
    match init {
        Some(expr) => emit_expr(out, expr, locals)?,
        None => writeln!(out, "    movl $0, %eax")?,
    }
    writeln!(out, "    movl %eax, -{offset}(%rbp)")?;
    Ok(())
}

fn emit_assignment<W: Write>(
    out: &mut W,
    target: &str,
    value: &crate::ast::Expr<'_>,
    locals: &LocalTable,
) -> Result<(), CodegenError> {
    let offset = locals.lookup(target).ok_or_else(|| {
        CodegenError::new(format!("assignment to undeclared identifier '{target}'"))
    })?;
    emit_expr(out, value, locals)?;
    writeln!(out, "    movl %eax, -{offset}(%rbp)")?;
    Ok(())
}

fn emit_return<W: Write>(
    out: &mut W,
    expr: &crate::ast::Expr<'_>,
    locals: &LocalTable,
    return_label: &str,
) -> Result<(), CodegenError> {
    emit_expr(out, expr, locals)?;
    writeln!(out, "    jmp {return_label}")?;
    Ok(())
}
