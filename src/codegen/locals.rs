//! Per-function local symbol table.
//!
//! Built fresh at the start of each function's emission and dropped at
//! the end. Names are copied into owned `String`s so the table's
//! lifetime doesn't depend on the AST's borrowed lexeme slices surviving
//! into codegen.

use crate::ast::{Block, Stmt};

/// One declared local: its name and its frame offset below `%rbp`.
struct LocalBinding {
    name: String,
    offset: u32,
}

/// An ordered, linearly-searched table of local variables. Lookup is
/// first-match-wins in declaration order, so a shadowing redeclaration
/// in an inner block is not supported — the grammar has no block-scoped
/// shadowing to express anyway.
#[derive(Default)]
pub struct LocalTable {
    bindings: Vec<LocalBinding>,
}

/// Eight bytes reserved per declared `int`, even though the value itself
/// is 4 bytes — this keeps the stack-alignment arithmetic trivial.
const SLOT_SIZE: u32 = 8;

impl LocalTable {
    /// Walks a function body, recursing through nested blocks, and
    /// assigns a frame slot to every `VarDecl` in source order. Returns
    /// the table together with the raw (pre-alignment) byte count.
    pub fn collect(body: &Block<'_>) -> (LocalTable, u32) {
        let mut table = LocalTable::default();
        let mut offset = 0;
        collect_block(body, &mut table, &mut offset);
        (table, offset)
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| binding.offset)
    }
}

fn collect_block(block: &Block<'_>, table: &mut LocalTable, offset: &mut u32) {
    for stmt in &block.statements {
        match stmt {
            Stmt::VarDecl { name, .. } => {
                *offset += SLOT_SIZE;
                table.bindings.push(LocalBinding {
                    name: (*name).to_string(),
                    offset: *offset,
                });
            }
            Stmt::Block(inner) => collect_block(inner, table, offset),
            Stmt::Return(_) | Stmt::Assignment { .. } => {}
        }
    }
}

/// Rounds `value` up to the next multiple of `alignment`, used to satisfy
/// the System V call-site 16-byte alignment convention even though this
/// compiler emits no calls of its own.
pub fn align_to(value: u32, alignment: u32) -> u32 {
    let remainder = value % alignment;
    if remainder == 0 {
        value
    } else {
        value + (alignment - remainder)
    }
}
