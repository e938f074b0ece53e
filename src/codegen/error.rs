//! Code generation error type.

use std::fmt;

/// An error that occurred while emitting assembly.
///
/// Unlike [`crate::parser::ParserStatus`], codegen failure is not
/// sticky/accumulating: the first failure aborts emission immediately,
/// so one error value is enough.
#[derive(Debug)]
pub struct CodegenError {
    pub message: String,
}

impl CodegenError {
    pub fn new(message: impl Into<String>) -> Self {
        CodegenError {
            message: message.into(),
        }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodegenError {}

impl From<std::io::Error> for CodegenError {
    fn from(error: std::io::Error) -> Self {
        CodegenError::new(format!("write failed: {error}"))
    }
}
