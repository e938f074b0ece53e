//! Build orchestration for the `nanocc` CLI.
//!
//! Reads a source file, runs the scanner/parser/emitter pipeline
//! in-process, and writes the resulting assembly text to an output file.
//! Assembling and linking that text into an executable is left to an
//! external toolchain — this driver only produces `.s` text.

use std::fs;
use std::path::{Path, PathBuf};

use nanocc::codegen::{Codegen, CodegenError};
use nanocc::parser::{Parser, ParserStatus};

/// A compilation error from any phase of the build pipeline.
pub enum CompileError {
    /// Could not read the input file.
    Read(std::io::Error),
    /// The parser reported a syntax error.
    Parse(String),
    /// The emitter reported a codegen error.
    Codegen(CodegenError),
    /// Could not write the output file.
    Write(std::io::Error),
    /// The output path could not be derived from the input path.
    OutputPath,
}

/// Compiles `input` to GNU-syntax x86-64 assembly, writing the result to
/// `output` (or `<input stem>.s` if `output` is `None`).
///
/// Returns the output path on success.
pub fn build(input: &str, output: Option<&str>) -> Result<PathBuf, CompileError> {
    let source = fs::read_to_string(input).map_err(CompileError::Read)?;

    let mut parser = Parser::new(&source);
    let unit = parser.parse();
    if parser.status() != ParserStatus::Ok {
        let message = parser
            .diagnostic()
            .map(str::to_string)
            .unwrap_or_else(|| "parse failed".to_string());
        return Err(CompileError::Parse(message));
    }

    let mut assembly = Vec::new();
    Codegen::new()
        .emit_translation_unit(&unit, &mut assembly)
        .map_err(CompileError::Codegen)?;

    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => default_output_path(input).ok_or(CompileError::OutputPath)?,
    };
    fs::write(&output_path, assembly).map_err(CompileError::Write)?;
    Ok(output_path)
}

fn default_output_path(input: &str) -> Option<PathBuf> {
    let stem = Path::new(input).file_stem()?.to_str()?;
    Some(PathBuf::from(format!("{stem}.s")))
}
