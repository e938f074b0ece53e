//! Plain-text diagnostic reporting for the CLI driver.
//!
//! Every failure surfaces as one human-readable line on stderr, with no
//! structured or pretty-printed format. See DESIGN.md for the rationale
//! behind keeping this a thin `eprintln!` wrapper.

use nanocc::codegen::CodegenError;

/// Reports a driver-level compilation failure to stderr.
pub fn report_parse_error(filename: &str, message: &str) {
    eprintln!("{filename}: {message}");
}

/// Reports a codegen failure to stderr.
pub fn report_codegen_error(filename: &str, error: &CodegenError) {
    eprintln!("{filename}: codegen error: {error}");
}

/// Reports a driver-level I/O failure (missing file, unwritable output).
pub fn report_io_error(filename: &str, error: &std::io::Error) {
    eprintln!("{filename}: {error}");
}
