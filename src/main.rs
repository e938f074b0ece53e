//! The nanocc CLI.
//!
//! Compiles a single source file to GNU-syntax x86-64 assembly text.
//! Assembling and linking that output is left to the caller's toolchain
//! (e.g. `as` and `ld`, or `cc` driving both).
//!
//! ```text
//! nanocc build input.c -o input.s
//! ```

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

#[derive(Parser)]
#[command(name = "nanocc")]
#[command(about = "A minimal ahead-of-time compiler for a tiny C-like subset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source file to x86-64 assembly text.
    Build {
        /// The source file to compile.
        file: String,

        /// Output path for the assembly text. Defaults to the input
        /// filename with its extension replaced by `.s`.
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { file, output } => {
            match driver::build(&file, output.as_deref()) {
                Ok(path) => println!("Compiled {file} -> {}", path.display()),
                Err(error) => {
                    report(&file, error);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn report(file: &str, error: driver::CompileError) {
    match error {
        driver::CompileError::Read(e) => diagnostics::report_io_error(file, &e),
        driver::CompileError::Parse(message) => diagnostics::report_parse_error(file, &message),
        driver::CompileError::Codegen(e) => diagnostics::report_codegen_error(file, &e),
        driver::CompileError::Write(e) => diagnostics::report_io_error(file, &e),
        driver::CompileError::OutputPath => {
            eprintln!("{file}: could not determine an output path from the input filename")
        }
    }
}
