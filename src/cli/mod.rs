//! CLI support for el-compiler
//!
//! Provides programmatic access to the `elc` commands so other tools can
//! drive them without spawning a process.

mod compile;
mod docs;

pub use compile::{
    CheckOptions, CompileOptions, OutputFormat, compile_or_fallback, execute_check,
    execute_compile, execute_tokens,
};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Lexing, parsing or translation failed
    #[error("{0}")]
    Compile(#[from] crate::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Pass an expression or pipe it to stdin.")]
    NoInput,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'elc docs' to see available categories.")]
    UnknownCategory(String),
}
