//! Compile, check and tokenize template expressions

use super::CliError;
use crate::{Compiler, CompilerOptions, Lexer, OutputExpr, Parser, output};

/// How compiled trees are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// TypeScript-style source text
    #[default]
    Source,
    /// Compact JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// The template text to compile
    pub input: String,
    pub format: OutputFormat,
    /// Emit the input as a string constant instead of failing
    pub fallback: bool,
    pub compiler: CompilerOptions,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The template text to validate
    pub input: String,
    pub compiler: CompilerOptions,
}

/// Compiles `input`, degrading to the verbatim text as a string constant on error.
pub fn compile_or_fallback(compiler: &Compiler, input: &str) -> OutputExpr {
    match compiler.compile(input) {
        Ok(tree) => tree,
        Err(error) => {
            tracing::warn!(%error, input, "could not compile expression, keeping it as a string");
            OutputExpr::string(input)
        }
    }
}

/// Execute an elc compile operation
pub fn execute_compile(options: &CompileOptions) -> Result<String, CliError> {
    let compiler = Compiler::new(options.compiler.clone());

    let tree = if options.fallback {
        compile_or_fallback(&compiler, &options.input)
    } else {
        compiler.compile(&options.input)?
    };

    Ok(match options.format {
        OutputFormat::Source => output::to_source(&tree),
        OutputFormat::Json => output::to_json(&tree),
        OutputFormat::JsonPretty => output::to_json_pretty(&tree),
    })
}

/// Validate lexing and parsing without translating.
///
/// Returns the number of items in the composite expression. Every parse
/// error after the first is logged as a warning.
pub fn execute_check(options: &CheckOptions) -> Result<usize, CliError> {
    let tokens = Lexer::new(&options.input)
        .tokenize()
        .map_err(crate::Error::from)?;

    let mut parser = Parser::with_max_depth(tokens, options.compiler.max_depth);
    match parser.parse() {
        Ok(cst) => Ok(cst.items.len()),
        Err(first) => {
            for error in parser.errors().iter().skip(1) {
                tracing::warn!(%error, "additional parse error");
            }
            Err(crate::Error::from(first).into())
        }
    }
}

/// Dump the token stream, one `offset mode kind text` line per token.
pub fn execute_tokens(input: &str) -> Result<Vec<String>, CliError> {
    let tokens = Lexer::new(input).tokenize().map_err(crate::Error::from)?;

    Ok(tokens
        .iter()
        .map(|token| {
            format!(
                "{:>4} {:<8} {:<18} {:?}",
                token.offset,
                format!("{:?}", token.mode),
                format!("{:?}", token.kind),
                token.text
            )
        })
        .collect())
}
