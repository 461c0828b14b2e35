//! # el-compiler
//!
//! Compiles template text with embedded `#{...}` and `${...}` expressions into
//! a target-language expression tree.
//!
//! ```text
//! input ──► lexer ──► tokens ──► parser ──► CST ──► compiler ──► OutputExpr
//! ```
//!
//! ```
//! use el_compiler::{to_tree, OutputExpr};
//!
//! let tree = to_tree("#{not a}").unwrap();
//! assert_eq!(tree, OutputExpr::not(OutputExpr::ident("a")));
//! ```
//!
//! Errors are terminal: a malformed input never yields a partial tree. A
//! caller that wants a degraded result (for example the raw text as a string
//! constant) applies that policy itself.

pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compiler;
pub mod error;
pub mod lexer;
#[cfg(feature = "cli")]
pub mod logger;
pub mod options;
pub mod output;
pub mod parser;

pub use ast::{
    BinaryOp, CompositeExpression, Expression, Item, LexerMode, OutputBinOp, OutputExpr, Token,
    TokenKind, UnaryOp, Value, ValuePrefix,
};
pub use compiler::{Compiler, to_tree, translate, translate_with};
pub use error::{Error, LexError, ParseError, Result, TranslateError};
pub use lexer::{Lexer, tokenize};
pub use options::CompilerOptions;
pub use output::{to_json, to_json_pretty, to_source};
pub use parser::{Parser, parse};
