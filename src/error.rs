//! Error types for every compilation stage.

use thiserror::Error;

/// Lexing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// No token pattern of the current mode matches
    #[error("unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },

    /// A `}` with no open `#{` or `${`
    #[error("unbalanced '}}' at offset {offset}: no expression is open")]
    UnbalancedBrace { offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { offset, .. } | LexError::UnbalancedBrace { offset } => {
                *offset
            }
        }
    }
}

/// Parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that does not fit the grammar at this point
    #[error("expected {expected}, found {found} '{text}' at offset {offset}")]
    Unexpected {
        expected: String,
        found: String,
        text: String,
        offset: usize,
    },

    /// The token stream ended too early
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    /// Expression nesting exceeded the configured limit
    #[error("expression nesting exceeds the limit of {limit} at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

/// Translation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// The operator parses but has no agreed translation
    #[error("unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },
}

/// Unified error of a full compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("translate error: {0}")]
    Translate(#[from] TranslateError),

    /// Input rejected before lexing
    #[error("input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
}

/// Result alias for a full compilation
pub type Result<T> = std::result::Result<T, Error>;
