//! # Template Expression Language - Syntax Trees
//!
//! This module defines every tree the compiler works with, from the raw token
//! stream to the target expression tree handed back to the caller.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens and lexer modes produced by the lexer
//! - **[operators]** - Unary and binary operators of the expression grammar
//! - **[cst]** - Concrete syntax tree built by the parser
//! - **[tree]** - Target expression tree produced by the compiler
//!
//! ## Quick Start
//!
//! ```text
//! Hello #{user.name}, you have ${count} new messages
//! ```
//!
//! This template text holds three literal runs and two bracketed expressions.
//! It compiles to a left-associative concatenation:
//!
//! ```text
//! "Hello " + user.name + ", you have " + count + " new messages"
//! ```
//!
//! ## Core Concepts
//!
//! ### Composite Expressions
//!
//! Every input string is a sequence of items:
//!
//! - **Literal text** - copied verbatim into a string constant
//! - **Deferred** `#{...}` - an embedded expression
//! - **Dynamic** `${...}` - an embedded expression, same grammar and meaning
//!
//! ### Right-Recursive Operators
//!
//! The right-hand side of a binary operator is a full expression, and the
//! ternary suffix follows the binary suffix at the same level. Operators
//! therefore bind to the right:
//!
//! ```text
//! #{a && b ? c : d == e}   =>   a && (b ? c : (d == e))
//! ```
//!
//! ## Examples
//!
//! ### Property Paths
//!
//! ```text
//! #{order.customer.name}
//! ```
//!
//! ### Emptiness Check
//!
//! ```text
//! #{empty cart.items ? 'Your cart is empty' : cart.total}
//! ```
pub mod cst;
pub mod operators;
pub mod tokens;
pub mod tree;

pub use cst::{CompositeExpression, Expression, Item, Value, ValuePrefix};
pub use operators::{BinaryOp, UnaryOp};
pub use tokens::{LexerMode, Token, TokenKind};
pub use tree::{OutputBinOp, OutputExpr};
