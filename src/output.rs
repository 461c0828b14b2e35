//! Rendering of compiled expression trees.
//!
//! The caller normally splices an [`OutputExpr`] into its own syntax tree and
//! prints it with its own printer. The renderers here exist for inspection,
//! for the `elc` binary and for tests.
//!
//! # Features
//!
//! - **Source output** via [`to_source()`] - TypeScript-style text with only the parentheses the tree needs
//! - **Compact JSON** via [`to_json()`] - ESTree-shaped node objects
//! - **Pretty JSON** via [`to_json_pretty()`] - same shape with 2-space indentation
//!
//! # Examples
//!
//! ```
//! use el_compiler::to_tree;
//! use el_compiler::output::to_source;
//!
//! let tree = to_tree("#{foobar && 123 ? 1 : 2 == a.b.c}").unwrap();
//! assert_eq!(to_source(&tree), "foobar && (123 ? 1 : 2 === a.b.c)");
//! ```

use serde_json::json;

use crate::ast::{OutputBinOp, OutputExpr};

// Binding strength, loosest first
const CONDITIONAL: u8 = 1;
const LOGICAL_OR: u8 = 2;
const LOGICAL_AND: u8 = 3;
const EQUALITY: u8 = 4;
const RELATIONAL: u8 = 5;
const ADDITIVE: u8 = 6;
const PREFIX: u8 = 7;
const POSTFIX: u8 = 8;
const PRIMARY: u8 = 9;

fn binary_precedence(op: OutputBinOp) -> u8 {
    match op {
        OutputBinOp::LogicalOr => LOGICAL_OR,
        OutputBinOp::LogicalAnd => LOGICAL_AND,
        OutputBinOp::StrictEquals | OutputBinOp::StrictNotEquals => EQUALITY,
        OutputBinOp::GreaterThan | OutputBinOp::LessThan => RELATIONAL,
        OutputBinOp::Add => ADDITIVE,
    }
}

fn precedence(expr: &OutputExpr) -> u8 {
    match expr {
        OutputExpr::Conditional { .. } => CONDITIONAL,
        OutputExpr::Binary { op, .. } => binary_precedence(*op),
        OutputExpr::LogicalNot(_) => PREFIX,
        OutputExpr::PropertyAccess { .. } | OutputExpr::Call { .. } => POSTFIX,
        OutputExpr::StringLiteral(_)
        | OutputExpr::NumericLiteral(_)
        | OutputExpr::BooleanLiteral(_)
        | OutputExpr::Identifier(_) => PRIMARY,
    }
}

pub struct SourcePrinter;

impl SourcePrinter {
    pub fn print(&self, expr: &OutputExpr) -> String {
        self.print_expr(expr, CONDITIONAL)
    }

    /// Prints `expr`, parenthesized when it binds looser than `min`.
    fn print_expr(&self, expr: &OutputExpr, min: u8) -> String {
        let text = match expr {
            OutputExpr::StringLiteral(s) => format!("\"{}\"", self.escape_string(s)),
            OutputExpr::NumericLiteral(digits) => digits.clone(),
            OutputExpr::BooleanLiteral(b) => b.to_string(),
            OutputExpr::Identifier(name) => name.clone(),
            OutputExpr::PropertyAccess { object, property } => {
                // `1.a` would read as a decimal point
                let object = match object.as_ref() {
                    OutputExpr::NumericLiteral(digits) => format!("({})", digits),
                    other => self.print_expr(other, POSTFIX),
                };
                format!("{}.{}", object, property)
            }
            OutputExpr::Binary { op, left, right } => {
                let prec = binary_precedence(*op);
                format!(
                    "{} {} {}",
                    self.print_expr(left, prec),
                    op.symbol(),
                    self.print_expr(right, prec + 1)
                )
            }
            OutputExpr::LogicalNot(operand) => format!("!{}", self.print_expr(operand, PREFIX)),
            OutputExpr::Conditional {
                test,
                consequent,
                alternate,
            } => format!(
                "{} ? {} : {}",
                self.print_expr(test, LOGICAL_OR),
                self.print_expr(consequent, CONDITIONAL),
                self.print_expr(alternate, CONDITIONAL)
            ),
            OutputExpr::Call { callee, args } => {
                let args: Vec<String> = args
                    .iter()
                    .map(|arg| self.print_expr(arg, CONDITIONAL))
                    .collect();
                format!("{}({})", callee, args.join(", "))
            }
        };

        if precedence(expr) < min {
            format!("({})", text)
        } else {
            text
        }
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
                c => vec![c],
            })
            .collect()
    }
}

/// Converts an expression tree to a `serde_json::Value` node.
pub fn to_json_value(expr: &OutputExpr) -> serde_json::Value {
    match expr {
        OutputExpr::StringLiteral(s) => json!({ "type": "StringLiteral", "value": s }),
        OutputExpr::NumericLiteral(digits) => json!({ "type": "NumericLiteral", "value": digits }),
        OutputExpr::BooleanLiteral(b) => json!({ "type": "BooleanLiteral", "value": b }),
        OutputExpr::Identifier(name) => json!({ "type": "Identifier", "name": name }),
        OutputExpr::PropertyAccess { object, property } => json!({
            "type": "PropertyAccessExpression",
            "object": to_json_value(object),
            "property": property,
        }),
        OutputExpr::Binary { op, left, right } => json!({
            "type": "BinaryExpression",
            "operator": op.symbol(),
            "left": to_json_value(left),
            "right": to_json_value(right),
        }),
        OutputExpr::LogicalNot(operand) => json!({
            "type": "PrefixUnaryExpression",
            "operator": "!",
            "operand": to_json_value(operand),
        }),
        OutputExpr::Conditional {
            test,
            consequent,
            alternate,
        } => json!({
            "type": "ConditionalExpression",
            "test": to_json_value(test),
            "consequent": to_json_value(consequent),
            "alternate": to_json_value(alternate),
        }),
        OutputExpr::Call { callee, args } => json!({
            "type": "CallExpression",
            "callee": callee,
            "arguments": args.iter().map(to_json_value).collect::<Vec<_>>(),
        }),
    }
}

// Convenience functions

/// Renders an expression tree as TypeScript-style source text.
///
/// Equality prints as `===`/`!==`, strings are double-quoted, and
/// parentheses appear only where the tree shape needs them.
pub fn to_source(expr: &OutputExpr) -> String {
    SourcePrinter.print(expr)
}

/// Converts an expression tree to compact JSON.
///
/// # Examples
///
/// ```
/// use el_compiler::OutputExpr;
/// use el_compiler::output::to_json;
///
/// let json = to_json(&OutputExpr::ident("a"));
/// assert_eq!(json, r#"{"name":"a","type":"Identifier"}"#);
/// ```
pub fn to_json(expr: &OutputExpr) -> String {
    to_json_value(expr).to_string()
}

/// Converts an expression tree to JSON with 2-space indentation.
pub fn to_json_pretty(expr: &OutputExpr) -> String {
    format!("{:#}", to_json_value(expr))
}
