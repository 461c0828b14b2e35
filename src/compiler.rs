//! Translation of the concrete syntax tree into the target expression tree,
//! and the [`Compiler`] entry point that runs the whole pipeline.

use crate::{
    ast::{
        BinaryOp, CompositeExpression, Expression, Item, OutputBinOp, OutputExpr, UnaryOp, Value,
        ValuePrefix,
    },
    error::{Error, Result, TranslateError},
    lexer::Lexer,
    options::CompilerOptions,
    parser::Parser,
};

/// Translates a parsed composite expression with default options.
pub fn translate(cst: &CompositeExpression) -> std::result::Result<OutputExpr, TranslateError> {
    translate_with(cst, &CompilerOptions::default())
}

/// Translates a parsed composite expression.
///
/// One item yields that item's expression, several items are folded left to
/// right into `+` concatenations, and no items yield the empty string.
pub fn translate_with(
    cst: &CompositeExpression,
    options: &CompilerOptions,
) -> std::result::Result<OutputExpr, TranslateError> {
    let translator = Translator { options };

    let mut items = cst.items.iter();
    let Some(first) = items.next() else {
        return Ok(OutputExpr::string(""));
    };

    let mut result = translator.item(first)?;
    for item in items {
        result = OutputExpr::concat(result, translator.item(item)?);
    }
    Ok(result)
}

struct Translator<'a> {
    options: &'a CompilerOptions,
}

impl Translator<'_> {
    fn item(&self, item: &Item) -> std::result::Result<OutputExpr, TranslateError> {
        match item {
            Item::Literal(text) => Ok(OutputExpr::string(text.as_str())),
            Item::Deferred(expr) | Item::Dynamic(expr) => self.expression(expr),
        }
    }

    fn expression(&self, expr: &Expression) -> std::result::Result<OutputExpr, TranslateError> {
        match expr {
            Expression::Value(value) => Ok(self.value(value)),
            Expression::Unary { op, operand } => {
                let operand = self.expression(operand)?;
                match op {
                    UnaryOp::Empty => Ok(OutputExpr::call(
                        self.options.empty_helper.as_str(),
                        vec![operand],
                    )),
                    UnaryOp::Not => Ok(OutputExpr::not(operand)),
                    // Numeric negation has no agreed meaning yet
                    UnaryOp::Minus => Err(TranslateError::UnsupportedOperator {
                        operator: op.symbol().to_string(),
                    }),
                }
            }
            Expression::Binary { op, lhs, rhs } => Ok(OutputExpr::binary(
                binary_op(*op),
                self.expression(lhs)?,
                self.expression(rhs)?,
            )),
            Expression::Ternary {
                condition,
                consequent,
                alternate,
            } => Ok(OutputExpr::conditional(
                self.expression(condition)?,
                self.expression(consequent)?,
                self.expression(alternate)?,
            )),
        }
    }

    fn value(&self, value: &Value) -> OutputExpr {
        let prefix = match &value.prefix {
            ValuePrefix::Boolean(b) => OutputExpr::BooleanLiteral(*b),
            ValuePrefix::Integer(digits) => OutputExpr::number(digits.as_str()),
            ValuePrefix::String(raw) => OutputExpr::string(strip_quotes(raw)),
            ValuePrefix::Identifier(name) => OutputExpr::ident(name.as_str()),
        };

        value
            .properties
            .iter()
            .fold(prefix, |object, property| {
                OutputExpr::property(object, property.as_str())
            })
    }
}

fn binary_op(op: BinaryOp) -> OutputBinOp {
    match op {
        BinaryOp::And => OutputBinOp::LogicalAnd,
        BinaryOp::Or => OutputBinOp::LogicalOr,
        BinaryOp::Eq => OutputBinOp::StrictEquals,
        BinaryOp::NotEq => OutputBinOp::StrictNotEquals,
        BinaryOp::Gt => OutputBinOp::GreaterThan,
        BinaryOp::Lt => OutputBinOp::LessThan,
    }
}

/// Drops the first and last character of a quoted literal.
fn strip_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Compiles template text into an [`OutputExpr`].
///
/// A `Compiler` only holds its options. Each call builds its own lexer and
/// parser, so one instance can be shared freely, including across threads.
///
/// # Examples
///
/// ```
/// use el_compiler::{Compiler, OutputExpr};
///
/// let compiler = Compiler::default();
/// let tree = compiler.compile("#{user.name}").unwrap();
/// assert_eq!(tree, OutputExpr::property(OutputExpr::ident("user"), "name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Compiler { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Lexes, parses and translates `input`.
    pub fn compile(&self, input: &str) -> Result<OutputExpr> {
        if input.len() > self.options.max_input_len {
            return Err(Error::InputTooLarge {
                len: input.len(),
                limit: self.options.max_input_len,
            });
        }

        let tokens = Lexer::new(input).tokenize()?;
        let cst = Parser::with_max_depth(tokens, self.options.max_depth).parse()?;
        let tree = translate_with(&cst, &self.options)?;
        tracing::debug!(input_len = input.len(), "compiled expression");
        Ok(tree)
    }
}

/// Compiles `input` with default options.
pub fn to_tree(input: &str) -> Result<OutputExpr> {
    Compiler::default().compile(input)
}
