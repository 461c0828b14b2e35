use crate::ast::{BinaryOp, UnaryOp};

/// Root of the concrete syntax tree: one parsed template string.
///
/// # Example
/// ```text
/// Total: #{cart.total}
/// ```
/// parses to `[Literal("Total: "), Deferred(cart.total)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeExpression {
    pub items: Vec<Item>,
}

/// A fragment of a composite expression, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Template text outside any expression
    Literal(String),

    /// `#{ expression }`
    Deferred(Expression),

    /// `${ expression }`
    Dynamic(Expression),
}

impl Item {
    /// The embedded expression, if this item is bracketed.
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Item::Literal(_) => None,
            Item::Deferred(expr) | Item::Dynamic(expr) => Some(expr),
        }
    }
}

/// An expression inside `#{}` or `${}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal or identifier followed by property accesses
    Value(Value),

    /// Prefix operator applied to a full expression
    ///
    /// # Examples
    /// ```text
    /// not a
    /// empty list
    /// ```
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Binary operation; `rhs` is a full expression, so chains nest to the right
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// `condition ? consequent : alternate`
    Ternary {
        condition: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
}

impl Expression {
    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn ternary(condition: Expression, consequent: Expression, alternate: Expression) -> Self {
        Expression::Ternary {
            condition: Box::new(condition),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }
}

/// A value prefix followed by zero or more `.identifier` accesses.
///
/// # Examples
/// ```text
/// user                 // prefix only
/// order.customer.name  // Identifier("order") + ["customer", "name"]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub prefix: ValuePrefix,
    pub properties: Vec<String>,
}

impl Value {
    pub fn new(prefix: ValuePrefix) -> Self {
        Value {
            prefix,
            properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValuePrefix {
    Boolean(bool),

    /// Digits exactly as written in the source
    Integer(String),

    /// Source text of the string literal, quotes included
    String(String),

    Identifier(String),
}
