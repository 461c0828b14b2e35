/// Binary operators of the target expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputBinOp {
    /// String concatenation (`+`)
    Add,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `===`
    StrictEquals,
    /// `!==`
    StrictNotEquals,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
}

impl OutputBinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            OutputBinOp::Add => "+",
            OutputBinOp::LogicalAnd => "&&",
            OutputBinOp::LogicalOr => "||",
            OutputBinOp::StrictEquals => "===",
            OutputBinOp::StrictNotEquals => "!==",
            OutputBinOp::GreaterThan => ">",
            OutputBinOp::LessThan => "<",
        }
    }
}

/// Target-language expression produced by the compiler.
///
/// This is the only artifact handed to the caller, which splices it into its
/// own generated program.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputExpr {
    /// String constant, already unquoted
    StringLiteral(String),

    /// Numeric constant in its source spelling
    NumericLiteral(String),

    BooleanLiteral(bool),

    /// Reference to a name in scope
    Identifier(String),

    /// `object.property`
    PropertyAccess {
        object: Box<OutputExpr>,
        property: String,
    },

    Binary {
        op: OutputBinOp,
        left: Box<OutputExpr>,
        right: Box<OutputExpr>,
    },

    /// `!operand`
    LogicalNot(Box<OutputExpr>),

    /// `test ? consequent : alternate`
    Conditional {
        test: Box<OutputExpr>,
        consequent: Box<OutputExpr>,
        alternate: Box<OutputExpr>,
    },

    /// Call to a named helper, e.g. `isEmpty(list)`
    Call {
        callee: String,
        args: Vec<OutputExpr>,
    },
}

impl OutputExpr {
    pub fn string(value: impl Into<String>) -> Self {
        OutputExpr::StringLiteral(value.into())
    }

    pub fn number(digits: impl Into<String>) -> Self {
        OutputExpr::NumericLiteral(digits.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        OutputExpr::Identifier(name.into())
    }

    pub fn property(object: OutputExpr, property: impl Into<String>) -> Self {
        OutputExpr::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn binary(op: OutputBinOp, left: OutputExpr, right: OutputExpr) -> Self {
        OutputExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Concatenation node, `left + right`
    pub fn concat(left: OutputExpr, right: OutputExpr) -> Self {
        OutputExpr::binary(OutputBinOp::Add, left, right)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: OutputExpr) -> Self {
        OutputExpr::LogicalNot(Box::new(operand))
    }

    pub fn conditional(test: OutputExpr, consequent: OutputExpr, alternate: OutputExpr) -> Self {
        OutputExpr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn call(callee: impl Into<String>, args: Vec<OutputExpr>) -> Self {
        OutputExpr::Call {
            callee: callee.into(),
            args,
        }
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(self, OutputExpr::StringLiteral(_))
    }
}
