use crate::{
    ast::{
        BinaryOp, CompositeExpression, Expression, Item, Token, TokenKind, UnaryOp, Value,
        ValuePrefix,
    },
    error::ParseError,
    options::DEFAULT_MAX_DEPTH,
};

/// Recursive-descent parser over a whitespace-free token stream.
///
/// Grammar:
///
/// ```text
/// compositeExpression := item*
/// item                := '#{' expression '}' | '${' expression '}' | TEXT
/// expression          := (value | unary) binarySuffix? ternarySuffix?
/// binarySuffix        := ('and'|'or'|'=='|'!='|'>'|'<') expression
/// ternarySuffix       := '?' expression ':' expression
/// unary               := ('-'|'!'|'not'|'empty') expression
/// value               := valuePrefix ('.' identifier)*
/// valuePrefix         := boolean | integer | string | identifier
/// ```
///
/// A failed item is recorded and the parser skips past the next `}` to keep
/// looking for further errors. Any recorded error fails the whole parse.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    max_depth: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Parser {
            tokens,
            position: 0,
            max_depth,
            errors: Vec::new(),
        }
    }

    /// Every error collected by the last call to [`Parser::parse`].
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes the current token and returns its text.
    fn take_text(&mut self) -> String {
        let text = self
            .current()
            .map(|token| token.text.clone())
            .unwrap_or_default();
        self.advance();
        text
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::Unexpected {
                expected: expected.to_string(),
                found: token.kind.label().to_string(),
                text: token.text.clone(),
                offset: token.offset,
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if !self.check(kind) {
            return Err(self.unexpected(kind.label()));
        }
        self.advance();
        Ok(())
    }

    /// Skips past the next `}` so parsing can resume at the following item.
    fn recover(&mut self) {
        while let Some(kind) = self.current_kind() {
            self.advance();
            if kind == TokenKind::RCurl {
                break;
            }
        }
    }

    /// Parses the whole token stream as a composite expression.
    ///
    /// Returns the first error when any item fails; the rest are available
    /// through [`Parser::errors`].
    pub fn parse(&mut self) -> Result<CompositeExpression, ParseError> {
        self.position = 0;
        self.errors.clear();

        let mut items = vec![];
        while let Some(kind) = self.current_kind() {
            let item = match kind {
                TokenKind::StartDeferred => self.parse_bracketed().map(Item::Deferred),
                TokenKind::StartDynamic => self.parse_bracketed().map(Item::Dynamic),
                TokenKind::LiteralText => Ok(Item::Literal(self.take_text())),
                _ => Err(self.unexpected("literal text, '#{' or '${'")),
            };

            match item {
                Ok(item) => items.push(item),
                Err(error) => {
                    tracing::debug!(%error, "parse error, skipping to next '}}'");
                    self.errors.push(error);
                    self.recover();
                }
            }
        }

        if let Some(first) = self.errors.first() {
            return Err(first.clone());
        }
        tracing::debug!(items = items.len(), "parsed composite expression");
        Ok(CompositeExpression { items })
    }

    /// `'#{' expression '}'` or `'${' expression '}'`
    fn parse_bracketed(&mut self) -> Result<Expression, ParseError> {
        self.advance(); // consume '#{' or '${'
        let expr = self.parse_expression(1)?;
        self.expect(TokenKind::RCurl)?;
        Ok(expr)
    }

    fn parse_expression(&mut self, depth: usize) -> Result<Expression, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                offset: self.current().map_or(0, |token| token.offset),
            });
        }

        let mut expr = match self.current_kind().and_then(UnaryOp::from_token) {
            Some(op) => {
                self.advance();
                let operand = self.parse_expression(depth + 1)?;
                Expression::unary(op, operand)
            }
            None => Expression::Value(self.parse_value()?),
        };

        // The right-hand side is a full expression, so it also absorbs any
        // ternary that follows.
        if let Some(op) = self.current_kind().and_then(BinaryOp::from_token) {
            self.advance();
            let rhs = self.parse_expression(depth + 1)?;
            expr = Expression::binary(op, expr, rhs);
        }

        if self.check(TokenKind::Question) {
            self.advance();
            let consequent = self.parse_expression(depth + 1)?;
            self.expect(TokenKind::Colon)?;
            let alternate = self.parse_expression(depth + 1)?;
            expr = Expression::ternary(expr, consequent, alternate);
        }

        Ok(expr)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let prefix = match self.current_kind() {
            Some(TokenKind::BooleanLiteral) => ValuePrefix::Boolean(self.take_text() == "true"),
            Some(TokenKind::Integer) => ValuePrefix::Integer(self.take_text()),
            Some(TokenKind::DoubleQuoteString | TokenKind::SingleQuoteString) => {
                ValuePrefix::String(self.take_text())
            }
            Some(TokenKind::Identifier) => ValuePrefix::Identifier(self.take_text()),
            _ => return Err(self.unexpected("an expression")),
        };

        let mut value = Value::new(prefix);
        while self.check(TokenKind::Dot) {
            self.advance(); // consume '.'
            if !self.check(TokenKind::Identifier) {
                return Err(self.unexpected("identifier after '.'"));
            }
            value.properties.push(self.take_text());
        }
        Ok(value)
    }
}

/// Parses `tokens` with a fresh parser and the default depth limit.
pub fn parse(tokens: Vec<Token>) -> Result<CompositeExpression, ParseError> {
    Parser::new(tokens).parse()
}
