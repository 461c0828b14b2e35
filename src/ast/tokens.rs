use std::fmt;

/// Scanning mode of the lexer.
///
/// The lexer keeps these on a stack: `Outer` is the permanent floor, and each
/// `#{` or `${` pushes an expression mode that the matching `}` pops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexerMode {
    /// Plain template text and expression starters
    Outer,
    /// Inside `#{ ... }`
    Deferred,
    /// Inside `${ ... }`
    Dynamic,
}

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Spaces, tabs and newlines inside an expression. Never reaches the parser.
    Whitespace,

    // Literals
    /// `true` or `false`
    BooleanLiteral,

    /// String literal enclosed in double quotes
    ///
    /// # Examples
    /// ```text
    /// "apple"
    /// "say \"hi\""
    /// ```
    DoubleQuoteString,

    /// String literal enclosed in single quotes
    ///
    /// # Examples
    /// ```text
    /// 'apple'
    /// ```
    SingleQuoteString,

    /// Unsigned run of decimal digits
    Integer,

    /// A run of template text outside any expression
    ///
    /// # Examples
    /// ```text
    /// Hello,
    /// Price: 5$ (a lone `$` stays literal)
    /// ```
    LiteralText,

    // Delimiters
    /// `#{` - opens a deferred expression
    StartDeferred,

    /// `${` - opens a dynamic expression
    StartDynamic,

    /// `}` - closes the innermost expression
    RCurl,

    /// `:` - separates the branches of a ternary
    Colon,

    /// `.` - property access
    Dot,

    /// `?` - starts a ternary suffix
    Question,

    // Unary operators
    /// `-`
    Minus,

    /// `!` or `not`
    Not,

    /// `empty`
    Empty,

    // Binary operators
    /// `or` or `||`
    Or,

    /// `and` or `&&`
    And,

    /// `==` or `eq`
    Eq,

    /// `!=` or `ne`
    NotEq,

    /// `>` or `gt`
    Gt,

    /// `<` or `lt`
    Lt,

    /// Field or variable name
    ///
    /// Must start with an ASCII letter, followed by letters, digits, or underscores.
    Identifier,

    /// `(`
    LParen,

    /// `)`
    RParen,
}

impl TokenKind {
    /// Human readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::DoubleQuoteString | TokenKind::SingleQuoteString => "string literal",
            TokenKind::Integer => "integer literal",
            TokenKind::LiteralText => "literal text",
            TokenKind::StartDeferred => "'#{'",
            TokenKind::StartDynamic => "'${'",
            TokenKind::RCurl => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::Question => "'?'",
            TokenKind::Minus => "'-'",
            TokenKind::Not => "'not'",
            TokenKind::Empty => "'empty'",
            TokenKind::Or => "'or'",
            TokenKind::And => "'and'",
            TokenKind::Eq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Gt => "'>'",
            TokenKind::Lt => "'<'",
            TokenKind::Identifier => "identifier",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: String,
    /// The mode the lexer was in when it matched this token.
    pub mode: LexerMode,
    /// Byte offset of the first character in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, mode: LexerMode, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            mode,
            offset,
        }
    }
}
