//! Mode-aware tokenizer for template text.
//!
//! Outside expressions the lexer only looks for `#{` and `${` and gathers
//! everything else into literal text. Inside an expression it tries an ordered
//! table of patterns; keyword rules name the rules that take over when those
//! match a longer text, so `android` is an identifier rather than `and` + `roid`.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{LexerMode, Token, TokenKind};
use crate::error::LexError;

struct Rule {
    kind: TokenKind,
    pattern: Regex,
    /// Rules that win over this one when they match more text
    longer_alt: &'static [TokenKind],
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str, longer_alt: &'static [TokenKind]) -> Self {
        Rule {
            kind,
            pattern: Regex::new(&format!("^(?:{})", pattern)).expect("token pattern is valid"),
            longer_alt,
        }
    }

    fn match_len(&self, text: &str) -> Option<usize> {
        self.pattern.find(text).map(|m| m.end())
    }
}

const IDENT: &[TokenKind] = &[TokenKind::Identifier];

/// Expression mode rules, in priority order.
static EXPRESSION_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(TokenKind::Whitespace, r"\s+", &[]),
        Rule::new(TokenKind::BooleanLiteral, r"true|false", IDENT),
        Rule::new(TokenKind::DoubleQuoteString, r#""(?:\\.|[^"])*""#, &[]),
        Rule::new(TokenKind::SingleQuoteString, r"'(?:\\.|[^'])*'", &[]),
        Rule::new(TokenKind::Integer, r"[0-9]+", &[]),
        Rule::new(TokenKind::RCurl, r"\}", &[]),
        Rule::new(TokenKind::Colon, r":", &[]),
        Rule::new(TokenKind::Dot, r"\.", &[]),
        Rule::new(TokenKind::Minus, r"-", &[]),
        Rule::new(
            TokenKind::Not,
            r"!|not",
            &[TokenKind::NotEq, TokenKind::Identifier],
        ),
        Rule::new(TokenKind::Empty, r"empty", IDENT),
        Rule::new(TokenKind::Question, r"\?", &[]),
        Rule::new(TokenKind::Or, r"or|\|\|", IDENT),
        Rule::new(TokenKind::And, r"and|&&", IDENT),
        Rule::new(TokenKind::Eq, r"==|eq", IDENT),
        Rule::new(TokenKind::NotEq, r"!=|ne", IDENT),
        Rule::new(TokenKind::Gt, r">|gt", IDENT),
        Rule::new(TokenKind::Lt, r"<|lt", IDENT),
        Rule::new(TokenKind::Identifier, r"[a-zA-Z][a-zA-Z0-9_]*", &[]),
        Rule::new(TokenKind::LParen, r"\(", &[]),
        Rule::new(TokenKind::RParen, r"\)", &[]),
    ]
});

fn rule_for(kind: TokenKind) -> Option<&'static Rule> {
    EXPRESSION_RULES.iter().find(|rule| rule.kind == kind)
}

/// First matching rule wins, unless one of its longer alternatives matches more.
fn match_expression_token(text: &str) -> Option<(TokenKind, usize)> {
    for rule in EXPRESSION_RULES.iter() {
        let Some(len) = rule.match_len(text) else {
            continue;
        };

        let mut best = (rule.kind, len);
        for alt in rule.longer_alt {
            if let Some(alt_len) = rule_for(*alt).and_then(|r| r.match_len(text))
                && alt_len > best.1
            {
                best = (*alt, alt_len);
            }
        }
        return Some(best);
    }
    None
}

/// Length of the literal run at the start of `text`.
///
/// The run stops before `{`, `}` and a `#` or `$` that opens an expression.
/// A `#` or `$` followed by anything else is ordinary text.
fn literal_run_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'{' | b'}' => break,
            b'#' | b'$' if bytes.get(end + 1) == Some(&b'{') => break,
            _ => end += 1,
        }
    }
    end
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    mode_stack: Vec<LexerMode>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            mode_stack: vec![LexerMode::Outer],
        }
    }

    fn mode(&self) -> LexerMode {
        *self.mode_stack.last().unwrap_or(&LexerMode::Outer)
    }

    fn push_mode(&mut self, mode: LexerMode) {
        tracing::trace!(?mode, depth = self.mode_stack.len(), "push lexer mode");
        self.mode_stack.push(mode);
    }

    fn pop_mode(&mut self, offset: usize) -> Result<(), LexError> {
        // Outer is the floor of the stack
        if self.mode_stack.len() <= 1 {
            return Err(LexError::UnbalancedBrace { offset });
        }
        self.mode_stack.pop();
        Ok(())
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Number of expressions still open.
    pub fn open_expressions(&self) -> usize {
        self.mode_stack.len() - 1
    }

    /// Next token including whitespace, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.position >= self.input.len() {
            return Ok(None);
        }

        let start = self.position;
        let mode = self.mode();
        let (kind, len) = match mode {
            LexerMode::Outer => self.lex_outer()?,
            LexerMode::Deferred | LexerMode::Dynamic => self.lex_expression()?,
        };

        self.position += len;
        let token = Token::new(kind, &self.input[start..self.position], mode, start);
        tracing::trace!(kind = ?token.kind, text = %token.text, offset = start, "token");
        Ok(Some(token))
    }

    fn lex_outer(&mut self) -> Result<(TokenKind, usize), LexError> {
        let rest = self.remaining();

        if rest.starts_with("#{") {
            self.push_mode(LexerMode::Deferred);
            Ok((TokenKind::StartDeferred, 2))
        } else if rest.starts_with("${") {
            self.push_mode(LexerMode::Dynamic);
            Ok((TokenKind::StartDynamic, 2))
        } else if rest.starts_with('}') {
            Err(LexError::UnbalancedBrace {
                offset: self.position,
            })
        } else if rest.starts_with('{') {
            Err(LexError::UnexpectedCharacter {
                character: '{',
                offset: self.position,
            })
        } else {
            Ok((TokenKind::LiteralText, literal_run_len(rest)))
        }
    }

    fn lex_expression(&mut self) -> Result<(TokenKind, usize), LexError> {
        let rest = self.remaining();

        let Some((kind, len)) = match_expression_token(rest) else {
            return Err(LexError::UnexpectedCharacter {
                character: rest.chars().next().unwrap_or_default(),
                offset: self.position,
            });
        };

        if kind == TokenKind::RCurl {
            self.pop_mode(self.position)?;
        }
        Ok((kind, len))
    }

    /// Tokenizes the entire input, dropping whitespace.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            if token.kind != TokenKind::Whitespace {
                tokens.push(token);
            }
        }
        tracing::debug!(
            tokens = tokens.len(),
            open = self.open_expressions(),
            "tokenized input"
        );
        Ok(tokens)
    }
}

/// Tokenizes `input` with a fresh lexer.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
