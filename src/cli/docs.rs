//! Documentation content for elc CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ELC DOCUMENTATION

elc compiles template text with embedded #{...} and ${...} expressions into
an expression tree, printed as TypeScript-style source or as JSON.

DOCUMENTATION CATEGORIES

  syntax            Literal text, delimiters, values and property paths
  operators         Unary, binary and ternary operators and how they bind
  errors            Lex, parse and translate errors

QUICK REFERENCE

  Hello #{name}     Literal text followed by an expression
  ${a.b.c}          Property path
  #{not a}          Negation
  #{empty list}     isEmpty(list)
  #{a ? b : c}      Conditional

Run 'elc doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Template Text and Values

COMPOSITE EXPRESSIONS
  Input is a sequence of literal text and bracketed expressions:

    Dear #{user.name}, your order ${order.id} has shipped

  Several items are concatenated left to right with +:

    "Dear " + user.name + ", your order " + order.id + " has shipped"

DELIMITERS
  #{ ... }          Deferred expression
  ${ ... }          Dynamic expression
  Both take the same grammar and compile to the same tree.

  A # or $ not followed by { is plain text:  Price: 5$
  Braces outside an expression are errors:  a { b

VALUES
  true false        Boolean literals
  123               Integer literal (digits kept as written)
  "apple" 'apple'   String literals, both compile to "apple"
  name              Identifier
  a.b.c             Property path on any value
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Unary, Binary and Ternary

UNARY
  not a   !a        Logical negation        => !a
  empty a           Emptiness check         => isEmpty(a)
  -a                Parsed, but rejected when compiling

BINARY
  and  &&           Logical and             => &&
  or   ||           Logical or              => ||
  eq   ==           Equality                => ===
  ne   !=           Inequality              => !==
  gt   >            Greater than            => >
  lt   <            Less than               => <

TERNARY
  cond ? a : b      Conditional

BINDING
  The right side of a binary operator is a whole expression, and a ternary
  follows the binary part. Everything binds to the right:

    #{a && b ? c : d == e}   =>   a && (b ? c : d === e)
    #{not a or b}            =>   !(a || b)
"#;

const ERRORS_DOC: &str = r#"ERRORS - What Can Go Wrong

LEX ERRORS
  unexpected character      No token matches, e.g. #{a = b} or #{a {}
  unbalanced '}'            A } with no open #{ or ${, e.g. a}b

PARSE ERRORS
  expected '}'              Unterminated expression, e.g. #{foobar
  expected an expression    Missing operand, e.g. #{a &&}
  nesting exceeds limit     Deeper than --max-depth

TRANSLATE ERRORS
  unsupported operator '-'  Numeric negation has no translation yet

Errors never produce a partial tree. Use 'elc compile --fallback' to emit
the input as a string constant instead.
"#;
