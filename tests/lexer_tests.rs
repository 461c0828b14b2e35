// tests/lexer_tests.rs

use el_compiler::ast::{LexerMode, Token, TokenKind};
use el_compiler::error::LexError;
use el_compiler::lexer::{Lexer, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

/// Kinds of the tokens between `#{` and `}`.
fn expr_kinds(inner: &str) -> Vec<TokenKind> {
    let all = kinds(&format!("#{{{}}}", inner));
    assert_eq!(all.first(), Some(&TokenKind::StartDeferred));
    assert_eq!(all.last(), Some(&TokenKind::RCurl));
    all[1..all.len() - 1].to_vec()
}

// ============================================================================
// Outer Mode
// ============================================================================

#[test]
fn test_plain_text_is_one_token() {
    let tokens = tokenize("volkswagen golf").unwrap();
    assert_eq!(
        tokens,
        vec![Token::new(
            TokenKind::LiteralText,
            "volkswagen golf",
            LexerMode::Outer,
            0
        )]
    );
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert_eq!(tokenize("").unwrap(), vec![]);
}

#[test]
fn test_lone_hash_and_dollar_are_literal() {
    let test_cases = vec!["#", "$", "price: 5$", "item #1", "a#b$c", "ends with #", "$$", "##"];

    for input in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 1, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, TokenKind::LiteralText);
        assert_eq!(tokens[0].text, input);
    }
}

#[test]
fn test_hash_right_before_expression() {
    let tokens = tokenize("##{a}").unwrap();
    assert_eq!(tokens[0].text, "#");
    assert_eq!(tokens[1].kind, TokenKind::StartDeferred);
    assert_eq!(tokens[1].offset, 1);
}

#[test]
fn test_open_brace_outside_expressions_is_rejected() {
    let test_cases = vec![("{", 0), ("a{b", 1), ("a { b", 2), ("#{x} {", 5), ("#a{", 2)];

    for (input, offset) in test_cases {
        assert_eq!(
            tokenize(input).unwrap_err(),
            LexError::UnexpectedCharacter {
                character: '{',
                offset
            },
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_literal_text_keeps_whitespace_and_newlines() {
    let tokens = tokenize("  line one\n\tline two  ").unwrap();
    assert_eq!(tokens[0].text, "  line one\n\tline two  ");
}

#[test]
fn test_unicode_literal_text() {
    let tokens = tokenize("Grüße, #{name} – ok").unwrap();
    assert_eq!(tokens[0].text, "Grüße, ");
    assert_eq!(tokens.last().unwrap().text, " – ok");
}

// ============================================================================
// Mode Switching
// ============================================================================

#[test]
fn test_deferred_and_dynamic_starters() {
    assert_eq!(
        kinds("#{one}${two}three#{four}"),
        vec![
            TokenKind::StartDeferred,
            TokenKind::Identifier,
            TokenKind::RCurl,
            TokenKind::StartDynamic,
            TokenKind::Identifier,
            TokenKind::RCurl,
            TokenKind::LiteralText,
            TokenKind::StartDeferred,
            TokenKind::Identifier,
            TokenKind::RCurl,
        ]
    );
}

#[test]
fn test_token_modes() {
    let tokens = tokenize("a#{b}${c}").unwrap();
    let modes: Vec<LexerMode> = tokens.iter().map(|t| t.mode).collect();
    assert_eq!(
        modes,
        vec![
            LexerMode::Outer,
            LexerMode::Outer,
            LexerMode::Deferred,
            LexerMode::Deferred,
            LexerMode::Outer,
            LexerMode::Dynamic,
            LexerMode::Dynamic,
        ]
    );
}

#[test]
fn test_expression_text_is_not_literal() {
    // Inside an expression, `#` has no pattern
    let err = tokenize("#{a # b}").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            character: '#',
            offset: 4
        }
    );
}

#[test]
fn test_unterminated_expression_lexes() {
    // The missing '}' is reported by the parser
    assert_eq!(
        kinds("#{foobar"),
        vec![TokenKind::StartDeferred, TokenKind::Identifier]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unbalanced_closing_brace() {
    assert_eq!(
        tokenize("a}b").unwrap_err(),
        LexError::UnbalancedBrace { offset: 1 }
    );
    assert_eq!(
        tokenize("#{a}}").unwrap_err(),
        LexError::UnbalancedBrace { offset: 4 }
    );
}

#[test]
fn test_unexpected_characters_in_expression() {
    let test_cases = vec![
        ("#{a = b}", '=', 4),
        ("#{a {}", '{', 4),
        ("#{@}", '@', 2),
        ("#{a ; b}", ';', 4),
    ];

    for (input, character, offset) in test_cases {
        assert_eq!(
            tokenize(input).unwrap_err(),
            LexError::UnexpectedCharacter { character, offset },
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_error_message() {
    let err = tokenize("x}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unbalanced '}' at offset 1: no expression is open"
    );
    assert_eq!(err.offset(), 1);
}

// ============================================================================
// Expression Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (":", TokenKind::Colon),
        (".", TokenKind::Dot),
        ("?", TokenKind::Question),
        ("-", TokenKind::Minus),
        ("!", TokenKind::Not),
        (">", TokenKind::Gt),
        ("<", TokenKind::Lt),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
    ];

    for (input, expected) in test_cases {
        assert_eq!(expr_kinds(input), vec![expected], "Failed for input: {}", input);
    }
}

#[test]
fn test_operator_spellings() {
    let test_cases = vec![
        ("and", TokenKind::And),
        ("&&", TokenKind::And),
        ("or", TokenKind::Or),
        ("||", TokenKind::Or),
        ("==", TokenKind::Eq),
        ("eq", TokenKind::Eq),
        ("!=", TokenKind::NotEq),
        ("ne", TokenKind::NotEq),
        ("gt", TokenKind::Gt),
        ("lt", TokenKind::Lt),
        ("not", TokenKind::Not),
        ("empty", TokenKind::Empty),
    ];

    for (input, expected) in test_cases {
        assert_eq!(expr_kinds(input), vec![expected], "Failed for input: {}", input);
    }
}

#[test]
fn test_not_eq_beats_not() {
    assert_eq!(
        expr_kinds("a != b"),
        vec![TokenKind::Identifier, TokenKind::NotEq, TokenKind::Identifier]
    );
    assert_eq!(expr_kinds("!a"), vec![TokenKind::Not, TokenKind::Identifier]);
}

#[test]
fn test_keywords_do_not_shadow_longer_identifiers() {
    let test_cases = vec![
        "trueText", "falsey", "android", "order", "emptyList", "nothing", "equals", "nested",
        "gtx", "ltr", "notes",
    ];

    for input in test_cases {
        let tokens = tokenize(&format!("#{{{}}}", input)).unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Identifier, "Failed for input: {}", input);
        assert_eq!(tokens[1].text, input);
    }
}

#[test]
fn test_literals() {
    let tokens = tokenize(r#"#{true 123 "apple" 'pear'}"#).unwrap();
    let pairs: Vec<(TokenKind, &str)> = tokens[1..5]
        .iter()
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::BooleanLiteral, "true"),
            (TokenKind::Integer, "123"),
            (TokenKind::DoubleQuoteString, "\"apple\""),
            (TokenKind::SingleQuoteString, "'pear'"),
        ]
    );
}

#[test]
fn test_strings_may_contain_braces_and_escaped_quotes() {
    let tokens = tokenize(r#"#{"a } b" 'it\'s'}"#).unwrap();
    assert_eq!(tokens[1].text, r#""a } b""#);
    assert_eq!(tokens[2].text, r"'it\'s'");
    assert_eq!(tokens[3].kind, TokenKind::RCurl);
}

#[test]
fn test_whitespace_is_dropped() {
    assert_eq!(
        expr_kinds("  a \n\t.  b  "),
        vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier]
    );
}

#[test]
fn test_next_token_reports_whitespace() {
    let mut lexer = Lexer::new("#{ a}");
    assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::StartDeferred);
    assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Whitespace);
    assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Identifier);
}

#[test]
fn test_offsets() {
    let tokens = tokenize("ab #{ x.y }").unwrap();
    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 3, 6, 7, 8, 10]);
}
