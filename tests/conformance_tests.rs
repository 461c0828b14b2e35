// Conformance Tests
//
// Observable behaviour every build of the compiler must keep: printed output
// for the reference inputs plus the structural laws behind them.

use el_compiler::ast::{OutputBinOp, OutputExpr};
use el_compiler::error::Error;
use el_compiler::output::to_source;
use el_compiler::to_tree;

fn print(input: &str) -> String {
    to_source(&to_tree(input).unwrap())
}

// ============================================================================
// Section: Printed Output
// ============================================================================

#[test]
fn deferred_expression() {
    assert_eq!(print("#{foobar}"), "foobar");
}

#[test]
fn dynamic_expression() {
    assert_eq!(print("${trueText}"), "trueText");
}

#[test]
fn three_expressions_with_some_literal_in_it() {
    assert_eq!(print("#{one}${two}three#{four}"), r#"one + two + "three" + four"#);
}

#[test]
fn boolean_literal_expression() {
    assert_eq!(print("#{true}"), "true");
}

#[test]
fn literal_integer_expression() {
    assert_eq!(print("#{123}"), "123");
}

#[test]
fn string_literal_double_quote() {
    assert_eq!(print(r#"#{"apple"}"#), r#""apple""#);
}

#[test]
fn string_literal_single_quote() {
    assert_eq!(print("#{'apple'}"), r#""apple""#);
}

#[test]
fn literal_text() {
    assert_eq!(print("volkswagen"), r#""volkswagen""#);
}

#[test]
fn binary_expression() {
    assert_eq!(print("#{2 > 1}"), "2 > 1");
}

#[test]
fn binary_expression_equals() {
    assert_eq!(print("#{1 == 2}"), "1 === 2");
}

#[test]
fn ternary_expression() {
    assert_eq!(print("#{true ? 1 : 2}"), "true ? 1 : 2");
}

#[test]
fn property_access() {
    assert_eq!(print("#{a.b.c}"), "a.b.c");
}

#[test]
fn not_expression() {
    assert_eq!(print("#{not a}"), "!a");
}

#[test]
fn empty_expression() {
    assert_eq!(print("#{empty a}"), "isEmpty(a)");
}

#[test]
fn complicated_expression() {
    assert_eq!(
        print("#{foobar && 123 ? 1 : 2 == a.b.c}"),
        "foobar && (123 ? 1 : 2 === a.b.c)"
    );
}

#[test]
fn illegal_expression_not_terminated() {
    assert!(matches!(to_tree("#{foobar"), Err(Error::Parse(_))));
}

// ============================================================================
// Section: Structural Laws
// ============================================================================

#[test]
fn literal_constants() {
    assert_eq!(to_tree("#{true}").unwrap(), OutputExpr::BooleanLiteral(true));
    assert_eq!(to_tree("#{false}").unwrap(), OutputExpr::BooleanLiteral(false));
    assert_eq!(to_tree("#{123}").unwrap(), OutputExpr::number("123"));
    assert_eq!(to_tree(r#"#{"apple"}"#).unwrap(), OutputExpr::string("apple"));
    assert_eq!(to_tree("#{'apple'}").unwrap(), OutputExpr::string("apple"));
}

#[test]
fn concatenation_is_left_associative() {
    let expected = OutputExpr::concat(
        OutputExpr::concat(
            OutputExpr::concat(OutputExpr::ident("one"), OutputExpr::ident("two")),
            OutputExpr::string("three"),
        ),
        OutputExpr::ident("four"),
    );
    assert_eq!(to_tree("#{one}${two}three#{four}").unwrap(), expected);
}

#[test]
fn property_path_nests_outward() {
    let expected = OutputExpr::property(
        OutputExpr::property(OutputExpr::ident("a"), "b"),
        "c",
    );
    assert_eq!(to_tree("#{a.b.c}").unwrap(), expected);
}

#[test]
fn delimiter_choice_is_syntax_only() {
    let inner = [
        "a",
        "a.b",
        "not a",
        "empty a.b",
        "a ? 'x' : \"y\"",
        "a && b || c == 1",
        "x gt 2 and y lt 3",
    ];

    for text in inner {
        assert_eq!(
            to_tree(&format!("#{{{}}}", text)).unwrap(),
            to_tree(&format!("${{{}}}", text)).unwrap(),
            "Failed for: {}",
            text
        );
    }
}

#[test]
fn right_recursive_binding() {
    let expected = OutputExpr::binary(
        OutputBinOp::LogicalAnd,
        OutputExpr::ident("foobar"),
        OutputExpr::conditional(
            OutputExpr::number("123"),
            OutputExpr::number("1"),
            OutputExpr::binary(
                OutputBinOp::StrictEquals,
                OutputExpr::number("2"),
                OutputExpr::property(
                    OutputExpr::property(OutputExpr::ident("a"), "b"),
                    "c",
                ),
            ),
        ),
    );
    assert_eq!(to_tree("#{foobar && 123 ? 1 : 2 == a.b.c}").unwrap(), expected);
}

#[test]
fn operator_nodes() {
    assert_eq!(
        to_tree("#{2 > 1}").unwrap(),
        OutputExpr::binary(
            OutputBinOp::GreaterThan,
            OutputExpr::number("2"),
            OutputExpr::number("1"),
        )
    );
    assert_eq!(
        to_tree("#{not a}").unwrap(),
        OutputExpr::not(OutputExpr::ident("a"))
    );
    assert_eq!(
        to_tree("#{empty a}").unwrap(),
        OutputExpr::call("isEmpty", vec![OutputExpr::ident("a")])
    );
}

// ============================================================================
// Section: Literal Text Boundaries
// ============================================================================

#[test]
fn text_ending_in_hash_or_dollar() {
    assert_eq!(to_tree("issue #").unwrap(), OutputExpr::string("issue #"));
    assert_eq!(to_tree("cost $").unwrap(), OutputExpr::string("cost $"));
}

#[test]
fn hash_before_expression_stays_text() {
    assert_eq!(
        to_tree("##{a}").unwrap(),
        OutputExpr::concat(OutputExpr::string("#"), OutputExpr::ident("a"))
    );
}

#[test]
fn expression_then_dangling_marker() {
    assert_eq!(
        to_tree("#{a}$").unwrap(),
        OutputExpr::concat(OutputExpr::ident("a"), OutputExpr::string("$"))
    );
}

#[test]
fn empty_input_is_empty_string() {
    assert_eq!(to_tree("").unwrap(), OutputExpr::string(""));
}
