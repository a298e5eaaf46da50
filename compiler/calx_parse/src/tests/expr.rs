//! Expression grammar: precedence, associativity, literals, calls and
//! function literals.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use calx_ir::{BinaryOp, Command, Expr, ExprRef, Parameter, Type};
use pretty_assertions::assert_eq;

use crate::{parse_line, ParseErrorKind};

fn expr(source: &str) -> ExprRef {
    match parse_line(source).unwrap() {
        Command::Expression(expr) => expr,
        other => panic!("expected expression command, got {other:?}"),
    }
}

fn num(value: f64) -> ExprRef {
    Expr::number(value)
}

#[test]
fn test_left_associative_subtraction() {
    assert_eq!(
        expr("10 - 4 - 3"),
        Expr::binary(
            BinaryOp::Subtract,
            Expr::binary(BinaryOp::Subtract, num(10.0), num(4.0)),
            num(3.0),
        )
    );
}

#[test]
fn test_precedence_ladder() {
    // `==` binds loosest, then comparisons, then `+`, then `*`.
    assert_eq!(
        expr("1 + 2 < 3 * 4 == true").to_string(),
        "1 + 2 < 3 * 4 == true"
    );
    let Expr::Binary { op, left, .. } = &*expr("1 + 2 < 3 * 4 == true") else {
        panic!("expected binary");
    };
    assert_eq!(*op, BinaryOp::Equal);
    assert!(matches!(**left, Expr::Binary { op: BinaryOp::Less, .. }));
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr("(1 + 2) * 3"),
        Expr::binary(
            BinaryOp::Multiply,
            Expr::binary(BinaryOp::Add, num(1.0), num(2.0)),
            num(3.0),
        )
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(expr("-2"), num(-2.0));
    assert_eq!(expr("--2"), num(2.0));
    assert_eq!(
        expr("-x"),
        Expr::binary(BinaryOp::Subtract, num(0.0), Expr::symbol("x"))
    );
    assert_eq!(
        expr("-2 * 3"),
        Expr::binary(BinaryOp::Multiply, num(-2.0), num(3.0))
    );
}

#[test]
fn test_booleans_and_last_result() {
    assert_eq!(expr("true"), Expr::boolean(true));
    assert_eq!(
        expr("# != false"),
        Expr::binary(BinaryOp::NotEqual, Expr::symbol("#"), Expr::boolean(false))
    );
}

#[test]
fn test_calls() {
    assert_eq!(
        expr("sum(1, x * 2)"),
        Expr::call(
            "sum",
            vec![
                num(1.0),
                Expr::binary(BinaryOp::Multiply, Expr::symbol("x"), num(2.0)),
            ],
        )
    );
    assert_eq!(expr("now()"), Expr::call("now", vec![]));
}

#[test]
fn test_function_literal() {
    assert_eq!(
        expr("(a: Number, b: Boolean) -> a"),
        Expr::function(
            vec![
                Parameter::new("a", Type::NUMBER),
                Parameter::new("b", Type::BOOLEAN),
            ],
            Expr::symbol("a"),
        )
    );
    assert_eq!(expr("() -> 1"), Expr::function(vec![], num(1.0)));
}

#[test]
fn test_function_body_extends_right() {
    let parsed = expr("(a: Number) -> a + 1");
    let function = parsed.as_function().unwrap();
    assert_eq!(
        function.body,
        Expr::binary(BinaryOp::Add, Expr::symbol("a"), num(1.0))
    );
}

#[test]
fn test_function_as_call_argument() {
    let parsed = expr("apply((x: Number) -> x * x, 3)");
    let Expr::Call { args, .. } = &*parsed else {
        panic!("expected call");
    };
    assert!(args[0].as_function().is_some());
    assert_eq!(args[1], num(3.0));
}

#[test]
fn test_parenthesised_symbol_is_not_a_function() {
    assert_eq!(expr("(a)"), Expr::symbol("a"));
}

#[test]
fn test_bad_parameter_type() {
    let err = parse_line("(a: Int) -> a").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::ExpectedType { .. }));
    assert_eq!(err.offset(), 4);
}

#[test]
fn test_unclosed_call() {
    let err = parse_line("sum(1, 2").unwrap_err();
    let ParseErrorKind::UnclosedDelimiter { open, .. } = err.kind else {
        panic!("expected unclosed delimiter, got {:?}", err.kind);
    };
    assert_eq!(open.offset(), 3);
    assert_eq!(err.offset(), 8);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(expr(&source), num(1.0));
}
