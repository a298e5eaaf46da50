use calx_ir::{Name, Span};
use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_let_binding() {
    assert_eq!(
        kinds("let x = 1.5"),
        vec![
            TokenKind::Let,
            TokenKind::Ident(Name::new("x")),
            TokenKind::Eq,
            TokenKind::Number(1.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_function_literal() {
    assert_eq!(
        kinds("(a: Number) -> a >= 1"),
        vec![
            TokenKind::LParen,
            TokenKind::Ident(Name::new("a")),
            TokenKind::Colon,
            TokenKind::NumberType,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Ident(Name::new("a")),
            TokenKind::GtEq,
            TokenKind::Number(1.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_longest_match_operators() {
    assert_eq!(
        kinds("== != <= < - ->"),
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::Minus,
            TokenKind::Arrow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("letter trueish"),
        vec![
            TokenKind::Ident(Name::new("letter")),
            TokenKind::Ident(Name::new("trueish")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_exponent_numbers() {
    assert_eq!(
        kinds("2e3 1.25E-2"),
        vec![
            TokenKind::Number(2000.0),
            TokenKind::Number(0.0125),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans_and_errors() {
    let tokens = lex("1 $ 2");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, Span::new(2, 3));
    assert_eq!(tokens.last().map(|t| t.span), Some(Span::new(5, 5)));
}

#[test]
fn test_display_names() {
    assert_eq!(TokenKind::Arrow.to_string(), "`->`");
    assert_eq!(TokenKind::Number(3.0).to_string(), "number `3`");
    assert_eq!(TokenKind::Ident(Name::new("f")).to_string(), "identifier `f`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}
