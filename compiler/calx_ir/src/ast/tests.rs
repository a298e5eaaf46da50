#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Name, Type, Value};

fn add(left: ExprRef, right: ExprRef) -> ExprRef {
    Expr::binary(BinaryOp::Add, left, right)
}

fn mul(left: ExprRef, right: ExprRef) -> ExprRef {
    Expr::binary(BinaryOp::Multiply, left, right)
}

fn plus_one() -> ExprRef {
    Expr::function(
        vec![Parameter::new("a", Type::NUMBER)],
        add(Expr::symbol("a"), Expr::number(1.0)),
    )
}

#[test]
fn operator_categories() {
    assert_eq!(BinaryOp::Equal.category(), OpCategory::Equality);
    assert_eq!(BinaryOp::GreaterOrEqual.category(), OpCategory::Comparison);
    assert_eq!(BinaryOp::Divide.category(), OpCategory::Arithmetic);
    assert!(BinaryOp::Multiply.precedence() > BinaryOp::Subtract.precedence());
    assert!(BinaryOp::Less.precedence() > BinaryOp::NotEqual.precedence());
}

#[test]
fn tree_of_precedence_example() {
    let expr = add(Expr::number(1.0), mul(Expr::number(2.0), Expr::number(3.0)));
    assert_eq!(
        expr.tree().to_string(),
        "Add\n\
         ├── Number<1>\n\
         └── Multiply\n    \
             ├── Number<2>\n    \
             └── Number<3>\n"
    );
}

#[test]
fn tree_of_function_and_call() {
    assert_eq!(
        plus_one().tree().to_string(),
        "Function\n\
         ├── Parameter<a: Number>\n\
         └── Add\n    \
             ├── Symbol<a>\n    \
             └── Number<1>\n"
    );

    let call = Expr::call("sum", vec![Expr::number(1.0), Expr::boolean(true)]);
    assert_eq!(
        call.tree().to_string(),
        "Call<sum>\n├── Number<1>\n└── Boolean<true>\n"
    );
}

#[test]
fn tree_of_native_function() {
    fn identity(args: &[Value]) -> Result<Value, String> {
        Ok(args[0].clone())
    }
    let native = Expr::native_function(
        "id",
        vec![Parameter::new("value", Type::NUMBER)],
        Type::NUMBER,
        identity,
    );
    assert_eq!(
        native.tree().to_string(),
        "Function\n├── Parameter<value: Number>\n└── NativeCode<Number>\n"
    );
}

#[test]
fn display_adds_parens_only_where_needed() {
    let left_nested = mul(add(Expr::number(1.0), Expr::number(2.0)), Expr::number(3.0));
    assert_eq!(left_nested.to_string(), "(1 + 2) * 3");

    let right_nested = Expr::binary(
        BinaryOp::Subtract,
        Expr::number(1.0),
        Expr::binary(BinaryOp::Subtract, Expr::number(2.0), Expr::number(3.0)),
    );
    assert_eq!(right_nested.to_string(), "1 - (2 - 3)");

    assert_eq!(plus_one().to_string(), "(a: Number) -> a + 1");
    assert_eq!(
        Expr::call("f", vec![Expr::number(4.0), Expr::symbol("x")]).to_string(),
        "f(4, x)"
    );
}

#[test]
fn native_function_copies_parameter_names() {
    fn first(args: &[Value]) -> Result<Value, String> {
        Ok(args[0].clone())
    }
    let expr = Expr::native_function(
        "first",
        vec![
            Parameter::new("a", Type::NUMBER),
            Parameter::new("b", Type::NUMBER),
        ],
        Type::NUMBER,
        first,
    );
    let function = expr.as_function().unwrap();
    assert!(function.is_native());
    let Expr::NativeCode(native) = &*function.body else {
        panic!("expected native body");
    };
    assert_eq!(native.params, vec![Name::new("a"), Name::new("b")]);
}

#[test]
fn substitute_replaces_free_symbols() {
    let expr = mul(Expr::symbol("#"), Expr::number(2.0));
    let replaced = substitute(&expr, &Name::new("#"), &Expr::number(21.0));
    assert_eq!(replaced, mul(Expr::number(21.0), Expr::number(2.0)));
}

#[test]
fn substitute_respects_parameter_shadowing() {
    let function = plus_one();
    let replaced = substitute(&function, &Name::new("a"), &Expr::number(9.0));
    assert!(Rc::ptr_eq(&replaced, &function));
    assert!(!mentions(&function, &Name::new("a")));
}

#[test]
fn substitute_shares_untouched_subtrees() {
    let untouched = add(Expr::number(1.0), Expr::number(2.0));
    let expr = Expr::call("f", vec![Rc::clone(&untouched), Expr::symbol("x")]);
    let replaced = substitute(&expr, &Name::new("x"), &Expr::number(0.0));
    let Expr::Call { args, .. } = &*replaced else {
        panic!("expected call");
    };
    assert!(Rc::ptr_eq(&args[0], &untouched));
    assert_eq!(args[1], Expr::number(0.0));
}

#[test]
fn command_binding_names() {
    let expr = Expr::number(1.0);
    let command = Command::Expression(Rc::clone(&expr));
    let (name, bound) = command.binding().unwrap();
    assert!(name.is_last_result());
    assert!(Rc::ptr_eq(bound, &expr));

    let command = Command::Let {
        ident: Name::new("x"),
        expr: Rc::clone(&expr),
    };
    assert_eq!(command.binding().map(|(name, _)| name), Some(Name::new("x")));
    assert!(Command::Symbols.binding().is_none());
}

#[derive(Default)]
struct Recorder(Vec<&'static str>);

impl CommandHandler for Recorder {
    fn handle_error(&mut self, _: &ErrorCommand) {
        self.0.push("error");
    }
    fn handle_exit(&mut self) {
        self.0.push("exit");
    }
    fn handle_explain(&mut self, _: &ExprRef) {
        self.0.push("explain");
    }
    fn handle_expression(&mut self, _: &ExprRef) {
        self.0.push("expression");
    }
    fn handle_let(&mut self, _: &Name, _: &ExprRef) {
        self.0.push("let");
    }
    fn handle_symbols(&mut self) {
        self.0.push("symbols");
    }
}

#[test]
fn dispatch_routes_each_variant() {
    let mut recorder = Recorder::default();
    let commands = [
        Command::error("bad", "1 +", Some(3)),
        Command::Exit,
        Command::Explain(Expr::number(1.0)),
        Command::Expression(Expr::number(1.0)),
        Command::Let {
            ident: Name::new("x"),
            expr: Expr::number(1.0),
        },
        Command::Symbols,
    ];
    for command in &commands {
        command.dispatch(&mut recorder);
    }
    assert_eq!(
        recorder.0,
        vec!["error", "exit", "explain", "expression", "let", "symbols"]
    );
}
