#![allow(clippy::unwrap_used, clippy::expect_used)]

use calx_ir::{Command, Expr, Value};
use calx_types::CheckerConfig;
use pretty_assertions::assert_eq;

use super::{bootstrap_table, Flow, Runtime};

fn runtime() -> Runtime {
    Runtime::new(CheckerConfig::default())
}

fn value_of(runtime: &Runtime, name: &str) -> Value {
    let expr = runtime.table().get(name).unwrap();
    calx_eval::eval(&expr, runtime.table()).unwrap()
}

#[test]
fn test_bootstrap_table() {
    let table = bootstrap_table();
    assert_eq!(table.get("#"), Some(Expr::number(0.0)));
    assert!(table.get("sum").unwrap().as_function().is_some());
    assert!(table.get("sin").unwrap().as_function().unwrap().is_native());
}

#[test]
fn test_expression_binds_last_result() {
    let mut runtime = runtime();
    assert_eq!(runtime.execute("1 + 2"), Flow::Continue);
    assert_eq!(value_of(&runtime, "#"), Value::Number(3.0));
}

#[test]
fn test_let_binds_name() {
    let mut runtime = runtime();
    runtime.execute("let f = (a: Number) -> a + 1");
    runtime.execute("f(4)");
    assert_eq!(value_of(&runtime, "#"), Value::Number(5.0));
    assert!(runtime.table().get("f").unwrap().as_function().is_some());
}

#[test]
fn test_last_result_refers_to_previous_value() {
    let mut runtime = runtime();
    runtime.execute("5");
    runtime.execute("# * 2");
    runtime.execute("# + 1");
    assert_eq!(value_of(&runtime, "#"), Value::Number(11.0));
}

#[test]
fn test_let_can_refer_to_its_old_value() {
    let mut runtime = runtime();
    runtime.execute("let x = 2");
    runtime.execute("let x = x * x");
    assert_eq!(value_of(&runtime, "x"), Value::Number(4.0));
    // With no previous binding the name is simply unknown.
    assert!(matches!(runtime.prepare("let y = y + 1"), Command::Error(_)));
}

#[test]
fn test_parse_error_carries_offset() {
    let mut runtime = runtime();
    let Command::Error(error) = runtime.prepare("1 + * 2") else {
        panic!("expected an error command");
    };
    assert_eq!(error.offset, Some(4));
    assert_eq!(error.code, Some("E1002"));
    assert_eq!(error.line, "1 + * 2");
}

#[test]
fn test_type_error_prevents_binding() {
    let mut runtime = runtime();
    runtime.execute("let x = 1");
    runtime.execute("let x = 1 + true");
    assert_eq!(value_of(&runtime, "x"), Value::Number(1.0));
    assert_eq!(runtime.rejected(), 1);

    let Command::Error(error) = runtime.prepare("sine(1)") else {
        panic!("expected an error command");
    };
    assert_eq!(error.offset, None);
    assert_eq!(error.code, Some("E2002"));
    assert_eq!(error.hints, vec!["did you mean `sin`?".to_string()]);
}

#[test]
fn test_explain_and_symbols_do_not_bind() {
    let mut runtime = runtime();
    runtime.execute("explain 1 + 2");
    runtime.execute("symbols");
    assert_eq!(value_of(&runtime, "#"), Value::Number(0.0));
}

#[test]
fn test_exit_and_blank_lines() {
    let mut runtime = runtime();
    assert_eq!(runtime.execute(""), Flow::Continue);
    assert_eq!(runtime.execute("   "), Flow::Continue);
    assert_eq!(runtime.execute("exit"), Flow::Exit);
    assert_eq!(runtime.execute("quit"), Flow::Exit);
    assert_eq!(runtime.rejected(), 0);
}

#[test]
fn test_recursive_definitions() {
    let mut runtime = Runtime::new(CheckerConfig { max_depth: 64 });
    let Command::Error(error) = runtime.prepare("let f = (n: Number) -> f(n)") else {
        panic!("expected an error command");
    };
    assert_eq!(error.code, Some("E2002"));

    // Rebinding is checked against the old `f`, but any later call recurses.
    runtime.execute("let f = (n: Number) -> n");
    runtime.execute("let f = (n: Number) -> f(n)");
    let Command::Error(error) = runtime.prepare("f(1)") else {
        panic!("expected an error command");
    };
    assert_eq!(error.code, Some("E2005"));
}
