use calx_ir::{FunctionValue, Value};
use pretty_assertions::assert_eq;

use super::{parse, table};
use crate::describe;

#[test]
fn test_describe_scalars() {
    assert_eq!(describe(&Value::Number(5.0)), "Number: 5");
    assert_eq!(describe(&Value::Number(-2.5)), "Number: -2.5");
    assert_eq!(describe(&Value::Number(f64::INFINITY)), "Number: Infinity");
    assert_eq!(describe(&Value::Boolean(true)), "Boolean: true");
}

#[test]
fn test_describe_closure() {
    let function = parse("(x: Number) -> x * 2").as_function().cloned().unwrap();
    let closure = Value::Function(FunctionValue::new(function, table()));
    assert_eq!(describe(&closure), "Function[(Number) -> Number]");
}

#[test]
fn test_describe_native() {
    let sin = crate::tests::eval("sin").unwrap();
    assert_eq!(describe(&sin), "Function[(Number) -> Number]");
}
