#![allow(clippy::unwrap_used, clippy::expect_used)]

mod describe_tests;

use calx_ir::{Command, Expr, ExprRef, SymbolTable, Value};

use crate::{EvalError, Evaluator};

/// Parse a single expression line.
pub(crate) fn parse(source: &str) -> ExprRef {
    match calx_parse::parse_line(source).unwrap() {
        Command::Expression(expr) | Command::Explain(expr) | Command::Let { expr, .. } => expr,
        other => panic!("not an expression: {other:?}"),
    }
}

/// Root table with `#` and the prelude.
pub(crate) fn table() -> SymbolTable {
    let root = SymbolTable::new();
    root.put("#", Expr::number(0.0));
    crate::prelude::install(&root);
    root
}

pub(crate) fn eval_in(source: &str, scope: &SymbolTable) -> Result<Value, EvalError> {
    Evaluator::new().eval(&parse(source), scope)
}

pub(crate) fn eval(source: &str) -> Result<Value, EvalError> {
    eval_in(source, &table())
}
