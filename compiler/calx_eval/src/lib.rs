//! Calx Eval - tree-walking evaluator for the calx expression language.
//!
//! - [`Evaluator`]: computes the [`Value`](calx_ir::Value) of an expression
//!   against a symbol table, with call-by-name arguments and closures
//! - [`EvalError`]: structured failures with a backtrace of the frames that
//!   were active
//! - [`prelude`]: `sum` and the native math functions
//! - [`describe`]: console rendering of values

mod describe;
mod diagnostics;
pub mod errors;
mod interpreter;
mod operators;
pub mod prelude;

pub use describe::describe;
pub use diagnostics::{CallFrame, CallStack};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind};
pub use interpreter::{EvalConfig, Evaluator};
pub use operators::evaluate_binary;

use calx_ir::{Expr, SymbolTable, Value};

/// Evaluate `expr` under `scope` with the default configuration.
pub fn eval(expr: &Expr, scope: &SymbolTable) -> Result<Value, EvalError> {
    Evaluator::new().eval(expr, scope)
}

#[cfg(test)]
mod tests;
