//! Static type checking for calx expressions.
//!
//! [`TypeChecker::check`] computes the [`Type`](calx_ir::Type) of an
//! expression against a symbol table without evaluating anything.
//! Operators follow their category's compatibility rule, calls are checked
//! for arity and argument compatibility, and unknown names come with a
//! did-you-mean suggestion.

mod checker;
mod error;
mod suggest;

pub use checker::{CheckerConfig, TypeChecker};
pub use error::TypeError;
pub use suggest::suggest_name;

use calx_ir::{Expr, SymbolTable, Type, Value};

/// Check `expr` under `scope` with the default configuration.
pub fn check(expr: &Expr, scope: &SymbolTable) -> Result<Type, TypeError> {
    TypeChecker::new().check(expr, scope)
}

/// Type of a runtime value with the default configuration.
pub fn value_type(value: &Value) -> Result<Type, TypeError> {
    TypeChecker::new().value_type(value)
}
