//! Runtime values.

use std::fmt;
use std::rc::Rc;

use crate::ast::Function;
use crate::SymbolTable;

/// The result of evaluating an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    /// A function literal together with the scope it was evaluated in.
    Function(FunctionValue),
}

/// A closure: function node plus captured environment.
///
/// The captured scope stays alive as long as the value does, even after the
/// call that created it has returned.
#[derive(Clone)]
pub struct FunctionValue {
    pub function: Rc<Function>,
    pub scope: SymbolTable,
}

impl FunctionValue {
    pub fn new(function: Rc<Function>, scope: SymbolTable) -> Self {
        FunctionValue { function, scope }
    }
}

/// Closures are equal when they are the same function node captured in the
/// same scope.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function) && self.scope.ptr_eq(&other.scope)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured scope may be large or reach back to the root; skip it.
        f.debug_struct("FunctionValue")
            .field("function", &self.function)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// Short name of the value's variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Boolean(_) => "Boolean",
            Value::Function(_) => "Function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// Render a number the way the console shows it.
///
/// Integral values print without a fractional part, non-finite values print
/// as `Infinity`, `-Infinity` and `NaN`, and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Function(function) => {
                write!(f, "{}", crate::ast::Expr::Function(Rc::clone(&function.function)))
            }
        }
    }
}
