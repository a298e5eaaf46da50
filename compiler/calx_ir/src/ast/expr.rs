//! Expression nodes.
//!
//! Expressions are immutable once built and shared through [`ExprRef`]
//! (`Rc<Expr>`): the same node can be bound in the root symbol table, in a
//! call activation and inside a closure at the same time.

use std::fmt;
use std::rc::Rc;

use super::BinaryOp;
use crate::value::{format_number, Value};
use crate::{Name, Type};

/// Shared handle to an immutable expression node.
pub type ExprRef = Rc<Expr>;

/// Host callback behind a native function.
///
/// Receives the eagerly evaluated arguments in parameter order.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Boolean literal.
    Boolean(bool),
    /// Reference to a bound name.
    Symbol(Name),
    /// Binary operation; see [`BinaryOp::category`].
    Binary {
        op: BinaryOp,
        left: ExprRef,
        right: ExprRef,
    },
    /// A declared function parameter.
    ///
    /// Only appears in scopes the type checker opens for a function body.
    Parameter(Parameter),
    /// Function literal.
    Function(Rc<Function>),
    /// Call of a function bound under `callee`.
    Call { callee: Name, args: Vec<ExprRef> },
    /// Host-implemented function body.
    NativeCode(NativeCode),
}

/// A named, typed function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: Name,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<Name>, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

/// A function literal: ordered parameters and a body.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub params: Vec<Parameter>,
    pub body: ExprRef,
}

impl Function {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether the body is host code.
    pub fn is_native(&self) -> bool {
        matches!(*self.body, Expr::NativeCode(_))
    }
}

/// Host code standing in for a function body.
///
/// Carries its own copy of the enclosing function's parameter names so the
/// evaluator can fetch the bound arguments without a pointer back to the
/// function node.
#[derive(Clone)]
pub struct NativeCode {
    /// Name used in diagnostics (`sin`, `sqrt`, ...).
    pub name: Name,
    /// Statically declared result type.
    pub result: Type,
    /// Parameter names of the wrapping function, in order.
    pub params: Vec<Name>,
    pub callback: NativeFn,
}

impl PartialEq for NativeCode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.result == other.result
            && self.params == other.params
            && self.callback as usize == other.callback as usize
    }
}

impl fmt::Debug for NativeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeCode")
            .field("name", &self.name)
            .field("result", &self.result)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

// Constructors. They return `ExprRef` because every node ends up shared.
impl Expr {
    pub fn number(value: f64) -> ExprRef {
        Rc::new(Expr::Number(value))
    }

    pub fn boolean(value: bool) -> ExprRef {
        Rc::new(Expr::Boolean(value))
    }

    pub fn symbol(name: impl Into<Name>) -> ExprRef {
        Rc::new(Expr::Symbol(name.into()))
    }

    pub fn binary(op: BinaryOp, left: ExprRef, right: ExprRef) -> ExprRef {
        Rc::new(Expr::Binary { op, left, right })
    }

    pub fn call(callee: impl Into<Name>, args: Vec<ExprRef>) -> ExprRef {
        Rc::new(Expr::Call {
            callee: callee.into(),
            args,
        })
    }

    pub fn function(params: Vec<Parameter>, body: ExprRef) -> ExprRef {
        Rc::new(Expr::Function(Rc::new(Function { params, body })))
    }

    /// Build a function whose body is host code.
    pub fn native_function(
        name: impl Into<Name>,
        params: Vec<Parameter>,
        result: Type,
        callback: NativeFn,
    ) -> ExprRef {
        let native = NativeCode {
            name: name.into(),
            result,
            params: params.iter().map(|p| p.name.clone()).collect(),
            callback,
        };
        Expr::function(params, Rc::new(Expr::NativeCode(native)))
    }

    /// Rebuild a literal expression from a number or boolean value.
    ///
    /// Function values have no literal form and yield `None`.
    pub fn from_value(value: &Value) -> Option<ExprRef> {
        match value {
            Value::Number(n) => Some(Expr::number(*n)),
            Value::Boolean(b) => Some(Expr::boolean(*b)),
            Value::Function(_) => None,
        }
    }

    /// The function node, if this is a function literal.
    pub fn as_function(&self) -> Option<&Rc<Function>> {
        match self {
            Expr::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Binding strength used when re-rendering source text.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            // A function literal extends as far right as possible.
            Expr::Function(_) => 0,
            _ => u8::MAX,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => f.write_str(&format_number(*value)),
            Expr::Boolean(value) => write!(f, "{value}"),
            Expr::Symbol(name) => write!(f, "{name}"),
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                // Left-associative: only the right operand needs parens at equal precedence.
                write_operand(f, left, left.precedence() < prec)?;
                write!(f, " {op} ")?;
                write_operand(f, right, right.precedence() <= prec)
            }
            Expr::Parameter(param) => write!(f, "{}: {}", param.name, param.ty),
            Expr::Function(function) => {
                f.write_str("(")?;
                for (i, param) in function.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", param.name, param.ty)?;
                }
                write!(f, ") -> {}", function.body)
            }
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::NativeCode(native) => write!(f, "<native {}>", native.name),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}
