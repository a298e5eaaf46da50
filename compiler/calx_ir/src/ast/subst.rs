//! Structural substitution of free symbols.

use std::rc::Rc;

use super::{Expr, ExprRef, Function};
use crate::Name;

/// Replace every free `Symbol(name)` in `expr` with `replacement`.
///
/// Function literals that declare a parameter called `name` shadow it, so
/// their bodies are left untouched. Subtrees without a free occurrence are
/// shared with the input rather than copied.
pub fn substitute(expr: &ExprRef, name: &Name, replacement: &ExprRef) -> ExprRef {
    match &**expr {
        Expr::Symbol(symbol) if symbol == name => Rc::clone(replacement),
        Expr::Binary { op, left, right } => {
            let new_left = substitute(left, name, replacement);
            let new_right = substitute(right, name, replacement);
            if Rc::ptr_eq(&new_left, left) && Rc::ptr_eq(&new_right, right) {
                Rc::clone(expr)
            } else {
                Expr::binary(*op, new_left, new_right)
            }
        }
        Expr::Function(function) => {
            if function.params.iter().any(|p| &p.name == name) {
                return Rc::clone(expr);
            }
            let body = substitute(&function.body, name, replacement);
            if Rc::ptr_eq(&body, &function.body) {
                Rc::clone(expr)
            } else {
                Rc::new(Expr::Function(Rc::new(Function {
                    params: function.params.clone(),
                    body,
                })))
            }
        }
        Expr::Call { callee, args } => {
            let new_args: Vec<ExprRef> = args
                .iter()
                .map(|arg| substitute(arg, name, replacement))
                .collect();
            if new_args.iter().zip(args).all(|(new, old)| Rc::ptr_eq(new, old)) {
                Rc::clone(expr)
            } else {
                Expr::call(callee.clone(), new_args)
            }
        }
        // The callee of a call is a name, not an expression; it is resolved
        // at call time and never rewritten.
        Expr::Symbol(_)
        | Expr::Number(_)
        | Expr::Boolean(_)
        | Expr::Parameter(_)
        | Expr::NativeCode(_) => Rc::clone(expr),
    }
}

/// Whether `name` occurs free anywhere in `expr`.
pub fn mentions(expr: &Expr, name: &Name) -> bool {
    match expr {
        Expr::Symbol(symbol) => symbol == name,
        Expr::Binary { left, right, .. } => mentions(left, name) || mentions(right, name),
        Expr::Function(function) => {
            !function.params.iter().any(|p| &p.name == name) && mentions(&function.body, name)
        }
        Expr::Call { callee, args } => callee == name || args.iter().any(|a| mentions(a, name)),
        Expr::Number(_) | Expr::Boolean(_) | Expr::Parameter(_) | Expr::NativeCode(_) => false,
    }
}
