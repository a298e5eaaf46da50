//! The type checker.
//!
//! A structural traversal computing the [`Type`] of an expression against a
//! [`SymbolTable`]. Symbols are re-checked at every reference rather than
//! cached, so a rebinding in the root is seen by every later check.

use std::rc::Rc;

use calx_ir::ty::{are_compatible, combine_types, compatible_for};
use calx_ir::{
    BinaryOp, Expr, ExprRef, Function, Name, ScopeKind, SymbolTable, Type, Value,
};
use calx_stack::ensure_sufficient_stack;

use crate::suggest::suggest_name;
use crate::TypeError;

/// Configuration for the type checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Deepest nesting of checks before giving up with
    /// [`TypeError::RecursionLimit`]. Symbol dereferences and calls count.
    pub max_depth: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig { max_depth: 512 }
    }
}

/// Computes static types of expressions.
pub struct TypeChecker {
    config: CheckerConfig,
    depth: usize,
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        TypeChecker { config, depth: 0 }
    }

    /// Compute the type of `expr` under `scope`.
    #[tracing::instrument(level = "debug", skip_all, fields(expr = %expr))]
    pub fn check(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Type, TypeError> {
        self.depth = 0;
        let result = self.check_expr(expr, scope);
        if let Err(err) = &result {
            tracing::debug!(%err, "type check failed");
        }
        result
    }

    /// Type of a runtime value.
    ///
    /// A closure's type comes from its parameter declarations and its body
    /// checked against the captured scope.
    pub fn value_type(&mut self, value: &Value) -> Result<Type, TypeError> {
        match value {
            Value::Number(_) => Ok(Type::NUMBER),
            Value::Boolean(_) => Ok(Type::BOOLEAN),
            Value::Function(closure) => {
                self.depth = 0;
                self.check_function(&closure.function, &closure.scope)
            }
        }
    }

    fn check_expr(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Type, TypeError> {
        if self.depth >= self.config.max_depth {
            return Err(TypeError::recursion_limit(self.config.max_depth));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.check_inner(expr, scope));
        self.depth -= 1;
        result
    }

    fn check_inner(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Type, TypeError> {
        match expr {
            Expr::Number(_) => Ok(Type::NUMBER),
            Expr::Boolean(_) => Ok(Type::BOOLEAN),
            Expr::Symbol(name) => self.check_symbol(name, scope),
            Expr::Binary { op, left, right } => self.check_binary(*op, left, right, scope),
            Expr::Parameter(param) => Ok(param.ty.clone()),
            Expr::Function(function) => self.check_function(function, scope),
            Expr::Call { callee, args } => self.check_call(callee, args, scope),
            Expr::NativeCode(native) => Ok(native.result.clone()),
        }
    }

    fn check_symbol(&mut self, name: &Name, scope: &SymbolTable) -> Result<Type, TypeError> {
        let Some((bound, env)) = scope.resolve(name.as_str()) else {
            return Err(TypeError::unknown_symbol(
                name.clone(),
                suggest_name(scope, name.as_str()),
            ));
        };
        tracing::trace!(%name, "checking bound expression");
        self.check_expr(&bound, &env)
    }

    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: &ExprRef,
        right: &ExprRef,
        scope: &SymbolTable,
    ) -> Result<Type, TypeError> {
        let left_ty = self.check_expr(left, scope)?;
        let right_ty = self.check_expr(right, scope)?;
        if !compatible_for(op.category(), &left_ty, &right_ty) {
            return Err(TypeError::incompatible(left_ty, right_ty));
        }
        Ok(combine_types(&left_ty, &right_ty))
    }

    fn check_function(
        &mut self,
        function: &Function,
        scope: &SymbolTable,
    ) -> Result<Type, TypeError> {
        let result = self.check_body(function, scope)?;
        let param_types = function.params.iter().map(|p| p.ty.clone()).collect();
        Ok(Type::function(param_types, result))
    }

    /// Type of a function body with each parameter bound to its own
    /// declaration in a fresh scope, dropped when this returns.
    fn check_body(&mut self, function: &Function, scope: &SymbolTable) -> Result<Type, TypeError> {
        let params = scope.child_with_kind(ScopeKind::Check);
        for param in &function.params {
            params.put(param.name.clone(), Rc::new(Expr::Parameter(param.clone())));
        }
        self.check_expr(&function.body, &params)
    }

    /// Check a call. The callee may be bound to a function literal or to
    /// any expression of function type, such as a call returning a closure.
    fn check_call(
        &mut self,
        callee: &Name,
        args: &[ExprRef],
        scope: &SymbolTable,
    ) -> Result<Type, TypeError> {
        let Some((bound, env)) = scope.resolve(callee.as_str()) else {
            return Err(TypeError::unknown_function(
                callee.clone(),
                suggest_name(scope, callee.as_str()),
            ));
        };
        let Type::Function(signature) = self.check_expr(&bound, &env)? else {
            return Err(TypeError::unknown_function(callee.clone(), None));
        };

        if signature.params.len() != args.len() {
            return Err(TypeError::arity_mismatch(
                callee.clone(),
                signature.params.len(),
                args.len(),
            ));
        }

        for (param_ty, arg) in signature.params.iter().zip(args) {
            let arg_ty = self.check_expr(arg, scope)?;
            if !are_compatible(param_ty, &arg_ty) {
                return Err(TypeError::incompatible(param_ty.clone(), arg_ty));
            }
        }

        Ok(signature.result.clone())
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
