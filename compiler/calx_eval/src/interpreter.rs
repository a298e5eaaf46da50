//! The tree-walking interpreter.
//!
//! Evaluation runs against a [`SymbolTable`] chain. A call by name opens an
//! activation scope under the caller's scope and binds each parameter to
//! its argument expression unevaluated; the argument is evaluated each time
//! the parameter is read, in the caller's environment (see
//! [`SymbolTable::resolve`]). Function literals evaluate to closures that
//! keep their defining scope alive.

use std::rc::Rc;

use calx_ir::{
    Expr, ExprRef, Function, FunctionValue, Name, NativeCode, ScopeKind, SymbolTable, Type, Value,
};
use calx_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::errors::{
    arity_mismatch, incompatible, native_failed, unbound_argument, unknown_function,
    unknown_symbol, EvalError, EvalErrorKind,
};
use crate::operators::{evaluate_binary, shallow_type};

/// Configuration for the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest nesting of calls and symbol dereferences before giving up
    /// with [`EvalErrorKind::RecursionLimit`].
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig { max_depth: 512 }
    }
}

/// Computes values of expressions.
pub struct Evaluator {
    stack: CallStack,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Evaluator {
            stack: CallStack::new(config.max_depth),
        }
    }

    /// Evaluate `expr` under `scope`.
    #[tracing::instrument(level = "debug", skip_all, fields(expr = %expr))]
    pub fn eval(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Value, EvalError> {
        self.stack.clear();
        let result = self.eval_expr(expr, scope);
        if let Err(err) = &result {
            tracing::debug!(%err, "evaluation failed");
        }
        result
    }

    /// Invoke a closure with already evaluated arguments.
    ///
    /// The arguments are bound as literals in a fresh activation under the
    /// closure's captured scope.
    pub fn call_value(
        &mut self,
        closure: &FunctionValue,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        self.stack.clear();
        self.call_closure(&Name::new("<closure>"), closure, args)
    }

    /// Build an error carrying the current backtrace.
    #[cold]
    fn error(&self, kind: EvalErrorKind) -> EvalError {
        EvalError::new(kind).with_backtrace(self.stack.capture())
    }

    fn eval_expr(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr, scope))
    }

    fn eval_inner(&mut self, expr: &Expr, scope: &SymbolTable) -> Result<Value, EvalError> {
        tracing::trace!(node = %expr.label(), depth = self.stack.depth(), "eval");
        match expr {
            Expr::Number(value) => Ok(Value::Number(*value)),
            Expr::Boolean(value) => Ok(Value::Boolean(*value)),
            Expr::Symbol(name) => self.eval_symbol(name, scope),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| self.error(kind))
            }
            Expr::Parameter(param) => param
                .ty
                .default_value()
                .ok_or_else(|| self.error(unbound_argument(param.name.clone()))),
            Expr::Function(function) => Ok(Value::Function(FunctionValue::new(
                Rc::clone(function),
                scope.clone(),
            ))),
            Expr::Call { callee, args } => self.eval_call(callee, args, scope),
            Expr::NativeCode(native) => self.eval_native(native, scope),
        }
    }

    fn eval_symbol(&mut self, name: &Name, scope: &SymbolTable) -> Result<Value, EvalError> {
        let Some((bound, env)) = scope.resolve(name.as_str()) else {
            return Err(self.error(unknown_symbol(name.clone())));
        };
        self.stack.push(CallFrame::symbol(name.clone()))?;
        let result = self.eval_expr(&bound, &env);
        self.stack.pop();
        result
    }

    fn eval_call(
        &mut self,
        callee: &Name,
        args: &[ExprRef],
        scope: &SymbolTable,
    ) -> Result<Value, EvalError> {
        let Some((bound, env)) = scope.resolve(callee.as_str()) else {
            return Err(self.error(unknown_function(callee.clone())));
        };

        if let Some(function) = bound.as_function() {
            return self.call_by_name(callee, function, args, scope);
        }

        // Any other binding must evaluate to a closure; its arguments are
        // evaluated up front.
        self.stack.push(CallFrame::symbol(callee.clone()))?;
        let callee_value = self.eval_expr(&bound, &env);
        self.stack.pop();
        let Value::Function(closure) = callee_value? else {
            return Err(self.error(unknown_function(callee.clone())));
        };
        if closure.function.arity() != args.len() {
            return Err(self.error(arity_mismatch(
                callee.clone(),
                closure.function.arity(),
                args.len(),
            )));
        }
        let values = args
            .iter()
            .map(|arg| self.eval_expr(arg, scope))
            .collect::<Result<Vec<_>, _>>()?;
        self.call_closure(callee, &closure, &values)
    }

    /// Call a function literal, binding the unevaluated arguments in an
    /// activation under the caller's scope.
    fn call_by_name(
        &mut self,
        callee: &Name,
        function: &Function,
        args: &[ExprRef],
        scope: &SymbolTable,
    ) -> Result<Value, EvalError> {
        if function.arity() != args.len() {
            return Err(self.error(arity_mismatch(
                callee.clone(),
                function.arity(),
                args.len(),
            )));
        }

        let activation = scope.child_with_kind(ScopeKind::Activation);
        for (param, arg) in function.params.iter().zip(args) {
            activation.put(param.name.clone(), Rc::clone(arg));
        }

        tracing::debug!(
            %callee,
            args = args.len(),
            native = function.is_native(),
            scope_depth = activation.depth(),
            "call"
        );
        self.stack.push(CallFrame::call(callee.clone()))?;
        let result = self.eval_expr(&function.body, &activation);
        self.stack.pop();
        result
    }

    fn call_closure(
        &mut self,
        name: &Name,
        closure: &FunctionValue,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        let function = &closure.function;
        if function.arity() != args.len() {
            return Err(self.error(arity_mismatch(name.clone(), function.arity(), args.len())));
        }

        let activation = closure.scope.child_with_kind(ScopeKind::Activation);
        for (param, value) in function.params.iter().zip(args) {
            let literal = match Expr::from_value(value) {
                Some(literal) if shallow_type(value).as_ref() == Some(&param.ty) => literal,
                _ => {
                    return Err(self.error(incompatible(type_tag(&param.ty), value.type_name())));
                }
            };
            activation.put(param.name.clone(), literal);
        }

        tracing::debug!(%name, args = args.len(), "call closure");
        self.stack.push(CallFrame::call(name.clone()))?;
        let result = self.eval_expr(&function.body, &activation);
        self.stack.pop();
        result
    }

    /// Run host code. Each parameter's argument is fetched from scope and
    /// evaluated eagerly, in declaration order.
    fn eval_native(
        &mut self,
        native: &NativeCode,
        scope: &SymbolTable,
    ) -> Result<Value, EvalError> {
        let mut args = Vec::with_capacity(native.params.len());
        for param in &native.params {
            let Some((bound, env)) = scope.resolve(param.as_str()) else {
                return Err(self.error(unbound_argument(param.clone())));
            };
            args.push(self.eval_expr(&bound, &env)?);
        }

        tracing::trace!(native = %native.name, "native call");
        (native.callback)(&args).map_err(|message| {
            tracing::debug!(native = %native.name, %message, "native call failed");
            self.error(native_failed(native.name.clone(), message))
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn type_tag(ty: &Type) -> &'static str {
    match ty {
        Type::Number => "Number",
        Type::Boolean => "Boolean",
        Type::Function(_) => "Function",
    }
}
