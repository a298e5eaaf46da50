//! Stack safety for the recursive tree walks.
//!
//! Type checking and evaluation are plain recursive descents over the
//! expression tree. A long chain of symbol indirections or a deep call
//! nesting can exhaust the native stack long before the configured depth
//! limits trip, so every recursive step goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call (WASM manages its own stack).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - below this, the stack is grown
//! - **Growth size**: 1MB per growth

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn eval(&mut self, expr: &Expr, scope: &SymbolTable) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr, scope))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
