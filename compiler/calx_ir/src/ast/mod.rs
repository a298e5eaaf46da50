//! Expression and command trees.
//!
//! Trees are built from `Rc`-shared nodes and never mutated after
//! construction. Every traversal matches exhaustively on [`Expr`], so a new
//! variant has to be handled everywhere before the workspace compiles.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes, parameters, function literals, native code
//! - `operators`: binary operators and their categories
//! - `command`: top-level commands and the handler trait
//! - `tree`: ASCII tree rendering for `explain`
//! - `subst`: substitution of free symbols

mod command;
mod expr;
mod operators;
mod subst;
mod tree;

pub use command::{Command, CommandHandler, ErrorCommand};
pub use expr::{Expr, ExprRef, Function, NativeCode, NativeFn, Parameter};
pub use operators::{BinaryOp, OpCategory};
pub use subst::{mentions, substitute};
pub use tree::ExprTree;

#[cfg(test)]
mod tests;
