//! Calx IR - core data model of the calx expression language.
//!
//! This crate holds everything the type checker and the evaluator share:
//! - [`Name`]s for identifiers
//! - [`Span`]s for source offsets
//! - the AST: [`Expr`] nodes and top-level [`Command`]s
//! - static [`Type`]s and their compatibility predicates
//! - runtime [`Value`]s, closures included
//! - the chained [`SymbolTable`] both traversals run against
//!
//! Values hold closures, closures hold symbol tables, and symbol tables hold
//! expressions, so the three live together here.

pub mod ast;
mod name;
pub mod scope;
mod span;
pub mod ty;
pub mod value;

pub use ast::{
    BinaryOp, Command, CommandHandler, ErrorCommand, Expr, ExprRef, Function, NativeCode, NativeFn,
    OpCategory, Parameter,
};
pub use name::Name;
pub use scope::{ScopeKind, SymbolTable};
pub use span::Span;
pub use ty::{FunctionType, Type};
pub use value::{format_number, FunctionValue, Value};
