//! Type errors.

use std::fmt;

use calx_diagnostic::{Diagnostic, ErrorCode};
use calx_ir::{Name, Type};

/// A type-checking failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// A symbol that resolves nowhere in the scope chain.
    UnknownSymbol {
        name: Name,
        suggestion: Option<Name>,
    },
    /// A call whose callee is unbound or not bound to a function literal.
    UnknownFunction {
        name: Name,
        suggestion: Option<Name>,
    },
    ArityMismatch {
        name: Name,
        expected: usize,
        actual: usize,
    },
    /// Operand or argument types rejected by the compatibility rule.
    IncompatibleTypes { left: Type, right: Type },
    /// Checking nested deeper than the configured limit.
    RecursionLimit { depth: usize },
}

impl TypeError {
    #[cold]
    pub fn unknown_symbol(name: Name, suggestion: Option<Name>) -> Self {
        TypeError::UnknownSymbol { name, suggestion }
    }

    #[cold]
    pub fn unknown_function(name: Name, suggestion: Option<Name>) -> Self {
        TypeError::UnknownFunction { name, suggestion }
    }

    #[cold]
    pub fn arity_mismatch(name: Name, expected: usize, actual: usize) -> Self {
        TypeError::ArityMismatch {
            name,
            expected,
            actual,
        }
    }

    #[cold]
    pub fn incompatible(left: Type, right: Type) -> Self {
        TypeError::IncompatibleTypes { left, right }
    }

    #[cold]
    pub fn recursion_limit(depth: usize) -> Self {
        TypeError::RecursionLimit { depth }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TypeError::UnknownSymbol { .. } => ErrorCode::E2001,
            TypeError::UnknownFunction { .. } => ErrorCode::E2002,
            TypeError::ArityMismatch { .. } => ErrorCode::E2003,
            TypeError::IncompatibleTypes { .. } => ErrorCode::E2004,
            TypeError::RecursionLimit { .. } => ErrorCode::E2005,
        }
    }

    /// Convert to a diagnostic, attaching the did-you-mean hint if any.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            TypeError::UnknownSymbol {
                suggestion: Some(suggestion),
                ..
            }
            | TypeError::UnknownFunction {
                suggestion: Some(suggestion),
                ..
            } => diag.with_suggestion(format!("did you mean `{suggestion}`?")),
            TypeError::RecursionLimit { .. } => {
                diag.with_note("a binding or function refers back to itself")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnknownSymbol { name, .. } => write!(f, "unknown symbol `{name}`"),
            TypeError::UnknownFunction { name, .. } => write!(f, "unknown function `{name}`"),
            TypeError::ArityMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "`{name}` expects {expected} argument{}, got {actual}",
                if *expected == 1 { "" } else { "s" }
            ),
            TypeError::IncompatibleTypes { left, right } => {
                write!(f, "incompatible types: {left} and {right}")
            }
            TypeError::RecursionLimit { depth } => {
                write!(f, "type checking exceeded the depth limit of {depth}")
            }
        }
    }
}

impl std::error::Error for TypeError {}
