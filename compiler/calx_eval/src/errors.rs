//! Evaluation errors and backtraces.

use std::fmt;

use calx_diagnostic::{Diagnostic, ErrorCode};
use calx_ir::Name;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    UnknownSymbol {
        name: Name,
    },
    /// The callee is unbound or not bound to a function.
    UnknownFunction {
        name: Name,
    },
    ArityMismatch {
        name: Name,
        expected: usize,
        actual: usize,
    },
    /// Operand values do not satisfy the operator's category rule.
    IncompatibleTypes {
        left: &'static str,
        right: &'static str,
    },
    /// More nested calls and dereferences than the configured limit.
    RecursionLimit {
        depth: usize,
    },
    /// A native callback reported failure.
    Native {
        name: Name,
        message: String,
    },
    /// A native function's parameter had no argument bound in scope.
    UnboundArgument {
        name: Name,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::UnknownSymbol { name } => write!(f, "unknown symbol `{name}`"),
            EvalErrorKind::UnknownFunction { name } => write!(f, "unknown function `{name}`"),
            EvalErrorKind::ArityMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "`{name}` expects {expected} argument{}, got {actual}",
                if *expected == 1 { "" } else { "s" }
            ),
            EvalErrorKind::IncompatibleTypes { left, right } => {
                write!(f, "incompatible operands: {left} and {right}")
            }
            EvalErrorKind::RecursionLimit { depth } => {
                write!(f, "maximum recursion depth exceeded ({depth})")
            }
            EvalErrorKind::Native { name, message } => write!(f, "`{name}` failed: {message}"),
            EvalErrorKind::UnboundArgument { name } => {
                write!(f, "no argument bound for parameter `{name}`")
            }
        }
    }
}

/// One frame of an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: Name,
    /// Whether the frame is a function call rather than a symbol dereference.
    pub is_call: bool,
}

impl fmt::Display for BacktraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_call {
            write!(f, "call `{}`", self.name)
        } else {
            write!(f, "symbol `{}`", self.name)
        }
    }
}

/// Snapshot of the evaluation stack when an error was raised, innermost
/// frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        EvalBacktrace { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {frame}")?;
        }
        Ok(())
    }
}

/// An evaluation failure plus the stack it happened on.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: EvalBacktrace::default(),
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnknownSymbol { .. } => ErrorCode::E3001,
            EvalErrorKind::UnknownFunction { .. } => ErrorCode::E3002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E3003,
            EvalErrorKind::IncompatibleTypes { .. } => ErrorCode::E3004,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E3005,
            EvalErrorKind::Native { .. } => ErrorCode::E3006,
            EvalErrorKind::UnboundArgument { .. } => ErrorCode::E3007,
        }
    }

    /// Convert to a diagnostic. The three innermost frames become notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        for frame in self.backtrace.frames().iter().take(3) {
            diag = diag.with_note(format!("in {frame}"));
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Factories. `#[cold]` keeps error construction off the hot path.

#[cold]
pub fn unknown_symbol(name: Name) -> EvalErrorKind {
    EvalErrorKind::UnknownSymbol { name }
}

#[cold]
pub fn unknown_function(name: Name) -> EvalErrorKind {
    EvalErrorKind::UnknownFunction { name }
}

#[cold]
pub fn arity_mismatch(name: Name, expected: usize, actual: usize) -> EvalErrorKind {
    EvalErrorKind::ArityMismatch {
        name,
        expected,
        actual,
    }
}

#[cold]
pub fn incompatible(left: &'static str, right: &'static str) -> EvalErrorKind {
    EvalErrorKind::IncompatibleTypes { left, right }
}

#[cold]
pub fn recursion_limit(depth: usize) -> EvalErrorKind {
    EvalErrorKind::RecursionLimit { depth }
}

#[cold]
pub fn native_failed(name: Name, message: String) -> EvalErrorKind {
    EvalErrorKind::Native { name, message }
}

#[cold]
pub fn unbound_argument(name: Name) -> EvalErrorKind {
    EvalErrorKind::UnboundArgument { name }
}
