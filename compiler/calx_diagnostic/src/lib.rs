//! Diagnostic system for calx error reporting.
//!
//! Every failure a line can produce (parse, type, evaluation) is turned into
//! a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - optionally the source line and a span, rendered as a caret underline
//! - notes and suggestions
//!
//! Emitters in [`emitter`] turn diagnostics into terminal text.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
