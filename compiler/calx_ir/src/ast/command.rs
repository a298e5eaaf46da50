//! Top-level commands and handler dispatch.
//!
//! A parsed input line becomes one [`Command`]. The runtime hands each
//! command to every registered [`CommandHandler`] in turn, so state updates
//! and presentation stay independent of one another.

use super::ExprRef;
use crate::Name;

/// A parsed top-level instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// The line could not be accepted.
    Error(ErrorCommand),
    /// Leave the session.
    Exit,
    /// Show the expression tree without evaluating or binding it.
    Explain(ExprRef),
    /// Evaluate an expression and remember it as `#`.
    Expression(ExprRef),
    /// Bind `ident` to an expression.
    Let { ident: Name, expr: ExprRef },
    /// List the bindings of the root scope.
    Symbols,
}

/// A rejected line, kept for caret-style display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorCommand {
    pub message: String,
    /// The offending source line.
    pub line: String,
    /// Byte offset of the problem in `line`, when one is known.
    ///
    /// Parse errors always carry one; type errors found before dispatch do not.
    pub offset: Option<usize>,
    /// Stable diagnostic code (`E1002`, ...), when the error has one.
    pub code: Option<&'static str>,
    /// Suggestions for fixing the line, such as a did-you-mean.
    pub hints: Vec<String>,
}

impl ErrorCommand {
    pub fn new(message: impl Into<String>, line: impl Into<String>, offset: Option<usize>) -> Self {
        ErrorCommand {
            message: message.into(),
            line: line.into(),
            offset,
            code: None,
            hints: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// One method per [`Command`] variant.
///
/// Adding a command variant without a matching method here fails to compile
/// in [`Command::dispatch`].
pub trait CommandHandler {
    fn handle_error(&mut self, command: &ErrorCommand);
    fn handle_exit(&mut self);
    fn handle_explain(&mut self, expr: &ExprRef);
    fn handle_expression(&mut self, expr: &ExprRef);
    fn handle_let(&mut self, ident: &Name, expr: &ExprRef);
    fn handle_symbols(&mut self);
}

impl Command {
    /// Route this command to the matching handler method.
    pub fn dispatch<H: CommandHandler + ?Sized>(&self, handler: &mut H) {
        match self {
            Command::Error(error) => handler.handle_error(error),
            Command::Exit => handler.handle_exit(),
            Command::Explain(expr) => handler.handle_explain(expr),
            Command::Expression(expr) => handler.handle_expression(expr),
            Command::Let { ident, expr } => handler.handle_let(ident, expr),
            Command::Symbols => handler.handle_symbols(),
        }
    }

    /// Build an error command.
    pub fn error(message: impl Into<String>, line: impl Into<String>, offset: Option<usize>) -> Self {
        Command::Error(ErrorCommand::new(message, line, offset))
    }

    /// The expression a command would bind, together with the name it binds.
    ///
    /// `Expression` commands bind the reserved name `#`.
    pub fn binding(&self) -> Option<(Name, &ExprRef)> {
        match self {
            Command::Expression(expr) => Some((Name::new(Name::LAST_RESULT), expr)),
            Command::Let { ident, expr } => Some((ident.clone(), expr)),
            Command::Error(_) | Command::Exit | Command::Explain(_) | Command::Symbols => None,
        }
    }
}
