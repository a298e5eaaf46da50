//! The command pipeline shared by every console mode.
//!
//! [`Runtime::execute`] turns one input line into a [`Command`], validates
//! it against the root symbol table and hands it to every registered
//! handler in order. The [`StateHandler`] is always first, so presentation
//! handlers already see the new bindings.

use std::rc::Rc;

use calx_diagnostic::Diagnostic;
use calx_ir::ast::{mentions, substitute};
use calx_ir::{Command, CommandHandler, ErrorCommand, Expr, ExprRef, Name, SymbolTable};
use calx_types::{CheckerConfig, TypeChecker};

/// Whether the session should keep reading input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A root table seeded with `#` = 0, `sum` and the native prelude.
pub fn bootstrap_table() -> SymbolTable {
    let table = SymbolTable::new();
    table.put(Name::LAST_RESULT, Expr::number(0.0));
    calx_eval::prelude::install(&table);
    table
}

/// Applies bindings: `#` for bare expressions and the named identifier for
/// `let`. Every other command leaves the table alone.
pub struct StateHandler {
    table: SymbolTable,
}

impl StateHandler {
    pub fn new(table: SymbolTable) -> Self {
        StateHandler { table }
    }
}

impl CommandHandler for StateHandler {
    fn handle_error(&mut self, _command: &ErrorCommand) {}

    fn handle_exit(&mut self) {}

    fn handle_explain(&mut self, _expr: &ExprRef) {}

    fn handle_expression(&mut self, expr: &ExprRef) {
        self.table.put(Name::LAST_RESULT, Rc::clone(expr));
    }

    fn handle_let(&mut self, ident: &Name, expr: &ExprRef) {
        tracing::debug!(%ident, "bind");
        self.table.put(ident.clone(), Rc::clone(expr));
    }

    fn handle_symbols(&mut self) {}
}

/// Owns the root table and the ordered handler list.
pub struct Runtime {
    table: SymbolTable,
    checker: TypeChecker,
    handlers: Vec<Box<dyn CommandHandler>>,
    rejected: usize,
}

impl Runtime {
    /// A runtime over [`bootstrap_table`].
    pub fn new(config: CheckerConfig) -> Self {
        Self::with_table(bootstrap_table(), config)
    }

    pub fn with_table(table: SymbolTable, config: CheckerConfig) -> Self {
        let state = StateHandler::new(table.clone());
        Runtime {
            table,
            checker: TypeChecker::with_config(config),
            handlers: vec![Box::new(state)],
            rejected: 0,
        }
    }

    /// Register a handler after the ones already present.
    pub fn add_handler(&mut self, handler: Box<dyn CommandHandler>) {
        self.handlers.push(handler);
    }

    /// The root symbol table.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Number of lines turned into `Error` commands so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Execute one input line. Blank lines are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        let command = self.prepare(line);
        if matches!(command, Command::Error(_)) {
            self.rejected += 1;
        }
        for handler in &mut self.handlers {
            command.dispatch(handler.as_mut());
        }

        if matches!(command, Command::Exit) {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    /// Parse and validate a line without dispatching it.
    ///
    /// A parse failure becomes an `Error` command pointing at the offending
    /// token. Binding commands have self-references rewritten and must pass
    /// the type check; a type error becomes an `Error` command without an
    /// offset, so nothing gets bound.
    pub fn prepare(&mut self, line: &str) -> Command {
        let command = match calx_parse::parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(%err, "parse failed");
                return error_command(&err.to_diagnostic(line), line, Some(err.offset()));
            }
        };

        let Some((name, expr)) = command.binding() else {
            return command;
        };
        let expr = self.rewrite_self_reference(&name, expr);

        if let Err(err) = self.checker.check(&expr, &self.table) {
            return error_command(&err.to_diagnostic(), line, None);
        }

        match command {
            Command::Let { ident, .. } => Command::Let { ident, expr },
            _ => Command::Expression(expr),
        }
    }

    /// Replace free occurrences of `name` in `expr` with its current
    /// binding, so `# * 2` means "the previous result doubled".
    fn rewrite_self_reference(&self, name: &Name, expr: &ExprRef) -> ExprRef {
        if !mentions(expr, name) {
            return Rc::clone(expr);
        }
        match self.table.get(name.as_str()) {
            Some(previous) => substitute(expr, name, &previous),
            None => Rc::clone(expr),
        }
    }
}

fn error_command(diagnostic: &Diagnostic, line: &str, offset: Option<usize>) -> Command {
    let error = ErrorCommand::new(diagnostic.message.clone(), line, offset)
        .with_code(diagnostic.code.as_str());
    Command::Error(
        diagnostic
            .suggestions
            .iter()
            .fold(error, |error, hint| error.with_hint(hint.clone())),
    )
}

#[cfg(test)]
mod tests;
