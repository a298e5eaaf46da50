//! Presentation handler: prints values, trees, symbol listings and errors.

mod table;

use std::io::Write;

use calx_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use calx_diagnostic::{Diagnostic, ErrorCode};
use calx_eval::{describe, Evaluator};
use calx_ir::{CommandHandler, ErrorCommand, ExprRef, Name, Span, SymbolTable};

use crate::ConsoleConfig;

pub use table::render as render_table;

const VALUE_STYLE: &str = "\x1b[33m"; // Yellow
const RESET: &str = "\x1b[0m";

/// Writes the outcome of each command to `out`.
///
/// Runs after the state handler, so `let` and bare expressions are shown
/// from the freshly updated table.
pub struct ConsoleHandler<W: Write> {
    table: SymbolTable,
    evaluator: Evaluator,
    out: W,
    color: ColorMode,
    is_tty: bool,
}

impl<W: Write> ConsoleHandler<W> {
    pub fn new(table: SymbolTable, out: W, config: &ConsoleConfig, is_tty: bool) -> Self {
        ConsoleHandler {
            table,
            evaluator: Evaluator::with_config(config.evaluator()),
            out,
            color: config.color,
            is_tty,
        }
    }

    fn colors(&self) -> bool {
        self.color.should_use_colors(self.is_tty)
    }

    fn write_value(&mut self, text: &str) {
        if self.colors() {
            let _ = writeln!(self.out, "{VALUE_STYLE}{text}{RESET}");
        } else {
            let _ = writeln!(self.out, "{text}");
        }
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        let mut emitter = TerminalEmitter::with_color_mode(&mut self.out, self.color, self.is_tty);
        emitter.emit(diagnostic);
        emitter.flush();
    }

    /// Evaluate `expr` against the root and print its description.
    fn show_value(&mut self, expr: &ExprRef) {
        match self.evaluator.eval(expr, &self.table) {
            Ok(value) => self.write_value(&describe(&value)),
            Err(err) => self.emit(&err.to_diagnostic()),
        }
    }

    fn describe_binding(&mut self, name: &Name, expr: &ExprRef) -> String {
        match self.evaluator.eval(expr, &self.table) {
            Ok(value) => describe(&value),
            Err(err) => {
                tracing::debug!(%name, %err, "binding failed to evaluate");
                format!("error: {err}")
            }
        }
    }
}

impl<W: Write> CommandHandler for ConsoleHandler<W> {
    fn handle_error(&mut self, command: &ErrorCommand) {
        let Some(code) = command.code.and_then(|code| code.parse::<ErrorCode>().ok()) else {
            let _ = writeln!(self.out, "error: {}", command.message);
            return;
        };

        let mut diagnostic = Diagnostic::error(code).with_message(command.message.clone());
        if let Some(offset) = command.offset {
            let offset = u32::try_from(offset).unwrap_or(u32::MAX);
            diagnostic = diagnostic.with_source(command.line.clone(), Span::point(offset));
        }
        for hint in &command.hints {
            diagnostic = diagnostic.with_suggestion(hint.clone());
        }
        self.emit(&diagnostic);
    }

    fn handle_exit(&mut self) {
        let _ = self.out.flush();
    }

    fn handle_explain(&mut self, expr: &ExprRef) {
        let tree = expr.tree().to_string();
        self.write_value(tree.trim_end());
    }

    fn handle_expression(&mut self, expr: &ExprRef) {
        self.show_value(expr);
    }

    fn handle_let(&mut self, _ident: &Name, expr: &ExprRef) {
        self.show_value(expr);
    }

    fn handle_symbols(&mut self) {
        let rows: Vec<(String, String)> = self
            .table
            .entries()
            .into_iter()
            .map(|(name, expr)| {
                let description = self.describe_binding(&name, &expr);
                (name.to_string(), description)
            })
            .collect();
        let listing = render_table(("Ident", "Expression"), &rows);
        self.write_value(&listing);
    }
}
