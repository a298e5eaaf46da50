//! End-to-end console sessions: lines in, rendered output out.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use calx_diagnostic::emitter::ColorMode;
use calxc::commands::{execute_all, session};
use calxc::{ConsoleConfig, Flow, Runtime};
use pretty_assertions::assert_eq;

/// A writer whose contents stay readable after it is handed to a runtime.
#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.borrow_mut())).unwrap()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn config() -> ConsoleConfig {
    ConsoleConfig {
        color: ColorMode::Never,
        ..ConsoleConfig::default()
    }
}

fn start(config: &ConsoleConfig) -> (Runtime, Transcript) {
    let transcript = Transcript::default();
    let runtime = session(config, transcript.clone(), false);
    (runtime, transcript)
}

/// Run `lines` in a fresh session and return everything printed.
fn run(lines: &[&str]) -> String {
    let (mut runtime, transcript) = start(&config());
    execute_all(&mut runtime, lines.iter().copied());
    transcript.take()
}

#[test]
fn test_values_are_described() {
    assert_eq!(
        run(&["1 + 2 * 3", "1 < 2", "1 / 0", "sum"]),
        "Number: 7\nBoolean: true\nNumber: Infinity\nFunction[(Number, Number) -> Number]\n"
    );
}

#[test]
fn test_let_and_call() {
    assert_eq!(
        run(&["let f = (a: Number) -> a + 1", "f(4)"]),
        "Function[(Number) -> Number]\nNumber: 5\n"
    );
}

#[test]
fn test_last_result_updates() {
    assert_eq!(
        run(&["5", "# * 2", "# + 1", "#"]),
        "Number: 5\nNumber: 10\nNumber: 11\nNumber: 11\n"
    );
}

#[test]
fn test_closures_survive_their_call() {
    assert_eq!(
        run(&[
            "let mk = (a: Number) -> (b: Number) -> a + b",
            "let add1 = mk(1)",
            "add1(41)",
        ]),
        "Function[(Number) -> Function[(Number) -> Number]]\n\
         Function[(Number) -> Number]\n\
         Number: 42\n"
    );
}

#[test]
fn test_sin_bridge() {
    assert_eq!(run(&["sin(0)", "sin(0) + cos(0)"]), "Number: 0\nNumber: 1\n");
}

#[test]
fn test_explain_tree() {
    assert_eq!(
        run(&["explain 1 + 2 * 3"]),
        "Add\n├── Number<1>\n└── Multiply\n    ├── Number<2>\n    └── Number<3>\n"
    );
}

#[test]
fn test_parse_error_has_caret() {
    assert_eq!(
        run(&["1 + * 2"]),
        "error[E1002]: expected expression, found `*`\n  | 1 + * 2\n  |     ^\n"
    );
}

#[test]
fn test_type_error_has_suggestion_and_no_caret() {
    assert_eq!(
        run(&["sine(1)"]),
        "error[E2002]: unknown function `sine`\n  = help: did you mean `sin`?\n"
    );
}

#[test]
fn test_incompatible_types_are_rejected() {
    assert_eq!(
        run(&["1 + true", "#"]),
        "error[E2004]: incompatible types: Number and Boolean\nNumber: 0\n"
    );
}

#[test]
fn test_recursion_is_limited() {
    let config = ConsoleConfig {
        max_depth: 32,
        ..config()
    };
    let (mut runtime, transcript) = start(&config);
    execute_all(
        &mut runtime,
        ["let f = (n: Number) -> n", "let f = (n: Number) -> f(n)", "f(1)"],
    );
    // The recursive closure has no finite type, so its description falls
    // back to the bare variant name.
    assert_eq!(
        transcript.take(),
        "Function[(Number) -> Number]\n\
         Function\n\
         error[E2005]: type checking exceeded the depth limit of 32\n"
    );
    assert_eq!(runtime.rejected(), 1);
}

#[test]
fn test_symbols_are_sorted() {
    let output = run(&["let b = true", "let a = 2", "symbols"]);
    let idents: Vec<&str> = output
        .lines()
        .filter_map(|line| line.strip_prefix("| "))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect();
    assert_eq!(
        idents,
        vec![
            "Ident", "#", "a", "abs", "b", "cos", "exp", "ln", "max", "min", "pow", "sin",
            "sqrt", "sum", "tan"
        ]
    );
    assert!(output.contains("| b     | Boolean: true"), "{output}");
}

#[test]
fn test_exit_stops_the_session() {
    let (mut runtime, transcript) = start(&config());
    assert_eq!(runtime.execute("1"), Flow::Continue);
    assert_eq!(runtime.execute("exit"), Flow::Exit);
    assert_eq!(execute_all(&mut runtime, ["2", "quit", "3"]), 0);
    assert_eq!(transcript.take(), "Number: 1\nNumber: 2\n");
}

#[test]
fn test_exit_code_reflects_rejected_lines() {
    let (mut runtime, _) = start(&config());
    assert_eq!(execute_all(&mut runtime, ["1 + 1", ""]), 0);
    assert_eq!(execute_all(&mut runtime, ["1 +"]), 1);
}

#[test]
fn test_colored_output() {
    let config = ConsoleConfig {
        color: ColorMode::Always,
        ..ConsoleConfig::default()
    };
    let (mut runtime, transcript) = start(&config);
    runtime.execute("1");
    assert_eq!(transcript.take(), "\x1b[33mNumber: 1\x1b[0m\n");
    runtime.execute("nope");
    assert!(transcript.take().starts_with("\x1b[1;31merror\x1b[0m"));
}
