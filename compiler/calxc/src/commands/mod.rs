//! Console modes behind the `calx` subcommands.
//!
//! Each returns the process exit code: 0 when every line was accepted, 1
//! when a line was rejected or the input could not be read.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::{ConsoleConfig, ConsoleHandler, Flow, Runtime};

const PROMPT: &str = "> ";
const PROMPT_STYLE: &str = "\x1b[1;36m"; // Bold cyan
const RESET: &str = "\x1b[0m";

/// A runtime with a console handler writing to `out`.
pub fn session<W: Write + 'static>(config: &ConsoleConfig, out: W, is_tty: bool) -> Runtime {
    let mut runtime = Runtime::new(config.checker());
    let console = ConsoleHandler::new(runtime.table().clone(), out, config, is_tty);
    runtime.add_handler(Box::new(console));
    runtime
}

fn stdout_session(config: &ConsoleConfig) -> Runtime {
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    session(config, stdout, is_tty)
}

/// Execute `lines` in order until one of them exits.
pub fn execute_all<'a>(runtime: &mut Runtime, lines: impl IntoIterator<Item = &'a str>) -> i32 {
    for line in lines {
        if runtime.execute(line) == Flow::Exit {
            break;
        }
    }
    i32::from(runtime.rejected() > 0)
}

/// Interactive loop on stdin.
pub fn repl(config: &ConsoleConfig) -> i32 {
    let mut runtime = stdout_session(config);
    let colors = config.color.should_use_colors(io::stdout().is_terminal());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        {
            let mut stdout = io::stdout();
            if colors {
                let _ = write!(stdout, "{PROMPT_STYLE}{PROMPT}{RESET}");
            } else {
                let _ = write!(stdout, "{PROMPT}");
            }
            let _ = stdout.flush();
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                return 1;
            }
        }
        if runtime.execute(line.trim_end_matches(|c| c == '\n' || c == '\r')) == Flow::Exit {
            break;
        }
    }
    0
}

/// Execute every line of a file.
pub fn run_file(path: &str, config: &ConsoleConfig) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            return 1;
        }
    };
    tracing::debug!(path, lines = source.lines().count(), "run file");
    let mut runtime = stdout_session(config);
    execute_all(&mut runtime, source.lines())
}

/// Execute each argument as one line.
pub fn eval_lines(lines: &[String], config: &ConsoleConfig) -> i32 {
    let mut runtime = stdout_session(config);
    execute_all(&mut runtime, lines.iter().map(String::as_str))
}
