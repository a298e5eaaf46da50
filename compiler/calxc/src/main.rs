//! Calx CLI

use calxc::commands::{eval_lines, repl, run_file};
use calxc::ConsoleConfig;

fn main() {
    calxc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let no_color = std::env::var("NO_COLOR").ok();
    let (config, args) = match ConsoleConfig::from_args(&args, no_color.as_deref()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(2);
        }
    };

    let code = match args.first().map(String::as_str) {
        None | Some("repl") => repl(&config),
        Some("run") => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: calx run <file>");
                std::process::exit(2);
            };
            run_file(path, &config)
        }
        Some("eval") => {
            if args.len() < 2 {
                eprintln!("Usage: calx eval <line>...");
                std::process::exit(2);
            }
            eval_lines(&args[1..], &config)
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            0
        }
        Some("version" | "--version" | "-V") => {
            println!("calx {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            2
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Calx - a small typed expression language");
    println!();
    println!("Usage: calx [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl               Interactive console (default)");
    println!("  run <file>         Execute every line of a file");
    println!("  eval <line>...     Execute each argument as one line");
    println!("  help               Show this message");
    println!("  version            Show version information");
    println!();
    println!("Options:");
    println!("  --no-color         Disable colored output (also NO_COLOR=1)");
    println!("  --color            Force colored output");
    println!("  --max-depth=<n>    Nesting limit for checking and evaluation (default 512)");
    println!();
    println!("Console commands:");
    println!("  let <name> = <expr>    Bind a name");
    println!("  explain <expr>         Show the expression tree");
    println!("  symbols                List top-level bindings");
    println!("  exit | quit            Leave the console");
    println!();
    let builtins: Vec<&str> = calx_eval::prelude::names().collect();
    println!("Built-in functions: {}", builtins.join(", "));
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=calx_eval=debug) for tracing output.");
}
