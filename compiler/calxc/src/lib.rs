//! Calx console driver.
//!
//! ```text
//! line ──► calx_parse ──► Command ──► Runtime::prepare ──► handlers
//!                                      (rewrite, type check)   │
//!                                                              ├─► StateHandler (bindings)
//!                                                              └─► ConsoleHandler (output)
//! ```

pub mod commands;
mod config;
mod console;
mod runtime;

use std::sync::Once;

pub use config::ConsoleConfig;
pub use console::{render_table, ConsoleHandler};
pub use runtime::{bootstrap_table, Flow, Runtime, StateHandler};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Safe to call more than once. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=calx_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry().with(filter).with(tree).try_init();
        }
    });
}
