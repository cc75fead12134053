//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter, e.g. `TIMETRACKER_LOG=debug`.
pub const LOG_ENV: &str = "TIMETRACKER_LOG";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // an already installed subscriber wins
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
