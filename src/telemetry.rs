//! Tracing bootstrap for the CLI binary.
//!
//! The pure core logs nothing; config, store and CLI layers trace through
//! the global subscriber installed here. `TM_LOG` takes an `EnvFilter`
//! directive and wins over the verbosity flags.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "TM_LOG";

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
