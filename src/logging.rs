//! Diagnostic logging
//!
//! `tracing` events go to stderr. `RUST_LOG` wins over the verbosity flag.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbose).into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
