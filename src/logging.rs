//! Diagnostic logging.
//!
//! Events go to stderr so stdout carries nothing but the greeting.

use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn filter() -> EnvFilter {
    return EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter())
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
