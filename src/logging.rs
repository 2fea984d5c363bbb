//! Diagnostic logging to stderr.
//!
//! Game text goes to stdout; `tracing` output goes to stderr so the two never
//! interleave in a redirected transcript.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the `-v` derived level.
pub const LOG_ENV: &str = "KBC_LOG";

/// Maps the `-v` count to a tracing directive: 0 warn, 1 info, 2 debug, 3+ trace.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8, ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
