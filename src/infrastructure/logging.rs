//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `rptodo=trace`)
pub const LOG_ENV: &str = "RPTODO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from RPTODO_LOG, falling back to warnings only
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. Calling this
/// more than once is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
