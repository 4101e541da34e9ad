//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with command output.
//! Filter precedence: DATAVAULT_LOG, then `--verbose`, then the config
//! file's `[logging] level`, then `warn`.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(verbose: bool, configured_level: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured_level.unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
