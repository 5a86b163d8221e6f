//! Tracing initialization for the CLI.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filter comes from `AHQ_LOG` (defaults to
/// `warn`); logs go to stderr so machine-readable stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_env("AHQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
