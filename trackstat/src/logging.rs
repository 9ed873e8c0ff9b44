//! Logging setup and a `Logger` that forwards to `tracing`

use trackstat_plugin::Logger;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber. `RUST_LOG` overrides
/// `default_filter`. Returns false if a subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Host progress messages as `info` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        let message = message.trim();
        if !message.is_empty() {
            tracing::info!(target: "trackstat", "{}", message);
        }
    }
}
