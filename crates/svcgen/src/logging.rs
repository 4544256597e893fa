//! Structured logging with tracing

use svcgen_domain::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging once per process
///
/// The `SVCGEN_LOG` environment filter wins; otherwise the configured
/// level applies.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env("SVCGEN_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}
