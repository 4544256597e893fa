//! Diagnostics sink adapters

use svcgen_domain::{DiagnosticsSink, Severity};
use tracing::{error, warn};

/// Sink forwarding diagnostics to structured logging
///
/// Used by the CLI, where there is no host diagnostics channel to write
/// to.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => error!("{message}"),
            Severity::Warning => warn!("{message}"),
        }
    }
}
