//! Diagnostics port
//!
//! The host build toolchain exposes a channel accepting severity/message
//! pairs. The pipeline only ever writes to it: errors are fatal to the
//! enclosing unit of work, warnings are informational.

use std::fmt;
use std::sync::Mutex;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal to the enclosing unit of work
    Error,
    /// Informational
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// One reported diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the report
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

/// Port for the host's diagnostics channel
pub trait DiagnosticsSink {
    /// Report a diagnostic
    fn report(&self, severity: Severity, message: &str);

    /// Report an error diagnostic
    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }

    /// Report a warning diagnostic
    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }
}

/// Recording sink backed by an in-memory buffer
///
/// Used by hosts that collect diagnostics for later rendering and by
/// tests asserting on reported failures.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Messages reported at the given severity
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message)
            .collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn report(&self, severity: Severity, message: &str) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(Diagnostic {
                severity,
                message: message.to_string(),
            });
        }
    }
}
