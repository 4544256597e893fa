//! Domain layer for svcgen
//!
//! Core types shared by every stage of the service-loader generation
//! pipeline: contract and implementation identifiers, the per-pass
//! service map, generated artifacts, the diagnostics port, and the
//! crate-wide error type. This crate performs no I/O.

pub mod artifact;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod identifiers;
pub mod service_map;

pub use artifact::GeneratedArtifact;
pub use diagnostics::{Diagnostic, DiagnosticsSink, MemorySink, Severity};
pub use error::{Error, Result};
pub use identifiers::{ContractName, ImplementationName};
pub use service_map::ServiceMap;
