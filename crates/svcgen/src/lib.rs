//! Service-Loader Generator
//!
//! Discovers service-provider registrations across a build's resource
//! roots, merges them under filtering rules, and emits one generated
//! loader source per service contract. The generated loader constructs
//! every discovered implementation statically, replacing runtime
//! reflective lookup.
//!
//! ## Pipelines
//!
//! - **Registry scan** (primary): walk each root's registry directory,
//!   aggregate `(contract, implementation)` pairs into a [`ServiceMap`],
//!   filter through a [`FilterPolicy`], and emit one loader per
//!   surviving contract.
//! - **Scoped** (secondary): for a use site naming one contract trait,
//!   resolve conforming providers from the compile-time registry in
//!   `svcgen-providers` and emit a single loader in the site's
//!   namespace.
//!
//! One pass per build invocation, single-threaded; every failure
//! surfaces through the host's diagnostics channel rather than
//! propagating out of the driver.

pub mod aggregator;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod emitter;
pub mod filter;
pub mod logging;
pub mod scanner;
pub mod sites;

pub use aggregator::aggregate;
pub use config::{ConfigLoader, GenConfig};
pub use diagnostics::TracingSink;
pub use driver::{Driver, PassOptions, PassSummary};
pub use emitter::{ArtifactWriter, FsWriter, LoaderEmitter};
pub use filter::FilterPolicy;
pub use scanner::{RegistryScanner, ScanOutcome, ScanStrategy};
pub use sites::LoaderSite;

pub use svcgen_domain::{
    ContractName, Diagnostic, DiagnosticsSink, Error, GeneratedArtifact, ImplementationName,
    MemorySink, Result, ServiceMap, Severity,
};
pub use svcgen_providers::{ContractToken, providers_for};
