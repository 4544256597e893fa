//! Pass orchestration
//!
//! One pass per build invocation: scan, filter, aggregate, emit. Every
//! failure from the driver's own body is converted to a diagnostic;
//! nothing propagates to the host uncaught. Entry-level failures are
//! isolated so the rest of the pass completes; a naive-strategy scan
//! failure fails the whole pass with a single diagnostic.

use std::path::PathBuf;
use svcgen_providers::providers_for;
use tracing::info;

use crate::aggregator::aggregate;
use crate::config::GenConfig;
use crate::emitter::{ArtifactWriter, LoaderEmitter};
use crate::filter::FilterPolicy;
use crate::scanner::RegistryScanner;
use crate::sites::LoaderSite;
use svcgen_domain::{ContractName, DiagnosticsSink, GeneratedArtifact, Result};

/// Everything one pass needs
#[derive(Debug, Default)]
pub struct PassOptions {
    /// Resource roots scanned for registry resources
    pub roots: Vec<PathBuf>,
    /// Pass-level configuration
    pub config: GenConfig,
    /// Use sites collected by the host for this pass
    pub sites: Vec<LoaderSite>,
}

/// Outcome counters for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Artifacts rendered and persisted
    pub generated: usize,
    /// Entries (or the whole scan) that failed
    pub failed: usize,
}

/// Orchestrates one generation pass
pub struct Driver<'a> {
    options: PassOptions,
    writer: &'a dyn ArtifactWriter,
    sink: &'a dyn DiagnosticsSink,
}

impl<'a> Driver<'a> {
    /// Create a driver over the given collaborators
    pub fn new(
        options: PassOptions,
        writer: &'a dyn ArtifactWriter,
        sink: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            options,
            writer,
            sink,
        }
    }

    /// Run one full pass
    ///
    /// Never fails: any error escaping the pass body is reported as a
    /// diagnostic and counted in the summary.
    pub fn run(&self) -> PassSummary {
        match self.run_pass() {
            Ok(summary) => summary,
            Err(e) => {
                self.sink.error(&format!("generation pass failed: {e}"));
                PassSummary {
                    generated: 0,
                    failed: 1,
                }
            }
        }
    }

    fn run_pass(&self) -> Result<PassSummary> {
        let emitter = LoaderEmitter::new()?;
        let mut summary = PassSummary::default();

        self.run_registry_pipeline(&emitter, &mut summary)?;
        self.run_scoped_pipeline(&emitter, &mut summary);

        info!(
            generated = summary.generated,
            failed = summary.failed,
            "generation pass complete"
        );
        Ok(summary)
    }

    /// Primary pipeline: registry scan, aggregate, emit per contract
    fn run_registry_pipeline(
        &self,
        emitter: &LoaderEmitter,
        summary: &mut PassSummary,
    ) -> Result<()> {
        let policy = FilterPolicy::from_parts(&self.options.config, &self.options.sites);
        let scanner = RegistryScanner::new(self.options.roots.clone())
            .with_registry_dir(self.options.config.registry_dir.clone());

        // Naive-strategy scan errors propagate and abort the pass.
        let outcome = scanner.scan(self.options.config.strategy, self.sink)?;
        summary.failed += outcome.failed_resources;

        let map = aggregate(outcome.pairs, &policy);
        for (contract, implementations) in &map {
            let result = emitter
                .emit(contract, implementations)
                .and_then(|artifact| self.persist(contract, artifact));
            match result {
                Ok(()) => summary.generated += 1,
                Err(e) => {
                    self.sink
                        .error(&format!("failed to generate loader for '{contract}': {e}"));
                    summary.failed += 1;
                }
            }
        }

        Ok(())
    }

    /// Secondary pipeline: one scoped loader per targeted use site
    fn run_scoped_pipeline(&self, emitter: &LoaderEmitter, summary: &mut PassSummary) {
        for site in &self.options.sites {
            let Some(token) = &site.target else {
                continue;
            };

            // Zero conforming providers is not an error; the loader then
            // returns an empty list.
            let implementations = providers_for(token);
            let result = emitter
                .emit_in_namespace(token.name(), &site.namespace, implementations.iter())
                .and_then(|artifact| self.persist(token.name(), artifact));
            match result {
                Ok(()) => summary.generated += 1,
                Err(e) => {
                    self.sink.error(&format!(
                        "failed to generate scoped loader for '{}': {e}",
                        token.name()
                    ));
                    summary.failed += 1;
                }
            }
        }
    }

    fn persist(&self, contract: &ContractName, artifact: GeneratedArtifact) -> Result<()> {
        self.writer.write(&artifact)?;
        info!(
            %contract,
            artifact = %artifact.qualified_name(),
            "generated service loader"
        );
        Ok(())
    }
}
