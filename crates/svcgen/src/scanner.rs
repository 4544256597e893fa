//! Registry resource scanning
//!
//! A registry resource is a file at `<root>/<registry dir>/<contract fq
//! name>` listing implementation fq names one per line. Blank lines and
//! lines starting with `#` are comments. The scanner holds no state
//! between passes; re-scanning is re-invoking.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use svcgen_domain::constants::REGISTRY_DIR;
use svcgen_domain::{ContractName, DiagnosticsSink, Error, ImplementationName, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Strategy for the registry scan
///
/// Two legacy policies, kept selectable. Neither supersedes the other,
/// but `Indexed` traverses each registry directory once instead of once
/// per discovered contract and isolates per-resource failures, so it is
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Enumerate contract names first, then re-open each resource by
    /// name; any failure aborts the whole pass
    Naive,
    /// Single non-recursive walk reading each resource once;
    /// per-resource failures are reported and skipped
    #[default]
    Indexed,
}

/// Result of one registry scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Discovered `(contract, implementation)` pairs
    pub pairs: Vec<(ContractName, ImplementationName)>,
    /// Resources that could not be read (indexed strategy only)
    pub failed_resources: usize,
}

/// Walks resource roots for registry resources
#[derive(Debug, Clone)]
pub struct RegistryScanner {
    roots: Vec<PathBuf>,
    registry_dir: String,
}

impl RegistryScanner {
    /// Create a scanner over the given resource roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            registry_dir: REGISTRY_DIR.to_string(),
        }
    }

    /// Override the registry directory prefix
    pub fn with_registry_dir(mut self, dir: impl Into<String>) -> Self {
        self.registry_dir = dir.into();
        self
    }

    /// Scan every root with the selected strategy
    ///
    /// Naive-strategy failures propagate and abort the pass; indexed
    /// failures are reported to the sink per resource and counted in
    /// the outcome.
    pub fn scan(&self, strategy: ScanStrategy, sink: &dyn DiagnosticsSink) -> Result<ScanOutcome> {
        match strategy {
            ScanStrategy::Naive => self.scan_naive(),
            ScanStrategy::Indexed => Ok(self.scan_indexed(sink)),
        }
    }

    /// Double-lookup scan: list contract names, then re-open each file
    fn scan_naive(&self) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for root in &self.roots {
            let dir = root.join(&self.registry_dir);
            if !dir.is_dir() {
                continue;
            }

            let mut contracts = Vec::new();
            for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    Error::scan_with_source(
                        format!("failed to enumerate registry directory '{}'", dir.display()),
                        e,
                    )
                })?;
                if let Some(name) = entry.file_name().to_str() {
                    contracts.push(name.to_string());
                }
            }

            // Second lookup: each contract file is opened again by name.
            for contract in contracts {
                let path = dir.join(&contract);
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::scan_with_source(
                        format!("failed to read registry resource '{}'", path.display()),
                        e,
                    )
                })?;
                collect_pairs(&contract, &content, &mut outcome.pairs);
            }
        }

        Ok(outcome)
    }

    /// Single-traversal scan reading each resource handle once
    fn scan_indexed(&self, sink: &dyn DiagnosticsSink) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        for root in &self.roots {
            let dir = root.join(&self.registry_dir);
            if !dir.is_dir() {
                continue;
            }

            for entry in WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
            {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        sink.error(&format!(
                            "failed to enumerate registry directory '{}': {e}",
                            dir.display()
                        ));
                        outcome.failed_resources += 1;
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(contract) = entry.file_name().to_str() else {
                    continue;
                };

                match fs::read_to_string(entry.path()) {
                    Ok(content) => collect_pairs(contract, &content, &mut outcome.pairs),
                    Err(e) => {
                        sink.error(&format!(
                            "failed to read registry resource '{}': {e}",
                            entry.path().display()
                        ));
                        outcome.failed_resources += 1;
                    }
                }
            }
        }

        outcome
    }

    /// Resource roots this scanner walks
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

/// Parse one registry resource into pairs for its contract
fn collect_pairs(
    contract: &str,
    content: &str,
    pairs: &mut Vec<(ContractName, ImplementationName)>,
) {
    let contract = ContractName::new(contract);
    for implementation in parse_registry_lines(content) {
        debug!(%contract, %implementation, "discovered provider registration");
        pairs.push((contract.clone(), implementation));
    }
}

/// Implementation names in a registry resource body
///
/// Blank lines and `#` comments are skipped; surrounding whitespace is
/// trimmed.
pub fn parse_registry_lines(content: &str) -> impl Iterator<Item = ImplementationName> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ImplementationName::from)
}
