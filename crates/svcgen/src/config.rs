//! Configuration loading
//!
//! Pass-level options merged from defaults, an optional TOML file, and
//! environment variables, in that order. Uses Figment throughout.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use svcgen_domain::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, REGISTRY_DIR};
use svcgen_domain::{Error, Result};
use tracing::{info, warn};

use crate::scanner::ScanStrategy;

/// Pass-level generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Comma-separated contract-name prefixes to include
    ///
    /// Empty or absent means every non-blacklisted contract is eligible.
    pub include: Option<String>,
    /// Comma-separated contract-name prefixes to exclude
    pub exclude: Option<String>,
    /// Registry directory prefix under each resource root
    pub registry_dir: String,
    /// Scan strategy for the registry pipeline
    pub strategy: ScanStrategy,
    /// Log level used when `SVCGEN_LOG` is not set
    pub log_level: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            registry_dir: REGISTRY_DIR.to_string(),
            strategy: ScanStrategy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GenConfig {
    /// Include prefixes parsed from the comma-separated option
    pub fn include_prefixes(&self) -> Vec<String> {
        parse_prefix_list(self.include.as_deref())
    }

    /// Exclude prefixes parsed from the comma-separated option
    pub fn exclude_prefixes(&self) -> Vec<String> {
        parse_prefix_list(self.exclude.as_deref())
    }
}

/// Split a comma-separated prefix list, trimming entries and dropping
/// empty ones; `None` means an empty set
fn parse_prefix_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Configuration loader service
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `GenConfig::default()`
    /// 2. TOML configuration file (explicit path, or `svcgen.toml` in the
    ///    working directory)
    /// 3. Environment variables prefixed `SVCGEN_` (e.g. `SVCGEN_INCLUDE`)
    pub fn load(&self) -> Result<GenConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(GenConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")));

        figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))
    }

    /// Default config file in the working directory, if present
    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_empty_filter_sets() {
        let config = GenConfig::default();
        assert!(config.include_prefixes().is_empty());
        assert!(config.exclude_prefixes().is_empty());
        assert_eq!(config.registry_dir, REGISTRY_DIR);
        assert_eq!(config.strategy, ScanStrategy::Indexed);
    }

    #[test]
    fn prefix_lists_split_on_commas_and_trim() {
        let config = GenConfig {
            include: Some("com.example., org.other. ,".to_string()),
            ..GenConfig::default()
        };
        assert_eq!(
            config.include_prefixes(),
            vec!["com.example.".to_string(), "org.other.".to_string()]
        );
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svcgen.toml");
        std::fs::write(&path, "include = \"com.example.\"\nstrategy = \"naive\"\n").unwrap();

        let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
        assert_eq!(config.include_prefixes(), vec!["com.example.".to_string()]);
        assert_eq!(config.strategy, ScanStrategy::Naive);
    }
}
