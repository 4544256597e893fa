//! Use-site parameters
//!
//! A `LoaderSite` carries the parameters the host gathered from one
//! marked declaration: filtering contributions for the registry
//! pipeline, and optionally a target contract selecting the scoped
//! pipeline. How declarations are located is the host's concern.

use svcgen_domain::ContractName;
use svcgen_providers::ContractToken;

/// Parameters derived from one marked declaration
#[derive(Debug, Clone, Default)]
pub struct LoaderSite {
    /// Namespace of the declaring element; scoped artifacts land here
    pub namespace: String,
    /// Contracts this site removes from generation
    pub blacklist: Vec<ContractName>,
    /// Include prefixes contributed to the pass policy
    pub include: Vec<String>,
    /// Exclude prefixes contributed to the pass policy
    pub exclude: Vec<String>,
    /// Target contract; selects the scoped pipeline for this site
    pub target: Option<ContractToken>,
}

impl LoaderSite {
    /// Create a site in the given namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Add a blacklisted contract
    pub fn with_blacklisted(mut self, contract: impl Into<ContractName>) -> Self {
        self.blacklist.push(contract.into());
        self
    }

    /// Add an include prefix
    pub fn with_include(mut self, prefix: impl Into<String>) -> Self {
        self.include.push(prefix.into());
        self
    }

    /// Add an exclude prefix
    pub fn with_exclude(mut self, prefix: impl Into<String>) -> Self {
        self.exclude.push(prefix.into());
        self
    }

    /// Request a scoped loader for one contract
    pub fn with_target(mut self, token: ContractToken) -> Self {
        self.target = Some(token);
        self
    }
}
