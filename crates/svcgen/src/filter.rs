//! Contract filtering policy
//!
//! Decides whether a contract participates in generation. Three
//! independent controls compose in precedence order: blacklist, then
//! include prefixes, then exclude prefixes. Pure function of its
//! configuration and the contract name; no I/O.

use std::collections::BTreeSet;
use svcgen_domain::ContractName;
use svcgen_domain::constants::SELF_CONTRACT;

use crate::config::GenConfig;
use crate::sites::LoaderSite;

/// Combined blacklist / include-prefix / exclude-prefix decision function
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    blacklist: BTreeSet<ContractName>,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPolicy {
    /// Create a policy with empty include/exclude sets
    ///
    /// The blacklist starts with the pipeline's own processing contract
    /// so the generator never emits a loader for itself.
    pub fn new() -> Self {
        let mut blacklist = BTreeSet::new();
        blacklist.insert(ContractName::new(SELF_CONTRACT));
        Self {
            blacklist,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Build the pass policy from global configuration and use sites
    ///
    /// Site blacklists and include/exclude arrays merge with the
    /// configured prefix lists by union.
    pub fn from_parts(config: &GenConfig, sites: &[LoaderSite]) -> Self {
        let mut policy = Self::new();
        policy.include = config.include_prefixes();
        policy.exclude = config.exclude_prefixes();

        for site in sites {
            policy.blacklist.extend(site.blacklist.iter().cloned());
            for prefix in &site.include {
                if !policy.include.contains(prefix) {
                    policy.include.push(prefix.clone());
                }
            }
            for prefix in &site.exclude {
                if !policy.exclude.contains(prefix) {
                    policy.exclude.push(prefix.clone());
                }
            }
        }

        policy
    }

    /// Add a contract to the blacklist
    pub fn with_blacklisted(mut self, contract: impl Into<ContractName>) -> Self {
        self.blacklist.insert(contract.into());
        self
    }

    /// Add an include prefix
    pub fn with_include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.include.push(prefix.into());
        self
    }

    /// Add an exclude prefix
    pub fn with_exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclude.push(prefix.into());
        self
    }

    /// True if the contract participates in generation
    ///
    /// Precedence: blacklist membership rejects; a non-empty include set
    /// requires at least one prefix match; any exclude match rejects;
    /// otherwise accept.
    pub fn allowed(&self, contract: &ContractName) -> bool {
        if self.blacklist.contains(contract) {
            return false;
        }
        if !self.include.is_empty() && !contract.starts_with_any(&self.include) {
            return false;
        }
        if contract.starts_with_any(&self.exclude) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(name: &str) -> ContractName {
        ContractName::new(name)
    }

    #[test]
    fn accepts_everything_without_configuration() {
        let policy = FilterPolicy::new();
        assert!(policy.allowed(&contract("com.example.Greeter")));
        assert!(policy.allowed(&contract("org.other.Thing")));
    }

    #[test]
    fn self_contract_is_always_blacklisted() {
        let policy = FilterPolicy::new().with_include_prefix("org.svcgen.");
        assert!(!policy.allowed(&contract(SELF_CONTRACT)));
    }

    #[test]
    fn blacklist_beats_include_match() {
        let policy = FilterPolicy::new()
            .with_blacklisted("com.example.Greeter")
            .with_include_prefix("com.example.");
        assert!(!policy.allowed(&contract("com.example.Greeter")));
        assert!(policy.allowed(&contract("com.example.Other")));
    }

    #[test]
    fn include_and_exclude_compose() {
        let policy = FilterPolicy::new()
            .with_include_prefix("com.example.")
            .with_exclude_prefix("com.example.internal.");

        assert!(policy.allowed(&contract("com.example.Greeter")));
        assert!(!policy.allowed(&contract("com.example.internal.Secret")));
        assert!(!policy.allowed(&contract("org.other.Thing")));
    }

    #[test]
    fn exclude_alone_rejects_matching_prefixes_only() {
        let policy = FilterPolicy::new().with_exclude_prefix("com.example.internal.");
        assert!(policy.allowed(&contract("com.example.Greeter")));
        assert!(!policy.allowed(&contract("com.example.internal.Secret")));
    }

    #[test]
    fn site_parameters_merge_by_union() {
        let config = GenConfig {
            include: Some("com.example.".to_string()),
            ..GenConfig::default()
        };
        let site = LoaderSite::new("com.example.app")
            .with_blacklisted("com.example.Banned")
            .with_include("org.extra.")
            .with_exclude("com.example.internal.");

        let policy = FilterPolicy::from_parts(&config, &[site]);
        assert!(policy.allowed(&contract("com.example.Greeter")));
        assert!(policy.allowed(&contract("org.extra.Widget")));
        assert!(!policy.allowed(&contract("com.example.Banned")));
        assert!(!policy.allowed(&contract("com.example.internal.Secret")));
    }
}
