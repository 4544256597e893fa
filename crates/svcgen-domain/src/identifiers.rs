//! Contract and implementation identifiers
//!
//! Both identifiers are opaque fully-qualified dotted names taken verbatim
//! from the registry format. Equality is exact string equality: no
//! normalization, no case-folding. Newtypes keep the two kinds from being
//! mixed accidentally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified name of a service contract
///
/// Used as the service-map key and as the basis for deriving the generated
/// artifact's namespace and type name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractName(String);

impl ContractName {
    /// Create a contract name from its fully-qualified spelling
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full dotted name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All but the last dotted segment; empty for unqualified names
    pub fn namespace(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// The last dotted segment
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// True if the name starts with any of the given prefixes
    pub fn starts_with_any(&self, prefixes: &[String]) -> bool {
        prefixes.iter().any(|p| self.0.starts_with(p.as_str()))
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContractName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Fully-qualified name of a concrete type providing a contract
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementationName(String);

impl ImplementationName {
    /// Create an implementation name from its fully-qualified spelling
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full dotted name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImplementationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImplementationName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImplementationName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
