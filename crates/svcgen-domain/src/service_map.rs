//! Per-pass merge of discovered contract/implementation associations

use crate::identifiers::{ContractName, ImplementationName};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from contract name to the set of implementation names
///
/// Built fresh at the start of every pass and discarded after emission.
/// Backed by ordered containers so iteration order is stable across
/// identical passes; generated artifacts stay byte-identical for
/// identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMap {
    entries: BTreeMap<ContractName, BTreeSet<ImplementationName>>,
}

impl ServiceMap {
    /// Create an empty service map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an implementation under a contract, creating the set on
    /// first insertion
    ///
    /// Idempotent: re-inserting an already-present implementation is a
    /// no-op. Returns true if the implementation was newly added.
    pub fn insert(&mut self, contract: ContractName, implementation: ImplementationName) -> bool {
        self.entries.entry(contract).or_default().insert(implementation)
    }

    /// The implementation set for a contract, if any
    pub fn get(&self, contract: &ContractName) -> Option<&BTreeSet<ImplementationName>> {
        self.entries.get(contract)
    }

    /// Iterate entries in contract-name order
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&ContractName, &BTreeSet<ImplementationName>)> {
        self.entries.iter()
    }

    /// Number of contracts in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no contract has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ServiceMap {
    type Item = (&'a ContractName, &'a BTreeSet<ImplementationName>);
    type IntoIter =
        std::collections::btree_map::Iter<'a, ContractName, BTreeSet<ImplementationName>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut map = ServiceMap::new();
        assert!(map.insert("com.example.Greeter".into(), "com.example.EnglishGreeter".into()));
        assert!(!map.insert("com.example.Greeter".into(), "com.example.EnglishGreeter".into()));

        let impls = map.get(&"com.example.Greeter".into()).unwrap();
        assert_eq!(impls.len(), 1);
    }

    #[test]
    fn entries_from_multiple_sources_union() {
        let mut map = ServiceMap::new();
        map.insert("com.example.Greeter".into(), "com.example.EnglishGreeter".into());
        map.insert("com.example.Greeter".into(), "com.example.FrenchGreeter".into());

        let impls = map.get(&"com.example.Greeter".into()).unwrap();
        assert_eq!(impls.len(), 2);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iteration_is_sorted_by_contract() {
        let mut map = ServiceMap::new();
        map.insert("org.b.Second".into(), "org.b.Impl".into());
        map.insert("com.a.First".into(), "com.a.Impl".into());

        let contracts: Vec<_> = map.iter().map(|(c, _)| c.as_str().to_string()).collect();
        assert_eq!(contracts, vec!["com.a.First", "org.b.Second"]);
    }
}
