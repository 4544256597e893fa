//! Pair aggregation
//!
//! Folds the scanner's pair sequence into the per-pass [`ServiceMap`],
//! consulting the filter policy per entry. Merging is idempotent, so
//! duplicate registrations across roots collapse.

use svcgen_domain::{ContractName, ImplementationName, ServiceMap};
use tracing::{debug, trace};

use crate::filter::FilterPolicy;

/// Build the service map from scanned pairs
///
/// Rejected contracts are skipped; accepted pairs insert idempotently.
/// The resulting map iterates in contract order, so repeated emission
/// over the same input is deterministic.
pub fn aggregate(
    pairs: impl IntoIterator<Item = (ContractName, ImplementationName)>,
    policy: &FilterPolicy,
) -> ServiceMap {
    let mut map = ServiceMap::new();

    for (contract, implementation) in pairs {
        if !policy.allowed(&contract) {
            trace!(%contract, "contract filtered out");
            continue;
        }
        if map.insert(contract.clone(), implementation.clone()) {
            debug!(%contract, %implementation, "collected implementation");
        }
    }

    map
}
