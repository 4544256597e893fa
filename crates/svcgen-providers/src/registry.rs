//! Auto-registration registry for scoped loader generation
//!
//! Providers submit [`ProviderEntry`] values into [`AUTO_PROVIDERS`] at
//! link time. The scoped pipeline filters the slice by contract token
//! and feeds the surviving implementation names to the emitter.

use std::any::{Any, TypeId};

use svcgen_domain::{ContractName, ImplementationName};

/// Meta-contract every registered provider implements
///
/// The registry enumerates instances of this trait; the generated
/// loader refers to each instance's fully-qualified implementation name.
pub trait AutoService: Any {
    /// Fully-qualified dotted name of the providing type
    fn type_name(&self) -> &'static str;
}

/// Registry entry for one provider implementation
///
/// Register with [`crate::register_provider!`], which also verifies at
/// compile time that the implementation actually conforms to every
/// contract trait it claims.
pub struct ProviderEntry {
    /// Construct a fresh provider instance
    pub construct: fn() -> Box<dyn AutoService>,
    /// True if the provider conforms to the contract trait object with
    /// the given `TypeId`
    pub provides: fn(TypeId) -> bool,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static AUTO_PROVIDERS: [ProviderEntry] = [..];

/// A requested contract: its registry spelling plus the `TypeId` of the
/// contract trait object
///
/// The `TypeId` is what assignability is checked against; the name only
/// feeds artifact derivation.
#[derive(Debug, Clone)]
pub struct ContractToken {
    name: ContractName,
    id: TypeId,
}

impl ContractToken {
    /// Create a token for contract trait object `C`
    ///
    /// ```ignore
    /// let token = ContractToken::of::<dyn Greeter>("com.example.Greeter");
    /// ```
    pub fn of<C: ?Sized + 'static>(name: impl Into<ContractName>) -> Self {
        Self {
            name: name.into(),
            id: TypeId::of::<C>(),
        }
    }

    /// Registry spelling of the contract
    pub fn name(&self) -> &ContractName {
        &self.name
    }

    /// `TypeId` of the contract trait object
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

/// Implementation names of every registered provider conforming to the
/// requested contract, sorted for deterministic emission
///
/// An empty result is not an error: the scoped loader then returns an
/// empty list.
pub fn providers_for(token: &ContractToken) -> Vec<ImplementationName> {
    let mut names: Vec<ImplementationName> = AUTO_PROVIDERS
        .iter()
        .filter(|entry| (entry.provides)(token.type_id()))
        .map(|entry| ImplementationName::new((entry.construct)().type_name()))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Implementation names of all registered providers, sorted
///
/// Useful for CLI listings and startup logging.
pub fn list_providers() -> Vec<ImplementationName> {
    let mut names: Vec<ImplementationName> = AUTO_PROVIDERS
        .iter()
        .map(|entry| ImplementationName::new((entry.construct)().type_name()))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Register a provider into [`AUTO_PROVIDERS`]
///
/// Takes the entry's static name, the concrete provider type (which must
/// implement [`AutoService`] and `Default`), and the contract trait
/// objects it serves. Each listed contract produces a compile-time
/// coercion check, so claiming a trait the type does not implement is a
/// build error, and a runtime `TypeId` predicate used for assignability.
///
/// ```ignore
/// register_provider!(ENGLISH_GREETER: EnglishGreeter => [dyn Greeter]);
/// ```
#[macro_export]
macro_rules! register_provider {
    ($entry:ident: $ty:ty => [$($contract:ty),+ $(,)?]) => {
        $(
            const _: fn(&$ty) -> &$contract = |provider| provider;
        )+

        #[linkme::distributed_slice($crate::registry::AUTO_PROVIDERS)]
        static $entry: $crate::registry::ProviderEntry = $crate::registry::ProviderEntry {
            construct: || ::std::boxed::Box::new(<$ty>::default()),
            provides: |id| {
                [$(::std::any::TypeId::of::<$contract>()),+].contains(&id)
            },
        };
    };
}
