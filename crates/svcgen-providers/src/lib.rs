//! Provider Registry for svcgen
//!
//! Compile-time registration of service providers backing the scoped
//! (single-contract) generation pipeline. Uses the `linkme` crate so
//! providers register themselves into a distributed slice at link time;
//! the registry is iterated once per pass, with no reflective lookup.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                 Provider Registration Flow                     │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  1. Provider defines:  register_provider!(ENTRY, MyType, ..)  │
//! │                              ↓                                │
//! │  2. Registry declares: #[linkme::distributed_slice]           │
//! │                        pub static AUTO_PROVIDERS: [..]        │
//! │                              ↓                                │
//! │  3. Pipeline queries:  providers_for(&ContractToken)          │
//! │                              ↓                                │
//! │  4. Emitter generates: one loader for the matching providers  │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Assignability is checked structurally: a `ContractToken` carries the
//! `TypeId` of the contract trait object, and an entry matches only if
//! its registered conformance predicate recognizes that id. The
//! [`register_provider!`] macro emits a coercion check so an entry
//! cannot claim a contract trait its type does not implement.

pub mod registry;

pub use registry::{
    AUTO_PROVIDERS, AutoService, ContractToken, ProviderEntry, list_providers, providers_for,
};
