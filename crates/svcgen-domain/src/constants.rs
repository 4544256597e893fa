//! Shared constants for the generation pipeline

/// Directory prefix under each resource root holding registry resources.
///
/// One file per contract: the file name is the contract's fully-qualified
/// name, the content lists implementation names one per line.
pub const REGISTRY_DIR: &str = "META-INF/services";

/// Suffix appended to a contract's simple name to form the generated
/// loader's type name.
pub const LOADER_SUFFIX: &str = "_ServiceLoader";

/// The pipeline's own processing contract.
///
/// Always blacklisted so the generator never emits a loader for itself.
pub const SELF_CONTRACT: &str = "org.svcgen.AutoService";

/// Environment variable prefix for configuration overrides.
pub const CONFIG_ENV_PREFIX: &str = "SVCGEN";

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "svcgen.toml";
