//! Loader artifact emission
//!
//! Renders one generated loader source per contract and hands it to the
//! build's file-emission facility through the [`ArtifactWriter`] port.
//! Rendering is deterministic: an identical contract and implementation
//! set always yields byte-identical source.

use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use svcgen_domain::constants::LOADER_SUFFIX;
use svcgen_domain::{ContractName, Error, GeneratedArtifact, ImplementationName, Result};

/// Loader source template
///
/// `load()` constructs every implementation in set order and returns the
/// list typed as the contract. No parameters, no side effects beyond
/// construction.
const LOADER_TEMPLATE: &str = "\
{{#if namespace}}package {{namespace}};

{{/if}}public final class {{type_name}} {

    private {{type_name}}() {}

    public static java.util.List<{{contract}}> load() {
        java.util.List<{{contract}}> services = new java.util.ArrayList<>();
{{#each implementations}}        services.add(new {{this}}());
{{/each}}        return services;
    }
}
";

const TEMPLATE_NAME: &str = "service_loader";

#[derive(Serialize)]
struct LoaderContext<'a> {
    namespace: &'a str,
    type_name: &'a str,
    contract: &'a str,
    implementations: Vec<&'a str>,
}

/// Port for the build's file-emission facility
///
/// May fail (path collision, filesystem error); the caller abandons that
/// one artifact and reports a diagnostic.
pub trait ArtifactWriter {
    /// Persist one generated artifact
    fn write(&self, artifact: &GeneratedArtifact) -> Result<()>;
}

/// Writes artifacts under an output directory
///
/// Namespace segments become directories. An already-existing artifact
/// file is a collision and fails that artifact, matching the host
/// facility's duplicate-file semantics.
#[derive(Debug, Clone)]
pub struct FsWriter {
    out_dir: PathBuf,
}

impl FsWriter {
    /// Create a writer rooted at the given output directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl ArtifactWriter for FsWriter {
    fn write(&self, artifact: &GeneratedArtifact) -> Result<()> {
        let path = self.out_dir.join(artifact.relative_path());
        if path.exists() {
            return Err(Error::emission(
                artifact.qualified_name(),
                format!("artifact already exists at '{}'", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::emission_with_source(
                    artifact.qualified_name(),
                    format!("failed to create output directory '{}'", parent.display()),
                    e,
                )
            })?;
        }
        fs::write(&path, &artifact.source).map_err(|e| {
            Error::emission_with_source(
                artifact.qualified_name(),
                format!("failed to write '{}'", path.display()),
                e,
            )
        })
    }
}

/// Renders loader artifacts from contract entries
pub struct LoaderEmitter {
    handlebars: Handlebars<'static>,
}

impl LoaderEmitter {
    /// Create an emitter with the loader template registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(TEMPLATE_NAME, LOADER_TEMPLATE)
            .map_err(|e| Error::config_with_source("invalid loader template", e))?;
        Ok(Self { handlebars })
    }

    /// Render the loader for a contract in the contract's own namespace
    pub fn emit<'a>(
        &self,
        contract: &ContractName,
        implementations: impl IntoIterator<Item = &'a ImplementationName>,
    ) -> Result<GeneratedArtifact> {
        self.emit_in_namespace(contract, contract.namespace(), implementations)
    }

    /// Render the loader for a contract, placing it in an explicit
    /// namespace (used by the scoped pipeline, where the artifact lands
    /// in the use site's namespace)
    pub fn emit_in_namespace<'a>(
        &self,
        contract: &ContractName,
        namespace: &str,
        implementations: impl IntoIterator<Item = &'a ImplementationName>,
    ) -> Result<GeneratedArtifact> {
        let type_name = format!("{}{LOADER_SUFFIX}", contract.simple_name());
        let context = LoaderContext {
            namespace,
            type_name: &type_name,
            contract: contract.as_str(),
            implementations: implementations.into_iter().map(|i| i.as_str()).collect(),
        };

        let source = self
            .handlebars
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| {
                Error::emission_with_source(
                    format!("{namespace}.{type_name}"),
                    "failed to render loader source",
                    e,
                )
            })?;

        Ok(GeneratedArtifact::new(namespace, type_name, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn emitter() -> LoaderEmitter {
        LoaderEmitter::new().unwrap()
    }

    fn greeter_impls() -> BTreeSet<ImplementationName> {
        ["com.example.EnglishGreeter", "com.example.FrenchGreeter"]
            .into_iter()
            .map(ImplementationName::new)
            .collect()
    }

    #[test]
    fn derives_type_name_and_namespace_from_contract() {
        let contract = ContractName::new("com.example.Greeter");
        let artifact = emitter().emit(&contract, &greeter_impls()).unwrap();

        assert_eq!(artifact.namespace, "com.example");
        assert_eq!(artifact.type_name, "Greeter_ServiceLoader");
        assert!(artifact.source.contains("package com.example;"));
        assert!(artifact.source.contains("public final class Greeter_ServiceLoader"));
        assert!(
            artifact
                .source
                .contains("public static java.util.List<com.example.Greeter> load()")
        );
    }

    #[test]
    fn constructs_each_implementation_exactly_once() {
        let contract = ContractName::new("com.example.Greeter");
        let artifact = emitter().emit(&contract, &greeter_impls()).unwrap();

        assert_eq!(
            artifact.source.matches("services.add(new com.example.EnglishGreeter());").count(),
            1
        );
        assert_eq!(
            artifact.source.matches("services.add(new com.example.FrenchGreeter());").count(),
            1
        );
    }

    #[test]
    fn empty_namespace_omits_package_line() {
        let contract = ContractName::new("Greeter");
        let artifact = emitter().emit(&contract, &BTreeSet::new()).unwrap();

        assert!(!artifact.source.contains("package"));
        assert!(artifact.source.starts_with("public final class Greeter_ServiceLoader"));
    }

    #[test]
    fn empty_implementation_set_returns_empty_list() {
        let contract = ContractName::new("com.example.Plugin");
        let artifact = emitter().emit(&contract, &BTreeSet::new()).unwrap();

        assert!(!artifact.source.contains("services.add"));
        assert!(artifact.source.contains("return services;"));
    }

    #[test]
    fn emission_is_byte_identical_for_identical_input() {
        let contract = ContractName::new("com.example.Greeter");
        let impls = greeter_impls();
        let first = emitter().emit(&contract, &impls).unwrap();
        let second = emitter().emit(&contract, &impls).unwrap();

        assert_eq!(first.source, second.source);
    }

    #[test]
    fn scoped_namespace_overrides_contract_namespace() {
        let contract = ContractName::new("com.example.Plugin");
        let artifact = emitter()
            .emit_in_namespace(&contract, "com.example.app", &BTreeSet::new())
            .unwrap();

        assert_eq!(artifact.namespace, "com.example.app");
        assert_eq!(artifact.type_name, "Plugin_ServiceLoader");
        assert!(artifact.source.contains("package com.example.app;"));
        assert!(artifact.source.contains("java.util.List<com.example.Plugin>"));
    }

    #[test]
    fn fs_writer_rejects_duplicate_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsWriter::new(dir.path());
        let artifact = GeneratedArtifact::new("com.example", "Greeter_ServiceLoader", "class {}");

        writer.write(&artifact).unwrap();
        assert!(writer.write(&artifact).is_err());
        assert!(dir.path().join("com/example/Greeter_ServiceLoader.java").exists());
    }
}
