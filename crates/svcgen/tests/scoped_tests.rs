//! End-to-end tests for the scoped (single-contract) pipeline
//!
//! Providers register into the linkme slice from this test binary, the
//! same way host-side provider crates register at build-tool startup.

use std::fs;
use svcgen::{ContractToken, Driver, FsWriter, GenConfig, LoaderSite, MemorySink, PassOptions};
use svcgen_providers::{AutoService, register_provider};

trait Plugin {
    fn plugin_name(&self) -> &'static str;
}

trait Exporter {
    fn export(&self) -> String;
}

#[derive(Default)]
struct MetricsPlugin;

impl Plugin for MetricsPlugin {
    fn plugin_name(&self) -> &'static str {
        "metrics"
    }
}

impl AutoService for MetricsPlugin {
    fn type_name(&self) -> &'static str {
        "com.example.MetricsPlugin"
    }
}

#[derive(Default)]
struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self) -> String {
        String::new()
    }
}

impl AutoService for CsvExporter {
    fn type_name(&self) -> &'static str {
        "com.example.CsvExporter"
    }
}

register_provider!(METRICS_PLUGIN: MetricsPlugin => [dyn Plugin]);
register_provider!(CSV_EXPORTER: CsvExporter => [dyn Exporter]);

fn run_scoped(site: LoaderSite, out: &std::path::Path) -> (svcgen::PassSummary, MemorySink) {
    let options = PassOptions {
        roots: Vec::new(),
        config: GenConfig::default(),
        sites: vec![site],
    };
    let writer = FsWriter::new(out);
    let sink = MemorySink::new();
    let summary = Driver::new(options, &writer, &sink).run();
    (summary, sink)
}

#[test]
fn scoped_loader_lists_only_conforming_providers() {
    let out = tempfile::tempdir().unwrap();
    let site = LoaderSite::new("com.example.app")
        .with_target(ContractToken::of::<dyn Plugin>("com.example.Plugin"));

    let (summary, sink) = run_scoped(site, out.path());

    assert_eq!(summary.generated, 1);
    assert_eq!(summary.failed, 0);
    assert!(sink.reports().is_empty());

    // Artifact lands in the use site's namespace, not the contract's.
    let source =
        fs::read_to_string(out.path().join("com/example/app/Plugin_ServiceLoader.java")).unwrap();
    assert!(source.contains("package com.example.app;"));
    assert!(source.contains("services.add(new com.example.MetricsPlugin());"));
    assert!(!source.contains("com.example.CsvExporter"));
}

#[test]
fn scoped_loader_without_providers_returns_empty_list() {
    trait Unprovided {}

    let out = tempfile::tempdir().unwrap();
    let site = LoaderSite::new("com.example.app")
        .with_target(ContractToken::of::<dyn Unprovided>("com.example.Unprovided"));

    let (summary, sink) = run_scoped(site, out.path());

    assert_eq!(summary.generated, 1);
    assert!(sink.reports().is_empty());

    let source = fs::read_to_string(
        out.path().join("com/example/app/Unprovided_ServiceLoader.java"),
    )
    .unwrap();
    assert!(!source.contains("services.add"));
    assert!(source.contains("return services;"));
}

#[test]
fn scoped_and_registry_pipelines_run_in_one_pass() {
    let out = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join(svcgen_domain::constants::REGISTRY_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("com.example.Greeter"), "com.example.EnglishGreeter\n").unwrap();

    let options = PassOptions {
        roots: vec![root.path().to_path_buf()],
        config: GenConfig::default(),
        sites: vec![
            LoaderSite::new("com.example.app")
                .with_target(ContractToken::of::<dyn Plugin>("com.example.Plugin")),
        ],
    };
    let writer = FsWriter::new(out.path());
    let sink = MemorySink::new();
    let summary = Driver::new(options, &writer, &sink).run();

    assert_eq!(summary.generated, 2);
    assert!(out.path().join("com/example/Greeter_ServiceLoader.java").exists());
    assert!(out.path().join("com/example/app/Plugin_ServiceLoader.java").exists());
}
