//! svcgen - service-loader generator
//!
//! Scans resource roots for provider registrations and emits one
//! generated loader source per service contract.

use clap::Parser;
use std::path::PathBuf;
use svcgen::{
    ConfigLoader, Driver, FsWriter, PassOptions, ScanStrategy, TracingSink, logging,
};

/// Command line interface for the service-loader generator
#[derive(Parser, Debug)]
#[command(name = "svcgen")]
#[command(about = "Generates static service loaders from provider registry resources")]
#[command(version)]
struct Cli {
    /// Resource roots to scan for registry resources
    #[arg(required = true)]
    roots: Vec<PathBuf>,

    /// Directory receiving generated sources
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated contract-name prefixes to include
    #[arg(long)]
    include: Option<String>,

    /// Comma-separated contract-name prefixes to exclude
    #[arg(long)]
    exclude: Option<String>,

    /// Scan strategy for the registry pipeline
    #[arg(long, value_enum)]
    strategy: Option<ScanStrategy>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    // CLI flags override file and environment configuration.
    if cli.include.is_some() {
        config.include = cli.include;
    }
    if cli.exclude.is_some() {
        config.exclude = cli.exclude;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }

    logging::init_logging(&config.log_level)?;

    let options = PassOptions {
        roots: cli.roots,
        config,
        sites: Vec::new(),
    };
    let writer = FsWriter::new(&cli.out_dir);
    let sink = TracingSink;

    let summary = Driver::new(options, &writer, &sink).run();
    if summary.failed > 0 {
        return Err(format!("{} loader artifact(s) failed to generate", summary.failed).into());
    }
    Ok(())
}
