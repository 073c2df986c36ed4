//! `pyfixture-conformance`: Validates a generated fixture corpus.
//!
//! Runs every conformance check over the `*.py` files of a corpus directory:
//! - file naming (`module_NNNN.py`)
//! - syntax, docstring, imports, structure and bodies of each module
//! - agreement with `manifest.json`, when present
//!
//! **Usage:**
//! ```text
//! pyfixture-conformance [--dir <path>] [--config <file>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use pyfixture_codegen::GeneratorConfig;
use pyfixture_conformance::{run_all, Bounds, Severity};
use tracing_subscriber::EnvFilter;

/// Run the fixture corpus conformance suite.
#[derive(Parser)]
#[command(
    name = "pyfixture-conformance",
    about = "Validate a generated Python fixture corpus"
)]
struct Args {
    /// Corpus directory.
    #[arg(long, default_value = "test_repos/baseline_repo")]
    dir: PathBuf,

    /// TOML generator configuration the corpus was generated with; its
    /// count ranges become the structural bounds.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let bounds = match &args.config {
        Some(path) => Bounds::from_config(&GeneratorConfig::load(path)?),
        None => Bounds::default(),
    };
    let report = run_all(&args.dir, &bounds)?;

    println!("Fixture Corpus Conformance Report");
    println!("=================================");
    println!("Corpus: {}", args.dir.display());
    println!();

    for result in &report.results {
        println!("[{}] {} - {}", result.severity.tag(), result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
