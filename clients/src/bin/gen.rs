//! `pyfixture-gen`: Writes a corpus of synthetic Python fixture modules.
//!
//! Module `i` is written to `module_<i:04>.py` and seeded from
//! `base_seed + i`, so a corpus is reproducible from its base seed alone.
//!
//! **Usage:**
//! ```text
//! pyfixture-gen [--files <n>] [--output <dir>] [--seed <s>] [--start <i>]
//!               [--jobs <j>] [--config <file>] [--manifest]
//!               [--target-lines <min-max>] [--duplicate-params <policy>]
//! ```
//!
//! Log verbosity follows `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pyfixture_codegen::{
    generate_corpus, CorpusOptions, CountRange, DuplicateParams, FixtureGenerator, GeneratorConfig,
    Shape,
};
use tracing_subscriber::EnvFilter;

/// Generate a synthetic Python fixture corpus.
#[derive(Parser)]
#[command(
    name = "pyfixture-gen",
    about = "Generate synthetic Python modules for indexing benchmarks"
)]
struct Args {
    /// Number of modules to generate.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    files: u32,

    /// Output directory; created if missing.
    #[arg(long, default_value = "test_repos/baseline_repo")]
    output: PathBuf,

    /// Base seed (overrides the configuration file; default 42).
    #[arg(long)]
    seed: Option<u64>,

    /// Index of the first module.
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Worker threads (0 = one per core).
    #[arg(long, default_value_t = 0)]
    jobs: usize,

    /// TOML generator configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write manifest.json next to the modules.
    #[arg(long)]
    manifest: bool,

    /// Grow each module to a sampled line count, e.g. `50-100`.
    #[arg(long)]
    target_lines: Option<CountRange>,

    /// Duplicate parameter policy: rename, keep, or reject.
    #[arg(long)]
    duplicate_params: Option<DuplicateParams>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.base_seed = seed;
    }
    if let Some(range) = args.target_lines {
        config.shape = Shape::TargetLines {
            min: range.min,
            max: range.max,
        };
    }
    if let Some(policy) = args.duplicate_params {
        config.duplicate_params = policy;
    }
    let generator = FixtureGenerator::new(config)?;

    let options = CorpusOptions {
        output_dir: args.output.clone(),
        count: args.files,
        first_index: args.start,
        jobs: args.jobs,
        write_manifest: args.manifest,
    };

    println!(
        "Generating {} Python files in {} (base seed {})...",
        args.files,
        args.output.display(),
        generator.config().base_seed
    );
    let report = generate_corpus(&generator, &options)?;

    println!();
    println!(
        "Completed! Generated {} files in {}",
        report.files.len(),
        args.output.display()
    );
    println!(
        "Definitions: {} functions, {} classes, {} methods",
        report.function_count, report.class_count, report.method_count
    );
    println!("Total lines: {}", report.total_lines);
    println!("Total size: {:.1} KB", report.total_kib());
    if let Some(path) = &report.manifest {
        println!("Manifest: {}", path.display());
    }
    Ok(())
}
