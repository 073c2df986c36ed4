//! `pyfixture-show`: Prints one fixture module to stdout.
//!
//! **Usage:**
//! ```text
//! pyfixture-show <index> [--seed <s>] [--config <file>] [--json]
//! ```
//!
//! Without `--seed` the module is unseeded and differs from run to run.

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
use pyfixture_codegen::{render_module, resolve_seed, FixtureGenerator, GeneratorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print one generated fixture module.
#[derive(Parser)]
#[command(
    name = "pyfixture-show",
    about = "Print a single synthetic Python module or its description"
)]
struct Args {
    /// Module index named in the docstring.
    index: u32,

    /// Seed; omit for a fresh random module.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML generator configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the sampled module description as JSON instead of Python.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let generator = FixtureGenerator::new(config)?;
    let seed = resolve_seed(args.seed);
    info!(index = args.index, seed, "rendering module");

    let module = generator.sample_module(args.index, Some(seed))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&module)?);
    } else {
        print!("{}", render_module(&module));
    }
    Ok(())
}
