//! Bulk corpus driver and file writer.
//!
//! Generates a contiguous range of modules, one file each, named
//! `module_<index:04>.py`. Every module is seeded from `base_seed + index`, so
//! the corpus is reproducible and each call is independent of the others.
//! Work is split across scoped worker threads; results are gathered in index
//! order for the report and the manifest.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use pyfixture_model::manifest::{to_json_string, CorpusManifest, ManifestEntry, MANIFEST_FILE};
use pyfixture_model::{ModuleSpec, INDEX_WIDTH};
use tracing::{debug, info};

use crate::emit::{line_count, write_file};
use crate::error::{GenerateError, Result};
use crate::{render_module, FixtureGenerator};

/// Progress is logged every this many files.
pub const PROGRESS_INTERVAL: usize = 10;

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// Directory receiving the modules; created if missing.
    pub output_dir: PathBuf,
    /// Number of modules. Must be positive.
    pub count: u32,
    /// Index of the first module.
    pub first_index: u32,
    /// Worker threads. Zero means one per available core.
    pub jobs: usize,
    /// Also write `manifest.json` into the output directory.
    pub write_manifest: bool,
}

impl CorpusOptions {
    /// Options for `count` modules starting at index zero, single-threaded,
    /// without a manifest.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, count: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            count,
            first_index: 0,
            jobs: 1,
            write_manifest: false,
        }
    }
}

/// Summary of a generated corpus.
#[derive(Debug, Default)]
pub struct CorpusReport {
    /// Files written, in index order.
    pub files: Vec<PathBuf>,
    /// Sum of line counts.
    pub total_lines: usize,
    /// Sum of file sizes in bytes.
    pub total_bytes: u64,
    /// Top-level functions across all files.
    pub function_count: usize,
    /// Classes across all files.
    pub class_count: usize,
    /// Method definitions across all files, shadowed ones included.
    pub method_count: usize,
    /// Path of the manifest, if one was written.
    pub manifest: Option<PathBuf>,
}

impl CorpusReport {
    /// Total size in KiB.
    #[must_use]
    pub fn total_kib(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }
}

/// File name for module `index`: `module_0042.py`.
#[must_use]
pub fn module_file_name(index: u32) -> String {
    format!("module_{index:0width$}.py", width = INDEX_WIDTH)
}

/// Seed for module `index` of a corpus.
#[must_use]
pub fn derive_seed(base_seed: u64, index: u32) -> u64 {
    base_seed.wrapping_add(u64::from(index))
}

/// One module generated and written by a worker.
struct Written {
    index: u32,
    seed: u64,
    path: PathBuf,
    lines: usize,
    bytes: u64,
    module: ModuleSpec,
}

/// Generates and writes a corpus.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] for an empty or overflowing index
/// range, [`GenerateError::Io`] if a file cannot be written, and
/// [`GenerateError::Worker`] if a worker thread panics. Files written before
/// the failure are left in place.
pub fn generate_corpus(generator: &FixtureGenerator, options: &CorpusOptions) -> Result<CorpusReport> {
    if options.count == 0 {
        return Err(GenerateError::invalid("corpus size must be positive"));
    }
    let end = options
        .first_index
        .checked_add(options.count)
        .ok_or_else(|| GenerateError::invalid("module index range overflows u32"))?;
    std::fs::create_dir_all(&options.output_dir).map_err(|source| GenerateError::Io {
        path: options.output_dir.clone(),
        source,
    })?;

    let indices: Vec<u32> = (options.first_index..end).collect();
    let jobs = worker_count(options.jobs, indices.len());
    let chunk = indices.len().div_ceil(jobs);
    let done = AtomicUsize::new(0);
    let total = indices.len();
    let base_seed = generator.config().base_seed;
    info!(
        count = total,
        jobs,
        output = %options.output_dir.display(),
        "generating corpus"
    );

    let mut written: Vec<Written> = std::thread::scope(|scope| {
        let handles: Vec<_> = indices
            .chunks(chunk)
            .map(|slice| {
                let done = &done;
                scope.spawn(move || {
                    slice
                        .iter()
                        .map(|&index| {
                            let w = write_module(generator, &options.output_dir, index, base_seed)?;
                            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                            if n % PROGRESS_INTERVAL == 0 {
                                info!("generated {n}/{total} files");
                            }
                            Ok(w)
                        })
                        .collect::<Result<Vec<Written>>>()
                })
            })
            .collect();

        let mut all = Vec::with_capacity(total);
        for (worker, handle) in handles.into_iter().enumerate() {
            let batch = handle.join().map_err(|_| GenerateError::Worker(worker))??;
            all.extend(batch);
        }
        Ok::<_, GenerateError>(all)
    })?;
    written.sort_by_key(|w| w.index);

    let mut report = CorpusReport::default();
    let mut manifest = CorpusManifest::new(base_seed);
    for w in written {
        report.total_lines += w.lines;
        report.total_bytes += w.bytes;
        report.function_count += w.module.function_count();
        report.class_count += w.module.class_count();
        report.method_count += w.module.method_count();
        if options.write_manifest {
            manifest.entries.push(ManifestEntry {
                path: module_file_name(w.index),
                index: w.index,
                seed: w.seed,
                lines: w.lines,
                module: w.module,
            });
        }
        report.files.push(w.path);
    }

    if options.write_manifest {
        let path = options.output_dir.join(MANIFEST_FILE);
        write_file(&path, &to_json_string(&manifest)?)?;
        report.manifest = Some(path);
    }

    info!(
        files = report.files.len(),
        lines = report.total_lines,
        kib = report.total_kib(),
        "corpus complete"
    );
    Ok(report)
}

fn write_module(generator: &FixtureGenerator, dir: &Path, index: u32, base_seed: u64) -> Result<Written> {
    let seed = derive_seed(base_seed, index);
    let module = generator.sample_module(index, Some(seed))?;
    let text = render_module(&module);
    let path = dir.join(module_file_name(index));
    write_file(&path, &text)?;
    debug!(path = %path.display(), "wrote module");
    Ok(Written {
        index,
        seed,
        path,
        lines: line_count(&text),
        bytes: text.len() as u64,
        module,
    })
}

fn worker_count(requested: usize, work: usize) -> usize {
    let jobs = if requested == 0 {
        std::thread::available_parallelism().map_or(1, usize::from)
    } else {
        requested
    };
    jobs.clamp(1, work.max(1))
}
