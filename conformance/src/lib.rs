//! Conformance checks for generated fixture corpora.
//!
//! Parses generated modules with a small outline parser and checks the
//! properties every fixture module must have.
//!
//! # Checks
//!
//! | Validator | Property |
//! |-----------|----------|
//! | `module/syntax` | The text parses: strings and brackets close, indentation is consistent, no duplicate parameter names |
//! | `module/docstring` | The docstring names `Module NNNN` for the file's index |
//! | `module/imports` | The fixed preamble is present and every annotation resolves |
//! | `module/structure` | Function, class and method counts lie within bounds |
//! | `module/bodies` | Bodies match their annotations |
//! | `corpus/naming` | Files are named `module_NNNN.py` |
//! | `corpus/manifest` | `manifest.json`, when present, agrees with the files |
//!
//! # Entry Point
//!
//! ```no_run
//! use pyfixture_conformance::{run_all, Bounds};
//! use std::path::Path;
//!
//! let report = run_all(Path::new("test_repos/baseline_repo"), &Bounds::default())
//!     .expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod outline;
pub mod report;
pub mod validators;

use std::path::Path;

pub use outline::{parse, ModuleOutline, OutlineError};
pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::{validate_module, Bounds};

/// Runs all conformance validators over a corpus directory and returns the
/// aggregated report.
///
/// Checks run in this order:
/// 1. Directory layout and file naming
/// 2. Per-module syntax, docstring, imports, structure and bodies
/// 3. Manifest agreement, if `manifest.json` exists
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(corpus: &Path, bounds: &Bounds) -> anyhow::Result<ConformanceReport> {
    validators::corpus::validate(corpus, bounds)
}
