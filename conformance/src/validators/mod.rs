//! Fixture module validators.
//!
//! Each per-module validator inspects a parsed [`ModuleOutline`] and returns a
//! [`ConformanceReport`]. [`validate_module`] runs them all on one file's
//! text; [`corpus`] runs them over a directory.

pub mod bodies;
pub mod corpus;
pub mod docstring;
pub mod imports;
pub mod structure;
pub mod syntax;

use pyfixture_codegen::{CountRange, GeneratorConfig, Shape};

use crate::outline::ModuleOutline;
use crate::report::ConformanceReport;

/// Count bounds a module is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Top-level functions per module. `None` skips the check.
    pub functions: Option<CountRange>,
    /// Classes per module. `None` skips the check.
    pub classes: Option<CountRange>,
    /// Methods per class, `__init__` excluded.
    pub methods: CountRange,
}

impl Bounds {
    /// Bounds implied by a generator configuration. The target-lines shape
    /// does not bound function or class counts.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.shape {
            Shape::Bounded => Self {
                functions: Some(config.functions),
                classes: Some(config.classes),
                methods: config.methods,
            },
            Shape::TargetLines { .. } => Self {
                functions: None,
                classes: None,
                methods: config.methods,
            },
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Runs every per-module validator on `text`.
///
/// With `expected_index` the docstring must name that index; without it any
/// `Module NNNN` label is accepted. Validators after `module/syntax` only run
/// when the text parses.
#[must_use]
pub fn validate_module(text: &str, expected_index: Option<u32>, bounds: &Bounds) -> ConformanceReport {
    let (mut report, outline) = syntax::validate(text);
    if let Some(outline) = outline {
        report.extend(validate_outline(&outline, expected_index, bounds));
    }
    report
}

/// Runs the validators that need a parsed outline.
#[must_use]
pub fn validate_outline(
    outline: &ModuleOutline,
    expected_index: Option<u32>,
    bounds: &Bounds,
) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(docstring::validate(outline, expected_index));
    report.extend(imports::validate(outline));
    report.extend(structure::validate(outline, bounds));
    report.extend(bodies::validate(outline));
    report
}
