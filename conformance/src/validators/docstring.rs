//! Docstring validator: the module docstring names its index.

use std::sync::OnceLock;

use pyfixture_model::module_label;
use regex::Regex;

use crate::outline::ModuleOutline;
use crate::report::{ConformanceReport, TestResult};

/// Validator identifier.
pub const VALIDATOR: &str = "module/docstring";

fn label_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^Module (\d{4,}) - ").ok())
        .as_ref()
}

/// Returns the index named by the module docstring, if any.
#[must_use]
pub fn docstring_index(outline: &ModuleOutline) -> Option<u32> {
    let doc = outline.docstring()?;
    label_pattern()?.captures(doc)?.get(1)?.as_str().parse().ok()
}

/// Checks the module docstring against `expected_index`, or only its shape
/// when no index is expected.
#[must_use]
pub fn validate(outline: &ModuleOutline, expected_index: Option<u32>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    if outline.docstring().is_none() {
        report.push(TestResult::fail(VALIDATOR, "Module has no docstring"));
        return report;
    }
    let result = match (expected_index, docstring_index(outline)) {
        (Some(expected), Some(found)) if found == expected => {
            TestResult::pass(VALIDATOR, format!("Docstring names {}", module_label(expected)))
        }
        (Some(expected), Some(other)) => TestResult::fail(
            VALIDATOR,
            format!(
                "Docstring names {} but {} was expected",
                module_label(other),
                module_label(expected)
            ),
        ),
        (Some(expected), None) => TestResult::fail(
            VALIDATOR,
            format!("Docstring does not name {}", module_label(expected)),
        ),
        (None, Some(index)) => {
            TestResult::pass(VALIDATOR, format!("Docstring names {}", module_label(index)))
        }
        (None, None) => TestResult::fail(VALIDATOR, "Docstring carries no `Module NNNN` label"),
    };
    report.push(result);
    report
}
