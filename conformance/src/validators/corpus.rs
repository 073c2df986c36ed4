//! Corpus validator: file naming, per-module checks and manifest agreement.
//!
//! Walks the top level of a corpus directory, runs every per-module validator
//! on each `*.py` file and folds the outcomes into one result per validator.
//! When `manifest.json` is present, the recorded definitions of each entry
//! are compared with what the file actually defines.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use pyfixture_codegen::corpus::module_file_name;
use pyfixture_model::manifest::{from_json_str, ManifestEntry, MANIFEST_FILE};
use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use super::{bodies, docstring, imports, structure, syntax, validate_outline, Bounds};
use crate::outline::ModuleOutline;
use crate::report::{ConformanceReport, Severity, TestResult};

/// Identifier of the directory layout check.
pub const LAYOUT: &str = "corpus/layout";
/// Identifier of the file naming check.
pub const NAMING: &str = "corpus/naming";
/// Identifier of the manifest agreement check.
pub const MANIFEST: &str = "corpus/manifest";

/// Per-module validators in report order.
const MODULE_VALIDATORS: &[&str] = &[
    syntax::VALIDATOR,
    docstring::VALIDATOR,
    imports::VALIDATOR,
    structure::VALIDATOR,
    bodies::VALIDATOR,
];

fn file_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^module_(\d{4,})\.py$").ok())
        .as_ref()
}

/// Returns the module index encoded in a file name, if it follows the
/// `module_NNNN.py` convention exactly.
#[must_use]
pub fn index_from_file_name(name: &str) -> Option<u32> {
    let caps = file_pattern()?.captures(name)?;
    let index: u32 = caps.get(1)?.as_str().parse().ok()?;
    (module_file_name(index) == name).then_some(index)
}

/// Outcomes of one validator over all files.
#[derive(Default)]
struct Tally {
    checked: usize,
    failed: Vec<String>,
    warned: Vec<String>,
}

impl Tally {
    fn record(&mut self, file: &str, result: &TestResult) {
        let lines = std::iter::once(format!("{file}: {}", result.message))
            .chain(result.details.iter().map(|d| format!("{file}:   {d}")));
        match result.severity {
            Severity::Pass => {}
            Severity::Warning => self.warned.extend(lines),
            Severity::Failure => self.failed.extend(lines),
        }
    }
}

/// Validates every fixture module in `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or a file cannot be read.
pub fn validate(dir: &Path, bounds: &Bounds) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    if !dir.is_dir() {
        report.push(TestResult::fail(
            LAYOUT,
            format!("Corpus directory {} not found", dir.display()),
        ));
        return Ok(report);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let is_module = entry.file_type().is_file()
            && entry.path().extension().map(|x| x == "py").unwrap_or(false);
        if is_module {
            files.push(entry.into_path());
        }
    }
    if files.is_empty() {
        report.push(TestResult::fail(
            LAYOUT,
            format!("No fixture modules found in {}", dir.display()),
        ));
        return Ok(report);
    }
    report.push(TestResult::pass(
        LAYOUT,
        format!("{} fixture modules found", files.len()),
    ));

    let mut misnamed = Vec::new();
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    let mut outlines: HashMap<String, ModuleOutline> = HashMap::new();

    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let index = index_from_file_name(&name);
        if index.is_none() {
            misnamed.push(name.clone());
        }

        let text = std::fs::read_to_string(path)?;
        let (mut module_report, outline) = syntax::validate(&text);
        if let Some(outline) = &outline {
            module_report.extend(validate_outline(outline, index, bounds));
        }
        debug!(file = %name, failures = module_report.failure_count(), "validated module");

        for result in &module_report.results {
            let key = MODULE_VALIDATORS
                .iter()
                .copied()
                .find(|v| *v == result.validator)
                .unwrap_or(structure::SHADOWING);
            tallies.entry(key).or_default().record(&name, result);
        }
        for v in MODULE_VALIDATORS {
            let tally = tallies.entry(*v).or_default();
            if *v == syntax::VALIDATOR || outline.is_some() {
                tally.checked += 1;
            }
        }
        if let Some(outline) = outline {
            outlines.insert(name, outline);
        }
    }

    report.push(TestResult::from_problems(
        NAMING,
        "Every file is named module_NNNN.py",
        format!("{} file(s) do not follow module_NNNN.py", misnamed.len()),
        misnamed,
    ));

    let total = files.len();
    for v in MODULE_VALIDATORS {
        let Some(tally) = tallies.remove(v) else {
            continue;
        };
        let skipped = total - tally.checked;
        if tally.failed.is_empty() && skipped == 0 {
            report.push(TestResult::pass(*v, format!("All {total} modules pass")));
        } else if tally.failed.is_empty() {
            report.push(TestResult::warn(
                *v,
                format!("{skipped} of {total} modules skipped after syntax errors"),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                *v,
                format!("Failures in {} of {total} modules", failing_files(&tally.failed)),
                tally.failed,
            ));
        }
    }
    if let Some(shadowing) = tallies.remove(structure::SHADOWING) {
        if !shadowing.warned.is_empty() {
            report.push(TestResult::warn_with_details(
                structure::SHADOWING,
                "Methods redefined within a class; the last definition wins",
                shadowing.warned,
            ));
        }
    }

    let manifest = dir.join(MANIFEST_FILE);
    if manifest.is_file() {
        report.push(check_manifest(&std::fs::read_to_string(&manifest)?, &outlines));
    }
    Ok(report)
}

fn failing_files(lines: &[String]) -> usize {
    let mut files: Vec<&str> = lines
        .iter()
        .filter_map(|l| l.split_once(": ").map(|(f, _)| f))
        .collect();
    files.dedup();
    files.len()
}

fn check_manifest(text: &str, outlines: &HashMap<String, ModuleOutline>) -> TestResult {
    let manifest = match from_json_str(text) {
        Ok(m) => m,
        Err(e) => return TestResult::fail(MANIFEST, format!("{MANIFEST_FILE} does not parse: {e}")),
    };

    let mut problems = Vec::new();
    for entry in &manifest.entries {
        match outlines.get(&entry.path) {
            Some(outline) => compare_entry(entry, outline, &mut problems),
            None => problems.push(format!("{}: listed but missing or unparseable", entry.path)),
        }
    }
    for name in outlines.keys() {
        if !manifest.entries.iter().any(|e| &e.path == name) {
            problems.push(format!("{name}: not listed in {MANIFEST_FILE}"));
        }
    }
    problems.sort();

    TestResult::from_problems(
        MANIFEST,
        format!("{} manifest entries match their files", manifest.entries.len()),
        format!("{MANIFEST_FILE} disagrees with the corpus"),
        problems,
    )
}

fn compare_entry(entry: &ManifestEntry, outline: &ModuleOutline, problems: &mut Vec<String>) {
    let path = &entry.path;
    if entry.lines != outline.lines {
        problems.push(format!(
            "{path}: {} lines recorded, {} found",
            entry.lines, outline.lines
        ));
    }
    let recorded: Vec<&str> = entry.module.functions().map(|f| f.name.as_str()).collect();
    let found: Vec<&str> = outline.functions.iter().map(|f| f.name.as_str()).collect();
    if recorded != found {
        problems.push(format!(
            "{path}: functions [{}] recorded, [{}] found",
            recorded.join(", "),
            found.join(", ")
        ));
    }
    let recorded: Vec<(&str, usize)> = entry
        .module
        .classes()
        .map(|c| (c.name.as_str(), c.methods.len()))
        .collect();
    let found: Vec<(&str, usize)> = outline
        .classes
        .iter()
        .map(|c| (c.name.as_str(), c.plain_methods().count()))
        .collect();
    if recorded != found {
        problems.push(format!("{path}: classes or method counts differ from the manifest"));
    }
}
