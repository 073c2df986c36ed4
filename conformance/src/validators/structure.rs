//! Structure validator: definition counts, constructors and signatures.

use std::collections::HashSet;

use pyfixture_codegen::CountRange;

use super::Bounds;
use crate::outline::{ClassOutline, ModuleOutline};
use crate::report::{ConformanceReport, TestResult};

/// Validator identifier.
pub const VALIDATOR: &str = "module/structure";

/// Identifier of the method-redefinition check.
pub const SHADOWING: &str = "module/shadowing";

fn check_count(what: &str, n: usize, range: Option<CountRange>, problems: &mut Vec<String>) {
    if let Some(range) = range {
        if !range.contains(n) {
            problems.push(format!("{n} {what} outside {range}"));
        }
    }
}

fn check_class(class: &ClassOutline, bounds: &Bounds, problems: &mut Vec<String>) {
    let methods = class.plain_methods().count();
    check_count(
        &format!("methods in {}", class.name),
        methods,
        Some(bounds.methods),
        problems,
    );
    match class.init() {
        None => problems.push(format!("{} has no __init__", class.name)),
        Some(init) if init.params.len() != 2 => problems.push(format!(
            "{}.__init__ takes {} parameters besides self, expected 1",
            class.name,
            init.params.len().saturating_sub(1)
        )),
        Some(_) => {}
    }
    for m in &class.methods {
        if m.params.first().map(|p| p.name.as_str()) != Some("self") {
            problems.push(format!("{}.{} does not take self first", class.name, m.name));
        } else if m.params.len() > 2 {
            problems.push(format!(
                "{}.{} takes {} parameters besides self, expected at most 1",
                class.name,
                m.name,
                m.params.len() - 1
            ));
        }
    }
}

/// Returns `Class.method` for every method name defined more than once.
#[must_use]
pub fn shadowed_methods(outline: &ModuleOutline) -> Vec<String> {
    let mut shadowed = Vec::new();
    for class in &outline.classes {
        let mut seen = HashSet::new();
        for m in class.plain_methods() {
            if !seen.insert(m.name.as_str()) {
                shadowed.push(format!("{}.{} (line {})", class.name, m.name, m.line));
            }
        }
    }
    shadowed
}

/// Checks counts against `bounds` and the shape of every definition.
#[must_use]
pub fn validate(outline: &ModuleOutline, bounds: &Bounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut problems = Vec::new();

    if outline.functions.is_empty() && outline.classes.is_empty() {
        problems.push("module defines nothing".to_string());
    }
    check_count("functions", outline.functions.len(), bounds.functions, &mut problems);
    check_count("classes", outline.classes.len(), bounds.classes, &mut problems);

    let mut names = HashSet::new();
    let top_level = outline
        .functions
        .iter()
        .map(|f| f.name.as_str())
        .chain(outline.classes.iter().map(|c| c.name.as_str()));
    for name in top_level {
        if !names.insert(name) {
            problems.push(format!("`{name}` is defined more than once"));
        }
    }
    for f in &outline.functions {
        if f.params.len() != 2 {
            problems.push(format!("{} takes {} parameters, expected 2", f.name, f.params.len()));
        }
    }
    for class in &outline.classes {
        check_class(class, bounds, &mut problems);
    }

    report.push(TestResult::from_problems(
        VALIDATOR,
        format!(
            "{} functions, {} classes, {} methods within bounds",
            outline.functions.len(),
            outline.classes.len(),
            outline.method_count()
        ),
        "Module structure violations",
        problems,
    ));

    let shadowed = shadowed_methods(outline);
    if !shadowed.is_empty() {
        report.push(TestResult::warn_with_details(
            SHADOWING,
            "Methods redefined; the last definition wins",
            shadowed,
        ));
    }
    report
}
