//! Import validator: the fixed preamble is present and every name used in an
//! annotation is either a builtin or imported.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::outline::{FunctionOutline, ModuleOutline};
use crate::report::{ConformanceReport, TestResult};

/// Validator identifier.
pub const VALIDATOR: &str = "module/imports";

/// Names the generated preamble binds.
pub const PREAMBLE_NAMES: &[&str] = &["annotations", "random", "Path", "Any", "datetime", "UUID"];

const BUILTINS: &[&str] = &[
    "None", "bool", "bytes", "dict", "float", "frozenset", "int", "list", "object", "set", "str",
    "tuple", "type",
];

fn name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").ok())
        .as_ref()
}

fn annotations(f: &FunctionOutline) -> impl Iterator<Item = &str> {
    f.params
        .iter()
        .filter_map(|p| p.annotation.as_deref())
        .chain(f.return_annotation.as_deref())
}

/// Checks the preamble and annotation name resolution.
#[must_use]
pub fn validate(outline: &ModuleOutline) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let missing: Vec<String> = PREAMBLE_NAMES
        .iter()
        .filter(|n| !outline.imports.iter().any(|i| i == *n))
        .map(|n| format!("`{n}` is not imported"))
        .collect();
    report.push(TestResult::from_problems(
        VALIDATOR,
        "Preamble imports are present",
        "Preamble imports are missing",
        missing,
    ));

    let Some(pattern) = name_pattern() else {
        return report;
    };
    let functions = outline
        .functions
        .iter()
        .chain(outline.classes.iter().flat_map(|c| c.methods.iter()));
    let mut unresolved = BTreeSet::new();
    for f in functions {
        for annotation in annotations(f) {
            for m in pattern.find_iter(annotation) {
                let name = m.as_str();
                if !BUILTINS.contains(&name) && !outline.imports.iter().any(|i| i == name) {
                    unresolved.insert(format!("{}: `{name}` in `{annotation}`", f.name));
                }
            }
        }
    }
    report.push(TestResult::from_problems(
        VALIDATOR,
        "Every annotation resolves to a builtin or an import",
        "Annotations reference unknown names",
        unresolved.into_iter().collect(),
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::parse;

    #[test]
    fn generated_preamble_resolves() {
        let text = pyfixture_codegen::generate_module(1, Some(9)).unwrap_or_default();
        let outline = parse(&text).unwrap_or_default();
        assert!(validate(&outline).all_passed());
    }

    #[test]
    fn unknown_annotation_fails() {
        let text = "from typing import Any\n\ndef f(a: Decimal) -> Any:\n    return a\n";
        let outline = parse(text).unwrap_or_default();
        let report = validate(&outline);
        let failed: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert_eq!(failed.len(), 2);
        assert!(failed[1].details.iter().any(|d| d.contains("Decimal")));
    }
}
