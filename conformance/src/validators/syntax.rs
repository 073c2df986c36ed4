//! Syntax validator: the module parses.

use crate::outline::{self, ModuleOutline};
use crate::report::{ConformanceReport, TestResult};

/// Validator identifier.
pub const VALIDATOR: &str = "module/syntax";

/// Parses `text`, returning the outcome and the outline when parsing succeeded.
#[must_use]
pub fn validate(text: &str) -> (ConformanceReport, Option<ModuleOutline>) {
    let mut report = ConformanceReport::new();
    match outline::parse(text) {
        Ok(outline) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!(
                    "Module parses ({} lines, {} functions, {} classes)",
                    outline.lines,
                    outline.functions.len(),
                    outline.classes.len()
                ),
            ));
            (report, Some(outline))
        }
        Err(e) => {
            report.push(TestResult::fail(VALIDATOR, format!("Syntax error at {e}")));
            (report, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_line_of_error() {
        let (report, outline) = validate("def f(:\n");
        assert!(outline.is_none());
        assert!(!report.all_passed());
        assert!(report.results[0].message.contains("line 1"));
    }

    #[test]
    fn generated_module_parses() {
        let text = pyfixture_codegen::generate_module(4, Some(4)).unwrap_or_default();
        let (report, outline) = validate(&text);
        assert!(report.all_passed());
        assert!(outline.is_some());
    }
}
