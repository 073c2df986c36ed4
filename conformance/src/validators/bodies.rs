//! Body validator: stub bodies pair with their annotations.
//!
//! Functions assign `result = f"{a} - {b}"` over their two parameters in
//! order and return it under `# type: ignore[return-value]`. Constructors
//! store their parameter as an attribute of the same name. Methods annotated
//! `-> bool` return `True`; methods annotated `-> str` return the stored
//! attribute as a one-operand f-string.

use std::sync::OnceLock;

use regex::Regex;

use crate::outline::{ClassOutline, FunctionOutline, ModuleOutline};
use crate::report::{ConformanceReport, TestResult};

/// Validator identifier.
pub const VALIDATOR: &str = "module/bodies";

/// Comment that silences the declared-vs-actual return type mismatch.
pub const RETURN_PRAGMA: &str = "type: ignore[return-value]";

struct Patterns {
    two_operand: Regex,
    attribute: Regex,
}

fn patterns() -> Option<&'static Patterns> {
    static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Some(Patterns {
                two_operand: Regex::new(r#"^f"\{(\w+)\} - \{(\w+)\}"$"#).ok()?,
                attribute: Regex::new(r#"^f"\{self\.(\w+)\}"$"#).ok()?,
            })
        })
        .as_ref()
}

fn single_return<'a>(f: &'a FunctionOutline, owner: &str, problems: &mut Vec<String>) -> Option<&'a str> {
    match f.returns.as_slice() {
        [r] => Some(r.expr.as_str()),
        other => {
            problems.push(format!("{owner}{} has {} return statements, expected 1", f.name, other.len()));
            None
        }
    }
}

fn check_function(f: &FunctionOutline, p: &Patterns, problems: &mut Vec<String>) {
    let names: Vec<&str> = f.params.iter().map(|p| p.name.as_str()).collect();
    let formatted = f.assignments.iter().find(|a| a.target == "result").and_then(|a| {
        let caps = p.two_operand.captures(&a.value)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    });
    match formatted {
        Some((a, b)) if names == [a, b] => {}
        Some((a, b)) => problems.push(format!(
            "{} formats {{{a}}} and {{{b}}} but takes ({})",
            f.name,
            names.join(", ")
        )),
        None => problems.push(format!("{} does not assign a two-operand f-string to `result`", f.name)),
    }
    if single_return(f, "", problems) != Some("result") {
        problems.push(format!("{} does not return `result`", f.name));
        return;
    }
    let pragma = f.returns[0].comment.as_deref().unwrap_or("");
    if !pragma.contains(RETURN_PRAGMA) {
        problems.push(format!("{} returns without `# {RETURN_PRAGMA}`", f.name));
    }
}

fn check_class(class: &ClassOutline, p: &Patterns, problems: &mut Vec<String>) {
    let attribute = class.init().and_then(|init| {
        let param = init.params.get(1)?;
        init.assignments
            .iter()
            .find(|a| a.target == format!("self.{}", param.name) && a.value == param.name)
            .map(|_| param.name.as_str())
    });
    if class.init().is_some() && attribute.is_none() {
        problems.push(format!("{}.__init__ does not store its parameter", class.name));
    }
    if let Some(init) = class.init() {
        if init.return_annotation.as_deref() != Some("None") {
            problems.push(format!("{}.__init__ is not annotated `-> None`", class.name));
        }
    }

    let owner = format!("{}.", class.name);
    for m in class.plain_methods() {
        let Some(expr) = single_return(m, &owner, problems) else {
            continue;
        };
        match m.return_annotation.as_deref() {
            Some("bool") if expr == "True" => {}
            Some("bool") => problems.push(format!("{owner}{} -> bool returns `{expr}`", m.name)),
            Some("str") => {
                let stored = p.attribute.captures(expr).and_then(|c| c.get(1)).map(|g| g.as_str());
                if stored.is_none() || stored != attribute {
                    problems.push(format!(
                        "{owner}{} -> str returns `{expr}`, not the stored attribute",
                        m.name
                    ));
                }
            }
            other => problems.push(format!(
                "{owner}{} is annotated `{}`, expected bool or str",
                m.name,
                other.unwrap_or("nothing")
            )),
        }
    }
}

/// Checks every function and method body.
#[must_use]
pub fn validate(outline: &ModuleOutline) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(p) = patterns() else {
        report.push(TestResult::fail(VALIDATOR, "Body patterns failed to compile"));
        return report;
    };
    let mut problems = Vec::new();
    for f in &outline.functions {
        check_function(f, p, &mut problems);
    }
    for class in &outline.classes {
        check_class(class, p, &mut problems);
    }
    report.push(TestResult::from_problems(
        VALIDATOR,
        "Every body matches its annotation",
        "Stub bodies do not match their annotations",
        problems,
    ));
    report
}
