//! Generated modules against every validator.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use pyfixture_codegen::config::VocabularyOverrides;
use pyfixture_codegen::{DuplicateParams, FixtureGenerator, GeneratorConfig, Shape};
use pyfixture_conformance::{parse, validate_module, Bounds};

fn failures(report: &pyfixture_conformance::ConformanceReport) -> Vec<String> {
    report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| format!("{}: {} {:?}", r.validator, r.message, r.details))
        .collect()
}

proptest! {
    /// Any seeded module passes every per-module validator.
    #[test]
    fn prop_generated_modules_conform(index in 0u32..20_000, seed: u64) {
        let text = pyfixture_codegen::generate_module(index, Some(seed)).expect("generation failed");
        let report = validate_module(&text, Some(index), &Bounds::default());
        prop_assert!(report.all_passed(), "{:?}", failures(&report));
    }

    /// The outline agrees with the sampled description.
    #[test]
    fn prop_outline_matches_sample(seed: u64) {
        let generator = FixtureGenerator::standard();
        let module = generator.sample_module(0, Some(seed)).expect("sampling failed");
        let outline = parse(&pyfixture_codegen::render_module(&module)).expect("outline failed");
        prop_assert_eq!(outline.functions.len(), module.function_count());
        prop_assert_eq!(outline.classes.len(), module.class_count());
        prop_assert_eq!(outline.method_count(), module.method_count());
    }
}

#[test]
fn unseeded_modules_conform() {
    for _ in 0..25 {
        let text = pyfixture_codegen::generate_module(0, None).expect("generation failed");
        let report = validate_module(&text, Some(0), &Bounds::default());
        assert!(report.all_passed(), "{:?}", failures(&report));
    }
}

#[test]
fn docstring_for_another_index_fails() {
    let text = pyfixture_codegen::generate_module(7, Some(1)).expect("generation failed");
    let report = validate_module(&text, Some(8), &Bounds::default());
    assert_eq!(report.failure_count(), 1);
    assert!(report.by_validator("module/docstring").all(|r| r.is_failure()));
}

#[test]
fn kept_duplicate_params_are_a_syntax_error() {
    let config = GeneratorConfig {
        duplicate_params: DuplicateParams::Keep,
        vocabulary: Some(VocabularyOverrides {
            param_names: Some(vec!["data".to_string()]),
            ..Default::default()
        }),
        ..GeneratorConfig::default()
    };
    let generator = FixtureGenerator::new(config).expect("valid configuration");
    let text = generator.generate_module(3, Some(3)).expect("generation failed");
    let err = parse(&text).expect_err("duplicate argument").to_string();
    assert!(err.contains("duplicate argument 'data'"), "{err}");

    let report = validate_module(&text, Some(3), &Bounds::default());
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.failure_count(), 1);
}

#[test]
fn renamed_duplicate_params_conform() {
    let config = GeneratorConfig {
        vocabulary: Some(VocabularyOverrides {
            param_names: Some(vec!["data".to_string()]),
            ..Default::default()
        }),
        ..GeneratorConfig::default()
    };
    let generator = FixtureGenerator::new(config).expect("valid configuration");
    let text = generator.generate_module(3, Some(3)).expect("generation failed");
    assert!(text.contains("data_2"));
    let report = validate_module(&text, Some(3), &Bounds::default());
    assert!(report.all_passed(), "{:?}", failures(&report));
}

#[test]
fn target_lines_modules_conform_without_count_bounds() {
    let config = GeneratorConfig {
        shape: Shape::TargetLines { min: 50, max: 100 },
        ..GeneratorConfig::default()
    };
    let bounds = Bounds::from_config(&config);
    assert!(bounds.functions.is_none());
    let generator = FixtureGenerator::new(config).expect("valid configuration");
    for index in 0..20 {
        let text = generator
            .generate_module(index, Some(42 + u64::from(index)))
            .expect("generation failed");
        assert!(text.lines().count() >= 50, "module {index} stopped short");
        let report = validate_module(&text, Some(index), &bounds);
        assert!(report.all_passed(), "{:?}", failures(&report));
    }
}

#[test]
fn broken_indentation_is_reported() {
    let text = pyfixture_codegen::generate_module(1, Some(5)).expect("generation failed");
    let broken = text.replacen("\n        return", "\n          return", 1);
    let report = validate_module(&broken, Some(1), &Bounds::default());
    assert!(!report.all_passed());
    assert_eq!(report.results[0].validator, "module/syntax");
}

#[test]
fn unclosed_docstring_is_reported() {
    let text = pyfixture_codegen::generate_module(1, Some(5)).expect("generation failed");
    let truncated = &text[..text.find("Synthetic test module.").expect("docstring")];
    let report = validate_module(truncated, Some(1), &Bounds::default());
    assert!(report.results[0].message.contains("unterminated triple-quoted string"));
}

#[test]
fn malformed_annotation_is_a_syntax_error() {
    let text = pyfixture_codegen::generate_module(2, Some(8)).expect("generation failed");
    let broken = text.replacen("-> None:", "-> None None:", 1);
    assert_ne!(broken, text);
    let report = validate_module(&broken, Some(2), &Bounds::default());
    assert_eq!(report.results.len(), 1);
    assert!(report.results[0].is_failure());
    assert!(report.results[0].message.contains("annotation 'None None'"));
}
