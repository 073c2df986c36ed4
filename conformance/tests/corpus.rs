//! Corpus directories written by the generator and checked end to end.

use pyfixture_codegen::{generate_corpus, CorpusOptions, FixtureGenerator};
use pyfixture_conformance::validators::corpus::{LAYOUT, MANIFEST, NAMING};
use pyfixture_conformance::{run_all, Bounds, Severity};

#[test]
fn generated_corpus_passes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut options = CorpusOptions::new(dir.path(), 15);
    options.write_manifest = true;
    options.jobs = 3;
    generate_corpus(&FixtureGenerator::standard(), &options).expect("corpus");

    let report = run_all(dir.path(), &Bounds::default()).expect("conformance");
    let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
    assert!(failures.is_empty(), "{failures:?}");
    assert_eq!(report.by_validator(MANIFEST).count(), 1);
    assert!(report
        .by_validator("module/bodies")
        .all(|r| r.message == "All 15 modules pass"));
}

#[test]
fn misnamed_file_fails_naming() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_corpus(&FixtureGenerator::standard(), &CorpusOptions::new(dir.path(), 2))
        .expect("corpus");
    std::fs::rename(dir.path().join("module_0001.py"), dir.path().join("helpers.py"))
        .expect("rename");

    let report = run_all(dir.path(), &Bounds::default()).expect("conformance");
    let naming: Vec<_> = report.by_validator(NAMING).collect();
    assert_eq!(naming.len(), 1);
    assert_eq!(naming[0].severity, Severity::Failure);
    assert_eq!(naming[0].details, vec!["helpers.py".to_string()]);
}

#[test]
fn edited_file_disagrees_with_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut options = CorpusOptions::new(dir.path(), 3);
    options.write_manifest = true;
    generate_corpus(&FixtureGenerator::standard(), &options).expect("corpus");

    let path = dir.path().join("module_0002.py");
    let text = std::fs::read_to_string(&path).expect("read");
    std::fs::write(&path, format!("{text}\nextra = 1\n")).expect("write");

    let report = run_all(dir.path(), &Bounds::default()).expect("conformance");
    let manifest: Vec<_> = report.by_validator(MANIFEST).collect();
    assert_eq!(manifest[0].severity, Severity::Failure);
    assert!(manifest[0].details[0].starts_with("module_0002.py: "));
}

#[test]
fn syntax_error_is_reported_per_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_corpus(&FixtureGenerator::standard(), &CorpusOptions::new(dir.path(), 4))
        .expect("corpus");
    std::fs::write(dir.path().join("module_0003.py"), "def broken(:\n").expect("write");

    let report = run_all(dir.path(), &Bounds::default()).expect("conformance");
    let syntax: Vec<_> = report.by_validator("module/syntax").collect();
    assert_eq!(syntax[0].severity, Severity::Failure);
    assert!(syntax[0].details[0].starts_with("module_0003.py: Syntax error at line 1"));
    let bodies: Vec<_> = report.by_validator("module/bodies").collect();
    assert_eq!(bodies[0].severity, Severity::Warning);
}

#[test]
fn empty_directory_fails_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_all(dir.path(), &Bounds::default()).expect("conformance");
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].validator, LAYOUT);
    assert!(!report.all_passed());
}
