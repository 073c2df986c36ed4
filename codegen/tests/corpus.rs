//! Corpus driver writing real files into a temporary directory.

use pyfixture_codegen::corpus::{derive_seed, module_file_name};
use pyfixture_codegen::{generate_corpus, CorpusOptions, FixtureGenerator};
use pyfixture_model::manifest::{from_json_str, MANIFEST_FILE};

#[test]
fn writes_one_file_per_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut options = CorpusOptions::new(dir.path(), 12);
    options.first_index = 5;
    let report = generate_corpus(&FixtureGenerator::standard(), &options).expect("corpus");

    assert_eq!(report.files.len(), 12);
    assert_eq!(report.files[0], dir.path().join("module_0005.py"));
    assert_eq!(report.files[11], dir.path().join("module_0016.py"));
    for path in &report.files {
        assert!(path.is_file(), "{} missing", path.display());
    }
    assert!(report.total_lines > 0);
    assert!(report.class_count >= 12);
    assert!(report.manifest.is_none());
}

#[test]
fn files_match_direct_generation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let generator = FixtureGenerator::standard();
    generate_corpus(&generator, &CorpusOptions::new(dir.path(), 3)).expect("corpus");

    for index in 0..3 {
        let on_disk = std::fs::read_to_string(dir.path().join(module_file_name(index))).expect("read");
        let direct = generator
            .generate_module(index, Some(derive_seed(42, index)))
            .expect("generate");
        assert_eq!(on_disk, direct);
    }
}

#[test]
fn parallel_and_serial_runs_agree() {
    let serial = tempfile::tempdir().expect("tempdir");
    let parallel = tempfile::tempdir().expect("tempdir");
    let generator = FixtureGenerator::standard();

    let a = generate_corpus(&generator, &CorpusOptions::new(serial.path(), 25)).expect("serial");
    let mut options = CorpusOptions::new(parallel.path(), 25);
    options.jobs = 4;
    let b = generate_corpus(&generator, &options).expect("parallel");

    assert_eq!(a.total_lines, b.total_lines);
    assert_eq!(a.total_bytes, b.total_bytes);
    for index in 0..25 {
        let name = module_file_name(index);
        let left = std::fs::read(serial.path().join(&name)).expect("read serial");
        let right = std::fs::read(parallel.path().join(&name)).expect("read parallel");
        assert_eq!(left, right, "{name} differs");
    }
}

#[test]
fn manifest_records_every_module() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut options = CorpusOptions::new(dir.path().join("nested/out"), 4);
    options.write_manifest = true;
    let report = generate_corpus(&FixtureGenerator::standard(), &options).expect("corpus");

    let path = report.manifest.expect("manifest path");
    assert_eq!(path, dir.path().join("nested/out").join(MANIFEST_FILE));
    let manifest = from_json_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(manifest.base_seed, 42);
    assert_eq!(manifest.entries.len(), 4);
    assert_eq!(manifest.entries[2].path, "module_0002.py");
    assert_eq!(manifest.entries[2].seed, 44);
    assert_eq!(manifest.class_count(), report.class_count);
    assert_eq!(manifest.function_count(), report.function_count);
}
