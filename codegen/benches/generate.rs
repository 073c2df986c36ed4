//! Benchmarks for module sampling and rendering.
//!
//! ```bash
//! cargo bench -p pyfixture-codegen
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pyfixture_codegen::{render_module, FixtureGenerator, GeneratorConfig, Shape};

fn bench_generate(c: &mut Criterion) {
    let generator = FixtureGenerator::standard();
    let mut group = c.benchmark_group("generate_module");
    for seed in [1u64, 42, 2024] {
        let bytes = generator
            .generate_module(0, Some(seed))
            .map(|t| t.len() as u64)
            .unwrap_or_default();
        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            b.iter(|| generator.generate_module(black_box(7), Some(seed)))
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let generator = FixtureGenerator::standard();
    c.bench_function("sample_module", |b| {
        b.iter(|| generator.sample_module(black_box(3), Some(42)))
    });
    if let Ok(module) = generator.sample_module(3, Some(42)) {
        c.bench_function("render_module", |b| b.iter(|| render_module(black_box(&module))));
    }
}

fn bench_target_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("target_lines");
    for lines in [100usize, 1_000, 10_000] {
        let config = GeneratorConfig {
            shape: Shape::TargetLines {
                min: lines,
                max: lines,
            },
            ..GeneratorConfig::default()
        };
        let Ok(generator) = FixtureGenerator::new(config) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| generator.generate_module(0, Some(black_box(42))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_phases, bench_target_lines);
criterion_main!(benches);
