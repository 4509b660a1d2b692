//! Criterion benchmarks for whole-drawing projection.
//! Focus sizes: n in {10, 100, 1000} leaf paths (lines, arcs and circles mixed).
//! Results: by default under target/criterion.

use beams::geom2::{Arc, Circle, Line, Path};
use beams::model::Model;
use beams::{beam, BeamOptions};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_drawing(n: usize, seed: u64) -> Model {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = Model::new();
    for i in 0..n {
        let origin = Vector2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let radius = rng.gen_range(1.0..20.0);
        let path: Path = match i % 3 {
            0 => {
                let run = Vector2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
                Line::new(origin, origin + run).into()
            }
            1 => Arc::new(origin, radius, rng.gen_range(0.0..360.0), rng.gen_range(0.0..360.0)).into(),
            _ => Circle::new(origin, radius).into(),
        };
        model.paths.insert(format!("p{i}"), path);
    }
    model
}

fn bench_beam(c: &mut Criterion) {
    let mut group = c.benchmark_group("beam");
    let opts = BeamOptions::new(15.0, 30.0, 0.7);
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("mixed_paths", n), &n, |b, &n| {
            b.iter_batched(
                || random_drawing(n, 43),
                |model| {
                    let _out = beam(&model, &opts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_beam);
criterion_main!(benches);
