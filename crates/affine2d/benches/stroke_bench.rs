//! Criterion benchmarks for incremental stroke tessellation.
//! Focus sizes: points in {10, 100, 1000, 10000}.

use affine2d::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random walk with mixed step lengths so both merges and joins occur.
fn random_walk(k: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut p = Point::ORIGIN;
    (0..k)
        .map(|_| {
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            let step = rng.gen_range(0.1..4.0);
            p = p + Vec2::new(theta.cos(), theta.sin()) * step;
            p
        })
        .collect()
}

fn bench_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke");
    for &k in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("line_to", k), &k, |b, &k| {
            b.iter_batched(
                || random_walk(k, 47),
                |points| {
                    let mut s = Stroke::new();
                    s.move_to(Point::ORIGIN, 1.0).unwrap();
                    for p in points {
                        s.line_to(p, 1.0).unwrap();
                    }
                    s
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("vertex_data", k), &k, |b, &k| {
            let mut s = Stroke::new();
            s.move_to(Point::ORIGIN, 1.0).unwrap();
            for p in random_walk(k, 48) {
                s.line_to(p, 1.0).unwrap();
            }
            b.iter(|| s.vertex_data())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stroke);
criterion_main!(benches);
