//! Criterion benchmarks for the direct geodesic solver.
//! Random start points/azimuths from a fixed seed; distances from 1 km to 10 000 km.

use airspace::geodesic::{direct, solve, GeodesyCfg};
use airspace::GeoPoint;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_inputs(n: usize, seed: u64) -> Vec<(GeoPoint, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let p = GeoPoint::new(rng.gen_range(-89.0..89.0), rng.gen_range(-180.0..180.0))
                .unwrap();
            (p, rng.gen_range(0.0..360.0))
        })
        .collect()
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct");
    for &d in &[1_000.0f64, 100_000.0, 10_000_000.0] {
        group.bench_with_input(BenchmarkId::new("vincenty", d as u64), &d, |b, &d| {
            b.iter_batched(
                || random_inputs(64, 43),
                |inputs| {
                    for (p, az) in inputs {
                        let _ = solve(p, az, d).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    // Spherical fallback only.
    let fallback = GeodesyCfg {
        max_iterations: 0,
        ..GeodesyCfg::default()
    };
    group.bench_function("spherical_fallback", |b| {
        b.iter_batched(
            || random_inputs(64, 44),
            |inputs| {
                for (p, az) in inputs {
                    let _ = direct(&fallback, p, az, 100_000.0).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
