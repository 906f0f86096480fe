//! Criterion benchmarks for arc sampling and shape assembly.
//! Focus steps (degrees): {10, 1, 0.1}; cost is linear in 360/step.

use airspace::arc::{sample_arc, AzimuthRange};
use airspace::shapes::{build_ring, build_sector};
use airspace::GeoPoint;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_arc(c: &mut Criterion) {
    let center = GeoPoint::new(52.1657, 20.9671).unwrap();
    let mut group = c.benchmark_group("arc");
    for &step in &[10.0f64, 1.0, 0.1] {
        group.bench_with_input(BenchmarkId::new("full_circle", step), &step, |b, &step| {
            b.iter(|| sample_arc(center, 9_260.0, AzimuthRange::full(), step).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sector_wrap", step), &step, |b, &step| {
            let r = AzimuthRange::new(300.0, 60.0).unwrap();
            b.iter(|| build_sector(center, 18_520.0, r, step).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("ring", step), &step, |b, &step| {
            b.iter(|| build_ring(center, 5_000.0, 20_000.0, step).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arc);
criterion_main!(benches);
