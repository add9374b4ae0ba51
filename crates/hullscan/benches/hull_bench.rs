//! Criterion benchmarks for the hull pipeline.
//! Sizes: n in {100, 1000, 10000}; sort workers in {1, 2, 4, 8}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullscan::hull::sort_by_polar_angle;
use hullscan::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn cloud(n: usize, seed: u64) -> PointSet {
    uniform_points(n, Dim::Two, 100.0, &mut StdRng::seed_from_u64(seed))
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000] {
        let set = cloud(n, 42);
        for &threads in &[1usize, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("uniform_t{threads}"), n),
                &set,
                |b, set| b.iter(|| compute_convex_hull(set, threads).unwrap()),
            );
        }
        let ring = regular_polygon(n, 50.0);
        group.bench_with_input(BenchmarkId::new("regular_polygon", n), &ring, |b, ring| {
            b.iter(|| compute_convex_hull(ring, 1).unwrap())
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_sort");
    let set = cloud(10_000, 43);
    let pivot = set.points()[lowest_index(&set)];
    for &threads in &[1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &t| {
            b.iter_batched(
                || set.points().to_vec(),
                |mut pts| sort_by_polar_angle(&mut pts, pivot, t).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let ring = regular_polygon(10_000, 1.0);
    c.bench_function("metrics/area_perimeter_10000", |b| {
        b.iter(|| HullMetrics::of(&ring))
    });
}

fn lowest_index(set: &PointSet) -> usize {
    hullscan::hull::lowest_point(set.points()).unwrap_or(0)
}

criterion_group!(benches, bench_hull, bench_sort, bench_metrics);
criterion_main!(benches);
