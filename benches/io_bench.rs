//! Benchmark for the IO effect: construction, forcing and memoized reads.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deferred_io::effect::IO;
use std::hint::black_box;

fn benchmark_io_pure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_pure");

    group.bench_function("pure", |bencher| {
        bencher.iter(|| IO::pure(black_box(42)).run_unsafe());
    });

    group.bench_function("new", |bencher| {
        bencher.iter(|| IO::new(|| black_box(42)).run_unsafe());
    });

    group.finish();
}

fn benchmark_io_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_flat_map_chain");

    for depth in [1_usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut io = IO::new(|| 0_usize);
                for _ in 0..depth {
                    io = io.flat_map(|x| IO::new(move || x + 1));
                }
                black_box(io.run_unsafe())
            });
        });
    }

    group.finish();
}

fn benchmark_io_memoized_force(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_memoized_force");

    let io = IO::new(|| (0..1_000_u64).sum::<u64>());
    let _ = io.force();

    group.bench_function("cached", |bencher| {
        bencher.iter(|| black_box(*io.force()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_io_pure,
    benchmark_io_flat_map_chain,
    benchmark_io_memoized_force
);
criterion_main!(benches);
