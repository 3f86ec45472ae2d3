use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fp_idioms::FibonacciCache;
use pprof::criterion::{Output, PProfProfiler};

fn bench_fib(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fibonacci cache");

    for index in [10usize, 50, 90] {
        group.bench_with_input(BenchmarkId::new("cold", index), &index, |b, &index| {
            b.iter(|| FibonacciCache::new().get(black_box(index)))
        });

        let mut warm = FibonacciCache::new();
        warm.get(index);
        group.bench_with_input(BenchmarkId::new("warm", index), &index, |b, &index| {
            b.iter(|| warm.get(black_box(index)))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_fib
}
criterion_main!(benches);
