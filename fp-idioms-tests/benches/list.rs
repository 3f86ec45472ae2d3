use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fp_idioms::list::{sum_list, sum_list_fold, sum_list_tail};
use pprof::criterion::{Output, PProfProfiler};

fn bench_sum(criterion: &mut Criterion) {
    let mut bigvec = Vec::with_capacity(1024 * 1024);
    bigvec.resize(1024 * 1024, 1u64);
    let test_cases = vec![bigvec];

    let mut group = criterion.benchmark_group("sum_list");

    for input in test_cases.into_iter() {
        group.bench_with_input(
            BenchmarkId::new("fold iter", input.len()),
            &input,
            |b, input| b.iter(|| sum_list_fold(input)),
        );

        group.bench_with_input(
            BenchmarkId::new("tail recursion", input.len()),
            &input,
            |b, input| b.iter(|| sum_list_tail(input)),
        );

        group.bench_with_input(
            BenchmarkId::new("collapse_frames", input.len()),
            &input,
            |b, input| b.iter(|| sum_list(input)),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_sum
}
criterion_main!(benches);
