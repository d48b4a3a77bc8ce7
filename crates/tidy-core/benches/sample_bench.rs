use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use tidy_core::{create_plotting_data, plot_functions, FunctionSet};

fn funcs() -> FunctionSet {
    FunctionSet::new()
        .with("sin", f64::sin)
        .with("cos", f64::cos)
        .with("poly", |x| x * x * x - 2.0 * x + 1.0)
}

fn bench_sampling(c: &mut Criterion) {
    let set = funcs();
    let mut group = c.benchmark_group("sampling");
    for &n in &[100usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("create_plotting_data", n), &n, |b, &n| {
            b.iter(|| black_box(create_plotting_data(&[-10.0, 10.0], n, &set)));
        });
        group.bench_with_input(BenchmarkId::new("plot_functions", n), &n, |b, &n| {
            b.iter(|| black_box(plot_functions(&[-10.0, 10.0], n, &set)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
