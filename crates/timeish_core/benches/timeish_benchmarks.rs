//! Criterion benchmarks for timeish_core arithmetic and formatting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use timeish_core::types::Timeish;

/// Benchmark carrying and borrowing minute arithmetic across delta sizes.
fn bench_minute_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("minute_arithmetic");

    for delta in [1i64, 59, 125, 100_000] {
        group.bench_with_input(BenchmarkId::new("add_minutes", delta), &delta, |b, &delta| {
            b.iter(|| {
                let mut time = Timeish::new(12, 30).unwrap();
                time.add_minutes(black_box(delta)).unwrap();
                time
            });
        });

        group.bench_with_input(BenchmarkId::new("sub_minutes", delta), &delta, |b, &delta| {
            b.iter(|| {
                let mut time = Timeish::new(10_000, 30).unwrap();
                time.sub_minutes(black_box(delta)).unwrap();
                time
            });
        });
    }

    group.finish();
}

/// Benchmark rendering and splitting.
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let time = Timeish::new(125, 7).unwrap();

    group.bench_function("to_string", |b| b.iter(|| black_box(&time).to_string()));
    group.bench_function("format_separator", |b| {
        b.iter(|| black_box(&time).format(Some(".")))
    });
    group.bench_function("explode_any", |b| {
        b.iter(|| Timeish::explode_any(":", black_box("125:07")).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_minute_arithmetic, bench_formatting);
criterion_main!(benches);
