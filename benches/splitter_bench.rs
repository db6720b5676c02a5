//! Benchmarks for the chronosplit splitter
//!
//! Run with: cargo bench

use chronosplit::{SplitRow, TimeSplitter};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Deterministic stream of overlapping regions scattered across the axis
fn scattered_rois(count: usize) -> Vec<(i64, i64, i32)> {
    (0..count)
        .map(|i| {
            let base = ((i * 7919) % count) as i64 * 1_000;
            (base, base + 1_500, (i % 8) as i32)
        })
        .collect()
}

fn bench_add_roi(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_roi");

    for size in [100, 1000] {
        let rois = scattered_rois(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("paint_{}", size), |b| {
            b.iter(|| {
                let mut splitter = TimeSplitter::default();
                for &(start, stop, target) in &rois {
                    splitter
                        .add_roi(black_box(start), black_box(stop), target)
                        .unwrap();
                }
                splitter
            })
        });
    }

    group.finish();
}

fn bench_from_bins(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_bins");

    for size in [100, 1000] {
        let edges: Vec<f64> = (0..=size).map(|i| i as f64).collect();
        let targets: Vec<i32> = (0..size).map(|i| if i % 3 == 0 { -1 } else { i as i32 % 4 }).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("bins_{}", size), |b| {
            b.iter(|| TimeSplitter::from_bins(black_box(&edges), black_box(&targets), 0).unwrap())
        });
    }

    group.finish();
}

fn bench_from_table(c: &mut Criterion) {
    let rows: Vec<SplitRow> = (0..500)
        .map(|i| SplitRow::new(i as f64 * 2.0, i as f64 * 2.0 + 1.5, format!("{}", i % 6)))
        .collect();

    c.bench_function("from_table_500", |b| {
        b.iter(|| TimeSplitter::from_table(black_box(&rows), 0).unwrap())
    });
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let mut splitter = TimeSplitter::default();
    for (start, stop, target) in scattered_rois(1000) {
        splitter.add_roi(start, stop, target).unwrap();
    }

    group.bench_function("value_at_time", |b| {
        let mut t = 0_i64;
        b.iter(|| {
            t = (t + 733) % 1_000_000;
            splitter.value_at_time(black_box(t))
        })
    });

    group.bench_function("time_roi_all_targets", |b| {
        b.iter(|| {
            splitter
                .active_targets()
                .into_iter()
                .map(|target| splitter.time_roi(target).num_intervals())
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_roi,
    bench_from_bins,
    bench_from_table,
    bench_queries
);
criterion_main!(benches);
