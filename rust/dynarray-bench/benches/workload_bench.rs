//! Criterion benchmarks for linear sorted insertion, random erasure and the
//! filter strategies.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use dynarray_bench::{init_tracing, BenchConfig};
use dynarray_core::workload::{self, FilterStrategy, Order};
use dynarray_core::GrowableIntArray;

fn bench_linear_insert(c: &mut Criterion) {
    init_tracing();
    let cfg = BenchConfig::load();
    let mut group = c.benchmark_group("linear_insert");

    for &size in &cfg.sizes {
        let values = cfg.values(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut array =
                    GrowableIntArray::with_config(&cfg.array).expect("invalid array settings");
                workload::linear_insert(black_box(values), &mut array, Order::Ascending)
                    .expect("insert failed");
                array
            });
        });
    }

    group.finish();
}

fn bench_linear_erase(c: &mut Criterion) {
    let cfg = BenchConfig::load();
    let mut group = c.benchmark_group("linear_erase");

    for &size in &cfg.sizes {
        let array = cfg.array_of(&cfg.values(size)).expect("failed to build input");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || array.clone(),
                |mut array| workload::linear_erase(&mut array, cfg.seed).expect("erase failed"),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let cfg = BenchConfig::load();
    let mut group = c.benchmark_group("filter");

    for &size in &cfg.sizes {
        let array = cfg.array_of(&cfg.values(size)).expect("failed to build input");

        group.throughput(Throughput::Elements(size as u64));
        for strategy in FilterStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, _| {
                b.iter_batched(
                    || array.clone(),
                    |mut array| {
                        strategy
                            .apply(&mut array, black_box(cfg.filter_threshold))
                            .expect("filter failed");
                        array
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_linear_insert, bench_linear_erase, bench_filter);
criterion_main!(benches);
