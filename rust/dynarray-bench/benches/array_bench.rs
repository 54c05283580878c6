//! Criterion benchmarks for appending to and editing a `GrowableIntArray`.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use dynarray_bench::{init_tracing, BenchConfig};
use dynarray_core::GrowableIntArray;

fn bench_append(c: &mut Criterion) {
    init_tracing();
    let cfg = BenchConfig::load();
    let mut group = c.benchmark_group("append");

    for &size in &cfg.sizes {
        let values = cfg.values(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("default_capacity", size), &values, |b, values| {
            b.iter(|| {
                let mut array =
                    GrowableIntArray::with_config(&cfg.array).expect("invalid array settings");
                for &v in values {
                    array.add(black_box(v)).expect("append failed");
                }
                array
            });
        });
        group.bench_with_input(BenchmarkId::new("presized", size), &values, |b, values| {
            b.iter(|| {
                let mut array = GrowableIntArray::with_capacity(values.len());
                for &v in values {
                    array.add(black_box(v)).expect("append failed");
                }
                array
            });
        });
    }

    group.finish();
}

fn bench_front_edits(c: &mut Criterion) {
    let cfg = BenchConfig::load();
    let mut group = c.benchmark_group("front_edits");

    for &size in &cfg.sizes {
        let array = cfg.array_of(&cfg.values(size)).expect("failed to build input");

        group.bench_with_input(BenchmarkId::new("insert_then_remove", size), &size, |b, _| {
            b.iter_batched(
                || array.clone(),
                |mut array| {
                    array.insert_at(0, black_box(-1)).expect("insert failed");
                    array.remove_at(0).expect("remove failed")
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_front_edits);
criterion_main!(benches);
