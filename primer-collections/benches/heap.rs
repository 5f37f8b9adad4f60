//! Benchmarks for heap and hash table operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use primer_collections::{ChainedHashTable, MaxHeap};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [64, 1_024, 16_384];

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(12345);
    (0..n).map(|_| rng.r#gen()).collect()
}

// ============================================================================
// Heap
// ============================================================================

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_heap");

    for n in SIZES {
        let values = random_values(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("insert", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::with_capacity(values.len());
                for &v in values {
                    heap.insert(black_box(v)).unwrap();
                }
                heap
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_extract", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::with_capacity(values.len());
                for &v in values {
                    heap.insert(v).unwrap();
                }
                while let Ok(v) = heap.extract_max() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("heap_sort", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::with_capacity(values.len());
                for &v in values {
                    heap.insert(v).unwrap();
                }
                black_box(heap.into_sorted_vec())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Hash table
// ============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_hash");

    for buckets in [10, 1_024] {
        let mut table = ChainedHashTable::new(buckets);
        for key in 0..4_096i64 {
            table.insert(key, key).unwrap();
        }

        group.bench_function(BenchmarkId::new("search_hit", buckets), |b| {
            let mut key = 0i64;
            b.iter(|| {
                key = (key + 7) % 4_096;
                black_box(table.search(black_box(key)).is_ok())
            });
        });

        group.bench_function(BenchmarkId::new("search_miss", buckets), |b| {
            b.iter(|| black_box(table.search(black_box(-5)).is_err()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heap, bench_hash);
criterion_main!(benches);
