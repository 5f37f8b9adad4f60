//! Benchmarks comparing the search family on sorted `i64` slices.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primer_search::{
    binary_search, binary_search_iterative, exponential_search, fibonacci_search,
    interpolation_search, jump_search, ternary_search,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [256, 8_192, 262_144];

fn sorted_values(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut next = 0i64;
    (0..n)
        .map(|_| {
            next += rng.gen_range(1..8);
            next
        })
        .collect()
}

fn targets(arr: &[i64]) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(54321);
    (0..1_024)
        .map(|_| arr[rng.gen_range(0..arr.len())])
        .collect()
}

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_hit");

    for n in SIZES {
        let arr = sorted_values(n);
        let targets = targets(&arr);

        macro_rules! bench {
            ($name:literal, $search:expr) => {
                group.bench_function(BenchmarkId::new($name, n), |b| {
                    let mut i = 0;
                    b.iter(|| {
                        let target = targets[i % targets.len()];
                        i += 1;
                        black_box($search(black_box(arr.as_slice()), target))
                    });
                });
            };
        }

        bench!("binary", |a: &[i64], t: i64| binary_search(a, &t));
        bench!("binary_iterative", |a: &[i64], t: i64| binary_search_iterative(a, &t));
        bench!("exponential", |a: &[i64], t: i64| exponential_search(a, &t));
        bench!("jump", |a: &[i64], t: i64| jump_search(a, &t));
        bench!("ternary", |a: &[i64], t: i64| ternary_search(a, &t));
        bench!("interpolation", |a: &[i64], t: i64| interpolation_search(a, t));
        bench!("fibonacci", |a: &[i64], t: i64| fibonacci_search(a, &t));
    }

    group.finish();
}

criterion_group!(benches, bench_searches);
criterion_main!(benches);
