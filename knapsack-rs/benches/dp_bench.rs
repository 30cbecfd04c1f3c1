use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use knapsack_rs::dp::{build_table, reconstruct_selection};
use knapsack_rs::entities::Item;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, build_table_bench, reconstruct_bench);

const CAPACITIES: [u64; 3] = [1_000, 10_000, 100_000];
const N_ITEMS: u64 = 15;

fn create_items(capacity: u64) -> Vec<Item> {
    let mut rng = SmallRng::seed_from_u64(0);
    (1..=N_ITEMS)
        .map(|id| Item::new(id, rng.random_range(1..=capacity / 2), rng.random_range(1..=100)))
        .collect_vec()
}

/// Benchmark the construction of the table for the maximum number of items and growing capacities
fn build_table_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");
    for capacity in CAPACITIES {
        let items = create_items(capacity);
        group.throughput(criterion::Throughput::Elements(N_ITEMS * (capacity + 1)));
        group.bench_function(BenchmarkId::from_parameter(capacity), |b| {
            b.iter(|| build_table(capacity, &items))
        });
    }
    group.finish();
}

/// Benchmark the backward walk over an already built table
fn reconstruct_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct_selection");
    for capacity in CAPACITIES {
        let items = create_items(capacity);
        let table = build_table(capacity, &items);
        group.bench_function(BenchmarkId::from_parameter(capacity), |b| {
            b.iter(|| reconstruct_selection(&table, &items, capacity))
        });
    }
    group.finish();
}
