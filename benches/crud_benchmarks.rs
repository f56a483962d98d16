use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dict_tree::{Bst, Entry};
use std::collections::BTreeMap;

// Sorted input degenerates the tree into a list, so keep the sorted case small.
const N: usize = 10_000;
const N_SORTED: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i:08}")).collect()
}

fn random_keys(n: usize) -> Vec<String> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push(format!("{:08x}", x >> 33));
    }
    keys
}

fn build_tree(keys: &[String]) -> Bst {
    let mut tree = Bst::with_capacity(keys.len());
    for key in keys {
        let _ = tree.insert(Entry::new(key.as_str(), key.as_str()));
    }
    tree
}

fn build_map(keys: &[String]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for key in keys {
        map.entry(key.clone()).or_insert_with(|| key.clone());
    }
    map
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[String]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("Bst", keys.len()), |b| b.iter(|| build_tree(keys)));
    group.bench_function(BenchmarkId::new("BTreeMap", keys.len()), |b| b.iter(|| build_map(keys)));

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_keys(N_SORTED));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_keys(N));
}

// ─── Retrieve ───────────────────────────────────────────────────────────────

fn bench_retrieve(c: &mut Criterion, name: &str, keys: &[String]) {
    let tree = build_tree(keys);
    let map = build_map(keys);

    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("Bst", keys.len()), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for key in keys {
                if tree.retrieve(key).is_ok() {
                    found += 1;
                }
            }
            found
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", keys.len()), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for key in keys {
                if map.get(key).is_some() {
                    found += 1;
                }
            }
            found
        });
    });

    group.finish();
}

fn bench_retrieve_ordered(c: &mut Criterion) {
    bench_retrieve(c, "retrieve_ordered", &ordered_keys(N_SORTED));
}

fn bench_retrieve_random(c: &mut Criterion) {
    bench_retrieve(c, "retrieve_random", &random_keys(N));
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_traverse_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = build_tree(&keys);
    let map = build_map(&keys);

    let mut group = c.benchmark_group("traverse_random");

    group.bench_function(BenchmarkId::new("Bst", N), |b| {
        b.iter(|| tree.iter().map(|entry| entry.value().len()).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| map.values().map(String::len).sum::<usize>());
    });

    group.finish();
}

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random,);

criterion_group!(retrieve_benches, bench_retrieve_ordered, bench_retrieve_random,);

criterion_group!(traverse_benches, bench_traverse_random,);

criterion_main!(insert_benches, retrieve_benches, traverse_benches,);
