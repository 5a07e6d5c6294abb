//! Search pipeline benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `chunk` | Splitting terms of increasing length |
//! | `build` | Chunk + render the ranked query |
//! | `execute` | Full search against in-memory stores of growing size |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use groupsearch_core::query::ranked_query;
use groupsearch_core::{chunk, search_groups, ChunkSequence, NewGroup, SearchConfig, SearchTerm};
use groupsearch_store::SqliteGroupStore;
use std::hint::black_box;

const TERMS: &[(&str, &str)] = &[
    ("short", "ab"),
    ("medium", "rustaceans"),
    ("long", "the quick brown fox jumps over the lazy dog and keeps running far away"),
];

// ---------------------------------------------------------------------------
// Chunking and query building
// ---------------------------------------------------------------------------

fn chunk_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk");
    for (label, term) in TERMS {
        group.throughput(Throughput::Bytes(term.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), term, |b, term| {
            b.iter(|| chunk(black_box(term), 3))
        });
    }
    group.finish();
}

fn build_bench(c: &mut Criterion) {
    let config = SearchConfig::default();
    let mut group = c.benchmark_group("build");
    for (label, term) in TERMS {
        let term = SearchTerm::parse(*term, config.max_term_len).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(label), &term, |b, term| {
            b.iter(|| {
                let chunks = ChunkSequence::new(black_box(term), config.chunk_width);
                ranked_query(&chunks, &config).unwrap()
            })
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline against SQLite
// ---------------------------------------------------------------------------

fn execute_bench(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = SearchConfig::default();
    let mut group = c.benchmark_group("execute");
    group.sample_size(20);

    for size in [1_000usize, 10_000] {
        let store = SqliteGroupStore::open_in_memory().unwrap();
        let groups: Vec<NewGroup> = (0..size)
            .map(|_| NewGroup::new(CompanyName().fake::<String>()))
            .collect();
        store.insert_many(&groups).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rustaceans", size), &store, |b, store| {
            b.to_async(&rt)
                .iter(|| async { search_groups(store, &config, "rustaceans").await.unwrap() })
        });
    }
    group.finish();
}

criterion_group!(benches, chunk_bench, build_bench, execute_bench);
criterion_main!(benches);
