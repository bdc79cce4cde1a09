//! Kilo Benchmarks
//!
//! Benchmarks for building the lexicon trie and answering each query type.
//! The benchmarks are implemented using the Criterion framework, which provides
//! statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use kilo_lib::data_structures::{CompletionEngine, Trie, TrieConfig};
use std::time::Duration;

/// Deterministic pseudo-words over a small alphabet so prefixes are shared.
fn corpus(size: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghij";
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 6) as usize;
            (0..len)
                .map(|i| ALPHABET[((state >> (i * 4)) % 10) as usize] as char)
                .collect()
        })
        .collect()
}

/// Benchmark trie construction
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexicon_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = corpus(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = Trie::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark the query operations against a prebuilt trie
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexicon_trie_queries");
    group.measurement_time(Duration::from_secs(2));

    let trie: Trie = corpus(50_000).into_iter().collect();
    let engine = CompletionEngine::new(&trie);

    group.bench_function("search", |b| b.iter(|| trie.search(black_box("abcde"))));
    group.bench_function("auto_complete", |b| {
        b.iter(|| engine.auto_complete(black_box("ab")))
    });
    group.bench_function("full_auto_complete", |b| {
        b.iter(|| engine.full_auto_complete(black_box("ab"), black_box("j")))
    });
    group.bench_function("reverse_auto_complete_cached", |b| {
        b.iter(|| engine.reverse_auto_complete(black_box("ja")))
    });
    group.bench_function("top_k", |b| b.iter(|| trie.ranker().top_k(black_box(10))));

    let mut uncached = Trie::with_config(TrieConfig {
        cache_mirror: false,
    });
    uncached.extend(corpus(50_000));
    let uncached_engine = CompletionEngine::new(&uncached);
    group.bench_function("reverse_auto_complete_rebuild", |b| {
        b.iter(|| uncached_engine.reverse_auto_complete(black_box("ja")))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_insert, bench_queries
}

criterion_main!(benches);
