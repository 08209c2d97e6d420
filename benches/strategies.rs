// Criterion comparison of the heap and hash-table strategies on a synthetic store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tag_ratio::{tag_averages, top_k_by_ratio, RecordStore, SelectedTagSet, VideoRecord, DEFAULT_TOP_K};

const TAGS: &[&str] = &["music", "musicvideo", "gaming", "news", "comedy", "pop music", "vlog", "sports"];

fn synthetic_store(size: usize) -> RecordStore {
    (0..size)
        .map(|i| {
            let tags = (0..3).map(|j| TAGS[(i + j * 3) % TAGS.len()].to_string()).collect();
            VideoRecord::new(format!("video {i}"), tags, 1_000.0 + i as f64, (i % 997) as f64)
        })
        .collect()
}

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_strategies");
    let selection = SelectedTagSet::from_tags(["music", "gaming"]).expect("non-empty selection");

    for size in [1_000, 10_000] {
        let store = synthetic_store(size);

        group.bench_with_input(BenchmarkId::new("heap", size), &store, |b, store| {
            b.iter(|| top_k_by_ratio(black_box(store), black_box(&selection), DEFAULT_TOP_K))
        });

        group.bench_with_input(BenchmarkId::new("hash_table", size), &store, |b, store| {
            b.iter(|| tag_averages(black_box(store), black_box(&selection)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
