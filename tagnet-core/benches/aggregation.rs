//! Benchmark for aggregation performance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagnet_core::{aggregate, Corpus, Namespaces, Post};

/// Synthetic corpus where labels overlap across posts and roles.
fn synthetic_corpus(posts: usize) -> Corpus {
    Corpus::from_posts((0..posts).map(|i| {
        let post = Post {
            user: format!("user{}", i % 97),
            fav: (i % 13) as u64,
            rt: (i % 7) as u64,
            hashtags: (0..4).map(|j| format!("Tag{}", (i + j * 31) % 211)).collect(),
            mentions: (0..3).map(|j| format!("user{}", (i + j * 17) % 97)).collect(),
            ..Default::default()
        };
        (format!("{:08}", i), post)
    }))
}

fn bench_hashtag_edges(c: &mut Criterion) {
    let corpus = synthetic_corpus(10_000);
    let namespaces = Namespaces::index(&corpus);

    c.bench_function("hashtag_edges_10k_posts", |b| {
        b.iter(|| black_box(aggregate::hashtag_edges(&corpus, &namespaces)))
    });
}

fn bench_build_all(c: &mut Criterion) {
    let corpus = synthetic_corpus(10_000);
    let namespaces = Namespaces::index(&corpus);

    c.bench_function("build_all_10k_posts", |b| {
        b.iter(|| black_box(aggregate::build_all(&corpus, &namespaces)))
    });
}

fn bench_render(c: &mut Criterion) {
    let corpus = synthetic_corpus(10_000);
    let namespaces = Namespaces::index(&corpus);
    let table = aggregate::build(aggregate::Relation::Bipartite, &corpus, &namespaces)
        .expect("synthetic corpus aggregates");

    c.bench_function("render_bipartite_10k_posts", |b| {
        b.iter(|| black_box(table.render()))
    });
}

criterion_group!(benches, bench_hashtag_edges, bench_build_all, bench_render);
criterion_main!(benches);
