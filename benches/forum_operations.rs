use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use forum::{Category, FakeStore, Forum, Page};

/// Create a forum with N extra topics on top of the seed data
fn create_forum_with_topics(num_topics: usize) -> Forum {
    let mut forum = Forum::from_store(FakeStore::new(), "You");
    for i in 0..num_topics {
        forum.create_topic(&format!("Topic {}", i), Category::ALL[i % 5], "body");
    }
    forum
}

/// Benchmark prepending a topic
fn bench_create_topic(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_topic");

    for topic_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(topic_count),
            topic_count,
            |b, &n| {
                b.iter_batched(
                    || create_forum_with_topics(n),
                    |mut forum| {
                        forum.create_topic(
                            black_box("Patch notes"),
                            Category::Bugs,
                            black_box("fixed crash"),
                        )
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

/// Benchmark commenting on the oldest topic of a long list
fn bench_add_comment(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_comment");

    for topic_count in [10, 100, 1000].iter() {
        let mut forum = create_forum_with_topics(*topic_count);
        let oldest = forum
            .topics()
            .last()
            .cloned()
            .expect("No topics in forum");
        forum.open_topic(&oldest);

        group.bench_with_input(
            BenchmarkId::from_parameter(topic_count),
            topic_count,
            |b, _| {
                b.iter(|| forum.add_comment(black_box("me too")));
            },
        );
    }
    group.finish();
}

/// Benchmark deriving the statistics panel
fn bench_stats(c: &mut Criterion) {
    let mut forum = create_forum_with_topics(1000);
    forum.navigate(Page::Home);

    c.bench_function("stats", |b| {
        b.iter(|| black_box(forum.stats()));
    });
}

criterion_group!(benches, bench_create_topic, bench_add_comment, bench_stats);

criterion_main!(benches);
