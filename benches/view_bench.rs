use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lazy_views::{
    FilteredKeyMultiMap, Generate, IndexMultiMap, LazyCursor, MultiMap, QueueDrain,
};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_drain(c: &mut Criterion) {
    c.bench_function("queue_drain_10k", |b| {
        b.iter_batched(
            || QueueDrain::from_elements(lcg(1).take(10_000)),
            |drain| {
                let mut sum = 0u64;
                for x in LazyCursor::new(drain) {
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_10k_batch16", |b| {
        b.iter(|| {
            let mut stream = lcg(7);
            let mut emitted = 0u32;
            let cursor = LazyCursor::new(Generate::new(move |sink| {
                if emitted < 10_000 {
                    for _ in 0..16 {
                        sink.emit(stream.next().unwrap_or_default());
                    }
                    emitted += 16;
                }
            }));
            let mut sum = 0u64;
            for x in cursor {
                sum = sum.wrapping_add(x);
            }
            black_box(sum)
        })
    });
}

fn filled_map() -> IndexMultiMap<u64, u64> {
    let mut m = IndexMultiMap::new();
    for (i, x) in lcg(11).take(10_000).enumerate() {
        m.insert(x % 4096, i as u64).unwrap();
    }
    m
}

fn bench_filtered_get(c: &mut Criterion) {
    c.bench_function("filtered_get", |b| {
        let view = FilteredKeyMultiMap::new(filled_map(), |k: &u64| k % 2 == 0);
        let mut keys = lcg(13);
        b.iter(|| {
            let k = keys.next().unwrap_or_default() % 4096;
            black_box(view.get(&k).len())
        })
    });
}

fn bench_filtered_insert(c: &mut Criterion) {
    c.bench_function("filtered_insert_10k", |b| {
        b.iter_batched(
            || FilteredKeyMultiMap::new(IndexMultiMap::<u64, u64>::new(), |k: &u64| k % 2 == 0),
            |mut view| {
                for (i, x) in lcg(17).take(10_000).enumerate() {
                    let _ = view.insert(x % 4096, i as u64);
                }
                black_box(view.len())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_drain, bench_generate, bench_filtered_get, bench_filtered_insert
}
criterion_main!(benches);
