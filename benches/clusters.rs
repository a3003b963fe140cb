//! Criterion benchmark evaluating `out_clusters` over a fully mixed
//! temporal network under the `limited_waiting_time` policy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dagtime::clusters::out_clusters;
use dagtime::generators::fully_mixed_temporal_network;
use dagtime::policies::LimitedWaitingTime;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_out_clusters(c: &mut Criterion) {
    c.bench_function("out_clusters_100", |b| {
        let mut rng = SmallRng::seed_from_u64(1729);
        let net = fully_mixed_temporal_network::<u32, i64>(100, 0.05, 1000, &mut rng);
        let policy = LimitedWaitingTime::new(50i64);
        b.iter(|| {
            let clusters = out_clusters(black_box(&net), policy);
            black_box(clusters.len())
        });
    });
}

criterion_group!(benches, bench_out_clusters);
criterion_main!(benches);
