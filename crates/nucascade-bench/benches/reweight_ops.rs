//! Criterion benchmarks for cascade reweighting.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nucascade_bench::{neutrino_events, reference_weights};
use nucascade_reweight::{reweight_batch, CascadeReweight};

fn bench_event_weight(c: &mut Criterion) {
    let table = reference_weights();
    let events = neutrino_events(256, 6, 42);

    c.bench_function("event_weight_256", |b| {
        b.iter(|| {
            let w: f64 = events.iter().map(|e| table.event_weight(e)).sum();
            black_box(w);
        });
    });
}

fn bench_process_event(c: &mut Criterion) {
    let rw = CascadeReweight::new(reference_weights());
    let events = neutrino_events(64, 6, 3);

    c.bench_function("reweight_process_event", |b| {
        b.iter_batched(
            || events[0].clone(),
            |mut record| black_box(rw.process_event(Some(&mut record))),
            BatchSize::SmallInput,
        );
    });
}

fn bench_batch(c: &mut Criterion) {
    let table = Arc::new(reference_weights());
    let events = neutrino_events(4096, 6, 11);

    let mut group = c.benchmark_group("reweight_batch_4096");
    for workers in [1, 4] {
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter_batched(
                || events.clone(),
                |batch| black_box(reweight_batch(&table, batch, workers)),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_event_weight, bench_process_event, bench_batch);
criterion_main!(benches);
