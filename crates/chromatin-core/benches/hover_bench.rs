//! Benchmark: hover polygon construction and pointer-move hit testing.
//!
//! Run with: `cargo bench -p chromatin-core --bench hover_bench`
//!
//! Pointer-move events arrive at display rate while a flyout is open, so the
//! per-move cost of `HoverIntent::process` bounds input latency.

use std::hint::black_box;
use std::time::Instant;

use chromatin_core::{
    DEFAULT_SETTLE_DELAY, Element, HoverIntent, IntentConfig, IntentEvent, Point, Rect,
    compute_hover_polygon,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_polygon");
    let anchor = Rect::new(0.0, 0.0, 120.0, 32.0);
    let beside = Rect::new(180.0, 0.0, 240.0, 400.0);
    let diagonal = Rect::new(180.0, 80.0, 240.0, 400.0);

    group.bench_function("compute/side_by_side", |b| {
        b.iter(|| compute_hover_polygon(black_box(Some(anchor)), black_box(Some(beside))));
    });
    group.bench_function("compute/diagonal", |b| {
        b.iter(|| compute_hover_polygon(black_box(Some(anchor)), black_box(Some(diagonal))));
    });

    let polygon = compute_hover_polygon(Some(anchor), Some(beside));
    group.bench_function("contains", |b| {
        b.iter(|| polygon.contains(black_box(Point::new(150.0, 16.0)), 1920.0));
    });

    group.finish();
}

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_intent");
    let t0 = Instant::now();
    let mut intent = HoverIntent::new(IntentConfig::default());
    intent.process(
        &IntentEvent::Layout(Element::Anchor, Some(Rect::new(0.0, 0.0, 120.0, 32.0))),
        t0,
    );
    intent.process(
        &IntentEvent::Layout(Element::Target, Some(Rect::new(180.0, 0.0, 240.0, 400.0))),
        t0,
    );
    let now = t0 + DEFAULT_SETTLE_DELAY;
    intent.poll(now);

    let path: Vec<IntentEvent> = (0..64)
        .map(|i| IntentEvent::moved(f64::from(i) * 4.0, 16.0 + f64::from(i % 7)))
        .collect();
    group.bench_function("process/move_path", |b| {
        b.iter(|| {
            for event in &path {
                black_box(intent.process(event, now));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_polygon, bench_tracker);
criterion_main!(benches);
