//! Benchmark: ramp generation and contrast computation.
//!
//! Run with: `cargo bench -p chromatin-style --bench ramp_bench`
//!
//! Component themes regenerate ramps whenever a base color prop changes, and
//! contrast checks run per text/background pair, so both sit on the render
//! path.

use std::hint::black_box;

use chromatin_core::SilentDiagnostics;
use chromatin_style::{Color, ColorEngine, RampOptions, ThemeMode, contrast_ratio};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_ramp");
    let engine = ColorEngine::with_diagnostics(SilentDiagnostics);

    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let options = RampOptions::default().with_mode(mode);
        group.bench_function(format!("create/{mode:?}"), |b| {
            b.iter(|| engine.create_color_ramp(black_box("#23704a"), &options));
        });
    }

    group.bench_function("hex_map", |b| {
        let ramp = engine
            .create_color_ramp("#23704a", &RampOptions::default())
            .unwrap();
        b.iter(|| black_box(&ramp).to_hex_map());
    });

    group.finish();
}

fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");
    let fg = Color::rgb(0x23, 0x70, 0x4a);
    let bg = Color::rgb(0xf5, 0xf5, 0xf5);

    group.bench_function("typed", |b| {
        b.iter(|| contrast_ratio(black_box(fg), black_box(bg)));
    });

    let engine = ColorEngine::with_diagnostics(SilentDiagnostics);
    group.bench_function("engine_hex", |b| {
        b.iter(|| engine.contrast_ratio(black_box("#23704a"), black_box("#f5f5f5")));
    });

    group.finish();
}

criterion_group!(benches, bench_ramp, bench_contrast);
criterion_main!(benches);
