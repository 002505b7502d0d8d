//! Benchmarks for contrast scoring and scrim selection.
//!
//! Run with: cargo bench -p brandtone --bench contrast_bench

use brandtone::{Rgb, ScrimSelector, parse_hex, pick_accessible_text, relative_luminance};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_hex");
    for spec in ["#abc", "#1e3a8a", "  #FF00AA ", "not-a-color"] {
        group.bench_with_input(BenchmarkId::from_parameter(spec), spec, |b, spec| {
            b.iter(|| black_box(parse_hex(Some(black_box(spec)))))
        });
    }
    group.finish();
}

fn bench_luminance(c: &mut Criterion) {
    c.bench_function("relative_luminance/gray_ramp", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for v in 0..=255u8 {
                sum += relative_luminance(black_box(Rgb::new(v, v, v)));
            }
            black_box(sum)
        })
    });
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");

    // AA: never scrims, measures the common path.
    group.bench_function("aa/brand_blue", |b| {
        b.iter(|| black_box(pick_accessible_text(Some(black_box("#1e3a8a")))))
    });
    group.bench_function("aa/fallback", |b| {
        b.iter(|| black_box(pick_accessible_text(black_box(None))))
    });

    // Worst case: the whole ladder is walked.
    let strict = ScrimSelector::new(12.0);
    group.bench_function("strict/exhausted_ladder", |b| {
        b.iter(|| black_box(strict.pick(Some(black_box("#808080")))))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_luminance, bench_pick);
criterion_main!(benches);
