// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bookfold-document crate. Covers the two halves
// of a generation: drawing the word onto the sample grid and extracting folds
// from the resulting bitmap.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bookfold_core::config::RasterConfig;
use bookfold_core::extract::extract_plan;
use bookfold_core::types::{FoldMethod, PageGeometry};
use bookfold_document::Rasterizer;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Rasterize a typical word across a 300-page book.
fn bench_rasterize(c: &mut Criterion) {
    let rasterizer = Rasterizer::embedded(RasterConfig::default()).expect("bundled font");

    c.bench_function("rasterize \"Love\" (300 pages)", |b| {
        b.iter(|| {
            let bitmap = rasterizer.rasterize(black_box("Love"), 300).expect("rasterize");
            black_box(bitmap);
        });
    });
}

/// Extract single- and multi-band plans from the same pre-rendered bitmap.
fn bench_extract(c: &mut Criterion) {
    let rasterizer = Rasterizer::embedded(RasterConfig::default()).expect("bundled font");
    let bitmap = rasterizer.rasterize("Love", 300).expect("rasterize");
    let geometry = PageGeometry::new(210.0, 140.0, 300).expect("geometry");

    c.bench_function("extract single-band (300 pages)", |b| {
        b.iter(|| black_box(extract_plan(black_box(&bitmap), FoldMethod::SingleBand, geometry).expect("plan")));
    });
    c.bench_function("extract multi-band (300 pages)", |b| {
        b.iter(|| black_box(extract_plan(black_box(&bitmap), FoldMethod::MultiBand, geometry).expect("plan")));
    });
}

criterion_group!(benches, bench_rasterize, bench_extract);
criterion_main!(benches);
