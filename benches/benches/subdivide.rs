// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use sierpinski_subdivide::{AdaptiveSubdivider, SubdivisionConfig, Triangle, fixed_depth};
use sierpinski_view2d::ViewTransform;

fn view(zoom: f64, offset: Vec2) -> ViewTransform {
    let mut view = ViewTransform::new(Rect::new(0.0, 0.0, 1280.0, 800.0));
    view.set_zoom(zoom);
    view.set_offset(offset);
    view
}

fn bench_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski_subdivide/adaptive");
    group.sample_size(50);

    let root = Triangle::centered_at(Point::ORIGIN, 600.0);
    // Zoom levels from the whole fractal down to the deep end, each anchored
    // near the apex so the visible region stays populated.
    for &zoom in &[1.0_f64, 10.0, 1_000.0, 100_000.0, 220_000.0] {
        let apex_offset = Vec2::new(0.0, root.height() / 2.0 * zoom);
        let view = view(zoom, apex_offset);
        let mut subdivider = AdaptiveSubdivider::new(SubdivisionConfig::default());

        group.bench_function(format!("walk(zoom={zoom})"), |b| {
            b.iter(|| {
                let mut leaves = 0_usize;
                let stats = subdivider.walk(black_box(root), &view, |_| leaves += 1);
                black_box((stats, leaves))
            });
        });
    }

    let view = view(4.0, Vec2::new(-300.0, 120.0));
    let mut subdivider = AdaptiveSubdivider::new(SubdivisionConfig::default());
    group.bench_function("render_collect(zoom=4)", |b| {
        b.iter(|| black_box(subdivider.render(black_box(root), &view)));
    });

    group.finish();
}

fn bench_fixed_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski_subdivide/fixed_depth");
    group.sample_size(30);

    let root = fixed_depth::upright_vertices(600.0);
    for &depth in &[4_u32, 6, 8] {
        group.bench_function(format!("subdivide(depth={depth})"), |b| {
            b.iter(|| black_box(fixed_depth::subdivide(black_box(root), depth)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_adaptive, bench_fixed_depth);
criterion_main!(benches);
