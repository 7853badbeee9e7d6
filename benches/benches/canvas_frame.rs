// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use sierpinski_canvas::{CanvasConfig, FractalCanvas, InputEvent, ManualScheduler};
use sierpinski_imaging_ref::RefSurface;

fn canvas() -> FractalCanvas<ManualScheduler> {
    FractalCanvas::new(
        Size::new(1280.0, 800.0),
        CanvasConfig::default(),
        ManualScheduler::default(),
    )
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski_canvas");
    group.sample_size(30);

    group.bench_function("paint_now(zoom=1)", |b| {
        let mut canvas = canvas();
        b.iter_batched(
            || RefSurface::new(1280.0, 800.0),
            |mut surface| {
                let stats = canvas.paint_now(&mut surface);
                black_box((stats, surface))
            },
            BatchSize::SmallInput,
        );
    });

    // A burst of wheel events followed by the single coalesced frame.
    group.bench_function("wheel_burst_then_frame", |b| {
        b.iter_batched(
            || (canvas(), RefSurface::new(1280.0, 800.0)),
            |(mut canvas, mut surface)| {
                for _ in 0..20 {
                    canvas.handle_event(InputEvent::Wheel {
                        delta_y: -1.0,
                        position: Point::new(700.0, 300.0),
                    });
                }
                for handle in canvas.scheduler_mut().take_due() {
                    let _ = canvas.on_frame(handle, Some(&mut surface));
                }
                black_box(surface)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_canvas);
criterion_main!(benches);
