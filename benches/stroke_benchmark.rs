//! Stroke painting benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixelpad::brush::{stamp_coverage, DragPath};
use pixelpad::canvas::{Color, PixelCoord};
use pixelpad::editor::{EditorConfig, PixelEditController};
use pixelpad::input::PointerSample;

fn benchmark_stamp_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("Brush Stamp");

    for diameter in [1u32, 4, 16, 64].iter() {
        group.bench_with_input(
            BenchmarkId::new("coverage", diameter),
            diameter,
            |b, &diameter| b.iter(|| stamp_coverage(PixelCoord::new(128, 128), diameter)),
        );
    }

    group.finish();
}

fn benchmark_drag_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Drag Interpolation");

    for distance in [10i32, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("walk", distance),
            distance,
            |b, &distance| {
                b.iter(|| {
                    DragPath::new(PixelCoord::new(0, 0), PixelCoord::new(distance, distance / 3))
                        .count()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stroke Painting");

    for brush_size in [1u32, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("sweep", brush_size),
            brush_size,
            |b, &brush_size| {
                b.iter(|| {
                    let mut controller = PixelEditController::new(
                        EditorConfig::new(256, 256).with_brush(brush_size, Color::WHITE),
                    )
                    .expect("valid config");

                    // Zig-zag sweep across the canvas, 16 fast segments
                    controller.pointer_down(PointerSample::new(0.5, 0.5, 256.0, 256.0));
                    for i in 1..=16 {
                        let x = if i % 2 == 0 { 0.5 } else { 255.5 };
                        let y = i as f32 * 15.0;
                        controller.pointer_move(PointerSample::new(x, y, 256.0, 256.0));
                    }
                    controller.pointer_up();
                    controller
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_stamp_coverage,
    benchmark_drag_path,
    benchmark_stroke
);
criterion_main!(benches);
