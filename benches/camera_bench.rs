//! Per-event costs of the camera pipeline.
#![allow(missing_docs)]

use arcview::camera::{Arcball, CameraController};
use arcview::options::Options;
use arcview::uniforms::NullSink;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Mat4, Vec2, Vec3};

fn arcball_drag_benchmark(c: &mut Criterion) {
    let mut ball = Arcball::new(Vec3::ZERO, 1.0, Mat4::IDENTITY);
    ball.begin_drag(Vec2::ZERO);

    c.bench_function("arcball_drag", |b| {
        b.iter(|| {
            ball.drag(black_box(Vec2::new(0.4, -0.3)));
            black_box(ball.current_transform())
        });
    });
}

fn view_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_update");

    let Ok(mut controller) =
        CameraController::new(&Options::default(), 1920, 1080, NullSink)
    else {
        return;
    };

    group.bench_function("set_view_transform", |b| {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, 7.0));
        b.iter(|| controller.camera_mut().set_view_transform(black_box(view)));
    });
    group.bench_function("rotate", |b| {
        b.iter(|| controller.rotate(black_box(Vec2::new(0.2, 0.1))));
    });
    group.bench_function("zoom", |b| {
        b.iter(|| controller.zoom(black_box(1.0)));
    });
    group.finish();
}

criterion_group!(benches, arcball_drag_benchmark, view_update_benchmark);
criterion_main!(benches);
