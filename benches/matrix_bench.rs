//! Criterion benchmarks for the per-frame matrix builders and ray picking.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use orbitcam::camera::{
    calculate_mouse_ray, Camera, Normalization, OrbitInput, Projection,
    Viewport,
};
use orbitcam::transform::transformation_matrix;
use orbitcam::util::scalar::inv_sqrt;

fn orbiting_camera() -> Camera {
    let mut camera = Camera::default();
    let input = OrbitInput {
        up: true,
        right: true,
        ..OrbitInput::default()
    };
    for _ in 0..10 {
        camera.update(Vec3::ZERO, 0, input);
    }
    camera
}

fn matrix_benchmark(c: &mut Criterion) {
    let camera = orbiting_camera();
    let projection = Projection::default();
    let viewport = Viewport::new(1920, 1080);

    let _ = c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(black_box(&camera).view_matrix()));
    });

    let _ = c.bench_function("projection_matrix", |b| {
        b.iter(|| black_box(projection.matrix(black_box(viewport))));
    });

    let _ = c.bench_function("transformation_matrix", |b| {
        b.iter(|| {
            black_box(transformation_matrix(
                black_box(Vec3::new(1.0, 2.0, 3.0)),
                black_box(Vec3::new(10.0, 20.0, 30.0)),
                black_box(1.5),
            ))
        });
    });
}

fn mouse_ray_benchmark(c: &mut Criterion) {
    let camera = orbiting_camera();
    let projection = Projection::default();
    let viewport = Viewport::new(1920, 1080);

    let mut group = c.benchmark_group("mouse_ray");
    for normalization in [Normalization::Fast, Normalization::Precise] {
        let _ = group.bench_function(format!("{normalization:?}"), |b| {
            b.iter(|| {
                black_box(calculate_mouse_ray(
                    &camera,
                    &projection,
                    viewport,
                    black_box(Vec2::new(400.0, 700.0)),
                    normalization,
                ))
            });
        });
    }
    group.finish();
}

fn inv_sqrt_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("inv_sqrt", |b| {
        b.iter(|| black_box(inv_sqrt(black_box(42.0))));
    });
}

criterion_group!(
    benches,
    matrix_benchmark,
    mouse_ray_benchmark,
    inv_sqrt_benchmark
);
criterion_main!(benches);
