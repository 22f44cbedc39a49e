//! Benchmarks for hmath kernels.
//!
//! Run with: `cargo bench`
//!
//! Each group also times the equivalent glam call as a baseline.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use hmath::{
    Mat4, Vec3, Vec4, inverse, look_at, mat4_mul, mat4_mul_vec4, perspective, rotate_y, simd,
    translate,
};

fn sample_matrix() -> Mat4 {
    translate(rotate_y(Mat4::IDENTITY, 0.6), 1.0, -2.0, 3.0)
}

/// Benchmark matrix-matrix and matrix-vector products.
fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    let a = sample_matrix();
    let b = perspective(1.0, 1.5, 0.1, 100.0);
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function("mat4_mul", |bch| bch.iter(|| mat4_mul(black_box(a), black_box(b))));
    group.bench_function("mat4_mul_vec4", |bch| {
        bch.iter(|| mat4_mul_vec4(black_box(a), black_box(v)))
    });

    let (ga, gb) = (a.to_glam(), b.to_glam());
    group.bench_function("glam_mat4_mul", |bch| bch.iter(|| black_box(ga) * black_box(gb)));

    group.finish();
}

/// Benchmark adjugate inversion.
fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    let m = mat4_mul(perspective(1.0, 1.5, 0.1, 100.0), sample_matrix());
    group.bench_function("inverse", |b| b.iter(|| inverse(black_box(m))));
    group.bench_function("determinant", |b| b.iter(|| black_box(m).determinant()));

    let g = m.to_glam();
    group.bench_function("glam_inverse", |b| b.iter(|| black_box(g).inverse()));

    group.finish();
}

/// Benchmark camera construction.
fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera");

    let eye = Vec3::new(3.0, 2.0, 5.0);
    group.bench_function("look_at", |b| {
        b.iter(|| look_at(black_box(eye), black_box(Vec3::ZERO), black_box(Vec3::Y)))
    });
    group.bench_function("perspective", |b| {
        b.iter(|| perspective(black_box(1.0), black_box(1.5), black_box(0.1), black_box(100.0)))
    });

    group.finish();
}

/// Benchmark vertex-buffer style batch transforms.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let m = sample_matrix();

    for size in [1000, 10000, 100000].iter() {
        let points: Vec<Vec4> = (0..*size)
            .map(|i| {
                let t = i as f32 / *size as f32;
                Vec4::new(t, 1.0 - t, t * 0.5, 1.0)
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("transform_points", size), &points, |b, p| {
            b.iter(|| simd::transform_points(black_box(&m), p))
        });

        group.bench_with_input(BenchmarkId::new("per_point_mul", size), &points, |b, p| {
            b.iter(|| p.iter().map(|&v| m * black_box(v)).collect::<Vec<_>>())
        });

        let g = m.to_glam();
        let gpoints: Vec<glam::Vec4> = points.iter().map(|v| v.to_glam()).collect();
        group.bench_with_input(BenchmarkId::new("glam", size), &gpoints, |b, p| {
            b.iter(|| p.iter().map(|&v| g * black_box(v)).collect::<Vec<_>>())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul, bench_inverse, bench_camera, bench_batch);

criterion_main!(benches);
