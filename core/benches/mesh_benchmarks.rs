use criterion::{black_box, criterion_group, criterion_main, Criterion};

use terrella_core::mesh::generators::{cube, icosphere, plane};
use terrella_core::mesh::VertexLayout;

// ---------------------------------------------------------------------------
// Mesh generation
// ---------------------------------------------------------------------------

fn bench_icosphere_shallow(c: &mut Criterion) {
    c.bench_function("icosphere_depth_2", |b| {
        b.iter(|| icosphere(black_box(1.0), black_box(2)));
    });
}

fn bench_icosphere_medium(c: &mut Criterion) {
    c.bench_function("icosphere_depth_4", |b| {
        b.iter(|| icosphere(black_box(1.0), black_box(4)));
    });
}

fn bench_icosphere_deep(c: &mut Criterion) {
    c.bench_function("icosphere_depth_6", |b| {
        b.iter(|| icosphere(black_box(1.0), black_box(6)));
    });
}

fn bench_plane(c: &mut Criterion) {
    c.bench_function("plane_64x64", |b| {
        b.iter(|| plane(black_box(10.0), black_box(64)));
    });
}

fn bench_cube(c: &mut Criterion) {
    c.bench_function("cube", |b| {
        b.iter(|| cube(black_box(0.5)));
    });
}

// ---------------------------------------------------------------------------
// Interleaving
// ---------------------------------------------------------------------------

fn bench_interleave_icosphere(c: &mut Criterion) {
    let mesh = icosphere(1.0, 4);
    let layout = VertexLayout::position_normal_uv();
    c.bench_function("interleave_icosphere_depth_4", |b| {
        b.iter(|| black_box(&mesh).interleave(black_box(&layout)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_icosphere_shallow,
    bench_icosphere_medium,
    bench_icosphere_deep,
    bench_plane,
    bench_cube,
    bench_interleave_icosphere,
);
criterion_main!(benches);
