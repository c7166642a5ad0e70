//! Benchmarks for stroke and fill tessellation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec2;
use vectra_core::Color;
use vectra_geometry::{
    FillTessellator, MeshAccumulator, Path, Segment, ShapeBuilder, StrokeTessellator, StrokeVertex,
    circle_ring,
};

fn zigzag(points: usize) -> Vec<StrokeVertex> {
    (0..points)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { 10.0 };
            StrokeVertex::new(DVec2::new(i as f64 * 5.0, y), Color::WHITE, 2.0)
        })
        .collect()
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_polyline");

    for count in [10, 100, 1000, 10000] {
        let path = Path::from_points(&zigzag(count), false).unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &path, |b, path| {
            let mut tessellator = StrokeTessellator::new();
            let mut mesh = MeshAccumulator::with_capacity(count * 2 + 6, count * 6 + 12);
            b.iter(|| {
                mesh.clear();
                tessellator.tessellate_path(black_box(path), &mut mesh);
                black_box(mesh.index_count())
            });
        });
    }

    group.finish();
}

fn bench_closed_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_closed");

    for sides in [8, 64, 512] {
        let points: Vec<_> = circle_ring(DVec2::ZERO, 100.0, sides)
            .into_iter()
            .map(|p| StrokeVertex::new(p, Color::WHITE, 1.0))
            .collect();
        let path = Path::from_points(&points, true).unwrap();
        group.throughput(Throughput::Elements(sides as u64));

        group.bench_with_input(BenchmarkId::from_parameter(sides), &path, |b, path| {
            let mut tessellator = StrokeTessellator::new();
            b.iter(|| {
                let mut mesh = MeshAccumulator::new();
                tessellator.tessellate_path(black_box(path), &mut mesh);
                black_box(mesh.finish())
            });
        });
    }

    group.finish();
}

fn bench_arc(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_arc");

    for segments in [4u32, 32, 256] {
        let v0 = StrokeVertex::new(DVec2::new(50.0, 0.0), Color::WHITE, 2.0);
        let v1 = StrokeVertex::new(DVec2::new(-50.0, 0.0), Color::WHITE, 2.0);
        let mut path = Path::new();
        path.add_segment(Segment::arc(v0, v1, DVec2::ZERO, false, segments))
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(segments), &path, |b, path| {
            let mut tessellator = StrokeTessellator::new();
            b.iter(|| {
                let mut mesh = MeshAccumulator::new();
                tessellator.tessellate_path(black_box(path), &mut mesh);
                black_box(mesh.vertex_count())
            });
        });
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let ring: Vec<_> = circle_ring(DVec2::ZERO, 100.0, 256)
        .into_iter()
        .map(|p| (p, Color::RED))
        .collect();

    c.bench_function("fill_convex_256", |b| {
        let fill = FillTessellator::new();
        b.iter(|| {
            let mut mesh = MeshAccumulator::new();
            fill.fill_convex(&mut mesh, black_box(&ring)).unwrap();
            black_box(mesh.index_count())
        });
    });
}

fn bench_shape_scene(c: &mut Criterion) {
    c.bench_function("shape_scene_100_circles", |b| {
        b.iter(|| {
            let mut mesh = MeshAccumulator::new();
            let mut shapes = ShapeBuilder::new(&mut mesh);
            for i in 0..100 {
                let center = DVec2::new((i % 10) as f64 * 30.0, (i / 10) as f64 * 30.0);
                shapes
                    .circle_outlined(center, 12.0, Color::BLUE, Color::WHITE, 1.0)
                    .unwrap();
            }
            black_box(mesh.finish())
        });
    });
}

criterion_group!(
    benches,
    bench_polyline,
    bench_closed_polygon,
    bench_arc,
    bench_fill,
    bench_shape_scene
);
criterion_main!(benches);
