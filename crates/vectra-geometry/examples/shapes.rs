//! Shapes Example - Building a scene with vectra-geometry
//!
//! This example demonstrates:
//! - Filled and outlined rectangles and circles
//! - Polylines, closed polygons and arcs
//! - Handing the finished mesh to a renderer
//!
//! Run with `RUST_LOG=vectra_geometry=debug` to see per-path statistics.

use glam::DVec2;
use std::f64::consts::PI;
use vectra_core::Color;
use vectra_core::logging;
use vectra_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use vectra_geometry::{
    GeometryConfig, GeometryResult, MeshAccumulator, ShapeBuilder, StrokeVertex, submit,
};
use vectra_test_utils::RecordingRenderer;

fn build_scene(shapes: &mut ShapeBuilder<'_>) -> GeometryResult<()> {
    let orange = Color::from_hex(0xff8800);

    shapes.rect_filled(DVec2::new(20.0, 20.0), DVec2::new(200.0, 120.0), Color::BLUE)?;
    shapes.rect_outline(DVec2::new(20.0, 20.0), DVec2::new(200.0, 120.0), Color::WHITE, 2.0)?;

    shapes.circle_outlined(DVec2::new(400.0, 80.0), 60.0, Color::RED, Color::WHITE, 1.5)?;
    shapes.circle_outline(DVec2::new(560.0, 80.0), 40.0, orange, 3.0)?;

    shapes.polyline(
        &[
            DVec2::new(20.0, 300.0),
            DVec2::new(120.0, 220.0),
            DVec2::new(220.0, 300.0),
            DVec2::new(320.0, 220.0),
        ],
        Color::GREEN,
        4.0,
    )?;

    // Width and color vary per vertex.
    let star: Vec<_> = (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { 70.0 } else { 30.0 };
            let angle = PI * i as f64 / 5.0 - PI / 2.0;
            let t = i as f32 / 9.0;
            StrokeVertex::new(
                DVec2::new(520.0, 280.0) + DVec2::from_angle(angle) * radius,
                Color::RED.lerp(Color::BLUE, t),
                1.0 + i as f64 * 0.3,
            )
        })
        .collect();
    shapes.polygon_outline(&star, true)?;

    shapes.arc(DVec2::new(300.0, 480.0), 80.0, 0.0, PI, false, orange, 6.0)?;
    shapes.arc(DVec2::new(300.0, 480.0), 50.0, PI, 0.0, true, Color::WHITE, 4.0)?;
    Ok(())
}

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::InProcess);
    new_frame();

    let config = GeometryConfig::default()
        .with_circle_segments(48)
        .with_arc_segments(24);

    let mut mesh = MeshAccumulator::new();
    let mut shapes = ShapeBuilder::with_config(&mut mesh, config);
    if let Err(e) = build_scene(&mut shapes) {
        tracing::error!("Failed to build scene: {}", e);
        return;
    }

    let mut renderer = RecordingRenderer::new();
    let mesh = submit(mesh, &mut renderer);

    tracing::info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        vertex_bytes = mesh.vertex_bytes().len(),
        index_bytes = mesh.index_bytes().len(),
        draws = renderer.draw_count(),
        "Scene tessellated"
    );
}
