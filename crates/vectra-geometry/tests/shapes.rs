//! Shape builder tests against a recording renderer.

use glam::DVec2;
use std::f64::consts::PI;
use vectra_core::Color;
use vectra_geometry::{GeometryConfig, GeometryError, MeshAccumulator, ShapeBuilder, submit};
use vectra_test_utils::{RecordingRenderer, assert_mesh_valid, mesh_area};

#[test]
fn test_scene_submits_one_draw() {
    let mut mesh = MeshAccumulator::new();
    let mut shapes = ShapeBuilder::new(&mut mesh);
    shapes
        .rect_filled(DVec2::ZERO, DVec2::new(10.0, 10.0), Color::BLUE)
        .unwrap();
    shapes
        .circle_outline(DVec2::new(20.0, 0.0), 5.0, Color::WHITE, 1.0)
        .unwrap();
    shapes
        .arc(DVec2::ZERO, 30.0, 0.0, PI, false, Color::RED, 2.0)
        .unwrap();

    let mut renderer = RecordingRenderer::new();
    let mesh = submit(mesh, &mut renderer);

    assert_eq!(renderer.draw_count(), 1);
    assert_mesh_valid(&mesh);
    // 4 fill corners, 32 circle cross-sections, 17 arc cross-sections.
    assert_eq!(mesh.vertex_count(), 4 + 2 * 32 + 2 * 17);
    assert_eq!(renderer.total_triangles(), 2 + 2 * 32 + 2 * 16);
}

#[test]
fn test_filled_circle_area_approaches_disc() {
    let config = GeometryConfig::default().with_circle_segments(256);
    let mut mesh = MeshAccumulator::new();
    let mut shapes = ShapeBuilder::with_config(&mut mesh, config);
    assert_eq!(shapes.config().circle_segments, 256);
    shapes
        .circle_filled(DVec2::new(3.0, -2.0), 10.0, Color::GREEN)
        .unwrap();
    let mesh = mesh.finish();

    assert_eq!(mesh.triangle_count(), 254);
    let disc = (PI * 100.0) as f32;
    assert!((mesh_area(&mesh) - disc).abs() / disc < 1e-3);
}

#[test]
fn test_rect_outline_band_area() {
    let mut mesh = MeshAccumulator::new();
    ShapeBuilder::new(&mut mesh)
        .rect_outline_centered(DVec2::ZERO, DVec2::new(20.0, 10.0), Color::WHITE, 1.0)
        .unwrap();
    let mesh = mesh.finish();

    // Full-width offsets put the band between a 22x12 and an 18x8 rectangle.
    let expected = 22.0 * 12.0 - 18.0 * 8.0;
    assert!((mesh_area(&mesh) - expected).abs() < 1e-3);
}

#[test]
fn test_shape_errors_leave_mesh_untouched() {
    let mut mesh = MeshAccumulator::new();
    let mut shapes = ShapeBuilder::new(&mut mesh);

    assert!(matches!(
        shapes.polyline(&[DVec2::ZERO], Color::WHITE, 1.0),
        Err(GeometryError::TooFewVertices { required: 2, found: 1 })
    ));
    assert!(matches!(
        shapes.polygon_filled(&[(DVec2::ZERO, Color::WHITE), (DVec2::ONE, Color::WHITE)]),
        Err(GeometryError::TooFewVertices { required: 3, found: 2 })
    ));
    assert!(matches!(
        shapes.arc(DVec2::ZERO, 0.0, 0.0, PI, false, Color::WHITE, 1.0),
        Err(GeometryError::DegenerateSegment { .. })
    ));
    assert!(shapes.mesh().is_empty());
}

#[test]
fn test_fill_then_outline_draw_order() {
    let config = GeometryConfig::default().with_circle_segments(12);
    let mut mesh = MeshAccumulator::new();
    ShapeBuilder::with_config(&mut mesh, config)
        .circle_outlined(DVec2::ZERO, 4.0, Color::BLUE, Color::BLACK, 0.5)
        .unwrap();
    let mesh = mesh.finish();

    let fill_indices = 3 * 10;
    assert!(mesh.indices[..fill_indices].iter().all(|&i| i < 12));
    assert!(mesh.indices[fill_indices..].iter().all(|&i| i >= 12));
    assert_eq!(mesh.vertices[12].color, Color::BLACK.to_array());
}
