//! Floating point and mesh assertions.

use glam::{DVec2, Vec2};
use vectra_geometry::{ColorVertex, TessellatedMesh};

/// Default tolerance for `f64` geometry comparisons.
pub const EPSILON: f64 = 1e-9;

/// Assert two points are within `tolerance` of each other.
#[track_caller]
pub fn assert_point_near(actual: DVec2, expected: DVec2, tolerance: f64) {
    let distance = actual.distance(expected);
    assert!(
        distance <= tolerance,
        "expected {expected:?}, got {actual:?} (off by {distance})"
    );
}

/// Position of vertex `index` as a vector.
pub fn vertex_position(mesh: &TessellatedMesh<ColorVertex>, index: u32) -> Vec2 {
    Vec2::from_array(mesh.vertices[index as usize].position)
}

/// Signed area of a triangle, positive for counter-clockwise winding.
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a) * 0.5
}

/// Unsigned areas of every triangle in the mesh.
pub fn triangle_areas(mesh: &TessellatedMesh<ColorVertex>) -> Vec<f32> {
    mesh.triangles()
        .map(|[a, b, c]| {
            signed_area(
                vertex_position(mesh, a),
                vertex_position(mesh, b),
                vertex_position(mesh, c),
            )
            .abs()
        })
        .collect()
}

/// Sum of all triangle areas.
pub fn mesh_area(mesh: &TessellatedMesh<ColorVertex>) -> f32 {
    triangle_areas(mesh).iter().sum()
}

/// Assert the mesh is self-consistent: whole triangles, every index in range.
#[track_caller]
pub fn assert_mesh_valid(mesh: &TessellatedMesh<ColorVertex>) {
    assert_eq!(mesh.index_count() % 3, 0, "index list is not whole triangles");
    assert!(mesh.indices_in_bounds(), "index out of bounds");
}
