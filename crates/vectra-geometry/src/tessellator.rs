//! Stroke tessellation.
//!
//! Walks a [`Path`] segment by segment and emits one cross-section (a pair of
//! right/left edge vertices) per corner, cap and arc step. Consecutive
//! cross-sections are connected by a quad made of two triangles.

use crate::{GeometryConfig, MeshAccumulator, Path, RawJoin, SegmentId};
use glam::DVec2;
use vectra_core::Color;
use vectra_core::math::perp_left;
use vectra_core::profiling::profile_function;

/// Mesh indices of an emitted cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossSection {
    pub right: u32,
    pub left: u32,
}

/// World-space edge points of a cross-section before it is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePoints {
    pub right: DVec2,
    pub left: DVec2,
}

impl EdgePoints {
    /// Edge points of `join` placed at `point`.
    pub fn from_join(point: DVec2, join: &RawJoin) -> Self {
        Self {
            right: point + join.side_r,
            left: point + join.side_l,
        }
    }

    pub fn from_offsets(point: DVec2, side_r: DVec2, side_l: DVec2) -> Self {
        Self {
            right: point + side_r,
            left: point + side_l,
        }
    }
}

/// Miter/cap stroke walker.
///
/// `first` and `last` track the first and most recent cross-section of the
/// sub-path being walked. Both are `None` outside a walk.
#[derive(Debug, Clone)]
pub struct StrokeTessellator {
    first: Option<CrossSection>,
    last: Option<CrossSection>,
    /// Slope below which two miter lines are treated as parallel
    pub parallel_tolerance: f64,
    /// Emit square caps on free line ends
    pub caps: bool,
}

impl Default for StrokeTessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeTessellator {
    pub fn new() -> Self {
        Self::with_config(&GeometryConfig::default())
    }

    pub fn with_config(config: &GeometryConfig) -> Self {
        Self {
            first: None,
            last: None,
            parallel_tolerance: config.parallel_tolerance,
            caps: config.caps,
        }
    }

    /// Reset the walk state before a path.
    pub fn begin_path(&mut self) {
        self.first = None;
        self.last = None;
    }

    /// Reset the walk state after a path.
    pub fn end_path(&mut self) {
        self.first = None;
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Stroke `path` into `mesh`.
    pub fn tessellate_path(&mut self, path: &Path, mesh: &mut MeshAccumulator) {
        profile_function!();

        if path.is_empty() {
            tracing::trace!("Skipping empty path");
            return;
        }

        let vertices_before = mesh.vertex_count();
        let indices_before = mesh.index_count();

        self.begin_path();
        for id in path.ids() {
            path.segment(id).tessellate_with(path, id, self, mesh);
        }
        self.end_path();

        tracing::debug!(
            segments = path.len(),
            closed = path.is_closed(),
            vertices = mesh.vertex_count() - vertices_before,
            triangles = (mesh.index_count() - indices_before) / 3,
            "Tessellated stroke"
        );
    }

    /// Stroke several paths into the same mesh, one after the other.
    pub fn tessellate_paths<'p, I>(&mut self, paths: I, mesh: &mut MeshAccumulator)
    where
        I: IntoIterator<Item = &'p Path>,
    {
        for path in paths {
            self.tessellate_path(path, mesh);
        }
    }

    pub(crate) fn tessellate_line(
        &mut self,
        path: &Path,
        id: SegmentId,
        mesh: &mut MeshAccumulator,
    ) {
        self.advance_to_segment_in(path, id, mesh);
        self.advance_to_segment_out(path, id, mesh);
    }

    pub(crate) fn tessellate_arc(
        &mut self,
        path: &Path,
        id: SegmentId,
        mesh: &mut MeshAccumulator,
    ) {
        self.advance_to_segment_in(path, id, mesh);
        for point in path.segment(id).interior_points() {
            let edges = EdgePoints::from_offsets(point.vertex.position, point.side_r, point.side_l);
            self.advance(mesh, edges, point.vertex.color);
        }
        self.advance_to_segment_out(path, id, mesh);
    }

    /// Start the cross-section at the beginning of a segment.
    fn advance_to_segment_in(&mut self, path: &Path, id: SegmentId, mesh: &mut MeshAccumulator) {
        let segment = path.segment(id);
        let at = segment.v0();

        match segment.before() {
            None => {
                let join = segment.raw_join_in();
                let start = EdgePoints::from_join(at.position, &join);
                if self.caps && segment.cap() {
                    self.begin(mesh, square_cap(at.position, &join, -1.0), at.color);
                    self.advance(mesh, start, at.color);
                } else {
                    self.begin(mesh, start, at.color);
                }
            }
            Some(previous) => {
                let previous = path.segment(previous);
                // Otherwise the previous segment's out step already emitted
                // this corner.
                if previous.is_closing() || !self.is_active() {
                    let edges = miter_join(
                        previous.v1().position,
                        &previous.raw_join_out(),
                        at.position,
                        &segment.raw_join_in(),
                        self.parallel_tolerance,
                    );
                    self.begin(mesh, edges, at.color);
                }
            }
        }
    }

    /// Emit the cross-section at the end of a segment.
    fn advance_to_segment_out(&mut self, path: &Path, id: SegmentId, mesh: &mut MeshAccumulator) {
        let segment = path.segment(id);
        let at = segment.v1();

        match segment.after() {
            None => {
                let join = segment.raw_join_out();
                self.advance(mesh, EdgePoints::from_join(at.position, &join), at.color);
                if self.caps && segment.cap() {
                    self.advance(mesh, square_cap(at.position, &join, 1.0), at.color);
                }
            }
            Some(_) if segment.is_closing() => self.close_loop(mesh),
            Some(next) => {
                let next = path.segment(next);
                let edges = miter_join(
                    at.position,
                    &segment.raw_join_out(),
                    next.v0().position,
                    &next.raw_join_in(),
                    self.parallel_tolerance,
                );
                self.advance(mesh, edges, at.color);
            }
        }
    }

    /// Start a new sub-path at `edges`.
    fn begin(&mut self, mesh: &mut MeshAccumulator, edges: EdgePoints, color: Color) {
        let section = push_cross_section(mesh, edges, color);
        self.first = Some(section);
        self.last = Some(section);
    }

    /// Emit `edges` and connect it to the previous cross-section.
    fn advance(&mut self, mesh: &mut MeshAccumulator, edges: EdgePoints, color: Color) {
        let section = push_cross_section(mesh, edges, color);
        match self.last {
            Some(previous) => emit_quad(mesh, previous, section),
            None => self.first = Some(section),
        }
        self.last = Some(section);
    }

    /// Connect the last cross-section back to the first and end the walk.
    fn close_loop(&mut self, mesh: &mut MeshAccumulator) {
        if let (Some(last), Some(first)) = (self.last, self.first) {
            emit_quad(mesh, last, first);
        }
        self.first = None;
        self.last = None;
    }
}

fn push_cross_section(mesh: &mut MeshAccumulator, edges: EdgePoints, color: Color) -> CrossSection {
    let right = mesh.add_vertices([(edges.right, color), (edges.left, color)]);
    CrossSection {
        right,
        left: right + 1,
    }
}

/// Emit the quad between two cross-sections as the triangles
/// `(a, b, c)` and `(a, c, d)` of the ring `a b c d`.
fn emit_quad(mesh: &mut MeshAccumulator, from: CrossSection, to: CrossSection) {
    let (a, b, c, d) = (from.right, from.left, to.left, to.right);
    mesh.add_indices(&[a, b, c, a, c, d]);
}

/// Corner where the outgoing edges of one segment meet the incoming edges of
/// the next. Right and left sides are intersected independently.
pub fn miter_join(
    out_point: DVec2,
    outgoing: &RawJoin,
    in_point: DVec2,
    incoming: &RawJoin,
    parallel_tolerance: f64,
) -> EdgePoints {
    EdgePoints {
        right: intersect_lines(
            out_point + outgoing.side_r,
            outgoing.along_r,
            in_point + incoming.side_r,
            incoming.along_r,
            parallel_tolerance,
        ),
        left: intersect_lines(
            out_point + outgoing.side_l,
            outgoing.along_l,
            in_point + incoming.side_l,
            incoming.along_l,
            parallel_tolerance,
        ),
    }
}

/// Intersect the line through `origin` along `along` with the line through
/// `other_origin` along `other_along`.
///
/// Solved in a frame anchored at `origin` whose x axis is `along`. Lines
/// whose relative slope is under `parallel_tolerance` resolve to the midpoint
/// of the two origins.
pub fn intersect_lines(
    origin: DVec2,
    along: DVec2,
    other_origin: DVec2,
    other_along: DVec2,
    parallel_tolerance: f64,
) -> DVec2 {
    debug_assert!((along.length() - 1.0).abs() < 1e-6, "along must be unit length");
    debug_assert!(
        (other_along.length() - 1.0).abs() < 1e-6,
        "along must be unit length"
    );

    let y_axis = perp_left(along);
    let offset = other_origin - origin;
    let local_origin = DVec2::new(offset.dot(along), offset.dot(y_axis));
    let local_along = DVec2::new(other_along.dot(along), other_along.dot(y_axis));

    let near_parallel = local_along.y == 0.0
        || (local_along.y.abs() < local_along.x.abs()
            && (local_along.y / local_along.x).abs() < parallel_tolerance);
    if near_parallel {
        tracing::trace!(?origin, ?other_origin, "Near-parallel miter, using midpoint");
        return (origin + other_origin) * 0.5;
    }

    let t = -local_origin.y / local_along.y;
    let x = local_origin.x + t * local_along.x;
    origin + along * x
}

/// Push both edge points of `join` along their directions by half the stroke
/// separation. `multiplier` is `-1.0` for a leading cap and `1.0` for a
/// trailing one.
pub fn square_cap(point: DVec2, join: &RawJoin, multiplier: f64) -> EdgePoints {
    let extension = join.separation() * 0.5 * multiplier;
    EdgePoints {
        right: point + join.side_r + join.along_r * extension,
        left: point + join.side_l + join.along_l * extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Segment, StrokeVertex};

    fn vertex(x: f64, y: f64) -> StrokeVertex {
        StrokeVertex::new(DVec2::new(x, y), Color::WHITE, 2.0)
    }

    fn close(a: DVec2, b: DVec2) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_right_angle_miter() {
        let a = Segment::line(vertex(0.0, 0.0), vertex(10.0, 0.0));
        let b = Segment::line(vertex(10.0, 0.0), vertex(10.0, 10.0));
        let corner = DVec2::new(10.0, 0.0);
        let edges = miter_join(corner, &a.raw_join_out(), corner, &b.raw_join_in(), 0.001);

        // Left turn: the right edge sits outside the corner.
        assert!(close(edges.right, DVec2::new(12.0, -2.0)));
        assert!(close(edges.left, DVec2::new(8.0, 2.0)));
    }

    #[test]
    fn test_collinear_miter_has_no_kink() {
        let a = Segment::line(vertex(0.0, 0.0), vertex(5.0, 0.0));
        let b = Segment::line(vertex(5.0, 0.0), vertex(10.0, 0.0));
        let corner = DVec2::new(5.0, 0.0);
        let join = a.raw_join_out();
        let edges = miter_join(corner, &join, corner, &b.raw_join_in(), 0.001);

        assert!(close(edges.right, corner + join.side_r));
        assert!(close(edges.left, corner + join.side_l));
    }

    #[test]
    fn test_near_parallel_falls_back_to_midpoint() {
        let angle = 0.0005f64;
        assert!(angle < 0.001f64.atan());

        let first = RawJoin::symmetric(DVec2::new(0.0, -1.0), DVec2::X);
        let second = RawJoin::symmetric(
            DVec2::new(0.0, -1.2),
            DVec2::new(angle.cos(), angle.sin()),
        );
        let a = DVec2::ZERO;
        let b = DVec2::new(0.5, 0.0);
        let edges = miter_join(a, &first, b, &second, 0.001);

        let expected_right = ((a + first.side_r) + (b + second.side_r)) * 0.5;
        let expected_left = ((a + first.side_l) + (b + second.side_l)) * 0.5;
        assert!(close(edges.right, expected_right));
        assert!(close(edges.left, expected_left));
    }

    #[test]
    fn test_intersection_above_tolerance() {
        let angle = 0.01f64;
        let hit = intersect_lines(
            DVec2::ZERO,
            DVec2::X,
            DVec2::new(1.0, 1.0),
            DVec2::new(angle.cos(), angle.sin()),
            0.001,
        );
        assert!(hit.y.abs() < 1e-9);
        assert!((hit.x - (1.0 - 1.0 / angle.tan())).abs() < 1e-6);
    }

    #[test]
    fn test_square_cap_extends_by_half_separation() {
        let join = RawJoin::symmetric(DVec2::new(0.0, -2.0), DVec2::X);
        let lead = square_cap(DVec2::ZERO, &join, -1.0);
        let tail = square_cap(DVec2::ZERO, &join, 1.0);

        assert!(close(lead.right, DVec2::new(-2.0, -2.0)));
        assert!(close(lead.left, DVec2::new(-2.0, 2.0)));
        assert!(close(tail.right, DVec2::new(2.0, -2.0)));
    }

    #[test]
    fn test_single_line_counts() {
        let mut path = Path::new();
        path.add_segment(Segment::line(vertex(0.0, 0.0), vertex(10.0, 0.0)))
            .unwrap();

        let mut mesh = MeshAccumulator::new();
        let mut tessellator = StrokeTessellator::new();
        tessellator.tessellate_path(&path, &mut mesh);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.index_count(), 18);
        assert!(!tessellator.is_active());
    }

    #[test]
    fn test_caps_disabled() {
        let mut path = Path::new();
        path.add_segment(Segment::line(vertex(0.0, 0.0), vertex(10.0, 0.0)))
            .unwrap();

        let mut mesh = MeshAccumulator::new();
        let config = GeometryConfig::default().with_caps(false);
        let mut tessellator = StrokeTessellator::with_config(&config);
        tessellator.tessellate_path(&path, &mut mesh);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_quad_triangles_tile_the_quad() {
        let mut path = Path::new();
        path.add_segment(Segment::line(vertex(0.0, 0.0), vertex(10.0, 0.0)))
            .unwrap();

        let mut mesh = MeshAccumulator::new();
        StrokeTessellator::with_config(&GeometryConfig::default().with_caps(false))
            .tessellate_path(&path, &mut mesh);

        let mesh = mesh.finish();
        let area: f32 = mesh
            .triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (
                    mesh.vertices[a as usize].position,
                    mesh.vertices[b as usize].position,
                    mesh.vertices[c as usize].position,
                );
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() * 0.5
            })
            .sum();
        // 10 long, edges at +-2.
        assert!((area - 40.0).abs() < 1e-4);
    }
}
