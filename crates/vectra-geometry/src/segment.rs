//! Path segments: straight lines and circular arcs.

use crate::{
    GeometryError, GeometryResult, MeshAccumulator, Path, RawJoin, StrokeTessellator,
    StrokeVertex,
};
use glam::DVec2;
use std::f64::consts::TAU;
use vectra_core::math::perp_right;

/// Distances at or below this are treated as zero when validating segments.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Index of a segment inside its [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    /// Position of the segment in traversal order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Shape of a segment between its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// A straight line.
    Line,
    /// A circular arc around `center`.
    Arc {
        /// Arc center
        center: DVec2,
        /// Travel direction (clockwise if true)
        clockwise: bool,
        /// Number of straight steps used to flatten the arc
        requested_segments: u32,
    },
}

/// One piece of a [`Path`].
///
/// Segments are created standalone and linked by [`Path::add_segment`] or
/// [`Path::close`], which set the neighbour links and the closing flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    kind: SegmentKind,
    v0: StrokeVertex,
    v1: StrokeVertex,
    pub(crate) before: Option<SegmentId>,
    pub(crate) after: Option<SegmentId>,
    pub(crate) closing: bool,
}

impl Segment {
    /// Create a straight segment.
    pub fn line(v0: StrokeVertex, v1: StrokeVertex) -> Self {
        Self::with_kind(SegmentKind::Line, v0, v1)
    }

    /// Create an arc from `v0` to `v1` around `center`.
    ///
    /// `requested_segments` is clamped to at least one step.
    pub fn arc(
        v0: StrokeVertex,
        v1: StrokeVertex,
        center: DVec2,
        clockwise: bool,
        requested_segments: u32,
    ) -> Self {
        Self::with_kind(
            SegmentKind::Arc {
                center,
                clockwise,
                requested_segments: requested_segments.max(1),
            },
            v0,
            v1,
        )
    }

    fn with_kind(kind: SegmentKind, v0: StrokeVertex, v1: StrokeVertex) -> Self {
        Self {
            kind,
            v0,
            v1,
            before: None,
            after: None,
            closing: false,
        }
    }

    /// Line or arc, with the arc parameters.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Start vertex.
    pub fn v0(&self) -> &StrokeVertex {
        &self.v0
    }

    /// End vertex.
    pub fn v1(&self) -> &StrokeVertex {
        &self.v1
    }

    /// Previous segment in the path, if linked.
    pub fn before(&self) -> Option<SegmentId> {
        self.before
    }

    /// Next segment in the path, if linked.
    pub fn after(&self) -> Option<SegmentId> {
        self.after
    }

    /// True for the final segment of a closed path.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Whether a free end of this segment gets a square cap.
    pub fn cap(&self) -> bool {
        matches!(self.kind, SegmentKind::Line)
    }

    /// Check if this segment is an arc.
    pub fn is_arc(&self) -> bool {
        matches!(self.kind, SegmentKind::Arc { .. })
    }

    /// Reject segments without a defined direction at their endpoints.
    pub(crate) fn validate(&self) -> GeometryResult<()> {
        let degenerate = match self.kind {
            SegmentKind::Line => {
                self.v0.position.distance(self.v1.position) <= DEGENERATE_EPSILON
            }
            SegmentKind::Arc { center, .. } => {
                self.v0.position.distance(center) <= DEGENERATE_EPSILON
                    || self.v1.position.distance(center) <= DEGENERATE_EPSILON
            }
        };

        if degenerate {
            return Err(GeometryError::DegenerateSegment {
                from: self.v0.position,
                to: self.v1.position,
            });
        }
        Ok(())
    }

    /// Join geometry at `v0`.
    ///
    /// Lines offset their edges by the full stroke width while arcs use half
    /// of it. Both are kept as-is; strokes made of lines render twice the
    /// declared width of arcs with the same vertices.
    pub fn raw_join_in(&self) -> RawJoin {
        self.raw_join_at(&self.v0)
    }

    /// Join geometry at `v1`.
    pub fn raw_join_out(&self) -> RawJoin {
        self.raw_join_at(&self.v1)
    }

    fn raw_join_at(&self, v: &StrokeVertex) -> RawJoin {
        match self.kind {
            SegmentKind::Line => {
                let along = (self.v1.position - self.v0.position).normalize();
                let side = perp_right(along);
                RawJoin::symmetric(side * v.stroke_width(), along)
            }
            SegmentKind::Arc {
                center, clockwise, ..
            } => {
                let side = radial(v.position, center, clockwise);
                let along = -perp_right(side);
                RawJoin::symmetric(side * v.half_stroke_width, along)
            }
        }
    }

    /// Signed angle travelled by an arc, `None` for lines.
    ///
    /// Coincident start and end angles mean a full turn.
    pub fn sweep_angle(&self) -> Option<f64> {
        match self.kind {
            SegmentKind::Line => None,
            SegmentKind::Arc {
                center, clockwise, ..
            } => {
                let (start, end) =
                    arc_angles(self.v0.position, self.v1.position, center, clockwise);
                Some(end - start)
            }
        }
    }

    /// Centerline length: chord for lines, swept length for arcs.
    pub fn length(&self) -> f64 {
        match self.kind {
            SegmentKind::Line => self.v0.position.distance(self.v1.position),
            SegmentKind::Arc { center, .. } => {
                let radius = (self.v0.position.distance(center)
                    + self.v1.position.distance(center))
                    * 0.5;
                self.sweep_angle().unwrap_or(0.0).abs() * radius
            }
        }
    }

    /// Points strictly between the arc's endpoints, `requested_segments - 1`
    /// of them. Lines yield nothing.
    pub fn interior_points(&self) -> ArcInteriorPoints {
        match self.kind {
            SegmentKind::Line => ArcInteriorPoints::empty(self.v0, self.v1),
            SegmentKind::Arc {
                center,
                clockwise,
                requested_segments,
            } => ArcInteriorPoints::new(self.v0, self.v1, center, clockwise, requested_segments),
        }
    }

    /// Hand this segment to the tessellator's line or arc handling.
    pub fn tessellate_with(
        &self,
        path: &Path,
        id: SegmentId,
        tessellator: &mut StrokeTessellator,
        mesh: &mut MeshAccumulator,
    ) {
        match self.kind {
            SegmentKind::Line => tessellator.tessellate_line(path, id, mesh),
            SegmentKind::Arc { .. } => tessellator.tessellate_arc(path, id, mesh),
        }
    }
}

/// Unit direction from `center` to `point`, flipped for clockwise arcs so it
/// always points to the right of the travel direction.
fn radial(point: DVec2, center: DVec2, clockwise: bool) -> DVec2 {
    let side = (point - center).normalize();
    if clockwise { -side } else { side }
}

fn arc_angles(from: DVec2, to: DVec2, center: DVec2, clockwise: bool) -> (f64, f64) {
    let d0 = from - center;
    let d1 = to - center;
    let start = d0.y.atan2(d0.x);
    let mut end = d1.y.atan2(d1.x);

    if clockwise {
        if end >= start {
            end -= TAU;
        }
    } else if end <= start {
        end += TAU;
    }

    (start, end)
}

/// A flattened point inside an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorPoint {
    pub vertex: StrokeVertex,
    /// Offset from `vertex.position` to the right edge
    pub side_r: DVec2,
    /// Offset from `vertex.position` to the left edge
    pub side_l: DVec2,
}

/// Iterator over the interior points of an arc.
///
/// Every point is recomputed from the interpolated angle and radius, so no
/// error accumulates along the arc.
#[derive(Debug, Clone)]
pub struct ArcInteriorPoints {
    v0: StrokeVertex,
    v1: StrokeVertex,
    center: DVec2,
    clockwise: bool,
    start_angle: f64,
    sweep: f64,
    start_radius: f64,
    end_radius: f64,
    steps: u32,
    next: u32,
}

impl ArcInteriorPoints {
    fn new(
        v0: StrokeVertex,
        v1: StrokeVertex,
        center: DVec2,
        clockwise: bool,
        steps: u32,
    ) -> Self {
        let (start_angle, end_angle) = arc_angles(v0.position, v1.position, center, clockwise);
        Self {
            v0,
            v1,
            center,
            clockwise,
            start_angle,
            sweep: end_angle - start_angle,
            start_radius: v0.position.distance(center),
            end_radius: v1.position.distance(center),
            steps,
            next: 1,
        }
    }

    fn empty(v0: StrokeVertex, v1: StrokeVertex) -> Self {
        Self {
            v0,
            v1,
            center: DVec2::ZERO,
            clockwise: false,
            start_angle: 0.0,
            sweep: 0.0,
            start_radius: 0.0,
            end_radius: 0.0,
            steps: 0,
            next: 1,
        }
    }
}

impl Iterator for ArcInteriorPoints {
    type Item = InteriorPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.steps {
            return None;
        }

        let t = self.next as f64 / self.steps as f64;
        self.next += 1;

        let angle = self.start_angle + self.sweep * t;
        let radius = self.start_radius + (self.end_radius - self.start_radius) * t;
        let position = self.center + DVec2::new(angle.cos(), angle.sin()) * radius;
        let vertex = self.v0.lerp(&self.v1, t).with_position(position);

        let offset = radial(position, self.center, self.clockwise) * vertex.half_stroke_width;
        Some(InteriorPoint {
            vertex,
            side_r: offset,
            side_l: -offset,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcInteriorPoints {}
