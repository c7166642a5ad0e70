//! Shape builder.
//!
//! Assembles common shapes out of [`Path`]s and [`Segment`]s and hands them
//! to the stroke or fill tessellator. Circles are approximated by rings of
//! vertices evenly spaced by angle.

use crate::{
    FillTessellator, GeometryConfig, GeometryResult, MeshAccumulator, Path, Segment,
    StrokeTessellator, StrokeVertex,
};
use glam::DVec2;
use std::f64::consts::TAU;
use vectra_core::Color;

/// Convenience front end writing shapes into one [`MeshAccumulator`].
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use vectra_core::Color;
/// use vectra_geometry::{MeshAccumulator, ShapeBuilder};
///
/// let mut mesh = MeshAccumulator::new();
/// let mut shapes = ShapeBuilder::new(&mut mesh);
/// shapes.line(DVec2::ZERO, DVec2::new(10.0, 0.0), Color::WHITE, 2.0)?;
/// shapes.circle_filled(DVec2::new(5.0, 5.0), 3.0, Color::RED)?;
///
/// let mesh = mesh.finish();
/// assert!(mesh.indices_in_bounds());
/// # Ok::<(), vectra_geometry::GeometryError>(())
/// ```
pub struct ShapeBuilder<'a> {
    mesh: &'a mut MeshAccumulator,
    stroke: StrokeTessellator,
    fill: FillTessellator,
    config: GeometryConfig,
}

impl<'a> ShapeBuilder<'a> {
    pub fn new(mesh: &'a mut MeshAccumulator) -> Self {
        Self::with_config(mesh, GeometryConfig::default())
    }

    pub fn with_config(mesh: &'a mut MeshAccumulator, config: GeometryConfig) -> Self {
        Self {
            mesh,
            stroke: StrokeTessellator::with_config(&config),
            fill: FillTessellator::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// The mesh being written.
    pub fn mesh(&self) -> &MeshAccumulator {
        &*self.mesh
    }

    /// Stroke an already built path.
    pub fn path(&mut self, path: &Path) {
        self.stroke.tessellate_path(path, self.mesh);
    }

    /// A single straight stroke.
    pub fn line(&mut self, from: DVec2, to: DVec2, color: Color, width: f64) -> GeometryResult<()> {
        let mut path = Path::new();
        path.add_segment(Segment::line(
            StrokeVertex::new(from, color, width),
            StrokeVertex::new(to, color, width),
        ))
        .inspect_err(|e| tracing::warn!("Rejected line: {}", e))?;
        self.path(&path);
        Ok(())
    }

    /// An open stroke through `points`.
    pub fn polyline(&mut self, points: &[DVec2], color: Color, width: f64) -> GeometryResult<()> {
        let vertices = uniform_vertices(points, color, width);
        self.polygon_outline(&vertices, false)
    }

    /// Stroke through `vertices`, closed back to the first vertex if `closed`.
    ///
    /// Each vertex carries its own color and width.
    pub fn polygon_outline(
        &mut self,
        vertices: &[StrokeVertex],
        closed: bool,
    ) -> GeometryResult<()> {
        let path = Path::from_points(vertices, closed)
            .inspect_err(|e| tracing::warn!("Rejected polygon outline: {}", e))?;
        self.path(&path);
        Ok(())
    }

    /// Fill a convex ring.
    pub fn polygon_filled(&mut self, ring: &[(DVec2, Color)]) -> GeometryResult<()> {
        self.fill
            .fill_convex(self.mesh, ring)
            .inspect_err(|e| tracing::warn!("Rejected filled polygon: {}", e))
    }

    pub fn circle_outline(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Color,
        width: f64,
    ) -> GeometryResult<()> {
        let points = circle_ring(center, radius, self.config.circle_segments);
        self.polygon_outline(&uniform_vertices(&points, color, width), true)
    }

    pub fn circle_filled(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Color,
    ) -> GeometryResult<()> {
        let ring: Vec<_> = circle_ring(center, radius, self.config.circle_segments)
            .into_iter()
            .map(|p| (p, color))
            .collect();
        self.polygon_filled(&ring)
    }

    /// Filled circle with an outline drawn on top.
    pub fn circle_outlined(
        &mut self,
        center: DVec2,
        radius: f64,
        fill: Color,
        stroke: Color,
        width: f64,
    ) -> GeometryResult<()> {
        self.circle_filled(center, radius, fill)?;
        self.circle_outline(center, radius, stroke, width)
    }

    /// Circular arc stroke from `start_angle` to `end_angle` using
    /// [`GeometryConfig::arc_segments`] steps.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        color: Color,
        width: f64,
    ) -> GeometryResult<()> {
        let segments = self.config.arc_segments;
        self.arc_with_segments(
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
            color,
            width,
            segments,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_with_segments(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        color: Color,
        width: f64,
        segments: u32,
    ) -> GeometryResult<()> {
        let v0 = StrokeVertex::new(center + DVec2::from_angle(start_angle) * radius, color, width);
        let v1 = StrokeVertex::new(center + DVec2::from_angle(end_angle) * radius, color, width);

        let mut path = Path::new();
        path.add_segment(Segment::arc(v0, v1, center, clockwise, segments))
            .inspect_err(|e| tracing::warn!("Rejected arc: {}", e))?;
        self.path(&path);
        Ok(())
    }

    /// Outline of the axis-aligned rectangle with corner `min` and `size`.
    pub fn rect_outline(
        &mut self,
        min: DVec2,
        size: DVec2,
        color: Color,
        width: f64,
    ) -> GeometryResult<()> {
        let corners = rect_corners(min, size);
        self.polygon_outline(&uniform_vertices(&corners, color, width), true)
    }

    pub fn rect_outline_centered(
        &mut self,
        center: DVec2,
        size: DVec2,
        color: Color,
        width: f64,
    ) -> GeometryResult<()> {
        self.rect_outline(center - size * 0.5, size, color, width)
    }

    /// Filled axis-aligned rectangle with corner `min` and `size`.
    pub fn rect_filled(&mut self, min: DVec2, size: DVec2, color: Color) -> GeometryResult<()> {
        let ring = rect_corners(min, size).map(|p| (p, color));
        self.polygon_filled(&ring)
    }

    pub fn rect_filled_centered(
        &mut self,
        center: DVec2,
        size: DVec2,
        color: Color,
    ) -> GeometryResult<()> {
        self.rect_filled(center - size * 0.5, size, color)
    }
}

/// `segments` points on the circle, starting at angle zero.
pub fn circle_ring(center: DVec2, radius: f64, segments: u32) -> Vec<DVec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| center + DVec2::from_angle(TAU * i as f64 / segments as f64) * radius)
        .collect()
}

fn rect_corners(min: DVec2, size: DVec2) -> [DVec2; 4] {
    [
        min,
        min + DVec2::new(size.x, 0.0),
        min + size,
        min + DVec2::new(0.0, size.y),
    ]
}

fn uniform_vertices(points: &[DVec2], color: Color, width: f64) -> Vec<StrokeVertex> {
    points
        .iter()
        .map(|&p| StrokeVertex::new(p, color, width))
        .collect()
}
