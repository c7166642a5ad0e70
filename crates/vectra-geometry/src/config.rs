/// Tessellation settings shared by the stroke walk and the shape builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Ring vertices used for circles.
    pub circle_segments: u32,
    /// Flattening steps for arcs built without an explicit resolution.
    pub arc_segments: u32,
    /// Slope below which two miter lines count as parallel.
    pub parallel_tolerance: f64,
    /// Emit square caps on the free ends of open line strokes.
    pub caps: bool,
}

impl GeometryConfig {
    pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 0.001;

    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    pub fn with_arc_segments(mut self, segments: u32) -> Self {
        self.arc_segments = segments.max(1);
        self
    }

    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    pub fn with_caps(mut self, caps: bool) -> Self {
        self.caps = caps;
        self
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            circle_segments: 32,
            arc_segments: 16,
            parallel_tolerance: Self::DEFAULT_PARALLEL_TOLERANCE,
            caps: true,
        }
    }
}
