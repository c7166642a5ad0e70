//! Error types for path construction and tessellation.

use glam::DVec2;
use std::fmt;

/// Errors raised when a path or shape violates a construction precondition.
///
/// These indicate a caller bug. Any mesh data written before the error
/// should be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment was added to, or a close requested on, a closed path.
    PathClosed,

    /// The operation needs at least one segment.
    EmptyPath,

    /// The segment does not start where the previous one ended.
    DisconnectedSegment {
        /// End of the previous segment.
        expected: DVec2,
        /// Start of the rejected segment.
        found: DVec2,
    },

    /// The segment has no usable direction (zero-length line, or an arc
    /// endpoint sitting on its center).
    DegenerateSegment {
        /// Start of the rejected segment.
        from: DVec2,
        /// End of the rejected segment.
        to: DVec2,
    },

    /// A polygon ring is too short.
    TooFewVertices {
        /// Minimum number of vertices.
        required: usize,
        /// Number of vertices supplied.
        found: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::PathClosed => write!(f, "Path is already closed"),
            GeometryError::EmptyPath => write!(f, "Path has no segments"),
            GeometryError::DisconnectedSegment { expected, found } => write!(
                f,
                "Segment starts at ({}, {}) but the path ends at ({}, {})",
                found.x, found.y, expected.x, expected.y
            ),
            GeometryError::DegenerateSegment { from, to } => write!(
                f,
                "Degenerate segment from ({}, {}) to ({}, {})",
                from.x, from.y, to.x, to.y
            ),
            GeometryError::TooFewVertices { required, found } => write!(
                f,
                "Polygon needs at least {} vertices, got {}",
                required, found
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeometryError::TooFewVertices {
            required: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Polygon needs at least 3 vertices, got 2");

        let err = GeometryError::DisconnectedSegment {
            expected: DVec2::new(1.0, 0.0),
            found: DVec2::new(2.0, 0.0),
        };
        assert!(err.to_string().contains("(2, 0)"));
    }
}
