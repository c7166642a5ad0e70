//! Paths: ordered chains of segments.
//!
//! Segments live in an arena owned by the path and refer to their neighbours
//! by [`SegmentId`], so links can never dangle.

use crate::{GeometryError, GeometryResult, Segment, SegmentId, StrokeVertex};

/// Maximum gap between the end of one segment and the start of the next.
pub const CONNECT_EPSILON: f64 = 1e-9;

/// An ordered, optionally closed chain of segments describing one stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    closed: bool,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            closed: false,
        }
    }

    /// Build a polyline through `points`, closing it back to the first point
    /// when `closed` is set.
    pub fn from_points(points: &[StrokeVertex], closed: bool) -> GeometryResult<Self> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                required: 2,
                found: points.len(),
            });
        }

        let mut path = Self::with_capacity(points.len() + usize::from(closed));
        for pair in points.windows(2) {
            path.add_segment(Segment::line(pair[0], pair[1]))?;
        }
        if closed {
            path.close(None)?;
        }
        Ok(path)
    }

    /// Append a segment and link it to the current last segment.
    pub fn add_segment(&mut self, mut segment: Segment) -> GeometryResult<SegmentId> {
        if self.closed {
            return Err(GeometryError::PathClosed);
        }
        segment.validate()?;

        let id = SegmentId(self.segments.len());
        if let Some(last) = self.segments.last_mut() {
            let expected = last.v1().position;
            let found = segment.v0().position;
            if expected.distance(found) > CONNECT_EPSILON {
                return Err(GeometryError::DisconnectedSegment { expected, found });
            }
            last.after = Some(id);
            segment.before = Some(SegmentId(id.0 - 1));
        }

        tracing::trace!(segment = id.0, arc = segment.is_arc(), "Added path segment");
        self.segments.push(segment);
        Ok(id)
    }

    /// Close the path.
    ///
    /// Without an explicit `closing` segment a straight line from the last
    /// vertex back to the first one is synthesized. An explicit segment must
    /// end where the path starts.
    pub fn close(&mut self, closing: Option<Segment>) -> GeometryResult<SegmentId> {
        if self.closed {
            return Err(GeometryError::PathClosed);
        }
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return Err(GeometryError::EmptyPath);
        };
        let start = *first.v0();

        let segment = match closing {
            Some(segment) => {
                let found = segment.v1().position;
                if found.distance(start.position) > CONNECT_EPSILON {
                    return Err(GeometryError::DisconnectedSegment {
                        expected: start.position,
                        found,
                    });
                }
                segment
            }
            None => Segment::line(*last.v1(), start),
        };

        let id = self.add_segment(segment)?;
        let first_id = SegmentId(0);
        self.segments[id.0].after = Some(first_id);
        self.segments[id.0].closing = true;
        self.segments[first_id.0].before = Some(id);
        self.closed = true;

        tracing::trace!(segments = self.segments.len(), "Closed path");
        Ok(id)
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if the path has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of segments, including a closing one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment ids in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + use<> {
        (0..self.segments.len()).map(SegmentId)
    }

    /// Look up a segment of this path.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this path.
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    /// Look up a segment, returning `None` for foreign ids.
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0)
    }

    /// Total centerline length.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}
