//! Vertex formats.
//!
//! [`StrokeVertex`] and [`RawJoin`] are the double precision inputs of the
//! stroke walk. [`ColorVertex`] is the render-precision output format.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use static_assertions::const_assert_eq;
use vectra_core::Color;

/// A single point of a stroke's centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeVertex {
    /// Position on the centerline
    pub position: DVec2,
    /// Color at this point
    pub color: Color,
    /// Distance from the centerline to either edge
    pub half_stroke_width: f64,
}

impl StrokeVertex {
    /// Create a vertex from a full stroke width.
    pub fn new(position: DVec2, color: Color, stroke_width: f64) -> Self {
        Self {
            position,
            color,
            half_stroke_width: stroke_width.max(0.0) * 0.5,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.half_stroke_width * 2.0
    }

    /// Same color and width, different position.
    pub fn with_position(self, position: DVec2) -> Self {
        Self { position, ..self }
    }

    /// Interpolate position, color and width.
    pub fn lerp(&self, other: &StrokeVertex, t: f64) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            color: self.color.lerp(other.color, t as f32),
            half_stroke_width: self.half_stroke_width
                + (other.half_stroke_width - self.half_stroke_width) * t,
        }
    }
}

/// Edge geometry of a segment at one of its endpoints.
///
/// `side_r`/`side_l` are offsets from the path point to the right/left edge.
/// `along_r`/`along_l` are unit directions of those edges. Each
/// `(point + side, along)` pair describes a line used for miter intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawJoin {
    pub side_r: DVec2,
    pub along_r: DVec2,
    pub side_l: DVec2,
    pub along_l: DVec2,
}

impl RawJoin {
    /// Join with symmetric offsets and a shared direction.
    pub fn symmetric(side: DVec2, along: DVec2) -> Self {
        Self {
            side_r: side,
            along_r: along,
            side_l: -side,
            along_l: along,
        }
    }

    /// Distance between the two edges.
    pub fn separation(&self) -> f64 {
        (self.side_r - self.side_l).length()
    }
}

/// Vertex written to the output mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in 2D space
    pub position: [f32; 2],
    /// Linear RGBA color
    pub color: [f32; 4],
}

const_assert_eq!(std::mem::size_of::<ColorVertex>(), 24);

/// Data type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFormat {
    Float32x2,
    Float32x4,
}

/// Byte layout of one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub offset: u64,
    pub shader_location: u32,
    pub format: AttributeFormat,
}

impl ColorVertex {
    /// Attribute layout for binding the vertex buffer.
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: AttributeFormat::Float32x2,
        },
        VertexAttribute {
            offset: 8,
            shader_location: 1,
            format: AttributeFormat::Float32x4,
        },
    ];

    /// Create a vertex, narrowing the position to `f32`.
    pub fn new(position: DVec2, color: Color) -> Self {
        Self {
            position: vectra_core::math::to_render(position),
            color: color.to_array(),
        }
    }

    pub fn stride() -> u64 {
        std::mem::size_of::<Self>() as u64
    }
}

/// Primitive topology of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    #[default]
    TriangleList,
}

/// Output from tessellation: vertices and indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TessellatedMesh<V> {
    /// Vertex data
    pub vertices: Vec<V>,
    /// Index data (triangles)
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl<V> TessellatedMesh<V> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology: Topology::TriangleList,
        }
    }

    /// Create a mesh with given vertices and indices.
    pub fn from_data(vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::TriangleList,
        }
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Every index refers to an existing vertex and the index list is made
    /// of whole triangles.
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.vertices.len();
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| (i as usize) < count)
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

impl TessellatedMesh<ColorVertex> {
    /// Raw vertex bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
