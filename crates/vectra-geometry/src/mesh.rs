//! Append-only mesh accumulation.

use crate::{ColorVertex, TessellatedMesh};
use glam::DVec2;
use vectra_core::Color;

/// Growable vertex and index lists shared by the stroke and fill
/// tessellators.
///
/// Vertices are only ever appended. Positions are narrowed to `f32` once,
/// when they are added.
#[derive(Debug, Clone, Default)]
pub struct MeshAccumulator {
    vertices: Vec<ColorVertex>,
    indices: Vec<u32>,
    next_index: u32,
}

impl MeshAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty accumulator with preallocated vertex and index storage.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            next_index: 0,
        }
    }

    /// Append vertices and return the index of the first one.
    ///
    /// Successive calls hand out strictly increasing, gap-free indices.
    pub fn add_vertices<I>(&mut self, vertices: I) -> u32
    where
        I: IntoIterator<Item = (DVec2, Color)>,
    {
        let first = self.next_index;
        self.vertices.extend(
            vertices
                .into_iter()
                .map(|(position, color)| ColorVertex::new(position, color)),
        );
        self.next_index = self.vertices.len() as u32;
        first
    }

    /// Append raw index values, normally whole triangles.
    pub fn add_indices(&mut self, indices: &[u32]) {
        self.indices.extend_from_slice(indices);
    }

    /// Merge an independently built mesh, shifting its indices past the
    /// vertices already held here.
    pub fn append(&mut self, mesh: &TessellatedMesh<ColorVertex>) {
        let offset = self.next_index;
        self.vertices.extend_from_slice(&mesh.vertices);
        self.indices.extend(mesh.indices.iter().map(|i| i + offset));
        self.next_index = self.vertices.len() as u32;
    }

    /// Vertices added so far.
    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    /// Indices added so far, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Check if no vertices have been added.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop all contents and restart indexing at zero.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.next_index = 0;
    }

    /// Copy of the current contents, leaving the accumulator usable.
    pub fn snapshot(&self) -> TessellatedMesh<ColorVertex> {
        TessellatedMesh::from_data(self.vertices.clone(), self.indices.clone())
    }

    /// Consume the accumulator into a finished mesh.
    pub fn finish(self) -> TessellatedMesh<ColorVertex> {
        TessellatedMesh::from_data(self.vertices, self.indices)
    }
}
