//! Recording renderer for tests.

use vectra_geometry::{ColorVertex, MeshRenderer, TessellatedMesh};

/// Records a draw request for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub vertex_count: usize,
    pub index_count: usize,
    /// Size of the uploaded vertex buffer
    pub vertex_bytes: usize,
}

/// Renderer that keeps a copy of every mesh instead of touching a GPU.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    meshes: Vec<TessellatedMesh<ColorVertex>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn meshes(&self) -> &[TessellatedMesh<ColorVertex>] {
        &self.meshes
    }

    /// Most recently drawn mesh.
    pub fn last_mesh(&self) -> Option<&TessellatedMesh<ColorVertex>> {
        self.meshes.last()
    }

    pub fn draw_count(&self) -> usize {
        self.calls.len()
    }

    pub fn total_triangles(&self) -> usize {
        self.calls.iter().map(|c| c.index_count / 3).sum()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.meshes.clear();
    }
}

impl MeshRenderer for RecordingRenderer {
    fn upload_and_draw(&mut self, mesh: &TessellatedMesh<ColorVertex>) {
        self.calls.push(DrawCall {
            vertex_count: mesh.vertex_count(),
            index_count: mesh.index_count(),
            vertex_bytes: mesh.vertex_bytes().len(),
        });
        self.meshes.push(mesh.clone());
    }
}
