//! Hand-off point to the GPU layer.

use crate::{ColorVertex, MeshAccumulator, TessellatedMesh};

/// Consumer of finished meshes.
///
/// The GPU layer implements this to upload the vertex and index buffers and
/// issue a triangle-list draw. A mesh may be drawn any number of times until
/// its geometry changes.
pub trait MeshRenderer {
    fn upload_and_draw(&mut self, mesh: &TessellatedMesh<ColorVertex>);
}

impl<R: MeshRenderer + ?Sized> MeshRenderer for &mut R {
    fn upload_and_draw(&mut self, mesh: &TessellatedMesh<ColorVertex>) {
        (**self).upload_and_draw(mesh);
    }
}

/// Finish `mesh` and pass it to `renderer`, skipping empty meshes.
pub fn submit(
    mesh: MeshAccumulator,
    renderer: &mut dyn MeshRenderer,
) -> TessellatedMesh<ColorVertex> {
    let mesh = mesh.finish();
    if mesh.is_empty() {
        tracing::trace!("Nothing to draw");
        return mesh;
    }

    debug_assert!(mesh.indices_in_bounds(), "mesh indices out of bounds");
    renderer.upload_and_draw(&mesh);
    mesh
}
