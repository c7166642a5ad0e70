//! Test utilities for Vectra.
//!
//! - [`RecordingRenderer`] - a [`MeshRenderer`](vectra_geometry::MeshRenderer)
//!   that keeps every mesh it is asked to draw
//! - Mesh and floating point assertions used by the integration tests
//!
//! # Example
//!
//! ```rust
//! use vectra_geometry::{submit, MeshAccumulator, ShapeBuilder};
//! use vectra_test_utils::RecordingRenderer;
//!
//! let mut mesh = MeshAccumulator::new();
//! ShapeBuilder::new(&mut mesh)
//!     .rect_filled(glam::DVec2::ZERO, glam::DVec2::ONE, Default::default())
//!     .unwrap();
//!
//! let mut renderer = RecordingRenderer::new();
//! submit(mesh, &mut renderer);
//! assert_eq!(renderer.draw_count(), 1);
//! assert_eq!(renderer.total_triangles(), 2);
//! ```

pub mod assertions;
pub mod recording;

pub use assertions::*;
pub use recording::*;
