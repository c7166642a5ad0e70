//! Vectra Geometry - 2D stroke tessellation
//!
//! This crate provides:
//! - Stroke vertices and paths made of line and circular arc segments
//! - A miter/cap stroke tessellator producing position/color triangle meshes
//! - Fan triangulation for convex filled polygons
//! - A shape builder for circles, arcs, rectangles, polylines and polygons
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use vectra_core::Color;
//! use vectra_geometry::*;
//!
//! let white = Color::WHITE;
//! let mut path = Path::new();
//! path.add_segment(Segment::line(
//!     StrokeVertex::new(DVec2::ZERO, white, 2.0),
//!     StrokeVertex::new(DVec2::new(10.0, 0.0), white, 2.0),
//! ))?;
//!
//! let mut mesh = MeshAccumulator::new();
//! StrokeTessellator::new().tessellate_path(&path, &mut mesh);
//!
//! let mesh = mesh.finish();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.triangle_count(), 6);
//! # Ok::<(), GeometryError>(())
//! ```

// Core primitives
mod path;
mod segment;
mod vertex;

// Tessellation
mod fill;
mod mesh;
mod tessellator;

// Front end
mod config;
mod error;
mod renderer;
mod shape;

// Re-exports
pub use path::*;
pub use segment::*;
pub use vertex::*;

pub use fill::*;
pub use mesh::*;
pub use tessellator::*;

pub use config::*;
pub use error::*;
pub use renderer::*;
pub use shape::*;
