//! Filled convex polygons.

use crate::{GeometryError, GeometryResult, MeshAccumulator};
use glam::DVec2;
use vectra_core::Color;
use vectra_core::profiling::profile_function;

/// Fan triangulator for convex rings.
///
/// Non-convex input is not detected and produces overlapping triangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTessellator;

impl FillTessellator {
    pub fn new() -> Self {
        Self
    }

    /// Append `ring` and fan it from its first vertex, producing
    /// `ring.len() - 2` triangles.
    pub fn fill_convex(
        &self,
        mesh: &mut MeshAccumulator,
        ring: &[(DVec2, Color)],
    ) -> GeometryResult<()> {
        profile_function!();

        if ring.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                required: 3,
                found: ring.len(),
            });
        }

        let first = mesh.add_vertices(ring.iter().copied());
        let count = ring.len() as u32;
        let indices: Vec<u32> = (2..count)
            .flat_map(|i| [first, first + i - 1, first + i])
            .collect();
        mesh.add_indices(&indices);

        tracing::trace!(vertices = count, triangles = count - 2, "Filled convex polygon");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<(DVec2, Color)> {
        points
            .iter()
            .map(|&(x, y)| (DVec2::new(x, y), Color::WHITE))
            .collect()
    }

    #[test]
    fn test_triangle() {
        let mut mesh = MeshAccumulator::new();
        FillTessellator::new()
            .fill_convex(&mut mesh, &ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]))
            .unwrap();
        assert_eq!(mesh.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_fan_indices_are_offset() {
        let mut mesh = MeshAccumulator::new();
        mesh.add_vertices([(DVec2::ZERO, Color::BLACK)]);
        FillTessellator::new()
            .fill_convex(
                &mut mesh,
                &ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (-0.5, 0.5)]),
            )
            .unwrap();
        assert_eq!(mesh.indices(), &[1, 2, 3, 1, 3, 4, 1, 4, 5]);
    }

    #[test]
    fn test_too_few_vertices() {
        let mut mesh = MeshAccumulator::new();
        let err = FillTessellator::new()
            .fill_convex(&mut mesh, &ring(&[(0.0, 0.0), (1.0, 0.0)]))
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::TooFewVertices {
                required: 3,
                found: 2
            }
        );
        assert!(mesh.is_empty());
    }
}
