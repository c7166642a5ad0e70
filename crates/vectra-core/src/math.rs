//! Math types.
//!
//! Path geometry is computed in double precision ([`DVec2`]) and only narrowed
//! to `f32` when vertices are written into a mesh.

pub use glam::{DVec2, Vec2};

/// Rotate a direction a quarter turn clockwise: `(x, y) -> (y, -x)`.
#[inline]
pub fn perp_right(v: DVec2) -> DVec2 {
    DVec2::new(v.y, -v.x)
}

/// Rotate a direction a quarter turn counter-clockwise: `(x, y) -> (-y, x)`.
#[inline]
pub fn perp_left(v: DVec2) -> DVec2 {
    DVec2::new(-v.y, v.x)
}

/// Narrow a double precision point into a render-precision array.
#[inline]
pub fn to_render(v: DVec2) -> [f32; 2] {
    [v.x as f32, v.y as f32]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendiculars() {
        let x = DVec2::X;
        assert_eq!(perp_right(x), DVec2::new(0.0, -1.0));
        assert_eq!(perp_left(x), DVec2::new(0.0, 1.0));
        assert_eq!(perp_left(perp_right(x)), x);
    }

    #[test]
    fn test_to_render() {
        assert_eq!(to_render(DVec2::new(1.5, -2.25)), [1.5f32, -2.25f32]);
    }
}
