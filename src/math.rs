//! Vector math shared by the tracer.
//!
//! Points, directions and colors are all `glam::Vec3A`: addition, subtraction,
//! negation, scaling, dot product, `length` (the Euclidean norm) and component
//! indexing by 0/1/2 come straight from glam.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are linear radiance and may exceed 1.0 until tone mapping.
pub type Color = Vec3A;

/// Normalize a vector to unit length.
///
/// The vector must be non-zero. Scene geometry and camera rays never produce a
/// zero vector, so a violation is a logic error and trips a debug assertion.
#[inline]
pub fn unit(v: Vec3A) -> Vec3A {
    debug_assert!(
        v.length_squared() > 0.0,
        "attempted to normalize a zero-length vector"
    );
    v * (1.0 / v.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_has_norm_one() {
        let samples = [
            Vec3A::new(3.0, 4.0, 0.0),
            Vec3A::new(-0.001, 0.002, 0.0005),
            Vec3A::new(511.5, -383.5, -662.0),
            Vec3A::new(1e3, 1e3, -1e3),
        ];
        for v in samples {
            assert!((unit(v).length() - 1.0).abs() < 1e-5, "{v:?}");
        }
    }

    #[test]
    fn test_unit_keeps_direction() {
        let v = Vec3A::new(0.0, -2.0, 0.0);
        assert!(unit(v).abs_diff_eq(Vec3A::new(0.0, -1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_component_indexing() {
        let c = Color::new(0.2, 0.7, 0.8);
        assert_eq!(c[0], 0.2);
        assert_eq!(c[1], 0.7);
        assert_eq!(c[2], 0.8);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_unit_rejects_zero_vector() {
        unit(Vec3A::ZERO);
    }
}
