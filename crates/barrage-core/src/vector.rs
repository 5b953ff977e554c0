use glam::{DMat3, DVec3};

use crate::error::PatternError;
use crate::math::to_radians;

/// A direction in pattern space.
///
/// Magnitude is always derived from the components, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Exact comparison against `(0, 0, 0)`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Unit vector pointing the same way. The zero vector is returned as is.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        let mag = self.magnitude();
        Self::new(self.x / mag, self.y / mag, self.z / mag)
    }

    pub fn scaled(&self, k: f64) -> Self {
        (DVec3::from(*self) * k).into()
    }

    pub fn cross(&self, other: &Self) -> Self {
        DVec3::from(*self).cross((*other).into()).into()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        DVec3::from(*self).dot((*other).into())
    }

    /// Rotate this vector about `axis` by `degrees`.
    ///
    /// The axis is normalized first; a zero axis yields `cos(θ)·self`, which
    /// is the identity for the zero-degree rotations spin produces for idle
    /// axes. The result is the row vector `self · R` where `R` is the
    /// axis-angle rotation matrix, so positive angles turn clockwise when
    /// looking down the axis.
    pub fn rotate(&self, axis: &Self, degrees: f64) -> Result<Self, PatternError> {
        if self.is_zero() {
            return Err(PatternError::ZeroVector);
        }

        let Vector { x, y, z } = axis.normalized();
        let theta = to_radians(degrees);
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;

        // Rows of R.
        let r0 = DVec3::new(c + x * x * t, x * y * t - z * s, x * z * t + y * s);
        let r1 = DVec3::new(y * x * t + z * s, c + y * y * t, y * z * t - x * s);
        let r2 = DVec3::new(z * x * t - y * s, z * y * t + x * s, c + z * z * t);

        // Using the rows as columns gives R^T, and R^T · v == v · R.
        let rotation = DMat3::from_cols(r0, r1, r2);
        Ok((rotation * DVec3::from(*self)).into())
    }

    /// Two orthonormal vectors spanning the plane perpendicular to `self`.
    ///
    /// The first is `self × X` (or `self × Y` when `self` is parallel to the
    /// x axis), the second is `self × first`. Their order fixes the angular
    /// reference frame of every ring-based shape.
    pub fn unit_vectors(&self) -> (Self, Self) {
        let mut u0 = self.cross(&Self::X);
        if u0.is_zero() {
            u0 = self.cross(&Self::Y);
        }
        let u1 = self.cross(&u0).normalized();
        (u0.normalized(), u1)
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_about_z_matches_row_vector_convention() {
        // v · R with R the standard counter-clockwise matrix turns X toward -Y
        let r = Vector::X.rotate(&Vector::Z, 90.0).unwrap();
        assert!(r.x.abs() < 1e-12, "x should vanish: {}", r);
        assert!((r.y + 1.0).abs() < 1e-12, "y should be -1: {}", r);
        assert!(r.z.abs() < 1e-12, "z should vanish: {}", r);
    }

    #[test]
    fn test_zero_axis_is_identity_at_zero_degrees() {
        let v = Vector::new(0.3, -2.0, 5.0);
        let r = v.rotate(&Vector::ZERO, 0.0).unwrap();
        assert_eq!(r, v);
    }

    #[test]
    fn test_rotate_zero_target_fails() {
        assert_eq!(
            Vector::ZERO.rotate(&Vector::Z, 45.0),
            Err(PatternError::ZeroVector)
        );
    }

    #[test]
    fn test_unit_vectors_for_x_axis_fall_back_to_y() {
        let (u0, u1) = Vector::X.unit_vectors();
        // X × Y = Z, then X × Z = -Y
        assert_eq!(u0, Vector::Z);
        assert_eq!(u1, Vector::new(0.0, -1.0, 0.0));
    }
}
