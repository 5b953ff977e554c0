//! Angle helpers shared by the shape generators.

use std::f64::consts::TAU;

/// Angular offset in degrees that puts index 0 at the top of a ring
/// instead of on its right.
pub const ANGLE_OFFSET: f64 = -90.0;

/// Degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Angle in radians of the `index`-th of `total` stamps spread evenly around a
/// ring, starting at `offset` degrees.
pub fn angle_distribution(index: usize, total: usize, offset: f64) -> f64 {
    index as f64 / total as f64 * TAU + to_radians(offset + ANGLE_OFFSET)
}

/// Advance an angle in degrees, keeping it in `(-360, 360)`.
///
/// Uses the truncating remainder, so negative angles stay negative.
#[inline]
pub fn wrap_degrees(angle: f64, delta: f64) -> f64 {
    (angle + delta) % 360.0
}
