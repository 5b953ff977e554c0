//! Per-frame rotation of shape orientation.
//!
//! Both entry points are pure: they take the current state and return the
//! next one, leaving the caller to store it.

use crate::error::PatternError;
use crate::math::wrap_degrees;
use crate::vector::Vector;

/// How far a shape turns each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinMode {
    /// In-plane rotation by this many degrees.
    Scalar(f64),
    /// Degrees about the x, y and z axes, applied in that order. The sign of
    /// each component picks the direction of the matching axis.
    ThreeAxis(Vector),
}

impl Default for SpinMode {
    fn default() -> Self {
        SpinMode::Scalar(0.0)
    }
}

impl From<f64> for SpinMode {
    fn from(degrees: f64) -> Self {
        SpinMode::Scalar(degrees)
    }
}

impl From<Vector> for SpinMode {
    fn from(v: Vector) -> Self {
        SpinMode::ThreeAxis(v)
    }
}

/// Orientation state of a ring-based shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Normal of the plane the shape is drawn in.
    pub normal: Vector,
    /// Starting angle in degrees.
    pub angle: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            normal: Vector::Z,
            angle: 0.0,
        }
    }
}

impl Orientation {
    pub fn new(normal: Vector, angle: f64) -> Self {
        Self { normal, angle }
    }
}

/// Rotate `v` about x, then y, then z by the magnitudes of `spin`'s
/// components.
pub fn rotate_three_axis(v: &Vector, spin: &Vector) -> Result<Vector, PatternError> {
    v.rotate(&Vector::new(spin.x, 0.0, 0.0), spin.x.abs())?
        .rotate(&Vector::new(0.0, spin.y, 0.0), spin.y.abs())?
        .rotate(&Vector::new(0.0, 0.0, spin.z), spin.z.abs())
}

/// Next-frame orientation for a shape with a single normal.
///
/// A three-axis spin turns the normal and also advances the angle by the z
/// component.
pub fn advance(orientation: Orientation, spin: SpinMode) -> Result<Orientation, PatternError> {
    match spin {
        SpinMode::Scalar(delta) => Ok(Orientation {
            angle: wrap_degrees(orientation.angle, delta),
            ..orientation
        }),
        SpinMode::ThreeAxis(v) => Ok(Orientation {
            normal: rotate_three_axis(&orientation.normal, &v)?,
            angle: wrap_degrees(orientation.angle, v.z),
        }),
    }
}

/// Next-frame edge vectors for a shape described by three edges.
///
/// Edge shapes have no angle, so a scalar spin leaves them untouched.
pub fn advance_edges(edges: [Vector; 3], spin: SpinMode) -> Result<[Vector; 3], PatternError> {
    match spin {
        SpinMode::Scalar(_) => Ok(edges),
        SpinMode::ThreeAxis(v) => Ok([
            rotate_three_axis(&edges[0], &v)?,
            rotate_three_axis(&edges[1], &v)?,
            rotate_three_axis(&edges[2], &v)?,
        ]),
    }
}
