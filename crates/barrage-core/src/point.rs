use glam::DVec3;

use crate::vector::Vector;

/// A stamp location in screen space: y grows downward, z points toward the
/// viewer and is dropped when drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Screen point on the z = 0 plane.
    pub const fn flat(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Shift this point in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn translated_by(&self, v: &Vector) -> Self {
        (DVec3::from(*self) + DVec3::from(*v)).into()
    }

    /// Point at `radius` from `self` in the plane spanned by `basis`, at
    /// `angle` radians from the first basis vector.
    ///
    /// x and y are subtracted while z is added, which keeps rings turning the
    /// same way on a y-down screen.
    pub fn translated_by_basis(&self, basis: &(Vector, Vector), radius: f64, angle: f64) -> Self {
        let (u0, u1) = basis;
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x - radius * (u0.x * cos + u1.x * sin),
            self.y - radius * (u0.y * cos + u1.y * sin),
            self.z + radius * (u0.z * cos + u1.z * sin),
        )
    }

    /// The `index`-th of `total` equal divisions from `self` toward `other`.
    ///
    /// `index == 0` is always `self`, even when `total` is zero.
    pub fn subdivide(&self, other: &Self, index: usize, total: usize) -> Self {
        if index == 0 {
            return *self;
        }
        let from = DVec3::from(*self);
        let to = DVec3::from(*other);
        (from + (to - from) / total as f64 * index as f64).into()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        DVec3::from(*self).distance((*other).into())
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}
