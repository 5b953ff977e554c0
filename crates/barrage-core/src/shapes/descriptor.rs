use crate::error::PatternError;
use crate::point::Point;
use crate::shapes::primitives::{
    circle_points, line_points, parallelepiped_points, polygon_points, star_points,
};
use crate::shapes::{EdgeCounts, Shape};
use crate::spin::{self, Orientation, SpinMode};
use crate::vector::Vector;

/// Stamps laid along a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineShape {
    pub start: Point,
    pub end: Point,
    pub number: usize,
    pub include_end: bool,
    pub scale: f64,
    pub spin: SpinMode,
    /// Spun every frame but not used for placement.
    pub orientation: Orientation,
}

impl LineShape {
    pub fn new(start: Point, end: Point, number: usize) -> Self {
        Self {
            start,
            end,
            number,
            include_end: false,
            scale: 1.0,
            spin: SpinMode::default(),
            orientation: Orientation::default(),
        }
    }

    pub fn with_end_included(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: impl Into<SpinMode>) -> Self {
        self.spin = spin.into();
        self
    }
}

impl Shape for LineShape {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        Ok(line_points(&self.start, &self.end, self.number, self.include_end))
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.orientation = spin::advance(self.orientation, self.spin)?;
        Ok(())
    }
}

/// Stamps spread evenly on a ring.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub number: usize,
    pub radius: f64,
    pub scale: f64,
    pub spin: SpinMode,
    pub orientation: Orientation,
}

impl CircleShape {
    pub fn new(center: Point, number: usize, radius: f64) -> Self {
        Self {
            center,
            number,
            radius,
            scale: 1.0,
            spin: SpinMode::default(),
            orientation: Orientation::default(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.orientation.angle = angle;
        self
    }

    pub fn with_normal(mut self, normal: Vector) -> Self {
        self.orientation.normal = normal;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: impl Into<SpinMode>) -> Self {
        self.spin = spin.into();
        self
    }
}

impl Shape for CircleShape {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        Ok(circle_points(&self.center, self.number, self.radius, &self.orientation))
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.orientation = spin::advance(self.orientation, self.spin)?;
        Ok(())
    }
}

/// Outline of a regular polygon, optionally traced as a star polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonShape {
    pub center: Point,
    pub side: usize,
    pub counts: EdgeCounts,
    pub radius: f64,
    /// Connect every other vertex instead of neighbours.
    pub is_star: bool,
    pub scale: f64,
    pub spin: SpinMode,
    pub orientation: Orientation,
}

impl PolygonShape {
    pub fn new(center: Point, side: usize, counts: EdgeCounts, radius: f64) -> Self {
        Self {
            center,
            side,
            counts,
            radius,
            is_star: false,
            scale: 1.0,
            spin: SpinMode::default(),
            orientation: Orientation::default(),
        }
    }

    pub fn with_star_stride(mut self, is_star: bool) -> Self {
        self.is_star = is_star;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.orientation.angle = angle;
        self
    }

    pub fn with_normal(mut self, normal: Vector) -> Self {
        self.orientation.normal = normal;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: impl Into<SpinMode>) -> Self {
        self.spin = spin.into();
        self
    }
}

impl Shape for PolygonShape {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        polygon_points(
            &self.center,
            self.side,
            &self.counts,
            self.radius,
            &self.orientation,
            self.is_star,
        )
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.orientation = spin::advance(self.orientation, self.spin)?;
        Ok(())
    }
}

/// Star with alternating vertices and valleys, or a filled star polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct StarShape {
    pub center: Point,
    pub side: usize,
    pub counts: EdgeCounts,
    pub radius: f64,
    /// Valley depth from 0 (at the center) to 1 (on the inscribed polygon).
    pub concave: f64,
    /// Extra valley turn in full revolutions.
    pub skew: f64,
    /// Draw as a star polygon through every other vertex. Ignores `concave`
    /// and `skew`.
    pub fill_inner: bool,
    pub scale: f64,
    pub spin: SpinMode,
    pub orientation: Orientation,
}

impl StarShape {
    pub fn new(center: Point, side: usize, counts: EdgeCounts, radius: f64) -> Self {
        Self {
            center,
            side,
            counts,
            radius,
            concave: 0.5,
            skew: 0.0,
            fill_inner: false,
            scale: 1.0,
            spin: SpinMode::default(),
            orientation: Orientation::default(),
        }
    }

    pub fn with_concave(mut self, concave: f64) -> Self {
        self.concave = concave;
        self
    }

    pub fn with_skew(mut self, skew: f64) -> Self {
        self.skew = skew;
        self
    }

    pub fn with_fill_inner(mut self, fill_inner: bool) -> Self {
        self.fill_inner = fill_inner;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.orientation.angle = angle;
        self
    }

    pub fn with_normal(mut self, normal: Vector) -> Self {
        self.orientation.normal = normal;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: impl Into<SpinMode>) -> Self {
        self.spin = spin.into();
        self
    }
}

impl Shape for StarShape {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        if self.fill_inner {
            return polygon_points(
                &self.center,
                self.side,
                &self.counts,
                self.radius,
                &self.orientation,
                true,
            );
        }
        star_points(
            &self.center,
            self.side,
            &self.counts,
            self.radius,
            &self.orientation,
            self.concave,
            self.skew,
        )
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.orientation = spin::advance(self.orientation, self.spin)?;
        Ok(())
    }
}

/// Wireframe box spanned by three edge vectors around a center.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelepipedShape {
    pub center: Point,
    /// Stamp counts along the first, second and joining edges.
    pub counts: [usize; 3],
    /// Half-edges from the center; these carry the orientation.
    pub edges: [Vector; 3],
    pub scale: f64,
    pub spin: SpinMode,
}

impl ParallelepipedShape {
    pub fn new(center: Point, counts: [usize; 3], edges: [Vector; 3]) -> Self {
        Self {
            center,
            counts,
            edges,
            scale: 1.0,
            spin: SpinMode::default(),
        }
    }

    /// Same count along every edge.
    pub fn uniform(center: Point, count: usize, edges: [Vector; 3]) -> Self {
        Self::new(center, [count; 3], edges)
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: impl Into<SpinMode>) -> Self {
        self.spin = spin.into();
        self
    }
}

impl Shape for ParallelepipedShape {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        Ok(parallelepiped_points(&self.center, self.counts, &self.edges))
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.edges = spin::advance_edges(self.edges, self.spin)?;
        Ok(())
    }
}
