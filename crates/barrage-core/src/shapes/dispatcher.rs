//! Closed dispatch over the five shape families.

use crate::error::PatternError;
use crate::point::Point;
use crate::shapes::{CircleShape, LineShape, ParallelepipedShape, PolygonShape, Shape, StarShape};

/// One shape instance of any family.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    Line(LineShape),
    Circle(CircleShape),
    Polygon(PolygonShape),
    Star(StarShape),
    Parallelepiped(ParallelepipedShape),
}

impl ShapeDescriptor {
    /// Family name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDescriptor::Line(_) => "line",
            ShapeDescriptor::Circle(_) => "circle",
            ShapeDescriptor::Polygon(_) => "polygon",
            ShapeDescriptor::Star(_) => "star",
            ShapeDescriptor::Parallelepiped(_) => "parallelepiped",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeDescriptor::Line(s) => s,
            ShapeDescriptor::Circle(s) => s,
            ShapeDescriptor::Polygon(s) => s,
            ShapeDescriptor::Star(s) => s,
            ShapeDescriptor::Parallelepiped(s) => s,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            ShapeDescriptor::Line(s) => s,
            ShapeDescriptor::Circle(s) => s,
            ShapeDescriptor::Polygon(s) => s,
            ShapeDescriptor::Star(s) => s,
            ShapeDescriptor::Parallelepiped(s) => s,
        }
    }
}

impl Shape for ShapeDescriptor {
    fn points(&self) -> Result<Vec<Point>, PatternError> {
        self.as_shape().points()
    }

    fn scale(&self) -> f64 {
        self.as_shape().scale()
    }

    fn advance(&mut self) -> Result<(), PatternError> {
        self.as_shape_mut().advance()
    }
}

impl From<LineShape> for ShapeDescriptor {
    fn from(s: LineShape) -> Self {
        ShapeDescriptor::Line(s)
    }
}

impl From<CircleShape> for ShapeDescriptor {
    fn from(s: CircleShape) -> Self {
        ShapeDescriptor::Circle(s)
    }
}

impl From<PolygonShape> for ShapeDescriptor {
    fn from(s: PolygonShape) -> Self {
        ShapeDescriptor::Polygon(s)
    }
}

impl From<StarShape> for ShapeDescriptor {
    fn from(s: StarShape) -> Self {
        ShapeDescriptor::Star(s)
    }
}

impl From<ParallelepipedShape> for ShapeDescriptor {
    fn from(s: ParallelepipedShape) -> Self {
        ShapeDescriptor::Parallelepiped(s)
    }
}
