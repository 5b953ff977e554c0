//! Shape descriptors and the generators that turn them into stamp positions.
//!
//! Five families are supported: line, circle, polygon, star and
//! parallelepiped. Each has a descriptor struct implementing [`Shape`], and
//! [`ShapeDescriptor`] closes over all of them.

pub mod descriptor;
pub mod dispatcher;
pub mod primitives;

pub use descriptor::{CircleShape, LineShape, ParallelepipedShape, PolygonShape, StarShape};
pub use dispatcher::ShapeDescriptor;

use crate::error::PatternError;
use crate::point::Point;

/// Stamp counts for the edges of a polygon or the spikes of a star.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeCounts {
    /// Same count on every edge.
    Uniform(usize),
    /// One count per edge, in vertex order.
    PerEdge(Vec<usize>),
}

impl EdgeCounts {
    /// Expand to exactly `side` counts.
    pub fn resolve(&self, side: usize) -> Result<Vec<usize>, PatternError> {
        match self {
            EdgeCounts::Uniform(n) => Ok(vec![*n; side]),
            EdgeCounts::PerEdge(counts) if counts.len() == side => Ok(counts.clone()),
            EdgeCounts::PerEdge(counts) => Err(PatternError::EdgeCountMismatch {
                expected: side,
                actual: counts.len(),
            }),
        }
    }
}

impl From<usize> for EdgeCounts {
    fn from(n: usize) -> Self {
        EdgeCounts::Uniform(n)
    }
}

impl From<Vec<usize>> for EdgeCounts {
    fn from(counts: Vec<usize>) -> Self {
        EdgeCounts::PerEdge(counts)
    }
}

/// Contract shared by every shape family.
pub trait Shape {
    /// Stamp positions for the current orientation, in draw order.
    fn points(&self) -> Result<Vec<Point>, PatternError>;

    /// Sprite scale for every stamp of this shape.
    fn scale(&self) -> f64;

    /// Apply one frame of spin. On error the shape is left unchanged.
    fn advance(&mut self) -> Result<(), PatternError>;

    /// Points for this frame, then spin for the next.
    fn generate(&mut self) -> Result<Vec<Point>, PatternError> {
        let points = self.points()?;
        self.advance()?;
        Ok(points)
    }
}
