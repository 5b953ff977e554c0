//! Built-in demo datasets, one per shape family, laid out for a 1200x800
//! canvas in a 3x2 grid.

use crate::point::Point;
use crate::shapes::EdgeCounts::{PerEdge, Uniform};
use crate::shapes::{CircleShape, ParallelepipedShape, PolygonShape, ShapeDescriptor, StarShape};
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Circle,
    Polygon,
    Star,
    Parallelepiped,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Circle,
        Preset::Polygon,
        Preset::Star,
        Preset::Parallelepiped,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Preset at `index`, wrapping around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The preset after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Circle => "circle",
            Preset::Polygon => "polygon",
            Preset::Star => "star",
            Preset::Parallelepiped => "parallelepiped",
        }
    }

    pub fn shapes(self) -> Vec<ShapeDescriptor> {
        match self {
            Preset::Circle => circles(),
            Preset::Polygon => polygons(),
            Preset::Star => stars(),
            Preset::Parallelepiped => parallelepipeds(),
        }
    }
}

fn v(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(x, y, z)
}

fn circles() -> Vec<ShapeDescriptor> {
    vec![
        CircleShape::new(Point::flat(200.0, 200.0), 20, 100.0)
            .with_spin(v(0.0, 0.0, 1.0))
            .into(),
        CircleShape::new(Point::flat(600.0, 200.0), 24, 120.0)
            .with_spin(v(2.0, 0.0, 0.0))
            .into(),
        CircleShape::new(Point::flat(1000.0, 200.0), 20, 100.0)
            .with_spin(v(0.0, 1.5, 0.0))
            .into(),
        CircleShape::new(Point::flat(200.0, 600.0), 20, 100.0)
            .with_normal(v(0.0, 1.0, 0.2))
            .with_spin(v(0.0, 2.0, 0.4))
            .into(),
        CircleShape::new(Point::flat(200.0, 600.0), 20, 100.0)
            .with_normal(v(1.0, 0.0, 0.2))
            .with_spin(v(2.0, 0.0, 0.4))
            .into(),
        CircleShape::new(Point::flat(600.0, 600.0), 20, 100.0)
            .with_scale(2.0)
            .with_spin(v(0.0, 0.7, 1.0))
            .into(),
        CircleShape::new(Point::flat(1000.0, 600.0), 40, 100.0)
            .with_scale(0.5)
            .with_normal(v(-0.5, 1.0, 0.2))
            .with_spin(v(-1.0, 2.0, 1.4))
            .into(),
        CircleShape::new(Point::flat(1000.0, 600.0), 40, 100.0)
            .with_scale(0.5)
            .with_normal(v(1.0, 0.5, 0.2))
            .with_spin(v(2.0, 1.0, 1.4))
            .into(),
    ]
}

fn polygons() -> Vec<ShapeDescriptor> {
    let sqrt3 = 3.0_f64.sqrt();
    vec![
        PolygonShape::new(Point::flat(200.0, 200.0), 4, Uniform(8), 100.0)
            .with_spin(v(0.0, 0.0, 1.0))
            .into(),
        PolygonShape::new(Point::flat(600.0, 200.0), 5, Uniform(8), 100.0)
            .with_spin(v(0.0, 0.0, -1.0))
            .into(),
        PolygonShape::new(Point::flat(1000.0, 200.0), 3, PerEdge(vec![5, 10, 10]), 100.0)
            .with_angle(30.0)
            .with_spin(v(0.0, 0.0, 1.0))
            .into(),
        PolygonShape::new(Point::flat(200.0, 600.0), 5, Uniform(8), 100.0)
            .with_spin(v(0.0, 0.0, 1.0))
            .into(),
        // Three nested hexagons
        PolygonShape::new(Point::flat(600.0, 600.0), 6, Uniform(15), 200.0 / sqrt3)
            .with_angle(30.0)
            .with_scale(0.5)
            .with_spin(v(1.0, 0.0, 1.0))
            .into(),
        PolygonShape::new(Point::flat(600.0, 600.0), 6, Uniform(15), 100.0)
            .with_scale(0.5)
            .with_spin(v(1.0, 0.0, 1.0))
            .into(),
        PolygonShape::new(Point::flat(600.0, 600.0), 6, Uniform(15), 50.0 * sqrt3)
            .with_angle(30.0)
            .with_scale(0.5)
            .with_spin(v(1.0, 0.0, 1.0))
            .into(),
        PolygonShape::new(Point::flat(1000.0, 600.0), 12, Uniform(16), 160.0)
            .with_scale(0.3)
            .with_spin(v(0.0, 0.0, 1.0))
            .into(),
    ]
}

fn stars() -> Vec<ShapeDescriptor> {
    vec![
        StarShape::new(Point::flat(200.0, 200.0), 6, Uniform(16), 100.0)
            .with_angle(30.0)
            .with_fill_inner(true)
            .with_spin(v(0.0, 2.0, 0.0))
            .into(),
        StarShape::new(Point::flat(600.0, 200.0), 5, Uniform(5), 100.0)
            .with_concave(0.8)
            .with_spin(v(0.0, 0.0, 2.0))
            .into(),
        StarShape::new(Point::flat(1000.0, 200.0), 5, Uniform(5), 100.0)
            .with_concave(0.3)
            .with_spin(v(0.0, 0.0, 2.0))
            .into(),
        StarShape::new(Point::flat(200.0, 600.0), 5, Uniform(5), 100.0)
            .with_skew(1.1)
            .with_spin(v(0.0, 0.0, 2.0))
            .into(),
        StarShape::new(Point::flat(600.0, 600.0), 6, Uniform(6), 100.0)
            .with_concave(0.707)
            .with_scale(0.5)
            .with_spin(v(0.0, 0.0, 2.0))
            .into(),
        StarShape::new(Point::flat(1000.0, 600.0), 4, Uniform(5), 100.0)
            .with_spin(v(2.0, 0.0, 2.0))
            .into(),
    ]
}

fn parallelepipeds() -> Vec<ShapeDescriptor> {
    let cube = |size: f64| [v(size, 0.0, 0.0), v(0.0, size, 0.0), v(0.0, 0.0, size)];
    vec![
        ParallelepipedShape::uniform(Point::flat(200.0, 200.0), 10, cube(70.0))
            .with_spin(v(1.0, 1.0, 1.0))
            .into(),
        ParallelepipedShape::uniform(
            Point::flat(600.0, 200.0),
            10,
            [v(50.0, 0.0, 0.0), v(0.0, 100.0, 0.0), v(0.0, 0.0, 100.0)],
        )
        .with_spin(v(1.0, 1.0, 1.0))
        .into(),
        ParallelepipedShape::uniform(
            Point::flat(1000.0, 200.0),
            10,
            [v(40.0, 30.0, 0.0), v(-30.0, 70.0, 0.0), v(0.0, 0.0, 70.0)],
        )
        .with_spin(v(1.0, 1.0, 1.0))
        .into(),
        ParallelepipedShape::new(
            Point::flat(200.0, 600.0),
            [10, 16, 10],
            [v(50.0, 0.0, 0.0), v(0.0, 80.0, 0.0), v(0.0, 0.0, 50.0)],
        )
        .with_spin(v(1.0, 1.0, 1.0))
        .into(),
        ParallelepipedShape::new(
            Point::flat(600.0, 600.0),
            [10, 20, 24],
            [v(30.0, 40.0, 0.0), v(-60.0, 80.0, 0.0), v(0.0, 0.0, 120.0)],
        )
        .with_scale(0.5)
        .with_spin(v(1.0, 1.0, 1.0))
        .into(),
        ParallelepipedShape::uniform(Point::flat(1000.0, 600.0), 10, cube(70.0))
            .with_spin(v(-1.0, -1.0, -1.0))
            .into(),
    ]
}
