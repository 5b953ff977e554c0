use barrage_core::shapes::primitives::*;
use barrage_core::shapes::{
    CircleShape, EdgeCounts, LineShape, ParallelepipedShape, PolygonShape, Shape, ShapeDescriptor,
    StarShape,
};
use barrage_core::spin::Orientation;
use barrage_core::{PatternError, Point, Vector};

fn assert_points_close(a: &[Point], b: &[Point], tol: f64) {
    assert_eq!(a.len(), b.len(), "point counts differ");
    for (i, (p, q)) in a.iter().zip(b).enumerate() {
        assert!(p.distance(q) < tol, "point {} differs: {:?} vs {:?}", i, p, q);
    }
}

#[test]
fn test_line_excludes_end_by_default() {
    let start = Point::ORIGIN;
    let end = Point::new(10.0, 20.0, -5.0);
    let pts = LineShape::new(start, end, 5).points().unwrap();

    assert_eq!(pts.len(), 5);
    for (i, p) in pts.iter().enumerate() {
        let expected = start.subdivide(&end, i, 5);
        assert!(p.distance(&expected) < 1e-12, "point {}: {:?}", i, p);
        assert!(p.distance(&end) > 1e-9, "point {} should not reach the end", i);
    }
    // Spacing is as if a sixth point sat on the end
    assert!((pts[4].distance(&end) - pts[0].distance(&pts[1])).abs() < 1e-9);
}

#[test]
fn test_line_with_end_included() {
    let start = Point::flat(0.0, 0.0);
    let end = Point::flat(8.0, 0.0);
    let pts = LineShape::new(start, end, 5)
        .with_end_included(true)
        .points()
        .unwrap();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_circle_points_on_ring() {
    let pts = CircleShape::new(Point::ORIGIN, 4, 10.0).points().unwrap();
    assert_eq!(pts.len(), 4);

    for p in &pts {
        assert!((p.distance(&Point::ORIGIN) - 10.0).abs() < 1e-9, "off ring: {:?}", p);
        assert!(p.z.abs() < 1e-12, "left the z=0 plane: {:?}", p);
    }
    for i in 0..4 {
        let a = pts[i];
        let b = pts[(i + 1) % 4];
        let dot = a.x * b.x + a.y * b.y + a.z * b.z;
        assert!(dot.abs() < 1e-9, "points {} and {} are not 90 degrees apart", i, i + 1);
    }

    // Index 0 lands on -x for the default normal
    assert!((pts[0].x + 10.0).abs() < 1e-9 && pts[0].y.abs() < 1e-9, "{:?}", pts[0]);
}

#[test]
fn test_circle_angle_rotates_ring() {
    let base = CircleShape::new(Point::flat(50.0, 50.0), 6, 30.0);
    let turned = base.clone().with_angle(60.0).points().unwrap();
    let original = base.points().unwrap();
    // One step of a 6-point ring is 60 degrees
    let mut rotated = original.clone();
    rotated.rotate_left(1);
    assert_points_close(&turned, &rotated, 1e-9);
}

#[test]
fn test_circle_tilted_normal_stays_perpendicular() {
    let normal = Vector::new(1.0, 0.5, 0.2);
    let center = Point::new(100.0, 100.0, 0.0);
    let pts = CircleShape::new(center, 12, 40.0)
        .with_normal(normal)
        .points()
        .unwrap();
    for p in &pts {
        let offset = Vector::new(p.x - center.x, p.y - center.y, p.z - center.z);
        assert!((offset.magnitude() - 40.0).abs() < 1e-9);
        // x/y are mirrored relative to z, so the ring lies in the plane
        // perpendicular to (-nx, -ny, nz)
        let mirrored = Vector::new(-normal.x, -normal.y, normal.z);
        assert!(offset.dot(&mirrored).abs() < 1e-9, "{:?} not in ring plane", p);
    }
}

#[test]
fn test_polygon_edge_count_mismatch() {
    let err = PolygonShape::new(Point::ORIGIN, 3, EdgeCounts::PerEdge(vec![5, 5]), 100.0)
        .points()
        .unwrap_err();
    assert_eq!(err, PatternError::EdgeCountMismatch { expected: 3, actual: 2 });
}

#[test]
fn test_polygon_per_edge_counts() {
    let pts = PolygonShape::new(Point::ORIGIN, 3, EdgeCounts::PerEdge(vec![5, 5, 5]), 100.0)
        .points()
        .unwrap();
    assert_eq!(pts.len(), 3 * 3);

    let uneven = PolygonShape::new(Point::ORIGIN, 3, EdgeCounts::PerEdge(vec![5, 10, 10]), 100.0)
        .points()
        .unwrap();
    assert_eq!(uneven.len(), 3 + 8 + 8);
}

#[test]
fn test_polygon_starts_each_edge_on_a_vertex() {
    let orientation = Orientation::default();
    let vertices = ring_vertices(&Point::ORIGIN, 4, 50.0, 0.0, &orientation.normal.unit_vectors());
    let pts = PolygonShape::new(Point::ORIGIN, 4, EdgeCounts::Uniform(6), 50.0)
        .points()
        .unwrap();
    // 4 stamps per edge
    assert_eq!(pts.len(), 16);
    for (i, v) in vertices.iter().enumerate() {
        assert!(pts[i * 4].distance(v) < 1e-12, "edge {} does not start on its vertex", i);
    }
}

#[test]
fn test_polygon_star_stride_skips_a_vertex() {
    let center = Point::flat(10.0, 10.0);
    let vertices = circle_points(&center, 5, 20.0, &Orientation::default());
    let pts = PolygonShape::new(center, 5, EdgeCounts::Uniform(4), 20.0)
        .with_star_stride(true)
        .points()
        .unwrap();
    // 2 stamps per edge: the vertex and the midpoint toward vertex i + 2
    assert_eq!(pts.len(), 10);
    for i in 0..5 {
        let target = vertices[(i + 2) % 5];
        let mid = vertices[i].subdivide(&target, 1, 2);
        assert!(pts[2 * i + 1].distance(&mid) < 1e-9, "edge {} midpoint {:?}", i, pts[2 * i + 1]);
    }
}

#[test]
fn test_small_counts_produce_empty_edges() {
    let pts = PolygonShape::new(Point::ORIGIN, 4, EdgeCounts::Uniform(1), 10.0)
        .points()
        .unwrap();
    assert!(pts.is_empty());
}

#[test]
fn test_filled_star_matches_star_polygon() {
    let center = Point::flat(200.0, 200.0);
    let star = StarShape::new(center, 6, EdgeCounts::Uniform(5), 100.0)
        .with_angle(30.0)
        .with_fill_inner(true)
        .with_concave(0.9)
        .with_skew(0.25);
    let polygon = PolygonShape::new(center, 6, EdgeCounts::Uniform(5), 100.0)
        .with_angle(30.0)
        .with_star_stride(true);
    assert_eq!(star.points().unwrap(), polygon.points().unwrap());
}

#[test]
fn test_star_outline_alternates_vertices_and_valleys() {
    let radius = 100.0;
    let pts = StarShape::new(Point::ORIGIN, 4, EdgeCounts::Uniform(2), radius)
        .points()
        .unwrap();
    // One stamp per segment: each segment's start
    assert_eq!(pts.len(), 8);
    let valley = radius * (std::f64::consts::PI / 4.0).cos() * 0.5;
    for (i, p) in pts.iter().enumerate() {
        let r = p.distance(&Point::ORIGIN);
        let expected = if i % 2 == 0 { radius } else { valley };
        assert!((r - expected).abs() < 1e-9, "stamp {} at radius {}", i, r);
    }
}

#[test]
fn test_star_full_skew_is_identity() {
    let base = StarShape::new(Point::flat(5.0, 5.0), 5, EdgeCounts::Uniform(5), 100.0);
    let skewed = base.clone().with_skew(1.0);
    assert_points_close(&base.points().unwrap(), &skewed.points().unwrap(), 1e-9);
}

#[test]
fn test_star_outline_count() {
    let pts = StarShape::new(Point::ORIGIN, 5, EdgeCounts::Uniform(5), 100.0)
        .points()
        .unwrap();
    assert_eq!(pts.len(), 2 * 5 * 4);
}

#[test]
fn test_star_outline_rejects_bad_counts() {
    let err = StarShape::new(Point::ORIGIN, 5, EdgeCounts::PerEdge(vec![3; 4]), 100.0)
        .points()
        .unwrap_err();
    assert_eq!(err, PatternError::EdgeCountMismatch { expected: 5, actual: 4 });
}

#[test]
fn test_corner_offsets_cover_every_sign_once() {
    let corners = corner_offsets(&[Vector::X, Vector::Y, Vector::Z]);
    let mut seen = Vec::new();
    for c in &corners {
        for component in [c.x, c.y, c.z] {
            assert!(component == 1.0 || component == -1.0, "corner {} is not a unit sign", c);
        }
        assert!(!seen.contains(c), "corner {} repeated", c);
        seen.push(*c);
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_parallelepiped_starts_on_corners() {
    let center = Point::new(200.0, 200.0, 0.0);
    let edges = [
        Vector::new(70.0, 0.0, 0.0),
        Vector::new(0.0, 70.0, 0.0),
        Vector::new(0.0, 0.0, 70.0),
    ];
    let pts = ParallelepipedShape::uniform(center, 10, edges).points().unwrap();
    assert_eq!(pts.len(), 12 * 8);

    // First edge starts on the (+,+,+) corner
    assert_eq!(pts[0], Point::new(270.0, 270.0, 70.0));
    // Every stamp lies on the surface of the box
    for p in &pts {
        let dx = (p.x - center.x).abs();
        let dy = (p.y - center.y).abs();
        let dz = (p.z - center.z).abs();
        assert!(dx <= 70.0 + 1e-9 && dy <= 70.0 + 1e-9 && dz <= 70.0 + 1e-9);
        let on_edges = [dx, dy, dz].iter().filter(|d| (**d - 70.0).abs() < 1e-9).count();
        assert!(on_edges >= 2, "{:?} is not on an edge", p);
    }
}

#[test]
fn test_descriptor_dispatch_matches_variants() {
    let circle = CircleShape::new(Point::flat(1.0, 2.0), 7, 3.0).with_scale(0.5);
    let descriptor: ShapeDescriptor = circle.clone().into();
    assert_eq!(descriptor.kind(), "circle");
    assert_eq!(descriptor.scale(), 0.5);
    assert_eq!(descriptor.points().unwrap(), circle.points().unwrap());
}

#[test]
fn test_generate_spins_after_points() {
    let mut circle = CircleShape::new(Point::ORIGIN, 4, 10.0).with_spin(90.0);
    let first = circle.generate().unwrap();
    let second = circle.generate().unwrap();
    assert_eq!(circle.orientation.angle, 180.0);
    let mut rotated = first.clone();
    rotated.rotate_left(1);
    assert_points_close(&second, &rotated, 1e-9);
}
