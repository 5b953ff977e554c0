//! Point generators for each shape family.
//!
//! Every generator is a pure function of geometry and current orientation and
//! returns the stamps in draw order. Edges never include their end point, so
//! a vertex shared by two edges is stamped once per edge that starts there.

use std::f64::consts::PI;

use crate::error::PatternError;
use crate::math::{angle_distribution, to_radians};
use crate::point::Point;
use crate::shapes::EdgeCounts;
use crate::spin::Orientation;
use crate::vector::Vector;

/// Sign of each edge vector for the eight parallelepiped corners. Corners
/// 0..4 and 4..8 form the two opposite faces, walked in the same order.
pub const CORNER_SIGNS: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

fn push_line(out: &mut Vec<Point>, start: &Point, end: &Point, number: usize, include_end: bool) {
    let total = number - usize::from(include_end && number > 0);
    out.extend((0..number).map(|i| start.subdivide(end, i, total)));
}

/// `number` evenly spaced stamps from `start` toward `end`.
///
/// With `include_end` the last stamp lands on `end`; otherwise spacing is
/// computed as if one more stamp followed the last one.
pub fn line_points(start: &Point, end: &Point, number: usize, include_end: bool) -> Vec<Point> {
    let mut out = Vec::with_capacity(number);
    push_line(&mut out, start, end, number, include_end);
    out
}

/// `count` points spread evenly on a ring around `center`, the first one at
/// `angle` degrees from the top.
pub fn ring_vertices(
    center: &Point,
    count: usize,
    radius: f64,
    angle: f64,
    basis: &(Vector, Vector),
) -> Vec<Point> {
    (0..count)
        .map(|i| center.translated_by_basis(basis, radius, angle_distribution(i, count, angle)))
        .collect()
}

pub fn circle_points(center: &Point, number: usize, radius: f64, orientation: &Orientation) -> Vec<Point> {
    let basis = orientation.normal.unit_vectors();
    ring_vertices(center, number, radius, orientation.angle, &basis)
}

/// Outline of a regular polygon with `side` vertices.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1`, or `i + 2` when
/// `is_star` is set, which traces the star polygon through every other
/// vertex. Each edge gets two fewer stamps than its count.
pub fn polygon_points(
    center: &Point,
    side: usize,
    counts: &EdgeCounts,
    radius: f64,
    orientation: &Orientation,
    is_star: bool,
) -> Result<Vec<Point>, PatternError> {
    let counts = counts.resolve(side)?;
    if side == 0 {
        return Ok(Vec::new());
    }

    let basis = orientation.normal.unit_vectors();
    let vertices = ring_vertices(center, side, radius, orientation.angle, &basis);
    let stride = 1 + usize::from(is_star);

    let mut out = Vec::new();
    for (i, count) in counts.iter().enumerate() {
        let end = &vertices[(i + stride) % side];
        push_line(&mut out, &vertices[i], end, count.saturating_sub(2), false);
    }
    Ok(out)
}

/// Outline of a star with `side` spikes.
///
/// Valleys sit between neighbouring vertices at `radius·cos(π/side)·concave`
/// from the center, turned by half a vertex step plus `skew` full turns.
/// Spike `i` draws vertex `i` to valley `i` and valley `i` to vertex `i + 1`,
/// each with one stamp fewer than its count.
pub fn star_points(
    center: &Point,
    side: usize,
    counts: &EdgeCounts,
    radius: f64,
    orientation: &Orientation,
    concave: f64,
    skew: f64,
) -> Result<Vec<Point>, PatternError> {
    let counts = counts.resolve(side)?;
    if side == 0 {
        return Ok(Vec::new());
    }

    let basis = orientation.normal.unit_vectors();
    let valley_radius = radius * (PI / side as f64).cos() * concave;
    let valley_turn = to_radians(180.0 / side as f64 + skew * 360.0);

    let mut vertices = Vec::with_capacity(side);
    let mut valleys = Vec::with_capacity(side);
    for i in 0..side {
        let theta = angle_distribution(i, side, orientation.angle);
        vertices.push(center.translated_by_basis(&basis, radius, theta));
        valleys.push(center.translated_by_basis(&basis, valley_radius, theta + valley_turn));
    }

    let mut out = Vec::new();
    for (i, count) in counts.iter().enumerate() {
        let number = count.saturating_sub(1);
        push_line(&mut out, &vertices[i], &valleys[i], number, false);
        push_line(&mut out, &valleys[i], &vertices[(i + 1) % side], number, false);
    }
    Ok(out)
}

/// Offsets from the center to each corner: `Σ sign_k · edge_k`.
pub fn corner_offsets(edges: &[Vector; 3]) -> [Vector; 8] {
    CORNER_SIGNS.map(|signs| {
        Vector::new(
            edges[0].x * signs[0] + edges[1].x * signs[1] + edges[2].x * signs[2],
            edges[0].y * signs[0] + edges[1].y * signs[1] + edges[2].y * signs[2],
            edges[0].z * signs[0] + edges[1].z * signs[1] + edges[2].z * signs[2],
        )
    })
}

/// Wireframe of the parallelepiped spanned by `edges` around `center`.
///
/// `counts` are per axis: face edges alternate between `counts[0]` and
/// `counts[1]`, and the four edges joining the faces use `counts[2]`. Each
/// edge gets two fewer stamps than its count.
pub fn parallelepiped_points(center: &Point, counts: [usize; 3], edges: &[Vector; 3]) -> Vec<Point> {
    let corners = corner_offsets(edges).map(|offset| center.translated_by(&offset));

    let mut out = Vec::new();
    for i in 0..4 {
        let face_count = if i % 2 == 0 { counts[0] } else { counts[1] };
        for face in [0, 4] {
            let start = &corners[i + face];
            let end = &corners[(i + 1) % 4 + face];
            push_line(&mut out, start, end, face_count.saturating_sub(2), false);
        }
        push_line(&mut out, &corners[i], &corners[i + 4], counts[2].saturating_sub(2), false);
    }
    out
}
