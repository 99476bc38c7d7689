//! Pure, stateless geometry helpers.
//!
//! Every function here is total: degenerate input (coincident points, zero
//! radius) produces a well-defined value instead of an error. Callers higher
//! up are responsible for not feeding degenerate shapes into a drag.

use super::Point;

/// Average of the four corner points of a quad.
#[inline]
pub fn centroid(points: &[Point; 4]) -> Point {
    let sum = points.iter().fold(Point::ORIGIN, |acc, p| acc.add(*p));
    sum.scale(0.25)
}

/// Move every point `ratio` of the way toward the centroid.
///
/// `ratio = 0.0` returns the points unchanged, `ratio = 1.0` collapses them
/// onto the centroid. The result is the inner boundary separating the rotate
/// zone from the move zone on a quad.
pub fn inset_toward_center(points: &[Point; 4], ratio: f64) -> [Point; 4] {
    let c = centroid(points);
    points.map(|p| p.add(c.sub(p).scale(ratio)))
}

/// Rotate `point` around `center` by `angle` radians.
///
/// Positive angles turn from +X toward +Y, which is clockwise on screen.
#[inline]
pub fn rotate_around(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let d = point.sub(center);
    Point::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

#[inline]
pub fn translate(point: Point, dx: f64, dy: f64) -> Point {
    Point::new(point.x + dx, point.y + dy)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    b.sub(a).length()
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Half-plane test against each edge of a convex polygon.
///
/// Works for either winding direction: the sign of the first non-zero cross
/// product fixes the orientation and the test fails at the first edge whose
/// cross product has the opposite sign. Points on an edge count as inside.
pub fn point_in_convex_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut orientation = 0.0f64;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let cross = b.sub(*a).cross(point.sub(*a));
        if cross == 0.0 {
            continue;
        }
        if orientation == 0.0 {
            orientation = cross.signum();
        } else if cross.signum() != orientation {
            return false;
        }
    }
    true
}

/// Squared-distance comparison; the boundary counts as inside.
#[inline]
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    let d = point.sub(center);
    d.dot(d) <= radius * radius
}
