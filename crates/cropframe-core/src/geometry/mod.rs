//! 2-D geometry for selection regions.
//!
//! This module provides the value types and pure math the transform engine is
//! built on:
//!
//! - [`Point`], [`Size`] and [`Rect`] - plain real-valued coordinates
//! - [`Quad`] and [`Circle`] - the two editable shape kinds, joined by [`Shape`]
//! - [`RectFrame`] - a quad expressed as origin, size and angle, used by every
//!   resize so a pivot can stay fixed on rotated quads
//! - [`primitives`] - centroid, inset, rotate, translate and containment tests
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the shape's container
//! - X grows to the right, Y grows downward
//! - Angles are in radians unless a name says `degrees`; positive angles turn
//!   clockwise on screen (from +X toward +Y)

mod frame;
pub mod primitives;
mod shape;

pub use frame::{Anchor, RectFrame};
pub use primitives::{
    centroid, distance, inset_toward_center, normalize_degrees, point_in_circle,
    point_in_convex_polygon, rotate_around, translate,
};
pub use shape::{Circle, Corner, Edge, Quad, Shape};

use serde::{Deserialize, Serialize};

/// A point (or vector) in local space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise sum `self + other`.
    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3-D cross product of two 2-D vectors.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of this vector from +X in radians, in (-π, π].
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of an unrotated extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, used for bounds and bounding boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point. An empty slice gives a
    /// zero-sized rectangle at the origin.
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Rect::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Whether `other` lies entirely inside this rectangle, allowing `eps`
    /// of floating-point slack on every side.
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.min_x() >= self.min_x() - eps
            && other.min_y() >= self.min_y() - eps
            && other.max_x() <= self.max_x() + eps
            && other.max_y() <= self.max_y() + eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(a.sub(b), Point::new(2.0, 3.0));
        assert_eq!(a.add(b), Point::new(4.0, 5.0));
        assert_eq!(a.scale(2.0), Point::new(6.0, 8.0));
        assert!((a.length() - 5.0).abs() < 1e-12);
        assert!((a.dot(b) - 7.0).abs() < 1e-12);
        assert!((a.cross(b) - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_from_points() {
        let rect = Rect::from_points(&[
            Point::new(10.0, 5.0),
            Point::new(-2.0, 8.0),
            Point::new(4.0, -3.0),
        ]);
        assert_eq!(rect, Rect::new(-2.0, -3.0, 12.0, 11.0));
        assert_eq!(Rect::from_points(&[]), Rect::default());
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(outer.contains_point(Point::new(100.0, 50.0)));
        assert!(!outer.contains_point(Point::new(100.1, 10.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0), 0.0));
        assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0), 0.0));
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0 + 1e-10, 50.0), 1e-9));
    }
}
