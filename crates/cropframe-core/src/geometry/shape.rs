//! The two editable shape kinds and the closed union over them.

use serde::{Deserialize, Serialize};

use super::frame::{Anchor, RectFrame};
use super::primitives::{
    centroid, normalize_degrees, point_in_circle, point_in_convex_polygon, rotate_around,
    translate,
};
use super::{Point, Rect};
use crate::error::TransformError;

/// Relative tolerance used when checking that four points form a rectangle.
const RECTANGLE_TOLERANCE: f64 = 1e-6;

/// Corners of a quad, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NW,
    NE,
    SE,
    SW,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::NW, Corner::NE, Corner::SE, Corner::SW];

    /// Position of this corner in a quad's point array.
    pub const fn index(self) -> usize {
        match self {
            Corner::NW => 0,
            Corner::NE => 1,
            Corner::SE => 2,
            Corner::SW => 3,
        }
    }

    pub const fn opposite(self) -> Corner {
        match self {
            Corner::NW => Corner::SE,
            Corner::NE => Corner::SW,
            Corner::SE => Corner::NW,
            Corner::SW => Corner::NE,
        }
    }

    pub const fn anchor(self) -> Anchor {
        match self {
            Corner::NW => Anchor::NW,
            Corner::NE => Anchor::NE,
            Corner::SE => Anchor::SE,
            Corner::SW => Anchor::SW,
        }
    }
}

/// Sides of a quad, named by compass direction in the quad's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    N,
    E,
    S,
    W,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::N, Edge::E, Edge::S, Edge::W];

    pub const fn opposite(self) -> Edge {
        match self {
            Edge::N => Edge::S,
            Edge::E => Edge::W,
            Edge::S => Edge::N,
            Edge::W => Edge::E,
        }
    }

    /// Midpoint of this edge as a frame anchor.
    pub const fn anchor(self) -> Anchor {
        match self {
            Edge::N => Anchor::N,
            Edge::E => Anchor::E,
            Edge::S => Anchor::S,
            Edge::W => Anchor::W,
        }
    }

    /// Whether dragging this edge changes the width (as opposed to height).
    pub const fn is_horizontal_resize(self) -> bool {
        matches!(self, Edge::E | Edge::W)
    }
}

/// A possibly-rotated rectangle, stored as its corners in NW, NE, SE, SW order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub points: [Point; 4],
}

impl Quad {
    /// Axis-aligned quad with its NW corner at `(x, y)`.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_frame(&RectFrame::new(Point::new(x, y), width, height, 0.0))
    }

    pub fn from_frame(frame: &RectFrame) -> Self {
        Self {
            points: frame.corners(),
        }
    }

    /// Build a quad from externally supplied corners, checking that they are
    /// finite and form a rectangle with non-zero area.
    pub fn from_points(points: [Point; 4]) -> Result<Self, TransformError> {
        let quad = Self { points };
        quad.validate()?;
        Ok(quad)
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if !self.points.iter().all(|p| p.is_finite()) {
            return Err(TransformError::InvalidQuad(
                "corner coordinates must be finite".into(),
            ));
        }

        let [nw, ne, se, sw] = self.points;
        let top = ne.sub(nw);
        let left = sw.sub(nw);
        let (w, h) = (top.length(), left.length());
        if w <= f64::EPSILON || h <= f64::EPSILON {
            return Err(TransformError::InvalidQuad(format!(
                "zero-sized quad ({w} x {h})"
            )));
        }

        let scale = w.max(h);
        let opposite_sides_match = se.sub(sw).sub(top).length() <= RECTANGLE_TOLERANCE * scale
            && se.sub(ne).sub(left).length() <= RECTANGLE_TOLERANCE * scale;
        let perpendicular = (top.dot(left) / (w * h)).abs() <= RECTANGLE_TOLERANCE;
        if !opposite_sides_match || !perpendicular {
            return Err(TransformError::InvalidQuad(
                "corners do not form a rectangle".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        self.points[corner.index()]
    }

    pub fn center(&self) -> Point {
        centroid(&self.points)
    }

    /// Length of the NW→NE side.
    pub fn width(&self) -> f64 {
        self.points[1].sub(self.points[0]).length()
    }

    /// Length of the NW→SW side.
    pub fn height(&self) -> f64 {
        self.points[3].sub(self.points[0]).length()
    }

    /// Angle of the NW→NE side from +X, in radians.
    pub fn angle(&self) -> f64 {
        self.points[1].sub(self.points[0]).angle()
    }

    /// Rotation in degrees, normalized into `[0, 360)`.
    pub fn rotation_degrees(&self) -> f64 {
        normalize_degrees(self.angle().to_degrees())
    }

    pub fn frame(&self) -> RectFrame {
        RectFrame::new(self.points[0], self.width(), self.height(), self.angle())
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_points(&self.points)
    }

    pub fn contains(&self, p: Point) -> bool {
        point_in_convex_polygon(p, &self.points)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Quad {
        Quad {
            points: self.points.map(|p| translate(p, dx, dy)),
        }
    }

    pub fn rotated(&self, center: Point, angle: f64) -> Quad {
        Quad {
            points: self.points.map(|p| rotate_around(p, center, angle)),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !self.points.iter().all(|p| p.is_finite())
            || self.width() <= f64::EPSILON
            || self.height() <= f64::EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Like [`Circle::new`] but rejects non-positive or non-finite radii.
    pub fn try_new(center: Point, radius: f64) -> Result<Self, TransformError> {
        let circle = Self { center, radius };
        circle.validate()?;
        Ok(circle)
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if !self.center.is_finite() || !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(TransformError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        point_in_circle(p, self.center, self.radius)
    }

    pub fn is_degenerate(&self) -> bool {
        self.validate().is_err()
    }
}

/// An editable selection region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Quad(Quad),
    Circle(Circle),
}

impl Shape {
    /// Centroid of a quad or centre of a circle.
    pub fn center(&self) -> Point {
        match self {
            Shape::Quad(q) => q.center(),
            Shape::Circle(c) => c.center,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Quad(q) => q.bounding_rect(),
            Shape::Circle(c) => c.bounding_rect(),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Quad(q) => q.contains(p),
            Shape::Circle(c) => c.contains(p),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Quad(q) => Shape::Quad(q.translated(dx, dy)),
            Shape::Circle(c) => Shape::Circle(Circle::new(translate(c.center, dx, dy), c.radius)),
        }
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        match self {
            Shape::Quad(q) => q.validate(),
            Shape::Circle(c) => c.validate(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Quad(q) => q.is_degenerate(),
            Shape::Circle(c) => c.is_degenerate(),
        }
    }
}

impl From<Quad> for Shape {
    fn from(q: Quad) -> Self {
        Shape::Quad(q)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
