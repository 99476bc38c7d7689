//! A quad expressed as a rotated rectangle.
//!
//! Resize math is done in the frame's own axes so that a rotated quad resizes
//! along its sides rather than along the screen axes. `u` runs NW→NE and `v`
//! runs NW→SW; for an unrotated quad these are +X and +Y.

use serde::{Deserialize, Serialize};

use super::Point;

/// Normalized position inside a frame: `(0, 0)` is NW, `(1, 1)` is SE.
///
/// Anchors stay put while a frame is resized around them, which is how the
/// opposite corner or edge is held fixed during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub u: f64,
    pub v: f64,
}

impl Anchor {
    pub const NW: Anchor = Anchor { u: 0.0, v: 0.0 };
    pub const N: Anchor = Anchor { u: 0.5, v: 0.0 };
    pub const NE: Anchor = Anchor { u: 1.0, v: 0.0 };
    pub const E: Anchor = Anchor { u: 1.0, v: 0.5 };
    pub const SE: Anchor = Anchor { u: 1.0, v: 1.0 };
    pub const S: Anchor = Anchor { u: 0.5, v: 1.0 };
    pub const SW: Anchor = Anchor { u: 0.0, v: 1.0 };
    pub const W: Anchor = Anchor { u: 0.0, v: 0.5 };
    pub const CENTER: Anchor = Anchor { u: 0.5, v: 0.5 };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectFrame {
    /// World position of the NW corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation of the `u` axis from +X, in radians.
    pub angle: f64,
}

impl RectFrame {
    pub fn new(origin: Point, width: f64, height: f64, angle: f64) -> Self {
        Self {
            origin,
            width,
            height,
            angle,
        }
    }

    /// Unit vector along the frame's width (NW→NE).
    #[inline]
    pub fn u_axis(&self) -> Point {
        let (sin, cos) = self.angle.sin_cos();
        Point::new(cos, sin)
    }

    /// Unit vector along the frame's height (NW→SW).
    #[inline]
    pub fn v_axis(&self) -> Point {
        let (sin, cos) = self.angle.sin_cos();
        Point::new(-sin, cos)
    }

    /// World position of a normalized anchor.
    pub fn anchor_point(&self, anchor: Anchor) -> Point {
        self.origin
            .add(self.u_axis().scale(anchor.u * self.width))
            .add(self.v_axis().scale(anchor.v * self.height))
    }

    pub fn center(&self) -> Point {
        self.anchor_point(Anchor::CENTER)
    }

    /// Corner points in NW, NE, SE, SW order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.anchor_point(Anchor::NW),
            self.anchor_point(Anchor::NE),
            self.anchor_point(Anchor::SE),
            self.anchor_point(Anchor::SW),
        ]
    }

    /// Express a world point in frame coordinates, relative to the origin and
    /// measured along `u` and `v`.
    pub fn to_local(&self, p: Point) -> Point {
        let d = p.sub(self.origin);
        Point::new(d.dot(self.u_axis()), d.dot(self.v_axis()))
    }

    /// Express a world-space displacement along `u` and `v`.
    pub fn project_delta(&self, delta: Point) -> Point {
        Point::new(delta.dot(self.u_axis()), delta.dot(self.v_axis()))
    }

    /// Same angle, new size, with `anchor` left at the same world position.
    pub fn resized_about(&self, anchor: Anchor, width: f64, height: f64) -> RectFrame {
        let fixed = self.anchor_point(anchor);
        let origin = fixed
            .sub(self.u_axis().scale(anchor.u * width))
            .sub(self.v_axis().scale(anchor.v * height));
        RectFrame::new(origin, width, height, self.angle)
    }

    /// Same size and angle, shifted by `delta`.
    pub fn translated(&self, delta: Point) -> RectFrame {
        RectFrame::new(self.origin.add(delta), self.width, self.height, self.angle)
    }

    /// `width / height`, or 1.0 for a frame with no height.
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
