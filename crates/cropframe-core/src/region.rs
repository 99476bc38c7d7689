//! Export of a committed shape to the region effects read.
//!
//! Crop, pixelation and watermark engines work on image pixels, not on the
//! editor's container space. [`EffectRegion`] restates a shape in normalized
//! image coordinates, the same 0.0 to 1.0, top-left origin convention the
//! crop pipeline takes, plus the rotation needed to reproduce a rotated quad.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Rect,
    Ellipse,
}

/// Shape restated in normalized image coordinates.
///
/// `left`, `top`, `width` and `height` describe the unrotated frame placed
/// about the shape's centre; `rotation_degrees` turns it about that centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectRegion {
    pub kind: RegionKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in `[0, 360)`.
    pub rotation_degrees: f64,
}

impl EffectRegion {
    /// Normalize `shape`, given in the local space of an image displayed at
    /// `image_width` x `image_height`, to the unit square.
    ///
    /// Coordinates are clamped to `[0, 1]`. A zero-sized image yields an
    /// empty region at the origin.
    pub fn from_shape(shape: &Shape, image_width: f64, image_height: f64) -> Self {
        let (kind, width, height, rotation_degrees) = match shape {
            Shape::Quad(q) => (RegionKind::Rect, q.width(), q.height(), q.rotation_degrees()),
            Shape::Circle(c) => (RegionKind::Ellipse, c.radius * 2.0, c.radius * 2.0, 0.0),
        };

        if image_width <= 0.0 || image_height <= 0.0 {
            return Self {
                kind,
                left: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
                rotation_degrees,
            };
        }

        let center = shape.center();
        let left = (center.x - width / 2.0) / image_width;
        let top = (center.y - height / 2.0) / image_height;
        let right = (center.x + width / 2.0) / image_width;
        let bottom = (center.y + height / 2.0) / image_height;

        let left = left.clamp(0.0, 1.0);
        let top = top.clamp(0.0, 1.0);
        Self {
            kind,
            left,
            top,
            width: right.clamp(0.0, 1.0) - left,
            height: bottom.clamp(0.0, 1.0) - top,
            rotation_degrees,
        }
    }

    /// Whether a crop of this region needs a rotation pass first.
    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees.abs() > 1e-3 && (360.0 - self.rotation_degrees).abs() > 1e-3
    }

    /// The region in pixels of an image of the given size.
    pub fn to_pixels(&self, image_width: f64, image_height: f64) -> Rect {
        Rect::new(
            self.left * image_width,
            self.top * image_height,
            self.width * image_width,
            self.height * image_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Point, Quad};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_axis_aligned_quad() {
        let shape = Shape::Quad(Quad::from_rect(100.0, 50.0, 200.0, 100.0));
        let region = EffectRegion::from_shape(&shape, 400.0, 200.0);
        assert_eq!(region.kind, RegionKind::Rect);
        assert!((region.left - 0.25).abs() < EPS);
        assert!((region.top - 0.25).abs() < EPS);
        assert!((region.width - 0.5).abs() < EPS);
        assert!((region.height - 0.5).abs() < EPS);
        assert!(!region.is_rotated());
    }

    #[test]
    fn test_rotated_quad_keeps_frame() {
        let quad = Quad::from_rect(100.0, 50.0, 200.0, 100.0).rotated(Point::new(200.0, 100.0), 0.5);
        let region = EffectRegion::from_shape(&Shape::Quad(quad), 400.0, 200.0);
        // Unrotated frame about the same centre
        assert!((region.left - 0.25).abs() < 1e-6);
        assert!((region.width - 0.5).abs() < 1e-6);
        assert!((region.rotation_degrees - 0.5f64.to_degrees()).abs() < 1e-6);
        assert!(region.is_rotated());
    }

    #[test]
    fn test_circle_region() {
        let shape = Shape::Circle(Circle::new(Point::new(100.0, 100.0), 50.0));
        let region = EffectRegion::from_shape(&shape, 200.0, 200.0);
        assert_eq!(region.kind, RegionKind::Ellipse);
        assert!((region.left - 0.25).abs() < EPS);
        assert!((region.width - 0.5).abs() < EPS);
        let px = region.to_pixels(200.0, 200.0);
        assert!((px.x - 50.0).abs() < EPS && (px.width - 100.0).abs() < EPS);
    }

    #[test]
    fn test_region_clamped_to_image() {
        let shape = Shape::Quad(Quad::from_rect(-50.0, -50.0, 100.0, 100.0));
        let region = EffectRegion::from_shape(&shape, 100.0, 100.0);
        assert_eq!(region.left, 0.0);
        assert_eq!(region.top, 0.0);
        assert!((region.width - 0.5).abs() < EPS);
    }

    #[test]
    fn test_zero_sized_image() {
        let shape = Shape::Quad(Quad::from_rect(0.0, 0.0, 10.0, 10.0));
        let region = EffectRegion::from_shape(&shape, 0.0, 100.0);
        assert_eq!(region.width, 0.0);
        assert_eq!(region.height, 0.0);
    }
}
