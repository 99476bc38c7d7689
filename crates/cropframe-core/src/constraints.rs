//! Constraint and clamp engine.
//!
//! Applied after every recomputation of a drag, in this order:
//!
//! 1. Aspect lock: an edge resize with `lock_aspect` drives the other
//!    dimension from the starting aspect ratio.
//! 2. Size limits: width/height (or radius) are clamped to the configured
//!    minimum and maximum, keeping the active mode's anchor fixed.
//! 3. Bounds: the shape is kept inside `bounds`. Resizes shrink toward their
//!    anchor; moves and rotations translate back inside, shrinking about the
//!    centre only when the shape cannot fit at all.
//!
//! Nothing here fails. Out-of-range results are clamped, and where limits
//! conflict the bounds win over the size limits.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::geometry::{Anchor, Circle, Point, Quad, Rect, RectFrame, Shape, Size};
use crate::session::DragMode;

/// Smallest width, height or radius the engine will produce.
pub const MIN_EXTENT: f64 = 1.0;

/// Slack allowed when checking containment in bounds.
const CONTAINMENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Region the shape's full extent must stay inside.
    pub bounds: Option<Rect>,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    /// Preserve the starting aspect ratio during edge resizes.
    pub lock_aspect: bool,
}

impl Constraints {
    /// No limits beyond the engine's minimum extent.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if let Some(b) = self.bounds {
            let finite = b.x.is_finite() && b.y.is_finite() && b.width.is_finite() && b.height.is_finite();
            if !finite || b.width <= 0.0 || b.height <= 0.0 {
                return Err(TransformError::InvalidConstraints(format!(
                    "bounds must be a finite, non-empty rectangle, got {b:?}"
                )));
            }
        }

        for (name, size) in [("min_size", self.min_size), ("max_size", self.max_size)] {
            if let Some(s) = size {
                if !(s.width.is_finite() && s.width > 0.0 && s.height.is_finite() && s.height > 0.0) {
                    return Err(TransformError::InvalidConstraints(format!(
                        "{name} must be positive, got {s:?}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min.width > max.width || min.height > max.height {
                return Err(TransformError::InvalidConstraints(format!(
                    "min_size {min:?} exceeds max_size {max:?}"
                )));
            }
        }

        for (name, radius) in [("min_radius", self.min_radius), ("max_radius", self.max_radius)] {
            if let Some(r) = radius {
                if !(r.is_finite() && r > 0.0) {
                    return Err(TransformError::InvalidConstraints(format!(
                        "{name} must be positive, got {r}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_radius, self.max_radius) {
            if min > max {
                return Err(TransformError::InvalidConstraints(format!(
                    "min_radius {min} exceeds max_radius {max}"
                )));
            }
        }
        Ok(())
    }

    /// Constrain the shape produced by a drag in `mode`.
    ///
    /// `start` is the session's snapshot; it supplies the aspect ratio for
    /// `lock_aspect`. A shape that already satisfies every constraint is
    /// returned unchanged.
    pub fn apply(&self, shape: &Shape, mode: DragMode, start: &Shape) -> Shape {
        match (shape, start) {
            (Shape::Quad(quad), Shape::Quad(start)) => Shape::Quad(self.apply_quad(quad, mode, start)),
            (Shape::Quad(quad), Shape::Circle(_)) => Shape::Quad(self.apply_quad(quad, mode, quad)),
            (Shape::Circle(circle), _) => Shape::Circle(self.apply_circle(circle, mode)),
        }
    }

    fn apply_quad(&self, quad: &Quad, mode: DragMode, start: &Quad) -> Quad {
        let original = quad.frame();
        let anchor = anchor_for(mode);
        let mut frame = original;

        let locked_edge = match mode {
            DragMode::ResizeEdge(edge) if self.lock_aspect => Some(edge),
            _ => None,
        };
        let aspect = start.frame().aspect();
        if let Some(edge) = locked_edge.filter(|_| aspect.is_finite() && aspect > 0.0) {
            let (w, h) = if edge.is_horizontal_resize() {
                (frame.width, frame.width / aspect)
            } else {
                (frame.height * aspect, frame.height)
            };
            frame = frame.resized_about(anchor, w, h);
        }

        let proportional = locked_edge.is_some() || matches!(mode, DragMode::ResizeCorner(_));
        frame = self.clamp_frame_size(frame, anchor, proportional);

        if let Some(bounds) = self.bounds {
            frame = fit_frame(frame, &bounds, mode, anchor, proportional);
        }

        if frame == original {
            *quad
        } else {
            Quad::from_frame(&frame)
        }
    }

    fn size_limits(&self) -> (Size, Size) {
        let min = self.min_size.unwrap_or(Size::new(MIN_EXTENT, MIN_EXTENT));
        let min = Size::new(min.width.max(MIN_EXTENT), min.height.max(MIN_EXTENT));
        let max = self
            .max_size
            .unwrap_or(Size::new(f64::INFINITY, f64::INFINITY));
        (min, max)
    }

    fn clamp_frame_size(&self, frame: RectFrame, anchor: Anchor, proportional: bool) -> RectFrame {
        let (w, h) = (frame.width, frame.height);
        // A zero-sized frame has no scale to clamp.
        if !(w > 0.0 && h > 0.0) {
            return frame;
        }
        let (min, max) = self.size_limits();

        let (new_w, new_h) = if proportional {
            // One factor for both dimensions; when limits conflict the
            // minimum wins.
            let lo = (min.width / w).max(min.height / h);
            let hi = (max.width / w).min(max.height / h);
            let scale = if lo > hi { lo } else { 1.0f64.max(lo).min(hi) };
            (w * scale, h * scale)
        } else {
            (w.min(max.width).max(min.width), h.min(max.height).max(min.height))
        };

        if new_w == w && new_h == h {
            frame
        } else {
            frame.resized_about(anchor, new_w, new_h)
        }
    }

    fn apply_circle(&self, circle: &Circle, mode: DragMode) -> Circle {
        let min_r = self.min_radius.unwrap_or(MIN_EXTENT).max(MIN_EXTENT);
        let max_r = self.max_radius.unwrap_or(f64::INFINITY);
        let mut radius = circle.radius.min(max_r).max(min_r);
        let mut center = circle.center;

        if let Some(b) = self.bounds {
            let fit_radius = b.width.min(b.height) / 2.0;
            radius = radius.min(fit_radius);

            let room = (center.x - b.min_x())
                .min(b.max_x() - center.x)
                .min(center.y - b.min_y())
                .min(b.max_y() - center.y);
            if mode == DragMode::ResizeRadius && room >= MIN_EXTENT.min(fit_radius) {
                // Centre stays put; the radius stops at the nearest side.
                radius = radius.min(room);
            } else {
                center = Point::new(
                    fit_range(center.x, b.min_x() + radius, b.max_x() - radius),
                    fit_range(center.y, b.min_y() + radius, b.max_y() - radius),
                );
            }
        }

        if radius == circle.radius && center == circle.center {
            *circle
        } else {
            Circle::new(center, radius)
        }
    }
}

/// Point of the frame that stays fixed while a clamp resizes it.
fn anchor_for(mode: DragMode) -> Anchor {
    match mode {
        DragMode::ResizeEdge(edge) => edge.opposite().anchor(),
        DragMode::ResizeCorner(corner) => corner.opposite().anchor(),
        DragMode::Move | DragMode::Rotate | DragMode::ResizeRadius => Anchor::CENTER,
    }
}

/// Clamp `value` into `[lo, hi]`, settling on the midpoint if the range is
/// inverted by rounding.
fn fit_range(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) / 2.0
    } else {
        value.max(lo).min(hi)
    }
}

fn frame_bounds(frame: &RectFrame) -> Rect {
    Rect::from_points(&frame.corners())
}

fn fit_frame(
    frame: RectFrame,
    bounds: &Rect,
    mode: DragMode,
    anchor: Anchor,
    proportional: bool,
) -> RectFrame {
    if bounds.contains_rect(&frame_bounds(&frame), CONTAINMENT_EPSILON) {
        return frame;
    }

    let is_resize = matches!(mode, DragMode::ResizeEdge(_) | DragMode::ResizeCorner(_));
    if is_resize && bounds.contains_point(frame.anchor_point(anchor)) {
        let (drive_u, drive_v) = match mode {
            DragMode::ResizeEdge(edge) if !proportional => {
                (edge.is_horizontal_resize(), !edge.is_horizontal_resize())
            }
            _ => (true, true),
        };
        let k = max_scale_in_bounds(&frame, bounds, anchor, drive_u, drive_v);
        let w = if drive_u { (frame.width * k).max(MIN_EXTENT) } else { frame.width };
        let h = if drive_v { (frame.height * k).max(MIN_EXTENT) } else { frame.height };
        let shrunk = frame.resized_about(anchor, w, h);
        if bounds.contains_rect(&frame_bounds(&shrunk), CONTAINMENT_EPSILON) {
            return shrunk;
        }
    }

    translate_into(frame, bounds)
}

/// Largest factor `k` in `[0, 1]` for which scaling the driven dimensions of
/// `frame` about `anchor` keeps every corner inside `bounds`.
///
/// Each corner moves linearly in `k`, so every bound gives one upper limit.
fn max_scale_in_bounds(
    frame: &RectFrame,
    bounds: &Rect,
    anchor: Anchor,
    drive_u: bool,
    drive_v: bool,
) -> f64 {
    let fixed = frame.anchor_point(anchor);
    let u = frame.u_axis();
    let v = frame.v_axis();

    let mut k = 1.0f64;
    for corner in [Anchor::NW, Anchor::NE, Anchor::SE, Anchor::SW] {
        let du = u.scale((corner.u - anchor.u) * frame.width);
        let dv = v.scale((corner.v - anchor.v) * frame.height);
        let (mut base, mut slope) = (fixed, Point::ORIGIN);
        if drive_u {
            slope = slope.add(du);
        } else {
            base = base.add(du);
        }
        if drive_v {
            slope = slope.add(dv);
        } else {
            base = base.add(dv);
        }

        for (b, s, lo, hi) in [
            (base.x, slope.x, bounds.min_x(), bounds.max_x()),
            (base.y, slope.y, bounds.min_y(), bounds.max_y()),
        ] {
            if s > 0.0 {
                k = k.min((hi - b) / s);
            } else if s < 0.0 {
                k = k.min((lo - b) / s);
            }
        }
    }
    k.max(0.0)
}

/// Shrink about the centre if the frame cannot fit, then slide it inside.
fn translate_into(frame: RectFrame, bounds: &Rect) -> RectFrame {
    let mut frame = frame;
    let extent = frame_bounds(&frame);
    let fit = (bounds.width / extent.width).min(bounds.height / extent.height);
    if fit < 1.0 {
        frame = frame.resized_about(Anchor::CENTER, frame.width * fit, frame.height * fit);
    }

    let extent = frame_bounds(&frame);
    let dx = if extent.min_x() < bounds.min_x() {
        bounds.min_x() - extent.min_x()
    } else if extent.max_x() > bounds.max_x() {
        bounds.max_x() - extent.max_x()
    } else {
        0.0
    };
    let dy = if extent.min_y() < bounds.min_y() {
        bounds.min_y() - extent.min_y()
    } else if extent.max_y() > bounds.max_y() {
        bounds.max_y() - extent.max_y()
    } else {
        0.0
    };
    frame.translated(Point::new(dx, dy))
}
