//! Drag sessions: the snapshot taken on pointer-down and the per-mode
//! recomputation run on every pointer move.
//!
//! A session never mutates the previous frame. Each move derives a fresh
//! shape from the start-of-gesture snapshot and the total pointer
//! displacement, so long drags accumulate no floating-point drift.

use serde::{Deserialize, Serialize};

use super::snap::snap_angle;
use crate::config::TransformConfig;
use crate::constraints::MIN_EXTENT;
use crate::geometry::{distance, Circle, Corner, Edge, Point, Quad, Shape};
use crate::zone::InteractionZone;

/// What the active gesture does to the shape. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragMode {
    Move,
    Rotate,
    ResizeEdge(Edge),
    ResizeCorner(Corner),
    ResizeRadius,
}

impl DragMode {
    /// Drag mode started by pressing in `zone`, or `None` for
    /// [`InteractionZone::None`].
    pub fn from_zone(zone: InteractionZone) -> Option<DragMode> {
        match zone {
            InteractionZone::None => None,
            InteractionZone::Move => Some(DragMode::Move),
            InteractionZone::Rotate => Some(DragMode::Rotate),
            InteractionZone::ResizeEdge(edge) => Some(DragMode::ResizeEdge(edge)),
            InteractionZone::ResizeCorner(corner) => Some(DragMode::ResizeCorner(corner)),
            InteractionZone::ResizeRadius => Some(DragMode::ResizeRadius),
        }
    }

    pub fn zone(self) -> InteractionZone {
        match self {
            DragMode::Move => InteractionZone::Move,
            DragMode::Rotate => InteractionZone::Rotate,
            DragMode::ResizeEdge(edge) => InteractionZone::ResizeEdge(edge),
            DragMode::ResizeCorner(corner) => InteractionZone::ResizeCorner(corner),
            DragMode::ResizeRadius => InteractionZone::ResizeRadius,
        }
    }
}

/// Immutable record of one pointer-down-to-up gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSession {
    pub mode: DragMode,
    pub start_pointer: Point,
    pub start_shape: Shape,
    /// Centroid of a quad, centre of a circle.
    pub start_center: Point,
    /// Angle of `start_pointer` around `start_center`; set only for rotate.
    pub start_angle: Option<f64>,
}

impl TransformSession {
    pub fn begin(mode: DragMode, pointer: Point, shape: Shape) -> Self {
        let start_center = shape.center();
        let start_angle = match mode {
            DragMode::Rotate => Some(pointer.sub(start_center).angle()),
            _ => None,
        };
        Self {
            mode,
            start_pointer: pointer,
            start_shape: shape,
            start_center,
            start_angle,
        }
    }

    /// Shape produced by dragging the pointer to `pointer`, before constraints.
    ///
    /// A mode that does not apply to the snapshot's shape kind (an edge resize
    /// on a circle, say) leaves the snapshot unchanged.
    pub fn recompute(&self, pointer: Point, config: &TransformConfig) -> Shape {
        let delta = pointer.sub(self.start_pointer);

        match (self.mode, &self.start_shape) {
            (DragMode::Move, shape) => shape.translated(delta.x, delta.y),
            (DragMode::ResizeEdge(edge), Shape::Quad(quad)) => {
                Shape::Quad(resize_edge(quad, edge, delta))
            }
            (DragMode::ResizeCorner(corner), Shape::Quad(quad)) => Shape::Quad(resize_corner(
                quad,
                corner,
                self.start_pointer,
                pointer,
                config.scale_range,
            )),
            (DragMode::Rotate, Shape::Quad(quad)) => {
                let start_angle = self
                    .start_angle
                    .unwrap_or_else(|| self.start_pointer.sub(self.start_center).angle());
                Shape::Quad(rotate(quad, self.start_center, start_angle, pointer, config))
            }
            (DragMode::ResizeRadius, Shape::Circle(circle)) => Shape::Circle(Circle::new(
                circle.center,
                distance(pointer, circle.center),
            )),
            (_, shape) => *shape,
        }
    }
}

/// Non-proportional resize: only the dimension perpendicular to `edge`
/// changes and the opposite edge stays where it was.
fn resize_edge(quad: &Quad, edge: Edge, delta: Point) -> Quad {
    let frame = quad.frame();
    let d = frame.project_delta(delta);
    let (width, height) = match edge {
        Edge::W => (frame.width - d.x, frame.height),
        Edge::E => (frame.width + d.x, frame.height),
        Edge::N => (frame.width, frame.height - d.y),
        Edge::S => (frame.width, frame.height + d.y),
    };
    let resized = frame.resized_about(
        edge.opposite().anchor(),
        width.max(MIN_EXTENT),
        height.max(MIN_EXTENT),
    );
    Quad::from_frame(&resized)
}

/// Proportional resize about the opposite corner.
///
/// The scale factor is the ratio of the pointer's current and starting
/// distances from the pivot, clamped to `scale_range`.
fn resize_corner(
    quad: &Quad,
    corner: Corner,
    start_pointer: Point,
    pointer: Point,
    scale_range: (f64, f64),
) -> Quad {
    let pivot = quad.corner(corner.opposite());
    let start_distance = distance(start_pointer, pivot);
    let scale = if start_distance > f64::EPSILON {
        distance(pointer, pivot) / start_distance
    } else {
        1.0
    };
    let (lo, hi) = scale_range;
    let scale = scale.max(lo).min(hi);

    let frame = quad.frame();
    let resized = frame.resized_about(
        corner.opposite().anchor(),
        frame.width * scale,
        frame.height * scale,
    );
    Quad::from_frame(&resized)
}

/// Rotate the snapshot about its starting centre by the angle the pointer has
/// swept, snapping the resulting absolute rotation when configured.
fn rotate(
    quad: &Quad,
    center: Point,
    start_angle: f64,
    pointer: Point,
    config: &TransformConfig,
) -> Quad {
    let current_angle = pointer.sub(center).angle();
    let delta_degrees = (current_angle - start_angle).to_degrees();

    let base = quad.rotation_degrees();
    let mut target = base + delta_degrees;
    if let Some(snap) = &config.angle_snap {
        target = snap_angle(target, snap);
    }

    quad.rotated(center, (target - base).to_radians())
}
