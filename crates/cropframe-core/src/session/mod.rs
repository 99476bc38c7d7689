//! Transform session state machine.
//!
//! A [`TransformState`] owns one editable shape for as long as it can be
//! manipulated. It is either idle (tracking the hover zone) or dragging, in
//! which case it holds a [`TransformSession`] snapshot.
//!
//! # Transitions
//!
//! - idle + pointer-down on a zone: start a session in the matching mode
//! - dragging + pointer-move: recompute from the snapshot, then constrain
//! - dragging + pointer-up/cancel: drop the session
//! - any + set-shape: replace the shape; while dragging the session is
//!   re-based on the new shape so the next move continues from it
//!
//! Events are processed to completion one at a time. Nothing suspends and
//! there is no timeout: a caller that loses pointer delivery must send a
//! cancel itself.

mod drag;
mod snap;

pub use drag::{DragMode, TransformSession};
pub use snap::snap_angle;

use crate::config::TransformConfig;
use crate::constraints::Constraints;
use crate::error::TransformError;
use crate::geometry::{Point, Shape};
use crate::zone::{classify, InteractionZone};

/// Inbound events. Pointer coordinates are already in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerCancel,
    SetShape(Shape),
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing observable changed.
    Unchanged,
    /// Idle hover moved into a different zone.
    HoverChanged(InteractionZone),
    SessionStarted(DragMode),
    ShapeChanged,
    /// The gesture ended; the shape is final for downstream effects.
    Committed(Shape),
    Cancelled,
    ShapeReplaced,
}

#[derive(Debug, Clone)]
pub struct TransformState {
    shape: Shape,
    hover_zone: InteractionZone,
    session: Option<TransformSession>,
    config: TransformConfig,
    constraints: Constraints,
    last_pointer: Option<Point>,
}

impl TransformState {
    /// Create a state for `shape`, validating the configuration and
    /// constraints.
    pub fn new(
        shape: Shape,
        config: TransformConfig,
        constraints: Constraints,
    ) -> Result<Self, TransformError> {
        config.validate()?;
        constraints.validate()?;
        if shape.is_degenerate() {
            tracing::warn!(?shape, "degenerate shape will not respond to pointer input");
        }
        Ok(Self {
            shape,
            hover_zone: InteractionZone::None,
            session: None,
            config,
            constraints,
            last_pointer: None,
        })
    }

    /// Default configuration, no constraints.
    pub fn with_defaults(shape: Shape) -> Self {
        if shape.is_degenerate() {
            tracing::warn!(?shape, "degenerate shape will not respond to pointer input");
        }
        Self {
            shape,
            hover_zone: InteractionZone::None,
            session: None,
            config: TransformConfig::default(),
            constraints: Constraints::default(),
            last_pointer: None,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn hover_zone(&self) -> InteractionZone {
        self.hover_zone
    }

    pub fn session(&self) -> Option<&TransformSession> {
        self.session.as_ref()
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The drag zone while dragging, the hover zone otherwise. This is what
    /// cursor and centre-icon affordances should follow.
    pub fn active_zone(&self) -> InteractionZone {
        self.drag_mode().map_or(self.hover_zone, DragMode::zone)
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn set_config(&mut self, config: TransformConfig) -> Result<(), TransformError> {
        if self.is_dragging() {
            return Err(TransformError::SessionActive("configuration"));
        }
        config.validate()?;
        self.config = config;
        self.refresh_hover();
        Ok(())
    }

    pub fn set_constraints(&mut self, constraints: Constraints) -> Result<(), TransformError> {
        if self.is_dragging() {
            return Err(TransformError::SessionActive("constraints"));
        }
        constraints.validate()?;
        self.constraints = constraints;
        Ok(())
    }

    pub fn handle(&mut self, event: TransformEvent) -> Outcome {
        match event {
            TransformEvent::PointerDown(p) => self.pointer_down(p),
            TransformEvent::PointerMove(p) => self.pointer_move(p),
            TransformEvent::PointerUp => self.pointer_up(),
            TransformEvent::PointerCancel => self.pointer_cancel(),
            TransformEvent::SetShape(shape) => self.set_shape(shape),
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> Outcome {
        if self.is_dragging() {
            return Outcome::Unchanged;
        }
        self.last_pointer = Some(point);

        let zone = classify(&self.shape, point, &self.config);
        let Some(mode) = DragMode::from_zone(zone) else {
            return self.update_hover(zone);
        };

        tracing::debug!(?mode, x = point.x, y = point.y, "drag session started");
        self.hover_zone = zone;
        self.session = Some(TransformSession::begin(mode, point, self.shape));
        Outcome::SessionStarted(mode)
    }

    pub fn pointer_move(&mut self, point: Point) -> Outcome {
        self.last_pointer = Some(point);

        let Some(session) = &self.session else {
            let zone = classify(&self.shape, point, &self.config);
            return self.update_hover(zone);
        };

        let raw = session.recompute(point, &self.config);
        let next = self
            .constraints
            .apply(&raw, session.mode, &session.start_shape);
        if next == self.shape {
            Outcome::Unchanged
        } else {
            self.shape = next;
            Outcome::ShapeChanged
        }
    }

    pub fn pointer_up(&mut self) -> Outcome {
        let Some(session) = self.session.take() else {
            return Outcome::Unchanged;
        };
        tracing::debug!(mode = ?session.mode, shape = ?self.shape, "drag session committed");
        self.refresh_hover();
        Outcome::Committed(self.shape)
    }

    /// Discard the active session. The shape keeps whatever the last move
    /// applied; nothing is rolled back.
    pub fn pointer_cancel(&mut self) -> Outcome {
        let Some(session) = self.session.take() else {
            return Outcome::Unchanged;
        };
        tracing::debug!(mode = ?session.mode, "drag session cancelled");
        self.refresh_hover();
        Outcome::Cancelled
    }

    /// Replace the shape from outside (reset, undo, sync).
    ///
    /// While dragging, the session is re-based on the new shape at the last
    /// pointer position, so subsequent moves apply to the replacement rather
    /// than to the old snapshot.
    pub fn set_shape(&mut self, shape: Shape) -> Outcome {
        if shape.is_degenerate() {
            tracing::warn!(?shape, "degenerate shape will not respond to pointer input");
        }
        self.shape = shape;

        if let Some(session) = &mut self.session {
            let pointer = self.last_pointer.unwrap_or(session.start_pointer);
            tracing::debug!(mode = ?session.mode, "session re-based on replaced shape");
            *session = TransformSession::begin(session.mode, pointer, shape);
        } else {
            self.refresh_hover();
        }
        Outcome::ShapeReplaced
    }

    fn update_hover(&mut self, zone: InteractionZone) -> Outcome {
        if zone == self.hover_zone {
            Outcome::Unchanged
        } else {
            self.hover_zone = zone;
            Outcome::HoverChanged(zone)
        }
    }

    fn refresh_hover(&mut self) {
        self.hover_zone = match self.last_pointer {
            Some(p) => classify(&self.shape, p, &self.config),
            None => InteractionZone::None,
        };
    }
}
