//! Pointer hit-zone classification.
//!
//! [`classify`] decides what a pointer would do if pressed at a position:
//! resize from a corner, resize from an edge, rotate, move, or nothing. It is
//! called on every idle pointer move (for hover affordance) and once on
//! pointer-down to choose the drag mode.
//!
//! # Priority
//!
//! For a quad, corners are tested first, then edges, then the interior. The
//! interior is split by an outline inset toward the centroid: inside the inset
//! outline rotates, the ring between it and the quad's outline moves.
//!
//! For a circle, a band around the outline resizes the radius and the rest of
//! the disc moves.

use serde::{Deserialize, Serialize};

use crate::config::TransformConfig;
use crate::geometry::{
    distance, inset_toward_center, point_in_convex_polygon, Circle, Corner, Edge, Point, Quad,
    Shape,
};

/// Where a pointer lands relative to a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionZone {
    #[default]
    None,
    Move,
    Rotate,
    ResizeEdge(Edge),
    ResizeCorner(Corner),
    ResizeRadius,
}

/// Glyph drawn at the shape's centre while its zone is hovered or dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterIcon {
    Move,
    Rotate,
}

impl InteractionZone {
    /// Stable identifier used across the JS boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionZone::None => "none",
            InteractionZone::Move => "move",
            InteractionZone::Rotate => "rotate",
            InteractionZone::ResizeEdge(Edge::N) => "resize-n",
            InteractionZone::ResizeEdge(Edge::E) => "resize-e",
            InteractionZone::ResizeEdge(Edge::S) => "resize-s",
            InteractionZone::ResizeEdge(Edge::W) => "resize-w",
            InteractionZone::ResizeCorner(Corner::NW) => "resize-nw",
            InteractionZone::ResizeCorner(Corner::NE) => "resize-ne",
            InteractionZone::ResizeCorner(Corner::SE) => "resize-se",
            InteractionZone::ResizeCorner(Corner::SW) => "resize-sw",
            InteractionZone::ResizeRadius => "resize-radius",
        }
    }

    /// CSS cursor for this zone.
    pub fn cursor(self) -> &'static str {
        match self {
            InteractionZone::None => "default",
            InteractionZone::Move => "move",
            InteractionZone::Rotate => "grab",
            InteractionZone::ResizeEdge(Edge::N | Edge::S) => "ns-resize",
            InteractionZone::ResizeEdge(Edge::E | Edge::W) => "ew-resize",
            InteractionZone::ResizeCorner(Corner::NW | Corner::SE) => "nwse-resize",
            InteractionZone::ResizeCorner(Corner::NE | Corner::SW) => "nesw-resize",
            InteractionZone::ResizeRadius => "nesw-resize",
        }
    }

    pub fn center_icon(self) -> Option<CenterIcon> {
        match self {
            InteractionZone::Move => Some(CenterIcon::Move),
            InteractionZone::Rotate => Some(CenterIcon::Rotate),
            _ => None,
        }
    }

    pub fn is_resize(self) -> bool {
        matches!(
            self,
            InteractionZone::ResizeEdge(_)
                | InteractionZone::ResizeCorner(_)
                | InteractionZone::ResizeRadius
        )
    }
}

/// Largest corner hit radius, as a share of a quad's shorter side.
const CORNER_BAND_SHARE: f64 = 0.25;
/// Largest edge band, as a share of the ring between the edge and the inner
/// rotate quad.
const EDGE_BAND_SHARE: f64 = 0.5;
/// Largest radius band on either side of the outline, as a share of the radius.
const RADIUS_BAND_SHARE: f64 = 0.5;

/// Classify a local-space pointer position against a shape.
///
/// Degenerate shapes (zero size, zero radius, non-finite points) classify as
/// [`InteractionZone::None`] everywhere.
pub fn classify(shape: &Shape, point: Point, config: &TransformConfig) -> InteractionZone {
    match shape {
        Shape::Quad(quad) => classify_quad(quad, point, config),
        Shape::Circle(circle) => classify_circle(circle, point, config),
    }
}

fn classify_quad(quad: &Quad, point: Point, config: &TransformConfig) -> InteractionZone {
    if quad.is_degenerate() || !point.is_finite() {
        return InteractionZone::None;
    }

    let frame = quad.frame();
    let shorter_side = frame.width.min(frame.height);

    // Bands are capped against the shape's size so a small shape keeps a
    // rotate area and a move ring between the edge bands and the inner quad.
    let corner_tolerance = config
        .corner_tolerance
        .resolve(shorter_side)
        .min(shorter_side * CORNER_BAND_SHARE);
    let mut nearest_corner: Option<(Corner, f64)> = None;
    for corner in Corner::ALL {
        let d = distance(point, quad.corner(corner));
        if d <= corner_tolerance && nearest_corner.map_or(true, |(_, best)| d < best) {
            nearest_corner = Some((corner, d));
        }
    }
    if let Some((corner, _)) = nearest_corner {
        return InteractionZone::ResizeCorner(corner);
    }

    let move_ring = shorter_side * config.inner_inset_ratio / 2.0;
    let edge_tolerance = config
        .edge_tolerance
        .resolve(shorter_side)
        .min(move_ring * EDGE_BAND_SHARE);
    let local = frame.to_local(point);
    let (w, h) = (frame.width, frame.height);
    let within_width = (0.0..=w).contains(&local.x);
    let within_height = (0.0..=h).contains(&local.y);
    // (edge, perpendicular distance, point lies alongside the edge)
    let edges = [
        (Edge::N, local.y.abs(), within_width),
        (Edge::E, (local.x - w).abs(), within_height),
        (Edge::S, (local.y - h).abs(), within_width),
        (Edge::W, local.x.abs(), within_height),
    ];
    let nearest_edge = edges
        .iter()
        .filter(|(_, d, alongside)| *alongside && *d <= edge_tolerance)
        .fold(None::<(Edge, f64)>, |best, &(edge, d, _)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((edge, d)),
        });
    if let Some((edge, _)) = nearest_edge {
        return InteractionZone::ResizeEdge(edge);
    }

    let inner = inset_toward_center(&quad.points, config.inner_inset_ratio);
    if point_in_convex_polygon(point, &inner) {
        InteractionZone::Rotate
    } else if quad.contains(point) {
        InteractionZone::Move
    } else {
        InteractionZone::None
    }
}

fn classify_circle(circle: &Circle, point: Point, config: &TransformConfig) -> InteractionZone {
    if circle.is_degenerate() || !point.is_finite() {
        return InteractionZone::None;
    }

    let tolerance = config
        .radius_tolerance
        .resolve(circle.radius * 2.0)
        .min(circle.radius * RADIUS_BAND_SHARE);
    let d = distance(point, circle.center);
    if (d - circle.radius).abs() <= tolerance {
        InteractionZone::ResizeRadius
    } else if d < circle.radius {
        InteractionZone::Move
    } else {
        InteractionZone::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HitTolerance;
    use crate::geometry::RectFrame;
    use std::f64::consts::FRAC_PI_4;

    fn rect() -> Shape {
        Shape::Quad(Quad::from_rect(0.0, 0.0, 200.0, 150.0))
    }

    fn circle() -> Shape {
        Shape::Circle(Circle::new(Point::new(100.0, 100.0), 50.0))
    }

    fn zone(shape: &Shape, x: f64, y: f64) -> InteractionZone {
        classify(shape, Point::new(x, y), &TransformConfig::default())
    }

    #[test]
    fn test_quad_corners() {
        let q = rect();
        assert_eq!(zone(&q, 0.0, 0.0), InteractionZone::ResizeCorner(Corner::NW));
        assert_eq!(zone(&q, 205.0, -5.0), InteractionZone::ResizeCorner(Corner::NE));
        assert_eq!(zone(&q, 195.0, 145.0), InteractionZone::ResizeCorner(Corner::SE));
        assert_eq!(zone(&q, -3.0, 152.0), InteractionZone::ResizeCorner(Corner::SW));
    }

    #[test]
    fn test_corner_beats_edge() {
        // (10, 2) is inside the corner radius and also on the north edge band
        let q = rect();
        assert_eq!(zone(&q, 10.0, 2.0), InteractionZone::ResizeCorner(Corner::NW));
        // Further along the edge only the edge matches
        assert_eq!(zone(&q, 20.0, 2.0), InteractionZone::ResizeEdge(Edge::N));
    }

    #[test]
    fn test_quad_edges() {
        let q = rect();
        assert_eq!(zone(&q, 100.0, -6.0), InteractionZone::ResizeEdge(Edge::N));
        assert_eq!(zone(&q, 204.0, 75.0), InteractionZone::ResizeEdge(Edge::E));
        assert_eq!(zone(&q, 100.0, 150.0), InteractionZone::ResizeEdge(Edge::S));
        assert_eq!(zone(&q, 7.0, 75.0), InteractionZone::ResizeEdge(Edge::W));
    }

    #[test]
    fn test_quad_interior_zones() {
        let q = rect();
        // Inner quad at 25% inset spans (25, 18.75)-(175, 131.25)
        assert_eq!(zone(&q, 100.0, 75.0), InteractionZone::Rotate);
        assert_eq!(zone(&q, 170.0, 125.0), InteractionZone::Rotate);
        assert_eq!(zone(&q, 20.0, 75.0), InteractionZone::Move);
        assert_eq!(zone(&q, 100.0, 15.0), InteractionZone::Move);
    }

    #[test]
    fn test_quad_outside() {
        let q = rect();
        assert_eq!(zone(&q, -50.0, 75.0), InteractionZone::None);
        assert_eq!(zone(&q, 100.0, 170.0), InteractionZone::None);
        // Outside the edge span, beyond corner radius
        assert_eq!(zone(&q, -20.0, -2.0), InteractionZone::None);
    }

    #[test]
    fn test_rotated_quad_uses_own_axes() {
        let frame = RectFrame::new(Point::new(100.0, 0.0), 100.0, 100.0, FRAC_PI_4);
        let q = Shape::Quad(Quad::from_frame(&frame));
        let north_mid = frame.anchor_point(crate::geometry::Anchor::N);
        assert_eq!(
            classify(&q, north_mid, &TransformConfig::default()),
            InteractionZone::ResizeEdge(Edge::N)
        );
        assert_eq!(
            classify(&q, frame.center(), &TransformConfig::default()),
            InteractionZone::Rotate
        );
        // The axis-aligned NW corner of the bounding box is outside the diamond
        let bbox = q.bounding_rect();
        assert_eq!(
            classify(&q, Point::new(bbox.x + 1.0, bbox.y + 1.0), &TransformConfig::default()),
            InteractionZone::None
        );
    }

    #[test]
    fn test_fractional_tolerance() {
        let mut config = TransformConfig::default();
        config.corner_tolerance = HitTolerance::Fraction(0.05);
        config.edge_tolerance = HitTolerance::Fraction(0.05);
        let q = rect();
        // 5% of the 150px shorter side is 7.5px
        assert_eq!(
            classify(&q, Point::new(7.0, 0.0), &config),
            InteractionZone::ResizeCorner(Corner::NW)
        );
        assert_eq!(
            classify(&q, Point::new(9.0, 0.0), &config),
            InteractionZone::ResizeEdge(Edge::N)
        );
    }

    #[test]
    fn test_circle_zones() {
        let c = circle();
        assert_eq!(zone(&c, 150.0, 100.0), InteractionZone::ResizeRadius);
        assert_eq!(zone(&c, 100.0, 44.0), InteractionZone::ResizeRadius);
        assert_eq!(zone(&c, 100.0, 100.0), InteractionZone::Move);
        assert_eq!(zone(&c, 130.0, 100.0), InteractionZone::Move);
        assert_eq!(zone(&c, 170.0, 100.0), InteractionZone::None);
    }

    #[test]
    fn test_small_quad_keeps_move_and_rotate() {
        // 16x16: corner radius capped at 4, edge band at 1, inner quad 2..14
        let q = Shape::Quad(Quad::from_rect(0.0, 0.0, 16.0, 16.0));
        assert_eq!(zone(&q, 8.0, 8.0), InteractionZone::Rotate);
        assert_eq!(zone(&q, 1.5, 8.0), InteractionZone::Move);
        assert_eq!(zone(&q, 0.5, 8.0), InteractionZone::ResizeEdge(Edge::W));
        assert_eq!(zone(&q, 1.0, 1.0), InteractionZone::ResizeCorner(Corner::NW));

        let mut state = crate::TransformState::with_defaults(q);
        assert_eq!(
            state.pointer_down(Point::new(8.0, 8.0)),
            crate::Outcome::SessionStarted(crate::DragMode::Rotate)
        );
    }

    #[test]
    fn test_small_circle_keeps_move() {
        // r = 6: radius band capped at 3
        let c = Shape::Circle(Circle::new(Point::new(20.0, 20.0), 6.0));
        assert_eq!(zone(&c, 20.0, 20.0), InteractionZone::Move);
        assert_eq!(zone(&c, 22.5, 20.0), InteractionZone::Move);
        assert_eq!(zone(&c, 26.0, 20.0), InteractionZone::ResizeRadius);
        assert_eq!(zone(&c, 28.5, 20.0), InteractionZone::ResizeRadius);
        assert_eq!(zone(&c, 29.5, 20.0), InteractionZone::None);

        let mut state = crate::TransformState::with_defaults(c);
        assert_eq!(
            state.pointer_down(Point::new(20.0, 20.0)),
            crate::Outcome::SessionStarted(crate::DragMode::Move)
        );
    }

    #[test]
    fn test_large_shapes_keep_configured_bands() {
        // Caps only bite on small shapes; 200x150 keeps the 12px corner radius
        let q = rect();
        assert_eq!(zone(&q, 11.0, 0.0), InteractionZone::ResizeCorner(Corner::NW));
        let c = circle();
        assert_eq!(zone(&c, 157.5, 100.0), InteractionZone::ResizeRadius);
    }

    #[test]
    fn test_degenerate_shapes_classify_none() {
        let zero_circle = Shape::Circle(Circle::new(Point::new(10.0, 10.0), 0.0));
        assert_eq!(zone(&zero_circle, 10.0, 10.0), InteractionZone::None);

        let flat = Shape::Quad(Quad::from_rect(0.0, 0.0, 100.0, 0.0));
        assert_eq!(zone(&flat, 50.0, 0.0), InteractionZone::None);
        assert_eq!(zone(&flat, 0.0, 0.0), InteractionZone::None);
    }

    #[test]
    fn test_zone_affordances() {
        assert_eq!(InteractionZone::Move.center_icon(), Some(CenterIcon::Move));
        assert_eq!(InteractionZone::Rotate.center_icon(), Some(CenterIcon::Rotate));
        assert_eq!(InteractionZone::ResizeRadius.center_icon(), None);
        assert_eq!(InteractionZone::ResizeCorner(Corner::NE).cursor(), "nesw-resize");
        assert_eq!(InteractionZone::ResizeEdge(Edge::W).cursor(), "ew-resize");
        assert_eq!(InteractionZone::None.cursor(), "default");
        assert_eq!(InteractionZone::ResizeCorner(Corner::SE).as_str(), "resize-se");
        assert!(InteractionZone::ResizeRadius.is_resize());
        assert!(!InteractionZone::Move.is_resize());
    }
}
