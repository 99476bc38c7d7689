//! Transform engine WASM bindings.
//!
//! `JsTransformEngine` owns a [`TransformState`] and exposes the pointer
//! lifecycle to JavaScript. Each pointer method returns a short outcome name
//! (`"unchanged"`, `"hover"`, `"start"`, `"change"`, `"commit"`, `"cancel"`)
//! so callers can decide whether to redraw or persist.
//!
//! # Example (TypeScript)
//! ```typescript
//! const engine = JsTransformEngine.quad(0, 0, 400, 300);
//! engine.set_bounds(0, 0, 800, 600);
//!
//! container.onpointerdown = (e) => engine.pointer_down_event(e, container);
//! container.onpointermove = (e) => {
//!   if (engine.pointer_move_event(e, container) !== "unchanged") redraw(engine.shape_points());
//!   container.style.cursor = engine.cursor();
//! };
//! container.onpointerup = () => {
//!   if (engine.pointer_up() === "commit") applyEffect(engine.effect_region(imageW, imageH));
//! };
//! ```

use crate::normalize::event_to_local;
use crate::types::{
    config_from_js, constraints_from_js, js_error, outcome_name, shape_from_js, shape_to_flat,
    to_js,
};
use cropframe_core::{
    CenterIcon, Circle, EffectRegion, Point, Quad, Rect, Shape, TransformState,
};
use wasm_bindgen::prelude::*;
use web_sys::{Element, PointerEvent};

/// Interactive quad/circle transform state accessible from JavaScript.
#[wasm_bindgen]
pub struct JsTransformEngine {
    state: TransformState,
}

#[wasm_bindgen]
impl JsTransformEngine {
    /// Create an engine from a shape object plus optional config and
    /// constraints objects (`undefined` selects defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(
        shape: JsValue,
        config: JsValue,
        constraints: JsValue,
    ) -> Result<JsTransformEngine, JsValue> {
        let shape = shape_from_js(shape)?;
        let state = TransformState::new(shape, config_from_js(config)?, constraints_from_js(constraints)?)
            .map_err(js_error)?;
        Ok(JsTransformEngine { state })
    }

    /// Axis-aligned quad engine with default settings.
    pub fn quad(x: f64, y: f64, width: f64, height: f64) -> Result<JsTransformEngine, JsValue> {
        let shape = validated(Shape::Quad(Quad::from_rect(x, y, width, height)))?;
        Ok(JsTransformEngine {
            state: TransformState::with_defaults(shape),
        })
    }

    /// Circle engine with default settings.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Result<JsTransformEngine, JsValue> {
        let shape = validated(Shape::Circle(Circle::new(Point::new(cx, cy), radius)))?;
        Ok(JsTransformEngine {
            state: TransformState::with_defaults(shape),
        })
    }

    // Pointer lifecycle, container-local coordinates.

    pub fn pointer_down(&mut self, x: f64, y: f64) -> String {
        outcome_name(&self.state.pointer_down(Point::new(x, y))).to_string()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> String {
        outcome_name(&self.state.pointer_move(Point::new(x, y))).to_string()
    }

    pub fn pointer_up(&mut self) -> String {
        outcome_name(&self.state.pointer_up()).to_string()
    }

    pub fn pointer_cancel(&mut self) -> String {
        outcome_name(&self.state.pointer_cancel()).to_string()
    }

    // Pointer lifecycle from raw DOM events. The container's offset and
    // visual scale are resolved on every call.

    pub fn pointer_down_event(&mut self, event: &PointerEvent, container: &Element) -> String {
        let point = event_to_local(event, container);
        outcome_name(&self.state.pointer_down(point)).to_string()
    }

    pub fn pointer_move_event(&mut self, event: &PointerEvent, container: &Element) -> String {
        let point = event_to_local(event, container);
        outcome_name(&self.state.pointer_move(point)).to_string()
    }

    // Shape access.

    /// Replace the shape with a shape object.
    pub fn set_shape(&mut self, shape: JsValue) -> Result<(), JsValue> {
        let shape = shape_from_js(shape)?;
        self.state.set_shape(shape);
        Ok(())
    }

    pub fn set_quad(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        let shape = validated(Shape::Quad(Quad::from_rect(x, y, width, height)))?;
        self.state.set_shape(shape);
        Ok(())
    }

    pub fn set_circle(&mut self, cx: f64, cy: f64, radius: f64) -> Result<(), JsValue> {
        let shape = validated(Shape::Circle(Circle::new(Point::new(cx, cy), radius)))?;
        self.state.set_shape(shape);
        Ok(())
    }

    /// Current shape as a plain object.
    pub fn shape(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.shape())
    }

    /// Flat coordinates: `[x0, y0, ..., x3, y3]` for a quad (NW, NE, SE, SW),
    /// `[cx, cy, r]` for a circle.
    pub fn shape_points(&self) -> Vec<f64> {
        shape_to_flat(self.state.shape())
    }

    /// Quad rotation in degrees (0 for circles).
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> f64 {
        match self.state.shape() {
            Shape::Quad(q) => q.rotation_degrees(),
            Shape::Circle(_) => 0.0,
        }
    }

    // Interaction feedback.

    /// Zone under the idle pointer, e.g. `"resize-se"`.
    #[wasm_bindgen(getter)]
    pub fn hover_zone(&self) -> String {
        self.state.hover_zone().as_str().to_string()
    }

    /// Zone of the active drag, or the hover zone when idle.
    #[wasm_bindgen(getter)]
    pub fn active_zone(&self) -> String {
        self.state.active_zone().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn drag_mode(&self) -> Option<String> {
        self.state
            .drag_mode()
            .map(|mode| mode.zone().as_str().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// CSS cursor for the active zone.
    pub fn cursor(&self) -> String {
        self.state.active_zone().cursor().to_string()
    }

    /// `"move"` or `"rotate"` when the centre affordance should show.
    pub fn center_icon(&self) -> Option<String> {
        self.state.active_zone().center_icon().map(|icon| {
            match icon {
                CenterIcon::Move => "move",
                CenterIcon::Rotate => "rotate",
            }
            .to_string()
        })
    }

    // Settings. Rejected while a drag is in progress.

    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = config_from_js(config)?;
        self.state.set_config(config).map_err(js_error)
    }

    pub fn set_constraints(&mut self, constraints: JsValue) -> Result<(), JsValue> {
        let constraints = constraints_from_js(constraints)?;
        self.state.set_constraints(constraints).map_err(js_error)
    }

    /// Keep the shape inside the given container-local rectangle.
    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        let constraints = self
            .state
            .constraints()
            .clone()
            .with_bounds(Rect::new(x, y, width, height));
        self.state.set_constraints(constraints).map_err(js_error)
    }

    // Export for downstream effects.

    /// Shape as an image-normalized effect region object.
    pub fn effect_region(&self, image_width: f64, image_height: f64) -> Result<JsValue, JsValue> {
        to_js(&EffectRegion::from_shape(
            self.state.shape(),
            image_width,
            image_height,
        ))
    }

    /// Effect region as `[left, top, width, height, rotation_degrees]`.
    pub fn effect_region_values(&self, image_width: f64, image_height: f64) -> Vec<f64> {
        let r = EffectRegion::from_shape(self.state.shape(), image_width, image_height);
        vec![r.left, r.top, r.width, r.height, r.rotation_degrees]
    }
}

fn validated(shape: Shape) -> Result<Shape, JsValue> {
    shape.validate().map_err(js_error)?;
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_quad_constructor_points() {
        let engine = JsTransformEngine::quad(10.0, 20.0, 200.0, 100.0).unwrap();
        assert_eq!(
            engine.shape_points(),
            vec![10.0, 20.0, 210.0, 20.0, 210.0, 120.0, 10.0, 120.0]
        );
        assert_eq!(engine.rotation_degrees(), 0.0);
        assert!(!engine.is_dragging());
        assert_eq!(engine.hover_zone(), "none");
    }

    #[test]
    fn test_hover_reports_zone_and_cursor() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();

        assert_eq!(engine.pointer_move(100.0, 50.0), "hover");
        assert_eq!(engine.hover_zone(), "rotate");
        assert_eq!(engine.cursor(), "grab");
        assert_eq!(engine.center_icon().as_deref(), Some("rotate"));

        assert_eq!(engine.pointer_move(20.0, 50.0), "hover");
        assert_eq!(engine.hover_zone(), "move");
        assert_eq!(engine.center_icon().as_deref(), Some("move"));

        assert_eq!(engine.pointer_move(200.0, 100.0), "hover");
        assert_eq!(engine.hover_zone(), "resize-se");
        assert_eq!(engine.cursor(), "nwse-resize");
        assert_eq!(engine.center_icon(), None);

        // Same zone again is not a change.
        assert_eq!(engine.pointer_move(201.0, 101.0), "unchanged");
    }

    #[test]
    fn test_move_drag_lifecycle() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();

        assert_eq!(engine.pointer_down(20.0, 50.0), "start");
        assert!(engine.is_dragging());
        assert_eq!(engine.drag_mode().as_deref(), Some("move"));

        assert_eq!(engine.pointer_move(30.0, 60.0), "change");
        assert!(close(
            &engine.shape_points(),
            &[10.0, 10.0, 210.0, 10.0, 210.0, 110.0, 10.0, 110.0]
        ));

        assert_eq!(engine.pointer_up(), "commit");
        assert!(!engine.is_dragging());
        assert_eq!(engine.drag_mode(), None);
        assert_eq!(engine.pointer_up(), "unchanged");
    }

    #[test]
    fn test_cancel_keeps_last_shape() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();
        engine.pointer_down(20.0, 50.0);
        engine.pointer_move(25.0, 50.0);
        assert_eq!(engine.pointer_cancel(), "cancel");
        assert!(close(&engine.shape_points()[..2], &[5.0, 0.0]));
    }

    #[test]
    fn test_pointer_down_outside_starts_nothing() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();
        assert_ne!(engine.pointer_down(500.0, 500.0), "start");
        assert!(!engine.is_dragging());
        assert_eq!(engine.pointer_move(600.0, 600.0), "unchanged");
    }

    #[test]
    fn test_bounds_keep_quad_inside() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();
        engine.set_bounds(0.0, 0.0, 300.0, 200.0).unwrap();

        engine.pointer_down(20.0, 50.0);
        engine.pointer_move(-80.0, -50.0);
        engine.pointer_up();

        let pts = engine.shape_points();
        for xy in pts.chunks(2) {
            assert!(xy[0] >= -1e-9 && xy[0] <= 300.0 + 1e-9);
            assert!(xy[1] >= -1e-9 && xy[1] <= 200.0 + 1e-9);
        }
    }

    #[test]
    fn test_circle_radius_drag() {
        let mut engine = JsTransformEngine::circle(100.0, 100.0, 50.0).unwrap();
        assert_eq!(engine.shape_points(), vec![100.0, 100.0, 50.0]);

        assert_eq!(engine.pointer_down(150.0, 100.0), "start");
        assert_eq!(engine.drag_mode().as_deref(), Some("resize-radius"));
        engine.pointer_move(170.0, 100.0);
        engine.pointer_up();

        let pts = engine.shape_points();
        assert!((pts[2] - 70.0).abs() < 1e-9);
        assert_eq!(engine.rotation_degrees(), 0.0);
    }

    #[test]
    fn test_set_quad_replaces_shape() {
        let mut engine = JsTransformEngine::circle(0.0, 0.0, 10.0).unwrap();
        engine.set_quad(0.0, 0.0, 50.0, 40.0).unwrap();
        assert_eq!(engine.shape_points().len(), 8);
        engine.set_circle(5.0, 5.0, 3.0).unwrap();
        assert_eq!(engine.shape_points(), vec![5.0, 5.0, 3.0]);
    }

    #[test]
    fn test_effect_region_values() {
        let engine = JsTransformEngine::quad(100.0, 50.0, 200.0, 100.0).unwrap();
        let values = engine.effect_region_values(400.0, 200.0);
        assert!(close(&values, &[0.25, 0.25, 0.5, 0.5, 0.0]));
    }
}

/// Tests that cross the JsValue boundary and can only run on wasm32 targets.
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use cropframe_core::{Constraints, RegionKind, TransformConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn circle_js(cx: f64, cy: f64, r: f64) -> JsValue {
        serde_wasm_bindgen::to_value(&Shape::Circle(Circle::new(Point::new(cx, cy), r))).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_constructor_with_defaults() {
        let engine =
            JsTransformEngine::new(circle_js(50.0, 50.0, 20.0), JsValue::UNDEFINED, JsValue::NULL)
                .unwrap();
        assert_eq!(engine.shape_points(), vec![50.0, 50.0, 20.0]);
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_bad_shape() {
        let bad = circle_js(0.0, 0.0, -5.0);
        assert!(JsTransformEngine::new(bad, JsValue::UNDEFINED, JsValue::UNDEFINED).is_err());

        let garbage = JsValue::from_str("not a shape");
        assert!(JsTransformEngine::new(garbage, JsValue::UNDEFINED, JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_shortcut_constructors_reject_degenerate_shapes() {
        assert!(JsTransformEngine::circle(0.0, 0.0, -5.0).is_err());
        assert!(JsTransformEngine::circle(0.0, 0.0, 0.0).is_err());
        assert!(JsTransformEngine::quad(0.0, 0.0, 100.0, 0.0).is_err());
        assert!(JsTransformEngine::quad(f64::NAN, 0.0, 10.0, 10.0).is_err());

        let mut engine = JsTransformEngine::quad(0.0, 0.0, 40.0, 30.0).unwrap();
        assert!(engine.set_circle(5.0, 5.0, -1.0).is_err());
        assert!(engine.set_quad(0.0, 0.0, 0.0, 10.0).is_err());
        // A rejected replacement leaves the shape alone
        assert_eq!(engine.shape_points().len(), 8);
        assert_eq!(engine.shape_points()[2], 40.0);
    }

    #[wasm_bindgen_test]
    fn test_shape_round_trips_through_js() {
        let engine = JsTransformEngine::quad(0.0, 0.0, 40.0, 30.0).unwrap();
        let js = engine.shape().unwrap();
        let back: Shape = serde_wasm_bindgen::from_value(js).unwrap();
        assert_eq!(&back, engine.state.shape());
    }

    #[wasm_bindgen_test]
    fn test_settings_rejected_while_dragging() {
        let mut engine = JsTransformEngine::quad(0.0, 0.0, 200.0, 100.0).unwrap();
        engine.pointer_down(20.0, 50.0);

        let config = serde_wasm_bindgen::to_value(&TransformConfig::default()).unwrap();
        assert!(engine.set_config(config).is_err());
        let constraints = serde_wasm_bindgen::to_value(&Constraints::none()).unwrap();
        assert!(engine.set_constraints(constraints).is_err());

        engine.pointer_up();
        let config = serde_wasm_bindgen::to_value(&TransformConfig::default()).unwrap();
        assert!(engine.set_config(config).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_effect_region_object() {
        let engine = JsTransformEngine::circle(100.0, 100.0, 50.0).unwrap();
        let js = engine.effect_region(200.0, 200.0).unwrap();
        let region: EffectRegion = serde_wasm_bindgen::from_value(js).unwrap();
        assert_eq!(region.kind, RegionKind::Ellipse);
        assert!((region.width - 0.5).abs() < 1e-9);
    }
}
