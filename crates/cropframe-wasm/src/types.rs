//! Conversions between core engine types and JavaScript values.
//!
//! Shapes, configuration and constraints cross the boundary as plain objects
//! through `serde_wasm_bindgen`, using the core types' serde layout:
//!
//! ```typescript
//! const quad = { kind: "quad", points: [{ x: 0, y: 0 }, { x: 200, y: 0 }, { x: 200, y: 150 }, { x: 0, y: 150 }] };
//! const circle = { kind: "circle", center: { x: 100, y: 100 }, radius: 50 };
//! ```

use cropframe_core::{Constraints, Outcome, Shape, TransformConfig};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// Wrap any displayable error as a JavaScript `Error`.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Deserialize `value`, treating `undefined`/`null` as the type's default.
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("Invalid {what}: {e}")))
}

/// Parse and validate a shape object.
pub(crate) fn shape_from_js(value: JsValue) -> Result<Shape, JsValue> {
    let shape: Shape = serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(format!("Invalid shape: {e}")))?;
    shape.validate().map_err(js_error)?;
    Ok(shape)
}

pub(crate) fn config_from_js(value: JsValue) -> Result<TransformConfig, JsValue> {
    from_js_or_default(value, "transform config")
}

pub(crate) fn constraints_from_js(value: JsValue) -> Result<Constraints, JsValue> {
    from_js_or_default(value, "constraints")
}

pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_error)
}

/// Flat coordinate list for drawing: `[x0, y0, x1, y1, ...]` for a quad in
/// NW, NE, SE, SW order, `[cx, cy, r]` for a circle.
pub(crate) fn shape_to_flat(shape: &Shape) -> Vec<f64> {
    match shape {
        Shape::Quad(q) => q.points.iter().flat_map(|p| [p.x, p.y]).collect(),
        Shape::Circle(c) => vec![c.center.x, c.center.y, c.radius],
    }
}

/// Short event-outcome name reported to JavaScript.
pub(crate) fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Unchanged => "unchanged",
        Outcome::HoverChanged(_) => "hover",
        Outcome::SessionStarted(_) => "start",
        Outcome::ShapeChanged => "change",
        Outcome::Committed(_) => "commit",
        Outcome::Cancelled => "cancel",
        Outcome::ShapeReplaced => "replace",
    }
}
