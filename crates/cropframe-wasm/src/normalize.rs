//! DOM-backed pointer normalization.
//!
//! Resolves a container's visual scale from the live DOM (explicit
//! `data-scale` attribute, then computed CSS `transform`, then ancestors) and
//! maps viewport pointer positions into the container's unscaled local space.

use cropframe_core::normalize::{parse_transform_scale, resolve_scale, to_local, ScaleProbe};
use cropframe_core::Point;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Attribute an application may set to declare a container's zoom directly.
const SCALE_ATTRIBUTE: &str = "data-scale";

struct DomProbe(Element);

impl ScaleProbe for DomProbe {
    fn scale_hint(&self) -> Option<f64> {
        self.0.get_attribute(SCALE_ATTRIBUTE)?.trim().parse().ok()
    }

    fn transform_scale(&self) -> Option<f64> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.0).ok()??;
        let transform = style.get_property_value("transform").ok()?;
        parse_transform_scale(&transform)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomProbe)
    }
}

/// Effective visual scale of `element`, `1.0` when none can be determined.
#[wasm_bindgen]
pub fn scale_factor(element: &Element) -> f64 {
    resolve_scale(&DomProbe(element.clone()))
}

/// Map a pointer event into `container`'s local, unscaled coordinates.
pub(crate) fn event_to_local(event: &MouseEvent, container: &Element) -> Point {
    let rect = container.get_bounding_client_rect();
    let viewport = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    let scale = scale_factor(container);
    let local = to_local(viewport, Point::new(rect.left(), rect.top()), scale);
    tracing::trace!(x = local.x, y = local.y, scale, "pointer normalized");
    local
}

/// Local coordinates of a pointer event as `[x, y]`.
#[wasm_bindgen]
pub fn local_point(event: &MouseEvent, container: &Element) -> Vec<f64> {
    let p = event_to_local(event, container);
    vec![p.x, p.y]
}
