//! Viewport-to-local coordinate normalization.
//!
//! Pointer events arrive in viewport pixels. The shape lives in its
//! container's local space, which may be offset and visually scaled (zoom,
//! fit-to-screen). Session math must run in unscaled local space, so every
//! pointer position and delta passes through here first.
//!
//! Scale detection depends on the host environment. It is reached through the
//! [`ScaleProbe`] trait so the kernel never inspects a DOM directly; the WASM
//! crate implements it for `web_sys::Element`.

use crate::geometry::Point;

/// Access to the scale information carried by an element and its ancestors.
pub trait ScaleProbe: Sized {
    /// An explicit scale set by the application (e.g. a `data-scale` attribute).
    fn scale_hint(&self) -> Option<f64>;

    /// Scale implied by the element's own transform, if any.
    fn transform_scale(&self) -> Option<f64>;

    fn parent(&self) -> Option<Self>;
}

fn usable(scale: Option<f64>) -> Option<f64> {
    scale.filter(|s| s.is_finite() && *s > 0.0)
}

fn own_scale<P: ScaleProbe>(node: &P) -> Option<f64> {
    usable(node.scale_hint()).or_else(|| usable(node.transform_scale()))
}

/// Visual scale for `element`: its explicit hint, else its transform, else
/// the nearest ancestor carrying either, else 1.0.
///
/// Zero, negative and non-finite values are ignored.
pub fn resolve_scale<P: ScaleProbe>(element: &P) -> f64 {
    if let Some(scale) = own_scale(element) {
        return scale;
    }
    let mut current = element.parent();
    while let Some(node) = current {
        if let Some(scale) = own_scale(&node) {
            return scale;
        }
        current = node.parent();
    }
    1.0
}

/// Scale factor encoded in a CSS `transform` value.
///
/// Handles `none`, `scale(s)`, `scale(sx, sy)`, `matrix(a, b, c, d, e, f)`
/// and `matrix3d(...)`. For matrices the scale is the length of the first
/// column, which stays correct when the matrix also rotates. Anything else
/// yields `None`.
pub fn parse_transform_scale(css: &str) -> Option<f64> {
    let css = css.trim();
    if css.is_empty() || css == "none" {
        return None;
    }

    let open = css.find('(')?;
    let close = css.rfind(')')?;
    if close < open {
        return None;
    }
    let name = css[..open].trim();
    let args: Vec<f64> = css[open + 1..close]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    let scale = match (name, args.as_slice()) {
        ("scale", [s]) => *s,
        ("scale", [sx, _sy]) => *sx,
        ("matrix", [a, b, _, _, _, _]) => a.hypot(*b),
        ("matrix3d", m) if m.len() == 16 => m[0].hypot(m[1]),
        _ => return None,
    };
    usable(Some(scale))
}

/// Convert a viewport position to local space, given the container's
/// viewport-space origin and its visual scale.
pub fn to_local(viewport: Point, container_origin: Point, scale: f64) -> Point {
    let scale = usable(Some(scale)).unwrap_or(1.0);
    viewport.sub(container_origin).scale(1.0 / scale)
}

/// Local-space displacement between two viewport positions.
pub fn to_local_delta(prev: Point, next: Point, scale: f64) -> Point {
    let scale = usable(Some(scale)).unwrap_or(1.0);
    next.sub(prev).scale(1.0 / scale)
}
