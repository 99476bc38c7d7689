//! Magnetic angle snapping for rotate drags.

use crate::config::AngleSnap;
use crate::geometry::normalize_degrees;

/// Snap an angle onto the nearest multiple of `snap.step_degrees` when it is
/// within `snap.threshold_degrees` of it.
///
/// The result is always normalized into `[0, 360)`; an angle that snaps to
/// 360° is reported as 0°.
pub fn snap_angle(degrees: f64, snap: &AngleSnap) -> f64 {
    let normalized = normalize_degrees(degrees);
    if snap.step_degrees <= 0.0 {
        return normalized;
    }

    let target = (normalized / snap.step_degrees).round() * snap.step_degrees;
    if (normalized - target).abs() <= snap.threshold_degrees {
        normalize_degrees(target)
    } else {
        normalized
    }
}
