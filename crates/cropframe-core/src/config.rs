//! Engine configuration: hit-test tolerances, zone inset, snapping.
//!
//! All values are supplied when a [`TransformState`](crate::session::TransformState)
//! is created and may only be replaced between drag sessions.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Width of a hit band around a corner, edge or circle outline.
///
/// Either a fixed distance in local-space pixels, or a fraction of the
/// shape's shorter side (a circle's diameter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum HitTolerance {
    Pixels(f64),
    Fraction(f64),
}

impl HitTolerance {
    /// Resolve to a distance for a shape whose shorter side is `shorter_side`.
    pub fn resolve(self, shorter_side: f64) -> f64 {
        match self {
            HitTolerance::Pixels(px) => px,
            HitTolerance::Fraction(f) => f * shorter_side,
        }
    }

    fn validate(self, name: &str) -> Result<(), TransformError> {
        let value = match self {
            HitTolerance::Pixels(v) | HitTolerance::Fraction(v) => v,
        };
        if !(value.is_finite() && value > 0.0) {
            return Err(TransformError::InvalidConfig(format!(
                "{name} must be positive, got {value}"
            )));
        }
        if let HitTolerance::Fraction(f) = self {
            if f >= 0.5 {
                return Err(TransformError::InvalidConfig(format!(
                    "{name} fraction must be below 0.5, got {f}"
                )));
            }
        }
        Ok(())
    }
}

/// Magnetic rotation snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSnap {
    /// Snap targets are multiples of this step.
    pub step_degrees: f64,
    /// Maximum distance from a target at which the angle locks onto it.
    pub threshold_degrees: f64,
}

impl Default for AngleSnap {
    fn default() -> Self {
        Self {
            step_degrees: 15.0,
            threshold_degrees: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// How far the rotate zone's outline is inset toward a quad's centre,
    /// in (0, 1). Points inside the inset outline rotate; points between
    /// it and the quad's outline move.
    pub inner_inset_ratio: f64,
    pub corner_tolerance: HitTolerance,
    pub edge_tolerance: HitTolerance,
    pub radius_tolerance: HitTolerance,
    /// `None` disables rotation snapping.
    pub angle_snap: Option<AngleSnap>,
    /// Allowed range of the proportional scale factor during a corner drag.
    pub scale_range: (f64, f64),
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            inner_inset_ratio: 0.25,
            corner_tolerance: HitTolerance::Pixels(12.0),
            edge_tolerance: HitTolerance::Pixels(8.0),
            radius_tolerance: HitTolerance::Pixels(8.0),
            angle_snap: Some(AngleSnap::default()),
            scale_range: (0.1, 5.0),
        }
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        let r = self.inner_inset_ratio;
        if !(r > 0.0 && r < 1.0) {
            return Err(TransformError::InvalidConfig(format!(
                "inner_inset_ratio must be in (0, 1), got {r}"
            )));
        }

        self.corner_tolerance.validate("corner_tolerance")?;
        self.edge_tolerance.validate("edge_tolerance")?;
        self.radius_tolerance.validate("radius_tolerance")?;

        if let Some(snap) = self.angle_snap {
            if !(snap.step_degrees.is_finite() && snap.step_degrees > 0.0) {
                return Err(TransformError::InvalidConfig(format!(
                    "snap step must be positive, got {}",
                    snap.step_degrees
                )));
            }
            if !(snap.threshold_degrees >= 0.0 && snap.threshold_degrees <= snap.step_degrees / 2.0)
            {
                return Err(TransformError::InvalidConfig(format!(
                    "snap threshold must be in [0, step/2], got {}",
                    snap.threshold_degrees
                )));
            }
        }

        let (lo, hi) = self.scale_range;
        if !(lo > 0.0 && lo <= 1.0 && hi >= 1.0 && hi.is_finite()) {
            return Err(TransformError::InvalidConfig(format!(
                "scale_range must satisfy 0 < min <= 1 <= max, got ({lo}, {hi})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TransformConfig::new().validate().is_ok());
    }

    #[test]
    fn test_tolerance_resolve() {
        assert_eq!(HitTolerance::Pixels(8.0).resolve(1000.0), 8.0);
        assert!((HitTolerance::Fraction(0.05).resolve(200.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_inset_ratio_bounds() {
        let mut config = TransformConfig::default();
        config.inner_inset_ratio = 0.0;
        assert!(matches!(config.validate(), Err(TransformError::InvalidConfig(_))));
        config.inner_inset_ratio = 1.0;
        assert!(config.validate().is_err());
        config.inner_inset_ratio = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerances() {
        let mut config = TransformConfig::default();
        config.edge_tolerance = HitTolerance::Pixels(0.0);
        assert!(config.validate().is_err());

        let mut config = TransformConfig::default();
        config.corner_tolerance = HitTolerance::Fraction(0.6);
        assert!(config.validate().is_err());

        let mut config = TransformConfig::default();
        config.radius_tolerance = HitTolerance::Pixels(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_snap() {
        let mut config = TransformConfig::default();
        config.angle_snap = Some(AngleSnap {
            step_degrees: 0.0,
            threshold_degrees: 0.0,
        });
        assert!(config.validate().is_err());

        config.angle_snap = Some(AngleSnap {
            step_degrees: 10.0,
            threshold_degrees: 6.0,
        });
        assert!(config.validate().is_err(), "threshold wider than half a step");

        config.angle_snap = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_scale_range() {
        let mut config = TransformConfig::default();
        config.scale_range = (2.0, 5.0);
        assert!(config.validate().is_err());
        config.scale_range = (0.0, 5.0);
        assert!(config.validate().is_err());
        config.scale_range = (0.5, 0.9);
        assert!(config.validate().is_err());
    }
}
