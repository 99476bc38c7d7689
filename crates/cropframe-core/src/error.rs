//! Error types for the transform engine.
//!
//! The drag kernel never fails: out-of-range results are clamped. Errors only
//! surface when a shape, configuration or constraint set is handed to the
//! engine from outside.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A `TransformConfig` field is out of range.
    #[error("Invalid transform configuration: {0}")]
    InvalidConfig(String),

    /// A `Constraints` field is out of range or contradicts another.
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    /// Quad points are non-finite, zero-area, or not a rectangle.
    #[error("Invalid quad: {0}")]
    InvalidQuad(String),

    /// Circle radius is not a positive finite number.
    #[error("Invalid circle radius: {0}")]
    InvalidRadius(f64),

    /// Configuration and constraints can only change between sessions.
    #[error("Cannot change {0} while a drag session is active")]
    SessionActive(&'static str),
}
