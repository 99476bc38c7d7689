//! Cropframe Core - interactive shape-transform kernel
//!
//! This crate provides the geometry engine behind Cropframe's selection
//! regions: the crop box, pixelation and blur regions, and watermark
//! placement. A user drags a rectangle or circle over a photo to move,
//! resize and rotate it; the committed shape is then handed to effect
//! engines, which live elsewhere.
//!
//! # Module Structure
//!
//! - `geometry` - points, quads, circles and pure 2-D primitives
//! - `zone` - classifies where a pointer lands on a shape
//! - `session` - the drag state machine and per-mode recomputation
//! - `constraints` - size limits, aspect lock and bounds clamping
//! - `normalize` - viewport to local coordinate conversion
//! - `region` - normalized export of the committed shape for effects
//! - `config` - hit tolerances, zone inset and angle snapping
//!
//! # Example
//!
//! ```ignore
//! use cropframe_core::{Outcome, Point, Quad, Shape, TransformState};
//!
//! let mut state = TransformState::with_defaults(Shape::Quad(Quad::from_rect(0.0, 0.0, 200.0, 150.0)));
//! state.pointer_down(Point::new(0.0, 0.0));      // NW corner
//! state.pointer_move(Point::new(-50.0, -37.5));  // proportional resize
//! if let Outcome::Committed(shape) = state.pointer_up() {
//!     // hand `shape` to the crop engine
//! }
//! ```

pub mod config;
pub mod constraints;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod region;
pub mod session;
pub mod zone;

pub use config::{AngleSnap, HitTolerance, TransformConfig};
pub use constraints::Constraints;
pub use error::TransformError;
pub use geometry::{Circle, Corner, Edge, Point, Quad, Rect, Shape, Size};
pub use region::{EffectRegion, RegionKind};
pub use session::{DragMode, Outcome, TransformEvent, TransformSession, TransformState};
pub use zone::{classify, CenterIcon, InteractionZone};
