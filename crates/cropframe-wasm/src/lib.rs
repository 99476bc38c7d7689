//! Cropframe WASM - WebAssembly bindings for the cropframe transform engine
//!
//! This crate exposes cropframe-core's interactive quad/circle transform
//! engine to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `engine` - `JsTransformEngine`, the pointer-driven transform state
//! - `normalize` - DOM scale detection and viewport-to-local mapping
//! - `types` - Conversions between core types and JavaScript values
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsTransformEngine } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const engine = new JsTransformEngine(
//!   { kind: "circle", center: { x: 200, y: 150 }, radius: 80 },
//!   { radius_tolerance: { unit: "pixels", value: 10 } },
//!   { bounds: { x: 0, y: 0, width: 400, height: 300 } },
//! );
//! ```

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

mod engine;
mod normalize;
mod types;

// Re-export public types
pub use engine::JsTransformEngine;
pub use normalize::{local_point, scale_factor};

static INIT: Once = Once::new();

/// Initialize the WASM module (called automatically on load).
///
/// Installs the panic hook and routes `tracing` output to the browser
/// console.
#[wasm_bindgen(start)]
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(MakeWebConsoleWriter::new())
            .with_filter(LevelFilter::INFO);

        if tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            web_sys::console::warn_1(&"cropframe: tracing subscriber already installed".into());
        }
    });
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
