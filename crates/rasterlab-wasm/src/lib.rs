//! RasterLab WASM - WebAssembly bindings for RasterLab
//!
//! This crate provides WASM bindings to expose the rasterlab-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image data
//! - `decode` - Image decoding bindings (PNG, JPEG, GIF, WebP)
//! - `encode` - Image encoding bindings (PNG, JPEG)
//! - `transform` - Translate, rotate, mirror and zoom
//! - `filters` - Brightness, contrast and grayscale
//! - `session` - Editing session with original/transformed state and export
//! - `logger` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditorSession } from '@rasterlab/wasm';
//!
//! await init();
//!
//! const session = new JsEditorSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! const rotated = session.apply('rotate90');
//! ctx.putImageData(
//!   new ImageData(new Uint8ClampedArray(rotated.pixels()), rotated.width, rotated.height),
//!   0, 0,
//! );
//! ```

use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod filters;
mod logger;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, image_orientation};
pub use encode::{encode_image, encode_jpeg, encode_png};
pub use filters::{brightness, contrast, default_brightness, default_contrast, grayscale};
pub use session::JsEditorSession;
pub use transform::{mirror, rotate90, scale, translate, translate_default, zoom_in, zoom_out};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(LevelFilter::Info);
    log::debug!("rasterlab-wasm {} ready", version());
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`). Returns false for an unknown name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::parse_level(level) {
        Some(filter) => {
            logger::init(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
