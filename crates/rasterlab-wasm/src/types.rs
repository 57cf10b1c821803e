//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core RasterLab
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use rasterlab_core::RasterImage;
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// The pixel layout matches the browser's `ImageData`: 4 bytes per pixel,
/// row-major, unpremultiplied. A shell can build an `ImageData` directly from
/// `pixels()` and draw it on a canvas.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Fails if either side is zero or `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        RasterImage::new(width, height, pixels)
            .map(Self::from_raster)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsRasterImage {
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &RasterImage {
        &self.inner
    }
}
