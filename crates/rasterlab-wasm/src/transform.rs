//! WASM bindings for geometric transforms.
//!
//! Every function returns a new image with the same width and height as the
//! source. Areas not covered by the moved content are transparent black.

use crate::types::JsRasterImage;
use rasterlab_core::transform::{
    mirror as core_mirror, rotate90 as core_rotate, scale as core_scale,
    translate as core_translate, InterpolationFilter, Zoom, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y,
};
use wasm_bindgen::prelude::*;

/// Shift the image content by `(dx, dy)` pixels.
///
/// Positive values move the content right and down.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const moved = translate(image, 50, 30);
/// ```
#[wasm_bindgen]
pub fn translate(image: &JsRasterImage, dx: i32, dy: i32) -> JsRasterImage {
    JsRasterImage::from_raster(core_translate(image.raster(), dx, dy))
}

/// Shift the image content by the default offset (50, 30).
#[wasm_bindgen]
pub fn translate_default(image: &JsRasterImage) -> JsRasterImage {
    translate(image, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y)
}

/// Rotate a quarter turn clockwise about the image center.
///
/// The canvas keeps its size, so non-square images are cropped on the long
/// side and padded on the short side.
#[wasm_bindgen]
pub fn rotate90(image: &JsRasterImage) -> JsRasterImage {
    JsRasterImage::from_raster(core_rotate(image.raster()))
}

/// Flip the image horizontally.
#[wasm_bindgen]
pub fn mirror(image: &JsRasterImage) -> JsRasterImage {
    JsRasterImage::from_raster(core_mirror(image.raster()))
}

/// Scale the content by `factor`, anchored at the top-left corner.
///
/// # Arguments
///
/// * `factor` - Scale factor (must be finite and > 0, otherwise the result is blank)
/// * `bilinear` - Use bilinear sampling instead of nearest neighbour
#[wasm_bindgen]
pub fn scale(image: &JsRasterImage, factor: f64, bilinear: bool) -> JsRasterImage {
    let filter = if bilinear {
        InterpolationFilter::Bilinear
    } else {
        InterpolationFilter::Nearest
    };
    JsRasterImage::from_raster(core_scale(image.raster(), factor, filter))
}

/// Enlarge by 1.5x with nearest-neighbour sampling.
#[wasm_bindgen]
pub fn zoom_in(image: &JsRasterImage) -> JsRasterImage {
    scale(image, Zoom::In.factor(), false)
}

/// Shrink to 0.5x with nearest-neighbour sampling.
#[wasm_bindgen]
pub fn zoom_out(image: &JsRasterImage) -> JsRasterImage {
    scale(image, Zoom::Out.factor(), false)
}
