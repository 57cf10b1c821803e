//! WASM bindings for the point filters.
//!
//! Filters change the R, G and B channels only. Alpha and dimensions are
//! preserved.

use crate::types::JsRasterImage;
use rasterlab_core::filters::{self, DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST};
use wasm_bindgen::prelude::*;

/// Add `delta` to every color channel, clamped to 0-255.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const brighter = brightness(image, 40);
/// const darker = brightness(image, -40);
/// ```
#[wasm_bindgen]
pub fn brightness(image: &JsRasterImage, delta: i32) -> JsRasterImage {
    JsRasterImage::from_raster(filters::brightness(image.raster(), delta))
}

/// Stretch (`amount > 0`) or flatten (`amount < 0`) channels around 128.
///
/// `amount` is clamped to -255..=255.
#[wasm_bindgen]
pub fn contrast(image: &JsRasterImage, amount: f64) -> JsRasterImage {
    JsRasterImage::from_raster(filters::contrast(image.raster(), amount))
}

/// Convert to luma with BT.601 weights.
#[wasm_bindgen]
pub fn grayscale(image: &JsRasterImage) -> JsRasterImage {
    JsRasterImage::from_raster(filters::grayscale(image.raster()))
}

/// Default brightness offset used by the editor.
#[wasm_bindgen]
pub fn default_brightness() -> i32 {
    DEFAULT_BRIGHTNESS
}

/// Default contrast amount used by the editor.
#[wasm_bindgen]
pub fn default_contrast() -> f64 {
    DEFAULT_CONTRAST
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::RasterImage;

    fn single(r: u8, g: u8, b: u8, a: u8) -> JsRasterImage {
        JsRasterImage::from_raster(RasterImage::new(1, 1, vec![r, g, b, a]).unwrap())
    }

    #[test]
    fn test_brightness_default() {
        let result = brightness(&single(100, 230, 0, 9), default_brightness());
        assert_eq!(result.pixels(), vec![140, 255, 40, 9]);
    }

    #[test]
    fn test_contrast_zero_identity() {
        let img = single(10, 20, 30, 40);
        assert_eq!(contrast(&img, 0.0).pixels(), img.pixels());
    }

    #[test]
    fn test_contrast_default_spreads() {
        let result = contrast(&single(64, 128, 200, 255), default_contrast());
        assert_eq!(result.pixels(), vec![47, 128, 219, 255]);
    }

    #[test]
    fn test_grayscale_red() {
        let result = grayscale(&single(255, 0, 0, 255));
        assert_eq!(result.pixels(), vec![76, 76, 76, 255]);
    }

    #[test]
    fn test_filters_do_not_modify_original() {
        let img = single(100, 100, 100, 100);
        let before = img.pixels();
        let _ = brightness(&img, 80);
        let _ = grayscale(&img);
        assert_eq!(img.pixels(), before);
    }
}
