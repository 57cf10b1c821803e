//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode an image as lossless PNG
//! - [`encode_jpeg`] - Encode an image as JPEG with a quality setting
//! - [`encode_image`] - Encode by format name (`"png"`, `"jpeg"`, `"image/png"`, ...)
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@rasterlab/wasm';
//!
//! const png = encode_png(image);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsRasterImage;
use rasterlab_core::encode::{self, ExportFormat};
use wasm_bindgen::prelude::*;

/// Encode an image as PNG bytes. Alpha is preserved.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as JPEG bytes.
///
/// JPEG has no alpha channel, so transparent pixels become their RGB value
/// (black for the transform background).
///
/// # Arguments
///
/// * `quality` - JPEG quality (1-100, recommended: 90)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image using a format name or MIME type.
#[wasm_bindgen]
pub fn encode_image(image: &JsRasterImage, format: &str) -> Result<Vec<u8>, JsValue> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e: encode::EncodeError| JsValue::from_str(&e.to_string()))?;
    encode::encode(image.raster(), format).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::RasterImage;

    fn test_image() -> JsRasterImage {
        let pixels: Vec<u8> = (0..64u8).map(|i| i * 4).collect();
        JsRasterImage::from_raster(RasterImage::new(4, 4, pixels).unwrap())
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&test_image()).ok().unwrap();
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_encode_jpeg_signature() {
        let bytes = encode_jpeg(&test_image(), 90).ok().unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_image_by_name() {
        let png = encode_image(&test_image(), "image/png").ok().unwrap();
        assert_eq!(png, encode_png(&test_image()).ok().unwrap());

        let jpeg = encode_image(&test_image(), "jpg").ok().unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use rasterlab_core::RasterImage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_image_unknown_format() {
        let image = JsRasterImage::from_raster(RasterImage::blank(2, 2));
        assert!(encode_image(&image, "bmp").is_err());
    }
}
