//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@rasterlab/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsRasterImage;
use rasterlab_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG, JPEG, GIF or WebP file into an RGBA image.
///
/// The format is detected from the file contents. EXIF orientation is
/// applied so the image displays upright.
///
/// # Errors
///
/// Returns an error if the bytes are empty, the format is not recognized,
/// or the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read the EXIF orientation tag (1-8), or 1 when absent.
#[wasm_bindgen]
pub fn image_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{encode_png, RasterImage};

    #[test]
    fn test_decode_png() {
        let src = RasterImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let bytes = encode_png(&src).unwrap();

        let decoded = decode_image(&bytes).ok().unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 1);
        assert_eq!(decoded.pixels(), src.pixels());
    }

    #[test]
    fn test_orientation_of_png_is_normal() {
        let src = RasterImage::blank(3, 3);
        let bytes = encode_png(&src).unwrap();
        assert_eq!(image_orientation(&bytes), 1);
    }
}
