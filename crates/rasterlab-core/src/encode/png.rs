//! PNG encoding for export.
//!
//! PNG is the export format: it keeps the alpha channel and round-trips every
//! channel value exactly.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::EncodeError;
use crate::raster::RasterImage;

/// Encode an RGBA raster to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the PNG encoder rejects the data.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
