//! Image encoding for export and display.
//!
//! This module provides functionality for:
//! - Encoding a [`RasterImage`] to PNG (lossless, the export default)
//! - Encoding to JPEG with configurable quality (alpha is dropped)
//! - Choosing a format by name through [`ExportFormat`]
//!
//! # Examples
//!
//! ```ignore
//! use rasterlab_core::encode::{encode, ExportFormat};
//!
//! let png_bytes = encode(&image, ExportFormat::Png).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```
//!
//! [`RasterImage`]: crate::raster::RasterImage

mod format;
mod jpeg;
mod png;

pub use format::{EncodeError, ExportFormat, DEFAULT_JPEG_QUALITY};
pub use jpeg::encode_jpeg;
pub use png::encode_png;

use crate::raster::RasterImage;

/// Encode an image in the requested export format.
pub fn encode(image: &RasterImage, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    let bytes = match format {
        ExportFormat::Png => encode_png(image)?,
        ExportFormat::Jpeg { quality } => encode_jpeg(image, quality)?,
    };
    log::debug!(
        "encoded {}x{} image as {} ({} bytes)",
        image.width(),
        image.height(),
        format.extension(),
        bytes.len()
    );
    Ok(bytes)
}
