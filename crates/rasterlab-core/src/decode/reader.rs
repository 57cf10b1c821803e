//! Content-sniffing decoder with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, Orientation};
use crate::raster::RasterImage;

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes (PNG, JPEG, GIF or WebP)
///
/// # Returns
///
/// A `RasterImage` with RGBA pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are empty or not a known format.
/// Returns `DecodeError::CorruptedFile` if the decoder rejects the data.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = read_dynamic(bytes)?;
    let orientation = extract_orientation(bytes);
    let oriented = apply_orientation(img, orientation);

    let raster = RasterImage::from_rgba_image(oriented.into_rgba8())?;
    log::debug!(
        "decoded {}x{} image ({} bytes, orientation {:?})",
        raster.width(),
        raster.height(),
        bytes.len(),
        orientation
    );
    Ok(raster)
}

/// Decode an image from bytes without applying EXIF orientation.
pub fn decode_no_orientation(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = read_dynamic(bytes)?;
    Ok(RasterImage::from_rgba_image(img.into_rgba8())?)
}

/// Extract the EXIF orientation value from image bytes.
///
/// Returns `Orientation::Normal` when the container carries no EXIF data.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn read_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
