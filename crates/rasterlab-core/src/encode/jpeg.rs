//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so only the RGB samples are written.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::EncodeError;
use crate::raster::RasterImage;

/// Encode a raster to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Source raster; its alpha channel is discarded
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = image
        .pixels()
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> RasterImage {
        RasterImage::new(width, height, vec![128u8; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gray(100, 100), 90).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        assert!(encode_jpeg(&gray(10, 10), 0).is_ok());
        assert!(encode_jpeg(&gray(10, 10), 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let img = RasterImage::new(1, 1, vec![255, 0, 0, 0]).unwrap();
        let jpeg = encode_jpeg(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_non_square() {
        assert!(encode_jpeg(&gray(200, 50), 90).is_ok());
        assert!(encode_jpeg(&gray(50, 200), 90).is_ok());
    }
}
