//! The decoded raster buffer shared by every stage of the pipeline.
//!
//! A [`RasterImage`] is an immutable grid of RGBA samples (4 bytes per pixel,
//! row-major, top-left origin). The constructor validates the buffer so that
//! every transform can index it without further checks.

use thiserror::Error;

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Fully transparent black, used wherever a remap leaves a pixel uncovered.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Errors raised when building a [`RasterImage`] from raw parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new image, validating dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either side is zero and
    /// `RasterError::BufferSizeMismatch` if `pixels.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let expected = byte_len(width, height);
        if pixels.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a fully transparent image of the given size.
    ///
    /// Zero-sized requests are bumped to 1 pixel per side.
    pub fn blank(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![0u8; byte_len(width, height)],
        }
    }

    /// Create a RasterImage from an image::RgbaImage.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` for an empty image.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, RasterError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an image::RgbaImage for encoding.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        // Length is checked on construction, so from_raw cannot reject it.
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its RGBA bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let p = &self.pixels[idx..idx + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Build an image with the same dimensions and a replacement buffer.
    ///
    /// Used by transforms whose output canvas matches their input.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel buffer size mismatch");
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Byte offset of the pixel at `(x, y)`. Caller guarantees bounds.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_image_creation() {
        let img = RasterImage::new(100, 50, vec![0u8; 100 * 50 * 4]).unwrap();

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.pixels().len(), 20000);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            RasterImage::new(0, 10, vec![]),
            Err(RasterError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(RasterImage::new(10, 0, vec![]).is_err());
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let result = RasterImage::new(2, 2, vec![0u8; 12]);
        assert_eq!(
            result,
            Err(RasterError::BufferSizeMismatch {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_pixel_lookup() {
        let pixels = vec![
            1, 2, 3, 4, 5, 6, 7, 8, //
            9, 10, 11, 12, 13, 14, 15, 16,
        ];
        let img = RasterImage::new(2, 2, pixels).unwrap();

        assert_eq!(img.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(img.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(img.pixel(0, 1), Some([9, 10, 11, 12]));
        assert_eq!(img.pixel(1, 1), Some([13, 14, 15, 16]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 2), None);
    }

    #[test]
    fn test_blank_is_transparent() {
        let img = RasterImage::blank(3, 2);
        assert_eq!(img.pixel_count(), 6);
        assert!(img.pixels().iter().all(|&v| v == 0));

        let bumped = RasterImage::blank(0, 0);
        assert_eq!((bumped.width(), bumped.height()), (1, 1));
    }

    #[test]
    fn test_rgba_image_conversion() {
        let img = RasterImage::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap();
        let rgba = img.to_rgba_image();
        assert_eq!(rgba.dimensions(), (2, 1));
        assert_eq!(rgba.get_pixel(1, 0).0, [0, 255, 0, 128]);

        let back = RasterImage::from_rgba_image(rgba).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_error_display() {
        let err = RasterError::BufferSizeMismatch {
            expected: 16,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 16 bytes (width * height * 4), got 3"
        );
    }
}
