//! Geometric remaps: translate, rotate, mirror and scale.
//!
//! Every remap keeps the input's canvas size and works by inverse mapping:
//! for each output pixel we ask which source pixel lands there. Output pixels
//! with no source are filled with [`TRANSPARENT`] black.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downwards
//! - Positive rotation is clockwise on screen
//! - Scaling is anchored at the origin, so zooming in crops the right and
//!   bottom edges and zooming out leaves a transparent margin there
//!
//! [`TRANSPARENT`]: crate::raster::TRANSPARENT

mod mirror;
mod rotation;
mod scale;
mod translate;

pub use mirror::mirror;
pub use rotation::rotate90;
pub use scale::{scale, InterpolationFilter, Zoom};
pub use translate::{translate, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y};

use crate::raster::{RasterImage, CHANNELS};

/// Build a same-sized image by sampling a source pixel for every output pixel.
///
/// `sample` receives output coordinates and returns the RGBA value to write,
/// or `None` to leave the transparent background.
pub(crate) fn remap<F>(image: &RasterImage, mut sample: F) -> RasterImage
where
    F: FnMut(u32, u32) -> Option<[u8; 4]>,
{
    let width = image.width() as usize;
    let mut output = vec![0u8; image.pixels().len()];

    for (idx, dst) in output.chunks_exact_mut(CHANNELS).enumerate() {
        let x = (idx % width) as u32;
        let y = (idx / width) as u32;
        if let Some(pixel) = sample(x, y) {
            dst.copy_from_slice(&pixel);
        }
    }

    image.with_pixels(output)
}

/// Look up a pixel with signed coordinates, `None` outside the image.
#[inline]
pub(crate) fn pixel_at(image: &RasterImage, x: i64, y: i64) -> Option<[u8; 4]> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    image.pixel(x, y)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::TRANSPARENT;
    use test_support::indexed_image;

    #[test]
    fn test_remap_identity() {
        let img = indexed_image(5, 3);
        let result = remap(&img, |x, y| img.pixel(x, y));
        assert_eq!(result, img);
    }

    #[test]
    fn test_remap_none_is_transparent() {
        let img = indexed_image(4, 4);
        let result = remap(&img, |_, _| None);
        assert_eq!((result.width(), result.height()), (4, 4));
        assert!(result.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_remap_does_not_touch_input() {
        let img = indexed_image(3, 3);
        let before = img.clone();
        let _ = remap(&img, |_, _| Some([1, 2, 3, 4]));
        assert_eq!(img, before);
    }

    #[test]
    fn test_pixel_at_bounds() {
        let img = indexed_image(2, 2);
        assert_eq!(pixel_at(&img, -1, 0), None);
        assert_eq!(pixel_at(&img, 0, -1), None);
        assert_eq!(pixel_at(&img, 2, 0), None);
        assert_eq!(pixel_at(&img, i64::MAX, 0), None);
        assert_eq!(pixel_at(&img, 1, 1), img.pixel(1, 1));
        assert_ne!(pixel_at(&img, 0, 0), Some(TRANSPARENT));
    }
}
