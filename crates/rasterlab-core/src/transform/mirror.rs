//! Horizontal mirroring.

use super::remap;
use crate::raster::RasterImage;

/// Flip the image left-to-right: output `(x, y)` = input `(width - 1 - x, y)`.
pub fn mirror(image: &RasterImage) -> RasterImage {
    log::debug!("mirror {}x{}", image.width(), image.height());
    let last = image.width() - 1;
    remap(image, |x, y| image.pixel(last - x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::indexed_image;

    #[test]
    fn test_mirror_swaps_columns() {
        let img = RasterImage::new(
            3,
            1,
            vec![
                255, 0, 0, 255, //
                0, 255, 0, 255, //
                0, 0, 255, 10,
            ],
        )
        .unwrap();
        let result = mirror(&img);

        assert_eq!(result.pixel(0, 0), Some([0, 0, 255, 10]));
        assert_eq!(result.pixel(1, 0), Some([0, 255, 0, 255]));
        assert_eq!(result.pixel(2, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_mirror_single_column() {
        let img = indexed_image(1, 5);
        assert_eq!(mirror(&img), img);
    }

    #[test]
    fn test_mirror_keeps_rows() {
        let img = indexed_image(6, 4);
        let result = mirror(&img);
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(result.pixel(x, y), img.pixel(5 - x, y));
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::strategies;
    use proptest::prelude::*;

    proptest! {
        /// Property: mirroring twice returns the exact input.
        #[test]
        fn prop_mirror_is_involution(img in strategies::raster(24)) {
            prop_assert_eq!(mirror(&mirror(&img)), img);
        }
    }
}
