//! Quarter-turn rotation about the image center.
//!
//! # Algorithm
//!
//! The rotation is the affine map "move the center to the origin, rotate by
//! +90°, move back", evaluated on the input's own canvas. We use the inverse
//! mapping on pixel centers. With the center at `(W/2, H/2)`, the source of
//! output pixel `(x, y)` is:
//!
//! ```text
//! src_x = floor((2y + W - H) / 2)
//! src_y = floor((W + H - 2 - 2x) / 2)
//! ```
//!
//! For a square image this reduces to `out(x, y) = in(y, W - 1 - x)`.
//! On a non-square canvas the rotated content overhangs on one axis (cropped)
//! and falls short on the other (transparent). When `W - H` is odd the center
//! sits between pixel columns and the `floor` picks the left/upper neighbour.

use super::{pixel_at, remap};
use crate::raster::RasterImage;

/// Rotate the image by +90° (clockwise on screen) about its center.
///
/// The output canvas keeps the input's width and height.
pub fn rotate90(image: &RasterImage) -> RasterImage {
    let w = image.width() as i64;
    let h = image.height() as i64;
    log::debug!("rotate90 {w}x{h}");

    remap(image, |x, y| {
        let src_x = (2 * y as i64 + w - h).div_euclid(2);
        let src_y = (w + h - 2 - 2 * x as i64).div_euclid(2);
        pixel_at(image, src_x, src_y)
    })
}
