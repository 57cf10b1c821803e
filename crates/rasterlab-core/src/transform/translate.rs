//! Translation by a fixed pixel offset.

use super::{pixel_at, remap};
use crate::raster::RasterImage;

/// Default horizontal offset in pixels.
pub const DEFAULT_OFFSET_X: i32 = 50;

/// Default vertical offset in pixels.
pub const DEFAULT_OFFSET_Y: i32 = 30;

/// Shift the image content by `(dx, dy)` pixels.
///
/// The canvas keeps its size: content pushed past the right/bottom edge is
/// dropped and the uncovered band on the opposite side is transparent.
/// Negative offsets shift left/up.
///
/// Output pixel `(x, y)` takes input pixel `(x - dx, y - dy)`.
pub fn translate(image: &RasterImage, dx: i32, dy: i32) -> RasterImage {
    log::debug!(
        "translate {}x{} by ({dx}, {dy})",
        image.width(),
        image.height()
    );
    remap(image, |x, y| {
        pixel_at(image, x as i64 - dx as i64, y as i64 - dy as i64)
    })
}
