//! Origin-anchored scaling with nearest or bilinear sampling.
//!
//! The scaled content is drawn from the top-left corner onto a canvas of the
//! input's size. The source position of output pixel `(x, y)` is the pixel
//! center mapped back through the scale:
//!
//! ```text
//! src = ((x + 0.5) / factor, (y + 0.5) / factor)
//! ```
//!
//! Points outside `[0, W) x [0, H)` are transparent.

use serde::{Deserialize, Serialize};

use super::remap;
use crate::raster::RasterImage;

/// Sampling method used when scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Take the source pixel containing the mapped point. Exact, blocky on zoom in.
    #[default]
    Nearest,
    /// Blend the four closest pixel centers, clamping at the edges.
    Bilinear,
}

/// The two zoom steps offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zoom {
    /// Enlarge by 1.5x (right and bottom edges are cropped).
    In,
    /// Shrink to 0.5x (transparent margin on the right and bottom).
    Out,
}

impl Zoom {
    /// Scale factor for this zoom step.
    pub fn factor(self) -> f64 {
        match self {
            Zoom::In => 1.5,
            Zoom::Out => 0.5,
        }
    }
}

/// Scale the image content by `factor`, keeping the input's canvas size.
///
/// Factors that are not finite and positive leave every pixel transparent.
pub fn scale(image: &RasterImage, factor: f64, filter: InterpolationFilter) -> RasterImage {
    log::debug!(
        "scale {}x{} by {factor} ({filter:?})",
        image.width(),
        image.height()
    );

    if !(factor.is_finite() && factor > 0.0) {
        return RasterImage::blank(image.width(), image.height());
    }

    let (w, h) = (image.width() as f64, image.height() as f64);

    remap(image, |x, y| {
        let src_x = (x as f64 + 0.5) / factor;
        let src_y = (y as f64 + 0.5) / factor;

        if !(src_x >= 0.0 && src_x < w && src_y >= 0.0 && src_y < h) {
            return None;
        }

        match filter {
            InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y),
            InterpolationFilter::Bilinear => Some(sample_bilinear(image, src_x, src_y)),
        }
    })
}

/// Sample the pixel whose area contains `(x, y)`.
#[inline]
fn sample_nearest(image: &RasterImage, x: f64, y: f64) -> Option<[u8; 4]> {
    let px = (x.floor() as u32).min(image.width() - 1);
    let py = (y.floor() as u32).min(image.height() - 1);
    image.pixel(px, py)
}

/// Sample a pixel using bilinear interpolation.
///
/// `(x, y)` is a continuous position where pixel `(i, j)` has its center at
/// `(i + 0.5, j + 0.5)`. Neighbours past the edge are clamped.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 4] {
    let max_x = (image.width() - 1) as f64;
    let max_y = (image.height() - 1) as f64;

    let u = (x - 0.5).clamp(0.0, max_x);
    let v = (y - 0.5).clamp(0.0, max_y);

    let x0 = u.floor() as u32;
    let y0 = v.floor() as u32;
    let x1 = (x0 + 1).min(image.width() - 1);
    let y1 = (y0 + 1).min(image.height() - 1);

    // Fractional distances
    let fx = u - x0 as f64;
    let fy = v - y0 as f64;

    let corner = |px: u32, py: u32| image.pixel(px, py).unwrap_or_default();
    let p00 = corner(x0, y0);
    let p10 = corner(x1, y0);
    let p01 = corner(x0, y1);
    let p11 = corner(x1, y1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[i] as f64 * fx * (1.0 - fy)
            + p01[i] as f64 * (1.0 - fx) * fy
            + p11[i] as f64 * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
