//! Point filters: brightness, contrast and grayscale.
//!
//! Each output pixel depends only on the same input pixel. The RGB channels
//! are processed independently (grayscale mixes them through the luma
//! weights) and the alpha channel is never touched. Results are rounded to
//! the nearest integer and clamped to `[0, 255]`.
//!
//! Brightness and contrast map every channel value through the same function,
//! so they are evaluated once per possible value into a [`ChannelLut`].

use crate::luminance::luma_u8;
use crate::raster::{RasterImage, CHANNELS};

/// Default brightness offset added to each channel.
pub const DEFAULT_BRIGHTNESS: i32 = 40;

/// Default contrast amount.
pub const DEFAULT_CONTRAST: f64 = 30.0;

/// Largest accepted contrast magnitude. The factor formula has a pole at 259.
pub const MAX_CONTRAST: f64 = 255.0;

/// Lookup table mapping each 8-bit channel value to its filtered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLut {
    /// LUT values: lut[input] = output
    pub lut: [u8; 256],
}

impl ChannelLut {
    /// Build a LUT by evaluating `f` at every input value.
    ///
    /// Outputs are clamped to `[0, 255]` and rounded to the nearest integer.
    pub fn from_fn<F: Fn(f64) -> f64>(f: F) -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = f(i as f64).clamp(0.0, 255.0).round() as u8;
        }
        Self { lut }
    }

    /// Identity LUT (no change).
    pub fn identity() -> Self {
        Self::from_fn(|v| v)
    }

    /// `c' = clamp(c + delta)`.
    pub fn brightness(delta: i32) -> Self {
        let delta = delta as f64;
        Self::from_fn(|v| v + delta)
    }

    /// `c' = clamp(f * (c - 128) + 128)` with the classic contrast factor
    /// `f = 259 * (amount + 255) / (255 * (259 - amount))`.
    pub fn contrast(amount: f64) -> Self {
        let factor = contrast_factor(amount);
        Self::from_fn(|v| factor * (v - 128.0) + 128.0)
    }

    /// Check if this LUT leaves every value unchanged.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Map the RGB channels of an image through the LUT, keeping alpha.
    pub fn apply(&self, image: &RasterImage) -> RasterImage {
        let mut pixels = image.pixels().to_vec();
        if self.is_identity() {
            return image.with_pixels(pixels);
        }

        for chunk in pixels.chunks_exact_mut(CHANNELS) {
            chunk[0] = self.lut[chunk[0] as usize];
            chunk[1] = self.lut[chunk[1] as usize];
            chunk[2] = self.lut[chunk[2] as usize];
        }
        image.with_pixels(pixels)
    }
}

impl Default for ChannelLut {
    fn default() -> Self {
        Self::identity()
    }
}

/// Contrast factor for `amount`, clamped to `[-MAX_CONTRAST, MAX_CONTRAST]`.
///
/// Returns exactly `1.0` for an amount of zero. NaN is treated as zero.
pub fn contrast_factor(amount: f64) -> f64 {
    let amount = if amount.is_nan() {
        0.0
    } else {
        amount.clamp(-MAX_CONTRAST, MAX_CONTRAST)
    };
    (259.0 * (amount + 255.0)) / (255.0 * (259.0 - amount))
}

/// Add `delta` to the R, G and B channels of every pixel.
pub fn brightness(image: &RasterImage, delta: i32) -> RasterImage {
    log::debug!("brightness {delta:+} on {}x{}", image.width(), image.height());
    ChannelLut::brightness(delta).apply(image)
}

/// Stretch (positive `amount`) or flatten (negative) the channels around 128.
///
/// `amount` is clamped to `[-255, 255]`.
pub fn contrast(image: &RasterImage, amount: f64) -> RasterImage {
    log::debug!("contrast {amount} on {}x{}", image.width(), image.height());
    ChannelLut::contrast(amount).apply(image)
}

/// Replace R, G and B by `round(0.299 R + 0.587 G + 0.114 B)`.
pub fn grayscale(image: &RasterImage) -> RasterImage {
    log::debug!("grayscale {}x{}", image.width(), image.height());
    let mut pixels = image.pixels().to_vec();

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let gray = luma_u8(chunk[0], chunk[1], chunk[2]);
        chunk[0] = gray;
        chunk[1] = gray;
        chunk[2] = gray;
    }
    image.with_pixels(pixels)
}
