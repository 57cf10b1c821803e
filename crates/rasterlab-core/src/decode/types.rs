//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterError;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is empty or its format is not recognized.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the decoder rejected the data.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoder produced a buffer that is not a valid raster.
    #[error("Decoded image is not a valid raster: {0}")]
    InvalidRaster(#[from] RasterError),
}

/// EXIF orientation tag (0x0112). Values 1-8 describe how the stored pixels
/// must be flipped or turned to display upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the main diagonal
    Transpose = 5,
    /// Stored turned; display needs a clockwise quarter turn
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal
    Transverse = 7,
    /// Stored turned; display needs a counter-clockwise quarter turn
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
