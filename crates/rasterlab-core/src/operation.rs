//! Named editing commands and their dispatch to the engine.
//!
//! A presentation shell maps each menu entry or button to an [`Operation`]
//! (usually by name) and hands it to the session. Dispatch is a plain
//! `match`; there are no callbacks to register.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TransformParams;
use crate::filters::{brightness, contrast, grayscale};
use crate::raster::RasterImage;
use crate::transform::{mirror, rotate90, scale, translate};

/// Error returned when an operation name is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct ParseOperationError(pub String);

/// Every transform the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Shift content right/down by the configured offset
    Translate,
    /// Quarter turn clockwise about the center
    Rotate90,
    /// Horizontal flip
    Mirror,
    /// Scale up by the zoom-in factor
    ZoomIn,
    /// Scale down by the zoom-out factor
    ZoomOut,
    /// Add the configured brightness offset
    Brightness,
    /// Apply the configured contrast amount
    Contrast,
    /// Convert to luma
    Grayscale,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 8] = [
        Operation::Translate,
        Operation::Rotate90,
        Operation::Mirror,
        Operation::ZoomIn,
        Operation::ZoomOut,
        Operation::Brightness,
        Operation::Contrast,
        Operation::Grayscale,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Translate => "translate",
            Operation::Rotate90 => "rotate90",
            Operation::Mirror => "mirror",
            Operation::ZoomIn => "zoom_in",
            Operation::ZoomOut => "zoom_out",
            Operation::Brightness => "brightness",
            Operation::Contrast => "contrast",
            Operation::Grayscale => "grayscale",
        }
    }

    /// True for remaps that move pixels, false for point filters.
    pub fn is_geometric(self) -> bool {
        matches!(
            self,
            Operation::Translate
                | Operation::Rotate90
                | Operation::Mirror
                | Operation::ZoomIn
                | Operation::ZoomOut
        )
    }

    /// Run the operation on `image` with the given parameters.
    pub fn apply(self, image: &RasterImage, params: &TransformParams) -> RasterImage {
        match self {
            Operation::Translate => translate(image, params.translate_x, params.translate_y),
            Operation::Rotate90 => rotate90(image),
            Operation::Mirror => mirror(image),
            Operation::ZoomIn => scale(image, params.zoom_in, params.filter),
            Operation::ZoomOut => scale(image, params.zoom_out, params.filter),
            Operation::Brightness => brightness(image, params.brightness),
            Operation::Contrast => contrast(image, params.contrast),
            Operation::Grayscale => grayscale(image),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        let op = match name.as_str() {
            "translate" => Operation::Translate,
            "rotate90" | "rotate" => Operation::Rotate90,
            "mirror" | "flip" => Operation::Mirror,
            "zoom_in" => Operation::ZoomIn,
            "zoom_out" => Operation::ZoomOut,
            "brightness" => Operation::Brightness,
            "contrast" => Operation::Contrast,
            "grayscale" | "greyscale" | "gray" => Operation::Grayscale,
            _ => return Err(ParseOperationError(s.to_string())),
        };
        Ok(op)
    }
}
