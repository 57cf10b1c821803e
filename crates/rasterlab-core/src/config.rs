//! Editor configuration: operation parameters and export settings.
//!
//! The user never picks filter strengths; these values are fixed by the
//! application. They are kept in serializable structs so a shell can ship a
//! different preset as JSON. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::ExportFormat;
use crate::filters::{DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, MAX_CONTRAST};
use crate::transform::{InterpolationFilter, Zoom, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y};

/// Base name of the exported file, without extension.
pub const DEFAULT_EXPORT_STEM: &str = "imagem_transformada";

/// Errors found when validating an [`EditorConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Zoom factors must be finite and positive
    #[error("Invalid {name} factor: {value} (must be finite and > 0)")]
    InvalidZoomFactor { name: &'static str, value: f64 },

    /// Contrast amount outside the supported range
    #[error("Contrast amount {0} is outside [-255, 255]")]
    ContrastOutOfRange(f64),

    /// Export stem is empty or contains a path separator
    #[error("Invalid export file name: {0:?}")]
    InvalidExportStem(String),
}

/// Parameters passed to the engine for each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Horizontal translation in pixels
    pub translate_x: i32,
    /// Vertical translation in pixels
    pub translate_y: i32,
    /// Zoom-in scale factor
    pub zoom_in: f64,
    /// Zoom-out scale factor
    pub zoom_out: f64,
    /// Brightness offset per channel (-255 to 255)
    pub brightness: i32,
    /// Contrast amount (-255 to 255)
    pub contrast: f64,
    /// Sampling used by zoom
    pub filter: InterpolationFilter,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            translate_x: DEFAULT_OFFSET_X,
            translate_y: DEFAULT_OFFSET_Y,
            zoom_in: Zoom::In.factor(),
            zoom_out: Zoom::Out.factor(),
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            filter: InterpolationFilter::Nearest,
        }
    }
}

/// Top-level editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Engine parameters
    pub params: TransformParams,
    /// Exported file name without extension
    pub export_stem: String,
    /// Encoding used on export
    pub export_format: ExportFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            params: TransformParams::default(),
            export_stem: DEFAULT_EXPORT_STEM.to_string(),
            export_format: ExportFormat::Png,
        }
    }
}

impl EditorConfig {
    /// Create a config with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every value the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.params;

        for (name, value) in [("zoom_in", p.zoom_in), ("zoom_out", p.zoom_out)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidZoomFactor { name, value });
            }
        }

        if !(-MAX_CONTRAST..=MAX_CONTRAST).contains(&p.contrast) {
            return Err(ConfigError::ContrastOutOfRange(p.contrast));
        }

        let stem = self.export_stem.trim();
        if stem.is_empty() || stem.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExportStem(self.export_stem.clone()));
        }

        Ok(())
    }

    /// File name used for the exported image, e.g. `imagem_transformada.png`.
    pub fn export_file_name(&self) -> String {
        format!(
            "{}.{}",
            self.export_stem.trim(),
            self.export_format.extension()
        )
    }
}
