//! The editing session: one original image and at most one derived result.
//!
//! # State Model
//!
//! ```text
//! Empty ──load──▶ Loaded ──apply──▶ Modified
//!   ▲               │  ▲               │
//!   └─remove_image──┘  └─remove_changes┘
//! ```
//!
//! - Every transform runs against the original, never against a previous
//!   result, so there is no filter stacking and no history beyond one step.
//! - Loading replaces the original and drops any derived image.
//! - A failed load or export leaves the session exactly as it was.
//!
//! The derived image can only exist next to an original, and "modified"
//! means "a derived image exists", so both invariants hold by construction.

use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, EditorConfig};
use crate::decode::{decode, DecodeError};
use crate::encode::{encode, EncodeError};
use crate::operation::{Operation, ParseOperationError};
use crate::raster::RasterImage;

/// Errors surfaced by session transitions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A transform was requested before any image was loaded
    #[error("No image loaded")]
    NoImageLoaded,

    /// Export was requested with no pending changes
    #[error("Nothing to export: apply a transform first")]
    NothingToExport,

    #[error(transparent)]
    UnknownOperation(#[from] ParseOperationError),

    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to export image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Which user actions are currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionState {
    /// Any transform or filter
    pub can_transform: bool,
    /// Drop the derived image, keep the original
    pub can_remove_changes: bool,
    /// Drop everything
    pub can_remove_image: bool,
    /// Download the derived image
    pub can_export: bool,
}

/// An encoded image ready to be handed to a download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// File name including extension
    pub file_name: String,
    /// MIME type matching the encoding
    pub mime_type: &'static str,
    /// Encoded bytes
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
struct Edit {
    original: RasterImage,
    derived: Option<RasterImage>,
}

/// Editing session holding the loaded image and its transformed version.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: EditorConfig,
    edit: Option<Edit>,
}

impl Session {
    /// Create an empty session with a validated configuration.
    pub fn new(config: EditorConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self { config, edit: None })
    }

    /// Current configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the configuration. Loaded images are kept.
    pub fn set_config(&mut self, config: EditorConfig) -> Result<(), SessionError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Decode `bytes` and make the result the new original.
    ///
    /// On failure the previous state is kept untouched.
    pub fn load(&mut self, bytes: &[u8]) -> Result<&RasterImage, SessionError> {
        let image = decode(bytes).map_err(|e| {
            log::warn!("rejected image load: {e}");
            e
        })?;
        Ok(self.load_image(image))
    }

    /// Make an already decoded image the new original, discarding changes.
    pub fn load_image(&mut self, image: RasterImage) -> &RasterImage {
        log::info!("loaded {}x{} image", image.width(), image.height());
        let edit = self.edit.insert(Edit {
            original: image,
            derived: None,
        });
        &edit.original
    }

    /// Run `op` on the original and store the result as the derived image.
    pub fn apply(&mut self, op: Operation) -> Result<&RasterImage, SessionError> {
        let edit = self.edit.as_mut().ok_or(SessionError::NoImageLoaded)?;
        let derived = op.apply(&edit.original, &self.config.params);
        log::info!("applied {op}");
        Ok(&*edit.derived.insert(derived))
    }

    /// Parse an operation name and apply it.
    pub fn apply_named(&mut self, name: &str) -> Result<&RasterImage, SessionError> {
        let op: Operation = name.parse()?;
        self.apply(op)
    }

    /// Drop the derived image and return to the original.
    pub fn remove_changes(&mut self) {
        if let Some(edit) = self.edit.as_mut() {
            if edit.derived.take().is_some() {
                log::info!("removed changes");
            }
        }
    }

    /// Drop the original and any derived image.
    pub fn remove_image(&mut self) {
        if self.edit.take().is_some() {
            log::info!("removed image");
        }
    }

    /// The loaded image, if any.
    pub fn original(&self) -> Option<&RasterImage> {
        self.edit.as_ref().map(|e| &e.original)
    }

    /// The result of the last transform, if any.
    pub fn derived(&self) -> Option<&RasterImage> {
        self.edit.as_ref().and_then(|e| e.derived.as_ref())
    }

    /// Whether there is a derived image pending export.
    pub fn is_modified(&self) -> bool {
        self.derived().is_some()
    }

    /// Which actions the shell should enable.
    pub fn actions(&self) -> ActionState {
        let loaded = self.original().is_some();
        let modified = self.is_modified();
        ActionState {
            can_transform: loaded,
            can_remove_changes: modified,
            can_remove_image: loaded,
            can_export: modified,
        }
    }

    /// Encode the derived image with the configured format and file name.
    pub fn export(&self) -> Result<ExportedImage, SessionError> {
        let derived = self.derived().ok_or(SessionError::NothingToExport)?;
        let format = self.config.export_format;

        let bytes = encode(derived, format).map_err(|e| {
            log::warn!("export failed: {e}");
            e
        })?;

        let file_name = self.config.export_file_name();
        log::info!("exported {file_name} ({} bytes)", bytes.len());
        Ok(ExportedImage {
            file_name,
            mime_type: format.mime_type(),
            bytes,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::strategies;
    use proptest::prelude::*;

    fn operation_strategy() -> impl Strategy<Value = Operation> {
        prop::sample::select(Operation::ALL.to_vec())
    }

    proptest! {
        /// Property: whatever is applied, the original never changes and the
        /// session reports modified.
        #[test]
        fn prop_apply_never_touches_original(
            img in strategies::raster(12),
            ops in prop::collection::vec(operation_strategy(), 1..5),
        ) {
            let mut s = Session::default();
            s.load_image(img.clone());
            for op in ops {
                let derived = s.apply(op).unwrap().clone();
                prop_assert_eq!(derived, op.apply(&img, &s.config().params));
                prop_assert_eq!(s.original(), Some(&img));
                prop_assert!(s.is_modified());
            }
        }

        /// Property: loading again always clears pending changes.
        #[test]
        fn prop_load_clears_changes(
            a in strategies::raster(8),
            b in strategies::raster(8),
            op in operation_strategy(),
        ) {
            let mut s = Session::default();
            s.load_image(a);
            s.apply(op).unwrap();
            s.load_image(b.clone());
            prop_assert!(!s.is_modified());
            prop_assert!(s.derived().is_none());
            prop_assert_eq!(s.original(), Some(&b));
        }
    }
}
