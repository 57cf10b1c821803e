//! RasterLab Core - Image transformation library
//!
//! This crate provides the engine behind the RasterLab editor: decoding an
//! uploaded file into an RGBA raster, geometric remaps (translate, rotate,
//! mirror, zoom), point filters (brightness, contrast, grayscale), a small
//! editing session that tracks the original and transformed image, and PNG
//! or JPEG export.
//!
//! All operations are pure functions from an input raster to a new raster of
//! the same size. The input is never modified.

pub mod config;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod luminance;
pub mod operation;
pub mod raster;
pub mod session;
pub mod transform;

pub use config::{ConfigError, EditorConfig, TransformParams};
pub use decode::{decode, DecodeError};
pub use encode::{encode, encode_png, EncodeError, ExportFormat};
pub use filters::{brightness, contrast, grayscale, ChannelLut};
pub use operation::{Operation, ParseOperationError};
pub use raster::{RasterError, RasterImage};
pub use session::{ActionState, ExportedImage, Session, SessionError};
pub use transform::{mirror, rotate90, scale, translate, InterpolationFilter, Zoom};
