//! Image decoding for Rasterlab.
//!
//! Turns encoded bytes (PNG, JPEG, GIF, WebP) into a [`RasterImage`] with
//! RGBA pixel data. The format is detected from the content, not from a file
//! name, and EXIF orientation is applied so the buffer is upright.
//!
//! Decoding is synchronous: the presentation shell hands over the file bytes
//! and gets a finished raster back, or a [`DecodeError`].
//!
//! # Examples
//!
//! ```ignore
//! use rasterlab_core::decode::decode;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```
//!
//! [`RasterImage`]: crate::raster::RasterImage

mod reader;
mod types;

pub use reader::{decode, decode_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation};
