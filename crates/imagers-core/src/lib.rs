//! Imagers Core - Image processing library
//!
//! This crate provides the pixel-level engine behind the imagers service:
//! decoding and encoding, quarter-turn rotation, fit-to-box downscaling,
//! and bitmap text watermarks. Nothing here performs I/O.

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod format;
pub mod transform;
pub mod watermark;

pub use buffer::{Bounds, BufferError, PixelBuffer, Rgba};
pub use decode::{decode, DecodeError, DecodedImage};
pub use encode::{encode, EncodeError};
pub use format::{ImageFormat, UnsupportedFormatError};
pub use transform::{resize_to_fit, rotate, rotate_degrees, RotationAngle};
pub use watermark::{apply_watermark, WatermarkPosition, WatermarkSpec};
