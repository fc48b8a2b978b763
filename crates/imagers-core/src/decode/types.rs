//! Core types for image decoding.

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::format::ImageFormat;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not start with any recognized image signature.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoding would exceed the decoder's allocation limits.
    #[error("Out of memory during decoding")]
    OutOfMemory,
}

/// A decoded image plus the format it was stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// RGBA pixels.
    pub pixels: PixelBuffer,
    /// Detected source format, `None` when it is not one we can encode.
    pub format: Option<ImageFormat>,
}

impl DecodedImage {
    /// Format to write results in: the source format, else PNG.
    pub fn output_format(&self) -> ImageFormat {
        self.format.unwrap_or(ImageFormat::Png)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
