//! Image encoding.
//!
//! Buffers are written in one of the [`ImageFormat`](crate::ImageFormat)s.
//! JPEG goes through a dedicated path with a fixed quality; the other
//! formats go through the `image` crate's generic writer.

mod jpeg;
mod writer;

use thiserror::Error;

pub use jpeg::{encode_jpeg, JPEG_QUALITY};
pub use writer::encode;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The underlying encoder failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
