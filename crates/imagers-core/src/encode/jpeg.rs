//! JPEG encoding.
//!
//! JPEG has no alpha channel, so the alpha byte of every pixel is dropped
//! and the color channels are written as-is, without compositing onto a
//! background. Fully transparent pixels keep whatever color they store.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::EncodeError;
use crate::buffer::{PixelBuffer, CHANNELS};

/// Quality used for every JPEG the service writes.
pub const JPEG_QUALITY: u8 = 90;

/// Encode an RGBA buffer to JPEG bytes.
///
/// `quality` is clamped to `1..=100`.
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    let rgb = strip_alpha(image.as_raw());

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
