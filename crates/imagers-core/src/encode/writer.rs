//! Encoding to any output format.

use std::io::Cursor;

use image::DynamicImage;

use super::jpeg::{encode_jpeg, JPEG_QUALITY};
use super::EncodeError;
use crate::buffer::PixelBuffer;
use crate::format::ImageFormat;

/// Encode a buffer in the requested format.
///
/// JPEG output drops alpha and uses quality 90. The other formats keep the
/// RGBA pixels as they are, apart from GIF palette quantization.
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the encoder rejects the image.
pub fn encode(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    if format == ImageFormat::Jpeg {
        return encode_jpeg(image, JPEG_QUALITY);
    }

    let rgba = image.to_rgba_image().ok_or_else(|| {
        EncodeError::EncodingFailed("pixel data does not match dimensions".to_string())
    })?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut bytes), format.to_image_format())
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(bytes)
}
