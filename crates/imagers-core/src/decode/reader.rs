//! Format sniffing and decoding to RGBA.

use std::io::Cursor;

use image::error::ImageError;
use image::ImageReader;

use super::{DecodeError, DecodedImage};
use crate::buffer::PixelBuffer;
use crate::format::ImageFormat;

/// Decode image bytes of any supported format into an RGBA buffer.
///
/// The format is detected from the leading signature bytes, not from any
/// file name or content type.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if no decoder recognizes the bytes.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or malformed.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let Some(source) = reader.format() else {
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader.decode().map_err(map_image_error)?;
    let pixels = PixelBuffer::from_rgba_image(img.into_rgba8())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage {
        pixels,
        format: ImageFormat::from_image_format(source),
    })
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        ImageError::Limits(_) => DecodeError::OutOfMemory,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(6, 4, |x, y| Rgba([(x * 40) as u8, (y * 60) as u8, 90, 255]))
    }

    fn encoded(format: image::ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(sample_image())
            .write_to(&mut Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode(&encoded(image::ImageFormat::Png)).unwrap();
        assert_eq!(decoded.format, Some(ImageFormat::Png));
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.pixels.pixel(5, 3), [200, 180, 90, 255]);
    }

    #[test]
    fn test_decode_detects_each_encodable_format() {
        for (source, expected) in [
            (image::ImageFormat::Bmp, ImageFormat::Bmp),
            (image::ImageFormat::Gif, ImageFormat::Gif),
            (image::ImageFormat::Tiff, ImageFormat::Tiff),
        ] {
            let decoded = decode(&encoded(source)).unwrap();
            assert_eq!(decoded.format, Some(expected));
            assert_eq!(decoded.dimensions(), (6, 4));
        }
    }

    #[test]
    fn test_decode_jpeg() {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(sample_image())
            .into_rgb8()
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.format, Some(ImageFormat::Jpeg));
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.pixels.pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_decode_only_format_falls_back_to_png() {
        let decoded = decode(&encoded(image::ImageFormat::WebP)).unwrap();
        assert_eq!(decoded.format, None);
        assert_eq!(decoded.output_format(), ImageFormat::Png);
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode(&[]), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        let result = decode(b"this is not an image at all");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = encoded(image::ImageFormat::Png);
        let result = decode(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }
}
