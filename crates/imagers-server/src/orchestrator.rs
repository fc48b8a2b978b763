//! Fetch, decode, transform, encode.
//!
//! Each request runs exactly one [`Operation`]. Pixel work happens on the
//! blocking pool; only the download is awaited on the request task.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;

use imagers_core::{
    apply_watermark, decode, encode, resize_to_fit, rotate, DecodedImage, ImageFormat,
    RotationAngle, WatermarkSpec,
};

use crate::error::ApiError;
use crate::fetch::{parse_image_url, ImageFetcher};
use crate::types::ImageResponse;

/// One of the four supported request kinds.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Re-encode without touching pixels.
    ChangeFormat(ImageFormat),
    Rotate(RotationAngle),
    Resize { max_width: i64, max_height: i64 },
    Watermark(WatermarkSpec),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ChangeFormat(_) => "change-format",
            Operation::Rotate(_) => "rotate",
            Operation::Resize { .. } => "resize",
            Operation::Watermark(_) => "watermark",
        }
    }

    /// Transform a decoded image and encode the result.
    pub fn apply(self, decoded: DecodedImage) -> Result<Processed, ApiError> {
        let original_size = decoded.dimensions();
        let source_format = decoded.output_format();

        let (pixels, format) = match self {
            Operation::ChangeFormat(format) => (decoded.pixels, format),
            Operation::Rotate(angle) => (rotate(decoded.pixels, angle), source_format),
            Operation::Resize {
                max_width,
                max_height,
            } => (
                resize_to_fit(decoded.pixels, max_width, max_height),
                source_format,
            ),
            Operation::Watermark(spec) => {
                (apply_watermark(&decoded.pixels, &spec), ImageFormat::Jpeg)
            }
        };

        let bytes = encode(&pixels, format)?;
        Ok(Processed {
            bytes,
            format,
            original_size,
            new_size: pixels.dimensions(),
        })
    }
}

/// Encoded output of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub original_size: (u32, u32),
    pub new_size: (u32, u32),
}

impl Processed {
    pub fn into_image_response(self, message: impl Into<String>) -> ImageResponse {
        ImageResponse {
            success: true,
            message: message.into(),
            image_data: Some(STANDARD.encode(&self.bytes)),
            original_size: Some([self.original_size.0, self.original_size.1]),
            new_size: Some([self.new_size.0, self.new_size.1]),
        }
    }
}

/// Download `image_url` and run `operation` on it.
pub async fn process(
    fetcher: &dyn ImageFetcher,
    image_url: &str,
    operation: Operation,
) -> Result<Processed, ApiError> {
    let url = parse_image_url(image_url).map_err(ApiError::Validation)?;
    let name = operation.name();

    let bytes = fetcher.fetch(&url).await?;
    let fetched = bytes.len();

    let processed = run_blocking(move || decode_and_apply(&bytes, operation)).await?;

    tracing::info!(
        operation = name,
        url = %url,
        fetched_bytes = fetched,
        output_bytes = processed.bytes.len(),
        format = %processed.format,
        original = ?processed.original_size,
        new = ?processed.new_size,
        "processed image"
    );

    Ok(processed)
}

fn decode_and_apply(bytes: &Bytes, operation: Operation) -> Result<Processed, ApiError> {
    let decoded = decode(bytes)?;
    operation.apply(decoded)
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagers_core::{PixelBuffer, WatermarkPosition};

    fn decoded(width: u32, height: u32, format: Option<ImageFormat>) -> DecodedImage {
        DecodedImage {
            pixels: PixelBuffer::filled(width, height, [30, 60, 90, 255]),
            format,
        }
    }

    fn output_of(processed: &Processed) -> DecodedImage {
        decode(&processed.bytes).unwrap()
    }

    #[test]
    fn test_change_format_keeps_pixels_dimensions() {
        let processed = Operation::ChangeFormat(ImageFormat::Bmp)
            .apply(decoded(5, 3, Some(ImageFormat::Png)))
            .unwrap();

        assert_eq!(processed.format, ImageFormat::Bmp);
        assert_eq!(processed.original_size, (5, 3));
        assert_eq!(processed.new_size, (5, 3));
        assert_eq!(output_of(&processed).format, Some(ImageFormat::Bmp));
    }

    #[test]
    fn test_rotate_keeps_source_format() {
        let processed = Operation::Rotate(RotationAngle::Deg90)
            .apply(decoded(4, 2, Some(ImageFormat::Gif)))
            .unwrap();

        assert_eq!(processed.format, ImageFormat::Gif);
        assert_eq!(processed.new_size, (2, 4));
    }

    #[test]
    fn test_rotate_unknown_source_writes_png() {
        let processed = Operation::Rotate(RotationAngle::Deg180)
            .apply(decoded(4, 2, None))
            .unwrap();

        assert_eq!(processed.format, ImageFormat::Png);
        assert_eq!(processed.new_size, (4, 2));
    }

    #[test]
    fn test_resize_reports_new_size() {
        let processed = Operation::Resize {
            max_width: 50,
            max_height: 40,
        }
        .apply(decoded(100, 100, Some(ImageFormat::Png)))
        .unwrap();

        assert_eq!(processed.original_size, (100, 100));
        assert_eq!(processed.new_size, (40, 40));
        assert_eq!(output_of(&processed).dimensions(), (40, 40));
    }

    #[test]
    fn test_watermark_always_jpeg() {
        let spec = WatermarkSpec::new("abc", WatermarkPosition::BottomRight, 0.7);
        let processed = Operation::Watermark(spec)
            .apply(decoded(200, 100, Some(ImageFormat::Png)))
            .unwrap();

        assert_eq!(processed.format, ImageFormat::Jpeg);
        assert_eq!(processed.new_size, (200, 100));
        assert_eq!(&processed.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_into_image_response() {
        let processed = Processed {
            bytes: vec![1, 2, 3],
            format: ImageFormat::Png,
            original_size: (4, 2),
            new_size: (2, 4),
        };
        let response = processed.into_image_response("done");

        assert!(response.success);
        assert_eq!(response.message, "done");
        assert_eq!(response.image_data.as_deref(), Some("AQID"));
        assert_eq!(response.original_size, Some([4, 2]));
        assert_eq!(response.new_size, Some([2, 4]));
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::ChangeFormat(ImageFormat::Png).name(), "change-format");
        assert_eq!(Operation::Rotate(RotationAngle::Deg0).name(), "rotate");
        assert_eq!(
            Operation::Resize {
                max_width: 1,
                max_height: 1
            }
            .name(),
            "resize"
        );
        assert_eq!(Operation::Watermark(WatermarkSpec::default()).name(), "watermark");
    }
}
