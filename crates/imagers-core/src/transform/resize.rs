//! Aspect-preserving downscale with nearest-neighbor sampling.
//!
//! The image is shrunk by a single ratio so that it fits inside a
//! `max_width x max_height` box. Images that already fit are returned
//! unchanged; the resampler never upscales.

use crate::buffer::{byte_len, PixelBuffer, CHANNELS};

/// Shrink an image to fit within `max_width x max_height`, preserving aspect ratio.
///
/// # Algorithm
///
/// ```text
/// ratio      = min(max_width / width, max_height / height)
/// new_width  = floor(width * ratio)
/// new_height = floor(height * ratio)
/// dst(x, y)  = src(floor(x / ratio), floor(y / ratio))
/// ```
///
/// Returns the input unchanged when `ratio >= 1.0` (already fits) or when a
/// bound is non-positive (no valid shrink target).
pub fn resize_to_fit(image: PixelBuffer, max_width: i64, max_height: i64) -> PixelBuffer {
    let Some(ratio) = fit_ratio(image.width(), image.height(), max_width, max_height) else {
        return image;
    };

    let (new_width, new_height) = scaled_dimensions(image.width(), image.height(), ratio);
    let bounds = image.bounds();
    let last_x = bounds.width - 1;
    let last_y = bounds.height - 1;

    let src = image.as_raw();
    let src_stride = bounds.width as usize;
    let mut output = vec![0u8; byte_len(new_width, new_height)];

    for (y, row) in output
        .chunks_exact_mut(new_width as usize * CHANNELS)
        .enumerate()
    {
        let src_y = bounds.min_y + source_coord(y as u32, ratio).min(last_y);
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let src_x = bounds.min_x + source_coord(x as u32, ratio).min(last_x);
            let idx = (src_y as usize * src_stride + src_x as usize) * CHANNELS;
            dst.copy_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    PixelBuffer::from_parts(new_width, new_height, output)
}

/// Compute the shrink ratio, or `None` when no shrink should happen.
fn fit_ratio(width: u32, height: u32, max_width: i64, max_height: i64) -> Option<f64> {
    let ratio_x = max_width as f64 / f64::from(width);
    let ratio_y = max_height as f64 / f64::from(height);
    let ratio = ratio_x.min(ratio_y);

    if ratio >= 1.0 || ratio <= 0.0 || ratio.is_nan() {
        None
    } else {
        Some(ratio)
    }
}

/// Truncated target dimensions, raised to at least one pixel.
fn scaled_dimensions(width: u32, height: u32, ratio: f64) -> (u32, u32) {
    let new_width = (f64::from(width) * ratio) as u32;
    let new_height = (f64::from(height) * ratio) as u32;
    (new_width.max(1), new_height.max(1))
}

#[inline]
fn source_coord(dst: u32, ratio: f64) -> u32 {
    (f64::from(dst) / ratio) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity(byte_len(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        PixelBuffer::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_resize_square_into_rectangle() {
        let img = create_test_image(100, 100);
        let resized = resize_to_fit(img, 50, 40);

        // ratio = min(0.5, 0.4) = 0.4
        assert_eq!(resized.dimensions(), (40, 40));
    }

    #[test]
    fn test_resize_landscape() {
        let img = create_test_image(6000, 4000);
        let resized = resize_to_fit(img, 2560, 2560);

        assert_eq!(resized.width(), 2560);
        // 4000 * (2560/6000) = 1706.67, truncated
        assert_eq!(resized.height(), 1706);
    }

    #[test]
    fn test_resize_portrait() {
        let img = create_test_image(400, 600);
        let resized = resize_to_fit(img, 256, 256);

        assert_eq!(resized.height(), 256);
        assert_eq!(resized.width(), 170); // 400 * (256/600) = 170.67
    }

    #[test]
    fn test_resize_already_smaller() {
        let img = create_test_image(100, 50);
        let resized = resize_to_fit(img.clone(), 256, 256);

        // Should return the same image when it already fits
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_exact_fit_is_identity() {
        let img = create_test_image(100, 50);
        assert_eq!(resize_to_fit(img.clone(), 100, 50), img);
    }

    #[test]
    fn test_resize_non_positive_bounds_is_identity() {
        let img = create_test_image(100, 50);

        assert_eq!(resize_to_fit(img.clone(), 0, 50), img);
        assert_eq!(resize_to_fit(img.clone(), 50, 0), img);
        assert_eq!(resize_to_fit(img.clone(), -10, 20), img);
        assert_eq!(resize_to_fit(img.clone(), -10, -20), img);
    }

    #[test]
    fn test_resize_tiny_ratio_keeps_one_pixel() {
        let img = create_test_image(1000, 1);
        let resized = resize_to_fit(img, 10, 10);

        // 1 * 0.01 truncates to 0 and is raised to 1
        assert_eq!(resized.dimensions(), (10, 1));
    }

    #[test]
    fn test_resize_nearest_neighbor_sampling() {
        // 4x4 image with a distinct value per pixel
        let pixels: Vec<u8> = (0..16u8).flat_map(|v| [v, v, v, 255]).collect();
        let img = PixelBuffer::from_raw(4, 4, pixels).unwrap();

        let resized = resize_to_fit(img.clone(), 2, 2);
        assert_eq!(resized.dimensions(), (2, 2));

        // ratio 0.5: dst (x, y) samples src (2x, 2y)
        assert_eq!(resized.pixel(0, 0), img.pixel(0, 0));
        assert_eq!(resized.pixel(1, 0), img.pixel(2, 0));
        assert_eq!(resized.pixel(0, 1), img.pixel(0, 2));
        assert_eq!(resized.pixel(1, 1), img.pixel(2, 2));
    }

    #[test]
    fn test_resize_does_not_blend() {
        let img = create_test_image(90, 70);
        let resized = resize_to_fit(img.clone(), 31, 17);

        // Every output pixel must exist somewhere in the source
        let source: std::collections::HashSet<[u8; 4]> = img
            .as_raw()
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        for p in resized.as_raw().chunks_exact(CHANNELS) {
            assert!(source.contains(&[p[0], p[1], p[2], p[3]]));
        }
    }

    #[test]
    fn test_fit_ratio() {
        assert_eq!(fit_ratio(100, 100, 50, 40), Some(0.4));
        assert_eq!(fit_ratio(100, 100, 100, 100), None);
        assert_eq!(fit_ratio(100, 100, 200, 300), None);
        assert_eq!(fit_ratio(100, 100, 0, 40), None);
    }

    #[test]
    fn test_scaled_dimensions_truncate() {
        assert_eq!(scaled_dimensions(6000, 4000, 2560.0 / 6000.0), (2560, 1706));
        assert_eq!(scaled_dimensions(99, 99, 0.5), (49, 49));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
