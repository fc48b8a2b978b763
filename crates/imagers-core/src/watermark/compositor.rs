//! Text watermark compositing with a one-pixel drop shadow.
//!
//! # Algorithm
//!
//! 1. Copy the source image.
//! 2. Draw the text in black at half alpha at the 8 neighbours of the anchor.
//! 3. Draw the text in white at full alpha at the anchor.
//!
//! Each covered pixel is blended with straight-alpha "over":
//! `dst = src * a + dst * (1 - a)` per channel, `a` normalized to `[0, 1]`.

use super::font::{self, ASCENT, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::position::{text_anchor, Anchor};
use super::WatermarkSpec;
use crate::buffer::{PixelBuffer, Rgba};

const SHADOW_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Draw a text watermark onto a copy of `image`.
///
/// The result always has the input's dimensions. Empty text or zero opacity
/// yields an exact copy.
pub fn apply_watermark(image: &PixelBuffer, spec: &WatermarkSpec) -> PixelBuffer {
    let mut output = image.clone();

    let alpha = opacity_to_alpha(spec.opacity);
    if spec.text.is_empty() || alpha == 0 {
        return output;
    }

    let text_size = (font::text_width(&spec.text), GLYPH_HEIGHT);
    let anchor = text_anchor(spec.position, image.dimensions(), text_size);

    let shadow = [0, 0, 0, alpha / 2];
    for (dx, dy) in SHADOW_OFFSETS {
        draw_text(
            &mut output,
            &spec.text,
            Anchor::new(anchor.x + dx, anchor.y + dy),
            shadow,
        );
    }

    draw_text(&mut output, &spec.text, anchor, [255, 255, 255, alpha]);

    output
}

/// `round(255 * clamp(opacity, 0, 1))`; NaN counts as fully transparent.
pub fn opacity_to_alpha(opacity: f64) -> u8 {
    if opacity.is_nan() {
        return 0;
    }
    (255.0 * opacity.clamp(0.0, 1.0)).round() as u8
}

/// Render `text` with its baseline starting at `anchor`, clipping to the image.
fn draw_text(image: &mut PixelBuffer, text: &str, anchor: Anchor, color: Rgba) {
    let top = anchor.y - i64::from(ASCENT);
    let mut left = anchor.x;

    for ch in text.chars() {
        for (col, row) in font::coverage(ch) {
            let x = left + i64::from(col);
            let y = top + i64::from(row);
            if let Some(dst) = image.pixel_mut(x, y) {
                blend_over(dst, color);
            }
        }
        left += i64::from(GLYPH_WIDTH);
    }
}

/// Straight-alpha "over" of `src` onto one RGBA pixel.
#[inline]
fn blend_over(dst: &mut [u8], src: Rgba) {
    let a = f32::from(src[3]) / 255.0;
    let inv = 1.0 - a;

    for c in 0..3 {
        dst[c] = (f32::from(src[c]) * a + f32::from(dst[c]) * inv).round() as u8;
    }
    dst[3] = (255.0 * a + f32::from(dst[3]) * inv).round() as u8;
}


// ============================================================================
// Property-Based Tests
// ============================================================================
