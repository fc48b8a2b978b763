//! Text watermarks drawn with a built-in bitmap font.
//!
//! # Features
//!
//! - Fixed 7x13 monospace glyphs (printable ASCII, box fallback)
//! - Five anchor positions with a 20 pixel margin
//! - One-pixel black drop shadow at half the text alpha
//! - Straight-alpha "over" compositing onto a copy of the source
//!
//! # Example
//!
//! ```ignore
//! use imagers_core::watermark::{apply_watermark, WatermarkPosition, WatermarkSpec};
//!
//! let spec = WatermarkSpec::new("sample", WatermarkPosition::BottomRight, 0.7);
//! let marked = apply_watermark(&image, &spec);
//! assert_eq!(marked.dimensions(), image.dimensions());
//! ```

mod compositor;
pub mod font;
mod position;

pub use compositor::{apply_watermark, opacity_to_alpha};
pub use position::{text_anchor, Anchor, WatermarkPosition, MARGIN};

/// What to draw and where.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkSpec {
    /// Text to draw on a single line.
    pub text: String,
    /// Anchor position on the image.
    pub position: WatermarkPosition,
    /// Text opacity, clamped to `[0, 1]` when rendering.
    pub opacity: f64,
}

impl WatermarkSpec {
    /// Opacity used when a request does not specify one.
    pub const DEFAULT_OPACITY: f64 = 0.7;

    pub fn new(text: impl Into<String>, position: WatermarkPosition, opacity: f64) -> Self {
        Self {
            text: text.into(),
            position,
            opacity,
        }
    }
}

impl Default for WatermarkSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: WatermarkPosition::default(),
            opacity: Self::DEFAULT_OPACITY,
        }
    }
}
