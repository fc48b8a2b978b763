//! Anchor calculation for watermark text placement.
//!
//! The anchor is the left end of the text baseline. All arithmetic is
//! signed: on images narrower or shorter than the text block plus margins
//! the anchor moves off-canvas and the covered pixels are clipped later.
//!
//! # Example
//!
//! ```ignore
//! use imagers_core::watermark::{text_anchor, WatermarkPosition};
//!
//! // "abc" is 21x13 on a 200x100 image
//! let anchor = text_anchor(WatermarkPosition::BottomRight, (200, 100), (21, 13));
//! assert_eq!((anchor.x, anchor.y), (159, 80)); // 200 - 21 - 20, 100 - 20
//! ```

use serde::{Deserialize, Serialize};

/// Distance from the image edges in pixels.
pub const MARGIN: i64 = 20;

/// Where the watermark goes on the image.
///
/// Deserializes from any string; unknown names become `BottomRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl WatermarkPosition {
    /// Canonical request name, e.g. `"bottom-right"`.
    pub fn as_str(self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "top-left",
            WatermarkPosition::TopRight => "top-right",
            WatermarkPosition::BottomLeft => "bottom-left",
            WatermarkPosition::BottomRight => "bottom-right",
            WatermarkPosition::Center => "center",
        }
    }
}

impl From<&str> for WatermarkPosition {
    /// Parse a request name. Unknown names fall back to `BottomRight`.
    fn from(value: &str) -> Self {
        match value {
            "top-left" => WatermarkPosition::TopLeft,
            "top-right" => WatermarkPosition::TopRight,
            "bottom-left" => WatermarkPosition::BottomLeft,
            "bottom-right" => WatermarkPosition::BottomRight,
            "center" => WatermarkPosition::Center,
            _ => WatermarkPosition::BottomRight,
        }
    }
}

impl From<String> for WatermarkPosition {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Text baseline origin on the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

impl Anchor {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Calculate the text anchor for a position.
///
/// `image` and `text` are `(width, height)` pairs. Layout with `M = 20`:
///
/// | position | x | y |
/// |---|---|---|
/// | TopLeft | M | M + th |
/// | TopRight | W - tw - M | M + th |
/// | BottomLeft | M | H - M |
/// | BottomRight | W - tw - M | H - M |
/// | Center | (W - tw) / 2 | (H + th) / 2 |
///
/// Division truncates toward zero.
pub fn text_anchor(position: WatermarkPosition, image: (u32, u32), text: (u32, u32)) -> Anchor {
    let img_w = i64::from(image.0);
    let img_h = i64::from(image.1);
    let text_w = i64::from(text.0);
    let text_h = i64::from(text.1);

    let left = MARGIN;
    let right = img_w - text_w - MARGIN;
    let top = MARGIN + text_h;
    let bottom = img_h - MARGIN;

    match position {
        WatermarkPosition::TopLeft => Anchor::new(left, top),
        WatermarkPosition::TopRight => Anchor::new(right, top),
        WatermarkPosition::BottomLeft => Anchor::new(left, bottom),
        WatermarkPosition::BottomRight => Anchor::new(right, bottom),
        WatermarkPosition::Center => Anchor::new((img_w - text_w) / 2, (img_h + text_h) / 2),
    }
}
