//! Axis-aligned image rotation by multiples of 90 degrees.
//!
//! Rotation is a pure coordinate remap: every source pixel is written to
//! exactly one destination pixel, with no interpolation or blending.
//! Angles are clockwise.
//!
//! # Mapping
//!
//! For a `W x H` source, a pixel at `(x, y)` lands at:
//!
//! ```text
//!  90°: (H-1-y, x)         output is H x W
//! 180°: (W-1-x, H-1-y)     output is W x H
//! 270°: (y, W-1-x)         output is H x W
//! ```

use crate::buffer::{byte_len, PixelBuffer, CHANNELS};

/// Canonical rotation angle.
///
/// Built from a signed degree value with [`RotationAngle::from_degrees`]:
///
/// | degrees mod 360 | angle |
/// |---|---|
/// | 0 | `Deg0` |
/// | 90 (incl. -270) | `Deg90` |
/// | 180 (incl. -180) | `Deg180` |
/// | 270 (incl. -90) | `Deg270` |
/// | anything else | `Deg0` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationAngle {
    /// No rotation.
    #[default]
    Deg0,
    /// Quarter turn clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns clockwise (one quarter turn counter-clockwise).
    Deg270,
}

impl RotationAngle {
    /// Normalize a signed degree value.
    ///
    /// Residues other than 0/90/180/270 are not supported and map to
    /// `Deg0`, which makes the rotation an identity no-op.
    pub fn from_degrees(degrees: i64) -> Self {
        match degrees.rem_euclid(360) {
            90 => RotationAngle::Deg90,
            180 => RotationAngle::Deg180,
            270 => RotationAngle::Deg270,
            _ => RotationAngle::Deg0,
        }
    }

    /// Clockwise degrees in `{0, 90, 180, 270}`.
    pub fn degrees(self) -> u16 {
        match self {
            RotationAngle::Deg0 => 0,
            RotationAngle::Deg90 => 90,
            RotationAngle::Deg180 => 180,
            RotationAngle::Deg270 => 270,
        }
    }

    /// Returns true if this angle swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, RotationAngle::Deg90 | RotationAngle::Deg270)
    }
}

/// Rotate an image clockwise by a canonical angle.
///
/// `Deg0` returns the input untouched. The other angles allocate a new
/// buffer; the input is consumed either way.
pub fn rotate(image: PixelBuffer, angle: RotationAngle) -> PixelBuffer {
    let (w, h) = image.dimensions();

    let (dst_w, dst_h) = if angle.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };

    let map: fn(u32, u32, u32, u32) -> (u32, u32) = match angle {
        RotationAngle::Deg0 => return image,
        RotationAngle::Deg90 => |x, y, _w, h| (h - 1 - y, x),
        RotationAngle::Deg180 => |x, y, w, h| (w - 1 - x, h - 1 - y),
        RotationAngle::Deg270 => |x, y, w, _h| (y, w - 1 - x),
    };

    let src = image.as_raw();
    let mut output = vec![0u8; byte_len(dst_w, dst_h)];

    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = map(x, y, w, h);
            let src_idx = (y as usize * w as usize + x as usize) * CHANNELS;
            let dst_idx = (dy as usize * dst_w as usize + dx as usize) * CHANNELS;
            output[dst_idx..dst_idx + CHANNELS].copy_from_slice(&src[src_idx..src_idx + CHANNELS]);
        }
    }

    PixelBuffer::from_parts(dst_w, dst_h, output)
}

/// Rotate by a signed degree value; see [`RotationAngle::from_degrees`].
pub fn rotate_degrees(image: PixelBuffer, degrees: i64) -> PixelBuffer {
    rotate(image, RotationAngle::from_degrees(degrees))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=24, 1u32..=24)
    }

    /// Strategy for an image with arbitrary pixel content.
    fn image_strategy() -> impl Strategy<Value = PixelBuffer> {
        dimensions_strategy().prop_flat_map(|(w, h)| {
            let size = byte_len(w, h);
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| PixelBuffer::from_raw(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: A quarter turn followed by three quarters is the identity.
        #[test]
        fn prop_90_then_270_is_identity(img in image_strategy()) {
            let once = rotate(img.clone(), RotationAngle::Deg90);
            let back = rotate(once, RotationAngle::Deg270);
            prop_assert_eq!(back, img);
        }

        /// Property: Two half turns are the identity.
        #[test]
        fn prop_180_twice_is_identity(img in image_strategy()) {
            let once = rotate(img.clone(), RotationAngle::Deg180);
            let back = rotate(once, RotationAngle::Deg180);
            prop_assert_eq!(back, img);
        }

        /// Property: Four quarter turns are the identity.
        #[test]
        fn prop_four_quarter_turns_is_identity(img in image_strategy()) {
            let mut result = img.clone();
            for _ in 0..4 {
                result = rotate(result, RotationAngle::Deg90);
            }
            prop_assert_eq!(result, img);
        }

        /// Property: Two quarter turns equal one half turn.
        #[test]
        fn prop_two_quarters_equal_half(img in image_strategy()) {
            let quarters = rotate(rotate(img.clone(), RotationAngle::Deg90), RotationAngle::Deg90);
            let half = rotate(img, RotationAngle::Deg180);
            prop_assert_eq!(quarters, half);
        }

        /// Property: Multiples of 360 leave the image untouched.
        #[test]
        fn prop_full_turns_are_identity(img in image_strategy(), turns in -4i64..=4) {
            prop_assert_eq!(rotate_degrees(img.clone(), turns * 360), img);
        }

        /// Property: Pixel data length matches dimensions after any rotation.
        #[test]
        fn prop_pixel_data_matches_dimensions(img in image_strategy(), degrees in -720i64..=720) {
            let result = rotate_degrees(img, degrees);
            prop_assert_eq!(result.as_raw().len(), byte_len(result.width(), result.height()));
        }
    }
}
