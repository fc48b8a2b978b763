//! RGBA pixel buffer shared by every transform.

use thiserror::Error;

/// Bytes per RGBA sample.
pub const CHANNELS: usize = 4;

/// A single straight-alpha RGBA sample.
pub type Rgba = [u8; 4];

/// Errors raised when building a buffer from raw parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Rectangle covered by a buffer, in its own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub width: u32,
    pub height: u32,
}

/// An in-memory RGBA raster.
///
/// Pixels are stored row-major, 4 bytes per pixel, with straight
/// (non-premultiplied) alpha. The pixel at `(x, y)` starts at byte
/// `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidDimensions` for a zero width or height and
    /// `BufferError::InvalidPixelData` when `pixels.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let expected = byte_len(width, height);
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Assemble a buffer from parts already known to be consistent.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert!(width > 0 && height > 0, "Empty pixel buffer");
        debug_assert_eq!(
            pixels.len(),
            byte_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel is `fill`.
    ///
    /// Zero dimensions are raised to 1 so the buffer is never empty.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let pixels = fill.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer from an `image::RgbaImage`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidDimensions` for an empty image.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbaImage` for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Region covered by this buffer. The origin is always `(0, 0)`.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: 0,
            min_y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return its raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&value);
    }

    /// Mutable access to the pixel at signed coordinates, `None` when off-canvas.
    #[inline]
    pub(crate) fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8]> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let idx = self.index(x as u32, y as u32);
        Some(&mut self.pixels[idx..idx + CHANNELS])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

/// Byte length of a `width x height` RGBA buffer.
#[inline]
pub(crate) fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}
