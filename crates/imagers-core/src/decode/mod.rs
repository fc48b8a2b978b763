//! Image decoding.
//!
//! Every input is decoded to a straight-alpha RGBA [`PixelBuffer`](crate::PixelBuffer)
//! regardless of its stored color type. The detected source format travels
//! with the pixels so transforms can write results back in the same format.
//!
//! # Examples
//!
//! ```ignore
//! use imagers_core::decode::decode;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let decoded = decode(&bytes).unwrap();
//! println!("Decoded {:?} as {:?}", decoded.dimensions(), decoded.format);
//! ```

mod reader;
mod types;

pub use reader::decode;
pub use types::{DecodeError, DecodedImage};
