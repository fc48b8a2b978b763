//! Geometric transforms: quarter-turn rotation and fit-to-box downscale.
//!
//! Both operations are pure. They consume their input buffer and either
//! hand it back untouched (identity cases) or return a freshly allocated
//! buffer; a partially written buffer is never observable.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Origin is top-left corner

mod resize;
mod rotation;

pub use resize::resize_to_fit;
pub use rotation::{rotate, rotate_degrees, RotationAngle};
