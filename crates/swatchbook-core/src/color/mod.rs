//! Color model types used by palette entries
//!
//! This module provides:
//! - RGB colors
//! - CMYK colors (process ink percentages)
//! - Grayscale colors
//! - HSB, which is only ever an intermediate on the way to RGB
//!
//! Every channel is stored as a fraction in `0.0..=1.0`. Constructors clamp,
//! so a stored value is never out of range.

pub mod cmyk;
pub mod gray;
pub mod hsb;
pub mod rgb;

pub use cmyk::Cmyk;
pub use gray::Gray;
pub use hsb::Hsb;
pub use rgb::Rgb;

/// Tolerance used for the near-zero and near-one tests in conversions
pub const EPSILON: f64 = 1e-5;

/// Clamp a channel into `0.0..=1.0`; NaN becomes 0.0
#[inline]
pub(crate) fn normalize(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
