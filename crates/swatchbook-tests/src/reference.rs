//! Reference conversions
//!
//! Independent implementations to compare the codec against.

use palette::{FromColor, Hsv, Srgb};

/// HSB fractions to RGB fractions using the `palette` crate
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(h * 360.0, s, v);
    let rgb: Srgb<f64> = Srgb::from_color(hsv);
    [rgb.red, rgb.green, rgb.blue]
}

/// Inverted 16-bit CMYK word to an ink fraction (65535 = no ink)
pub fn inverted_ink(word: u16) -> f64 {
    (1.0 - word as f64 / 65535.0).clamp(0.0, 1.0)
}

/// Maximum absolute channel difference
pub fn max_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
