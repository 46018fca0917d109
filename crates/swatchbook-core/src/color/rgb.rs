//! RGB Color Primitives

use super::normalize;

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Create a new RGB color from fractions, clamping each to [0, 1]
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: normalize(r),
            g: normalize(g),
            b: normalize(b),
        }
    }

    const fn raw(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::raw(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Create from byte-scale values (nominally 0-255, clamped)
    ///
    /// Unlike [`Rgb::from_u8`] the inputs may be fractional or exceed 255.
    #[inline]
    pub fn from_byte_scale(r: f64, g: f64, b: f64) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0)
    }

    /// Red component (0.0 to 1.0)
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green component (0.0 to 1.0)
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue component (0.0 to 1.0)
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Red component on the byte scale (0.0 to 255.0)
    #[inline]
    pub fn red(&self) -> f64 {
        self.r * 255.0
    }

    /// Green component on the byte scale (0.0 to 255.0)
    #[inline]
    pub fn green(&self) -> f64 {
        self.g * 255.0
    }

    /// Blue component on the byte scale (0.0 to 255.0)
    #[inline]
    pub fn blue(&self) -> f64 {
        self.b * 255.0
    }

    /// Convert to array of fractions
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit values (0-255)
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// HTML/CSS hex notation, e.g. `#ff8000`
    pub fn html(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::raw(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::raw(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::raw(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::raw(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::raw(0.0, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let c = Rgb::new(1.5, -0.2, 0.5);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_u8_roundtrip() {
        let c = Rgb::from_u8(255, 128, 0);
        assert_eq!(c.to_u8(), [255, 128, 0]);
        assert!((c.red() - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_byte_scale_clamps() {
        let c = Rgb::from_byte_scale(65535.0 / 256.0, 0.0, 127.5);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.0);
        assert!((c.b() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_html() {
        assert_eq!(Rgb::WHITE.html(), "#ffffff");
        assert_eq!(Rgb::from_u8(255, 128, 0).html(), "#ff8000");
        assert_eq!(Rgb::BLACK.html(), "#000000");
    }
}
