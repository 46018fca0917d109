//! HSB (HSV) to RGB conversion
//!
//! Palettes may store colors as hue/saturation/brightness. There is no HSB
//! entry type; these colors are converted to [`Rgb`] when read.

use super::{EPSILON, Rgb};

/// Hue, saturation and brightness, each as a fraction 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    #[inline]
    pub const fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// True when saturation is (near) zero and the color is a pure gray
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.s <= EPSILON
    }

    /// Convert to RGB using the six-sector algorithm
    ///
    /// A hue at (or within [`EPSILON`] of) 1.0 wraps to sector 0.
    pub fn to_rgb(&self) -> Rgb {
        let Self { h, s, b: v } = *self;

        if self.is_achromatic() {
            return Rgb::new(v, v, v);
        }

        let vh = if h >= 1.0 - EPSILON { 0.0 } else { h * 6.0 };
        let vi = vh.floor();
        let f = vh - vi;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match vi as i64 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}
