//! Grayscale Color Primitives

use super::{Rgb, normalize};

/// Grayscale level as a fraction (0.0 = black, 1.0 = white)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gray {
    g: f64,
}

impl Gray {
    /// Create from a fraction, clamping to [0, 1]
    #[inline]
    pub fn new(g: f64) -> Self {
        Self { g: normalize(g) }
    }

    /// Create from a percentage (0-100)
    #[inline]
    pub fn from_percent(g: f64) -> Self {
        Self::new(g / 100.0)
    }

    /// Gray fraction
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Gray percentage
    #[inline]
    pub fn gray(&self) -> f64 {
        self.g * 100.0
    }

    /// Equal-channel RGB
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.g, self.g, self.g)
    }
}
