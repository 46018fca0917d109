//! CMYK Color Primitives
//!
//! Process colors are specified as ink coverage percentages. Internally
//! each ink is a fraction 0.0..=1.0; the percentage accessors
//! ([`Cmyk::cyan`] and friends) scale by 100.

use super::{Gray, Rgb, normalize};

/// CMYK color with ink fractions in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl Cmyk {
    /// Create from ink fractions, clamping each to [0, 1]
    #[inline]
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: normalize(c),
            m: normalize(m),
            y: normalize(y),
            k: normalize(k),
        }
    }

    /// Create from ink percentages (0-100)
    #[inline]
    pub fn from_percent(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::new(c / 100.0, m / 100.0, y / 100.0, k / 100.0)
    }

    /// Cyan fraction
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Magenta fraction
    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Yellow fraction
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Black (key) fraction
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Cyan percentage
    #[inline]
    pub fn cyan(&self) -> f64 {
        self.c * 100.0
    }

    /// Magenta percentage
    #[inline]
    pub fn magenta(&self) -> f64 {
        self.m * 100.0
    }

    /// Yellow percentage
    #[inline]
    pub fn yellow(&self) -> f64 {
        self.y * 100.0
    }

    /// Black percentage
    #[inline]
    pub fn black(&self) -> f64 {
        self.k * 100.0
    }

    /// Convert to array of fractions
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Standard conversion: `1 - (ink * (1 - k) + k)` per channel
    pub fn to_rgb(&self) -> Rgb {
        let k = self.k;
        let conv = |v: f64| 1.0 - (v * (1.0 - k) + k);
        Rgb::new(conv(self.c), conv(self.m), conv(self.y))
    }

    /// Adobe conversion: `1 - min(1, ink + k)` per channel
    pub fn to_rgb_adobe(&self) -> Rgb {
        let k = self.k;
        let conv = |v: f64| 1.0 - (v + k).min(1.0);
        Rgb::new(conv(self.c), conv(self.m), conv(self.y))
    }

    /// Single gray level, weighting CMY with the YIQ luma coefficients
    ///
    /// `g = 1 - min(1, 0.299c + 0.587m + 0.114y + k)`
    pub fn to_gray(&self) -> Gray {
        let ink = 0.299 * self.c + 0.587 * self.m + 0.114 * self.y + self.k;
        Gray::new(1.0 - ink.min(1.0))
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}
