//! ACO Palette Basic Types

use std::borrow::Borrow;
use std::fmt;

use super::error::AcoError;
use crate::color::{Cmyk, Gray, Rgb};

/// ACO file format version
///
/// Version 1 records are bare colors; version 2 adds a UTF-16 name to
/// every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Version {
    V1,
    V2,
}

impl Version {
    /// Whether records carry a name block
    #[inline]
    pub fn has_names(self) -> bool {
        matches!(self, Version::V2)
    }
}

impl TryFrom<u16> for Version {
    type Error = AcoError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Version::V1),
            2 => Ok(Version::V2),
            other => Err(AcoError::UnsupportedVersion(other)),
        }
    }
}

impl From<Version> for u16 {
    fn from(version: Version) -> Self {
        match version {
            Version::V1 => 1,
            Version::V2 => 2,
        }
    }
}

/// Color space tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ColorSpace {
    /// 0: 16-bit RGB
    Rgb,
    /// 1: hue, saturation, brightness
    Hsb,
    /// 2: CMYK, 65535 = no ink
    Cmyk,
    /// 7: CIE L*a*b*
    Lab,
    /// 8: grayscale, 0..10000
    Gray,
    /// 9: CMYK in direct percent, 0..10000
    WideCmyk,
    /// Any other tag (Pantone, Focoltone, ...)
    Other(u16),
}

impl ColorSpace {
    pub const fn from_tag(tag: u16) -> Self {
        match tag {
            0 => ColorSpace::Rgb,
            1 => ColorSpace::Hsb,
            2 => ColorSpace::Cmyk,
            7 => ColorSpace::Lab,
            8 => ColorSpace::Gray,
            9 => ColorSpace::WideCmyk,
            other => ColorSpace::Other(other),
        }
    }

    pub const fn tag(self) -> u16 {
        match self {
            ColorSpace::Rgb => 0,
            ColorSpace::Hsb => 1,
            ColorSpace::Cmyk => 2,
            ColorSpace::Lab => 7,
            ColorSpace::Gray => 8,
            ColorSpace::WideCmyk => 9,
            ColorSpace::Other(tag) => tag,
        }
    }
}

impl From<u16> for ColorSpace {
    fn from(tag: u16) -> Self {
        Self::from_tag(tag)
    }
}

/// Swatch name as raw UTF-16 code units
///
/// Names are kept exactly as stored, including unpaired surrogates, so
/// they can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name(Vec<u16>);

impl Name {
    pub fn new(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// The code units
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode to a `String`, replacing invalid surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for Name {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl Borrow<[u16]> for Name {
    fn borrow(&self) -> &[u16] {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.0.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

/// A record in a space we do not decode, kept verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpaqueRecord {
    space: u16,
    words: [u16; 4],
}

impl OpaqueRecord {
    pub const fn new(space: u16, words: [u16; 4]) -> Self {
        Self { space, words }
    }

    /// The raw space tag
    pub const fn space(&self) -> u16 {
        self.space
    }

    pub const fn color_space(&self) -> ColorSpace {
        ColorSpace::from_tag(self.space)
    }

    /// The four data words following the tag
    pub const fn words(&self) -> [u16; 4] {
        self.words
    }

    /// Tag and data words, in file order
    pub const fn to_record(&self) -> [u16; 5] {
        let [w, x, y, z] = self.words;
        [self.space, w, x, y, z]
    }
}

/// A color the codec understands
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodedColor {
    Rgb(Rgb),
    Gray(Gray),
    Cmyk(Cmyk),
}

impl DecodedColor {
    /// The space this color is written as
    pub const fn color_space(&self) -> ColorSpace {
        match self {
            DecodedColor::Rgb(_) => ColorSpace::Rgb,
            DecodedColor::Gray(_) => ColorSpace::Gray,
            DecodedColor::Cmyk(_) => ColorSpace::WideCmyk,
        }
    }

    /// Convert to RGB for display
    pub fn to_rgb(&self) -> Rgb {
        match self {
            DecodedColor::Rgb(rgb) => *rgb,
            DecodedColor::Gray(gray) => gray.to_rgb(),
            DecodedColor::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }
}

impl From<Rgb> for DecodedColor {
    fn from(rgb: Rgb) -> Self {
        DecodedColor::Rgb(rgb)
    }
}

impl From<Gray> for DecodedColor {
    fn from(gray: Gray) -> Self {
        DecodedColor::Gray(gray)
    }
}

impl From<Cmyk> for DecodedColor {
    fn from(cmyk: Cmyk) -> Self {
        DecodedColor::Cmyk(cmyk)
    }
}

/// Payload of a palette entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryValue {
    Color(DecodedColor),
    Opaque(OpaqueRecord),
}

impl EntryValue {
    pub const fn color_space(&self) -> ColorSpace {
        match self {
            EntryValue::Color(color) => color.color_space(),
            EntryValue::Opaque(record) => record.color_space(),
        }
    }
}

impl From<DecodedColor> for EntryValue {
    fn from(color: DecodedColor) -> Self {
        EntryValue::Color(color)
    }
}

impl From<Rgb> for EntryValue {
    fn from(rgb: Rgb) -> Self {
        EntryValue::Color(DecodedColor::Rgb(rgb))
    }
}

impl From<Gray> for EntryValue {
    fn from(gray: Gray) -> Self {
        EntryValue::Color(DecodedColor::Gray(gray))
    }
}

impl From<Cmyk> for EntryValue {
    fn from(cmyk: Cmyk) -> Self {
        EntryValue::Color(DecodedColor::Cmyk(cmyk))
    }
}

impl From<OpaqueRecord> for EntryValue {
    fn from(record: OpaqueRecord) -> Self {
        EntryValue::Opaque(record)
    }
}

/// One palette entry: a color or opaque record, plus an optional name
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    value: EntryValue,
    name: Option<Name>,
}

impl Entry {
    pub fn new(value: impl Into<EntryValue>, name: Option<Name>) -> Self {
        Self {
            value: value.into(),
            name,
        }
    }

    /// An entry with no name block, as in version 1 files
    pub fn unnamed(value: impl Into<EntryValue>) -> Self {
        Self::new(value, None)
    }

    pub fn named(value: impl Into<EntryValue>, name: impl Into<Name>) -> Self {
        Self::new(value, Some(name.into()))
    }

    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    /// The decoded color, or `None` for an opaque record
    pub fn color(&self) -> Option<&DecodedColor> {
        match &self.value {
            EntryValue::Color(color) => Some(color),
            EntryValue::Opaque(_) => None,
        }
    }

    /// The opaque record, or `None` for a decoded color
    pub fn opaque(&self) -> Option<&OpaqueRecord> {
        match &self.value {
            EntryValue::Opaque(record) => Some(record),
            EntryValue::Color(_) => None,
        }
    }

    /// The name as text, or an empty string when absent
    pub fn display_name(&self) -> String {
        self.name
            .as_ref()
            .map(Name::to_string_lossy)
            .unwrap_or_default()
    }
}
