//! Record encoding and decoding
//!
//! Every record is five big-endian words: a color space tag followed by
//! four data words whose meaning depends on the tag. Version 2 files follow
//! each record with a name block:
//!
//! ```text
//! u16 0            leading guard
//! u16 len + 1      code units, counting the terminator
//! u16 × len        UTF-16 text
//! u16 0            terminator
//! ```
//!
//! Decoding is lossy in two places: HSB becomes RGB, and inverted CMYK
//! (tag 2) becomes wide CMYK (tag 9) when written back.

use tracing::warn;

use super::cursor::ByteCursor;
use super::error::{AcoError, MalformedReason};
use super::types::{ColorSpace, DecodedColor, EntryValue, Name, OpaqueRecord};
use crate::color::{Cmyk, Gray, Hsb, Rgb};

/// Size of the fixed part of a record in bytes
pub const RECORD_SIZE: usize = 10;

/// Largest word value in the percent encodings (100.00%)
pub const PERCENT_MAX: u16 = 10000;

/// Longest name a name block can hold; the length word also counts the terminator
pub const MAX_NAME_UNITS: usize = u16::MAX as usize - 1;

/// Result of decoding one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedRecord {
    /// Space tag as read from the file
    pub space: ColorSpace,
    pub value: EntryValue,
    /// An HSB record went through the full sector conversion
    pub converted: bool,
}

/// Per-record conversion rules between words and entry values
pub struct RecordCodec;

impl RecordCodec {
    /// Decode the five record words
    ///
    /// Never fails: spaces without a decoder become [`OpaqueRecord`]s.
    pub fn decode(record: [u16; 5]) -> DecodedRecord {
        let [tag, w, x, y, z] = record;
        let space = ColorSpace::from_tag(tag);
        let mut converted = false;

        let value = match space {
            ColorSpace::Rgb => {
                // 16-bit channels scaled down to 0..255.996, clamped to 255
                let byte = |v: u16| v as f64 / 256.0;
                Rgb::from_byte_scale(byte(w), byte(x), byte(y)).into()
            }
            ColorSpace::Hsb => {
                let unit = |v: u16| v as f64 / 65535.0;
                let hsb = Hsb::new(unit(w), unit(x), unit(y));
                converted = !hsb.is_achromatic();
                hsb.to_rgb().into()
            }
            ColorSpace::Cmyk => {
                // 0 is full ink, 65535 is none
                let ink = |v: u16| 100.0 - v as f64 / 655.35;
                Cmyk::from_percent(ink(w), ink(x), ink(y), ink(z)).into()
            }
            ColorSpace::Gray => Gray::from_percent(percent(w)).into(),
            ColorSpace::WideCmyk => {
                Cmyk::from_percent(percent(w), percent(x), percent(y), percent(z)).into()
            }
            ColorSpace::Lab | ColorSpace::Other(_) => {
                EntryValue::Opaque(OpaqueRecord::new(tag, [w, x, y, z]))
            }
        };

        DecodedRecord {
            space,
            value,
            converted,
        }
    }

    /// Encode an entry value as five record words
    ///
    /// Channels saturate at the format's maximum; this never fails.
    pub fn encode(value: &EntryValue) -> [u16; 5] {
        match value {
            EntryValue::Color(DecodedColor::Rgb(rgb)) => {
                let word = |byte: f64| saturate(byte * 256.0, u16::MAX);
                [
                    ColorSpace::Rgb.tag(),
                    word(rgb.red()),
                    word(rgb.green()),
                    word(rgb.blue()),
                    0,
                ]
            }
            EntryValue::Color(DecodedColor::Gray(gray)) => {
                [ColorSpace::Gray.tag(), percent_word(gray.gray()), 0, 0, 0]
            }
            EntryValue::Color(DecodedColor::Cmyk(cmyk)) => [
                ColorSpace::WideCmyk.tag(),
                percent_word(cmyk.cyan()),
                percent_word(cmyk.magenta()),
                percent_word(cmyk.yellow()),
                percent_word(cmyk.black()),
            ],
            EntryValue::Opaque(record) => record.to_record(),
        }
    }

    /// Append the encoded record words to `out`
    pub fn write_record(value: &EntryValue, out: &mut Vec<u8>) {
        write_words(&Self::encode(value), out);
    }

    /// Read a version 2 name block for record `index`
    pub fn read_name(cursor: &mut ByteCursor<'_>, index: usize) -> Result<Name, AcoError> {
        let malformed = |offset, reason| AcoError::MalformedRecord {
            index,
            offset,
            reason,
        };

        let offset = cursor.offset();
        let guard = cursor.read_word()?;
        if guard != 0 {
            return Err(malformed(offset, MalformedReason::LeadingGuard(guard)));
        }

        let offset = cursor.offset();
        let len = cursor.read_word()?;
        if len == 0 {
            return Err(malformed(offset, MalformedReason::ZeroNameLength));
        }

        let units = cursor.read_utf16(len as usize - 1)?;

        let offset = cursor.offset();
        let guard = cursor.read_word()?;
        if guard != 0 {
            return Err(malformed(offset, MalformedReason::TrailingGuard(guard)));
        }

        Ok(Name::new(units))
    }

    /// Append a version 2 name block to `out`
    ///
    /// Names with an odd number of code units are replaced by an empty
    /// name unless `preserve_odd` is set. A missing name is written empty.
    pub fn write_name(name: Option<&Name>, preserve_odd: bool, out: &mut Vec<u8>) {
        let units = match name {
            Some(name) if preserve_odd || name.len() % 2 == 0 => name.units(),
            _ => &[],
        };

        let units = if units.len() > MAX_NAME_UNITS {
            warn!(len = units.len(), "truncating name to {} code units", MAX_NAME_UNITS);
            &units[..MAX_NAME_UNITS]
        } else {
            units
        };

        write_words(&[0, units.len() as u16 + 1], out);
        write_words(units, out);
        write_words(&[0], out);
    }
}

/// Percent-encoded word (0..=10000) to a percentage
#[inline]
fn percent(word: u16) -> f64 {
    word.min(PERCENT_MAX) as f64 / 100.0
}

/// Percentage to a percent-encoded word
#[inline]
fn percent_word(pct: f64) -> u16 {
    saturate(pct * 100.0, PERCENT_MAX)
}

#[inline]
fn saturate(v: f64, max: u16) -> u16 {
    let v = v.round();
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, max as f64) as u16
    }
}

fn write_words(words: &[u16], out: &mut Vec<u8>) {
    for word in words {
        out.extend_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    fn rgb_of(decoded: &DecodedRecord) -> Rgb {
        match decoded.value {
            EntryValue::Color(DecodedColor::Rgb(rgb)) => rgb,
            other => panic!("expected RGB, got {:?}", other),
        }
    }

    fn cmyk_of(decoded: &DecodedRecord) -> Cmyk {
        match decoded.value {
            EntryValue::Color(DecodedColor::Cmyk(cmyk)) => cmyk,
            other => panic!("expected CMYK, got {:?}", other),
        }
    }

    #[test]
    fn test_rgb_decode() {
        let decoded = RecordCodec::decode([0, 65280, 32640, 0, 0]);
        assert_eq!(decoded.space, ColorSpace::Rgb);
        let rgb = rgb_of(&decoded);
        assert_eq!(rgb.to_u8(), [255, 128, 0]);
        assert!(!decoded.converted);
    }

    #[test]
    fn test_rgb_decode_clamps() {
        let rgb = rgb_of(&RecordCodec::decode([0, 65535, 65535, 65535, 0]));
        assert_eq!(rgb.to_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsb_decode() {
        let decoded = RecordCodec::decode([1, 0, 65535, 65535, 0]);
        assert_eq!(decoded.space, ColorSpace::Hsb);
        assert!(decoded.converted);
        assert!(rgb_of(&decoded).approx_eq(&Rgb::RED, 1e-9));

        // Zero saturation skips the sector math
        let decoded = RecordCodec::decode([1, 12345, 0, 32768, 0]);
        assert!(!decoded.converted);
        let rgb = rgb_of(&decoded);
        assert!(rgb.approx_eq(&Rgb::new(0.5, 0.5, 0.5), TOLERANCE));
        assert_eq!(rgb.r(), rgb.g());
        assert_eq!(rgb.g(), rgb.b());
    }

    #[test]
    fn test_inverted_cmyk_decode() {
        let decoded = RecordCodec::decode([2, 65535, 65535, 65535, 0]);
        assert_eq!(decoded.space, ColorSpace::Cmyk);
        let cmyk = cmyk_of(&decoded);
        assert!(cmyk.approx_eq(&Cmyk::new(0.0, 0.0, 0.0, 1.0), TOLERANCE));

        let cmyk = cmyk_of(&RecordCodec::decode([2, 0, 32768, 65535, 65535]));
        assert!((cmyk.c() - 1.0).abs() < TOLERANCE);
        assert!((cmyk.m() - 0.5).abs() < TOLERANCE);
        assert!(cmyk.y() < TOLERANCE);
    }

    #[test]
    fn test_gray_decode() {
        let decoded = RecordCodec::decode([8, 2500, 0, 0, 0]);
        assert_eq!(
            decoded.value,
            EntryValue::Color(DecodedColor::Gray(Gray::new(0.25)))
        );

        let over = RecordCodec::decode([8, 60000, 0, 0, 0]);
        assert_eq!(
            over.value,
            EntryValue::Color(DecodedColor::Gray(Gray::new(1.0)))
        );
    }

    #[test]
    fn test_wide_cmyk_decode() {
        let cmyk = cmyk_of(&RecordCodec::decode([9, 1000, 2000, 3000, 12000]));
        assert!(cmyk.approx_eq(&Cmyk::new(0.1, 0.2, 0.3, 1.0), 1e-12));
    }

    #[test]
    fn test_unsupported_spaces_are_opaque() {
        let decoded = RecordCodec::decode([7, 5000, 0x8000, 0x7F00, 0]);
        assert_eq!(decoded.space, ColorSpace::Lab);
        assert_eq!(
            decoded.value,
            EntryValue::Opaque(OpaqueRecord::new(7, [5000, 0x8000, 0x7F00, 0]))
        );

        let decoded = RecordCodec::decode([3, 1, 2, 3, 4]);
        assert_eq!(decoded.space, ColorSpace::Other(3));
        assert!(matches!(decoded.value, EntryValue::Opaque(_)));
    }

    #[test]
    fn test_encode_rgb() {
        let value = EntryValue::from(Rgb::from_u8(255, 128, 0));
        assert_eq!(RecordCodec::encode(&value), [0, 65280, 32768, 0, 0]);
    }

    #[test]
    fn test_encode_gray_and_cmyk() {
        assert_eq!(
            RecordCodec::encode(&Gray::new(0.25).into()),
            [8, 2500, 0, 0, 0]
        );
        assert_eq!(
            RecordCodec::encode(&Cmyk::new(0.1, 0.2, 0.3, 1.0).into()),
            [9, 1000, 2000, 3000, 10000]
        );
    }

    #[test]
    fn test_inverted_cmyk_is_written_wide() {
        let decoded = RecordCodec::decode([2, 65535, 65535, 65535, 0]);
        assert_eq!(RecordCodec::encode(&decoded.value), [9, 0, 0, 0, 10000]);
    }

    #[test]
    fn test_opaque_encodes_verbatim() {
        let record = [7, 5000, 0x8000, 0x7F00, 0xABCD];
        let decoded = RecordCodec::decode(record);
        assert_eq!(RecordCodec::encode(&decoded.value), record);

        let mut out = Vec::new();
        RecordCodec::write_record(&decoded.value, &mut out);
        assert_eq!(
            out,
            vec![0, 7, 0x13, 0x88, 0x80, 0x00, 0x7F, 0x00, 0xAB, 0xCD]
        );
    }

    #[test]
    fn test_decode_encode_decode_is_stable() {
        for record in [
            [0u16, 256, 65280, 65535, 0],
            [8, 9999, 0, 0, 0],
            [9, 1, 10000, 4321, 10001],
        ] {
            let first = RecordCodec::decode(record);
            let again = RecordCodec::decode(RecordCodec::encode(&first.value));
            assert_eq!(first.value, again.value);
        }
    }

    #[test]
    fn test_read_name() {
        // 0, len=3, "Hi", 0
        let data = [0, 0, 0, 3, 0, b'H', 0, b'i', 0, 0];
        let mut cursor = ByteCursor::new(&data);
        let name = RecordCodec::read_name(&mut cursor, 0).unwrap();
        assert_eq!(name.to_string(), "Hi");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_read_empty_name() {
        let data = [0, 0, 0, 1, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        let name = RecordCodec::read_name(&mut cursor, 0).unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn test_read_name_guards() {
        let data = [0, 1, 0, 1, 0, 0];
        let err = RecordCodec::read_name(&mut ByteCursor::new(&data), 4).unwrap_err();
        assert_eq!(
            err,
            AcoError::MalformedRecord {
                index: 4,
                offset: 0,
                reason: MalformedReason::LeadingGuard(1),
            }
        );

        let data = [0, 0, 0, 2, 0, b'A', 0, b'B'];
        let err = RecordCodec::read_name(&mut ByteCursor::new(&data), 0).unwrap_err();
        assert!(matches!(
            err,
            AcoError::MalformedRecord {
                offset: 6,
                reason: MalformedReason::TrailingGuard(0x42),
                ..
            }
        ));

        let data = [0, 0, 0, 0, 0, 0];
        let err = RecordCodec::read_name(&mut ByteCursor::new(&data), 0).unwrap_err();
        assert!(matches!(
            err,
            AcoError::MalformedRecord {
                reason: MalformedReason::ZeroNameLength,
                ..
            }
        ));
    }

    #[test]
    fn test_read_name_truncated() {
        let data = [0, 0, 0, 5, 0, b'A'];
        let err = RecordCodec::read_name(&mut ByteCursor::new(&data), 0).unwrap_err();
        assert!(matches!(err, AcoError::TruncatedInput { .. }));
    }

    #[test]
    fn test_write_even_name() {
        let mut out = Vec::new();
        RecordCodec::write_name(Some(&Name::from("Hi")), false, &mut out);
        assert_eq!(out, vec![0, 0, 0, 3, 0, b'H', 0, b'i', 0, 0]);
    }

    #[test]
    fn test_write_odd_name_uses_placeholder() {
        let mut out = Vec::new();
        RecordCodec::write_name(Some(&Name::from("Red")), false, &mut out);
        assert_eq!(out, vec![0, 0, 0, 1, 0, 0]);

        let mut out = Vec::new();
        RecordCodec::write_name(Some(&Name::from("Red")), true, &mut out);
        assert_eq!(out, vec![0, 0, 0, 4, 0, b'R', 0, b'e', 0, b'd', 0, 0]);
    }

    #[test]
    fn test_write_name_caps_length_word() {
        let mut out = Vec::new();
        RecordCodec::write_name(Some(&Name::new(vec![0x41; 70000])), true, &mut out);
        assert_eq!(&out[2..4], &u16::MAX.to_be_bytes());
        assert_eq!(out.len(), 4 + MAX_NAME_UNITS * 2 + 2);
    }

    #[test]
    fn test_write_missing_name() {
        let mut out = Vec::new();
        RecordCodec::write_name(None, true, &mut out);
        assert_eq!(out, vec![0, 0, 0, 1, 0, 0]);
    }
}
