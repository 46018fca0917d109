//! Adobe Color (ACO) palette files
//!
//! ACO is the swatch format written by Photoshop. Everything is big-endian
//! 16-bit words.
//!
//! # Structure
//!
//! 1. Header: version (1 or 2) and record count
//! 2. Records: a color space tag and four data words
//! 3. Version 2 only: a UTF-16 name after each record
//!
//! Photoshop usually writes a version 1 section followed by a version 2
//! section with the same colors. Only the first section is read here; the
//! trailing bytes are ignored.
//!
//! # Supported Color Spaces
//!
//! - RGB, grayscale and both CMYK encodings decode to [`DecodedColor`]
//! - HSB decodes to RGB
//! - L*a*b* and vendor spaces are kept as [`OpaqueRecord`]s and written back
//!   unchanged
//!
//! # Example
//!
//! ```ignore
//! use swatchbook_core::aco::PaletteDocument;
//!
//! let palette = PaletteDocument::decode(&bytes)?;
//! if let Some(reds) = palette.get_name("Red") {
//!     println!("{} swatches named Red", reds.len());
//! }
//! ```

mod cursor;
mod document;
mod error;
mod record;
mod types;

pub use cursor::ByteCursor;
pub use document::{EncodeOptions, PaletteDocument, Statistics};
pub use error::{AcoError, MalformedReason};
pub use record::{DecodedRecord, MAX_NAME_UNITS, PERCENT_MAX, RECORD_SIZE, RecordCodec};
pub use types::{ColorSpace, DecodedColor, Entry, EntryValue, Name, OpaqueRecord, Version};
