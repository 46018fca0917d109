//! # swatchbook - Adobe Color swatch palettes
//!
//! Reads and writes Adobe Color (`.aco`) palette files, the swatch format
//! used by Photoshop, and reads GIMP `.gpl` palettes.
//!
//! ## Goals
//!
//! - **Faithful**: entries keep their file order, and records in color
//!   spaces we cannot interpret (L*a*b*, vendor spaces) are carried through
//!   to the output verbatim
//! - **Predictable**: the lossy parts of the round trip (HSB becomes RGB,
//!   inverted CMYK becomes wide CMYK) are fixed rules, not heuristics
//! - **Safe**: every read is bounds checked; malformed files produce an
//!   error and never a partial palette
//!
//! ## Quick Start
//!
//! ```no_run
//! use swatchbook_core::{DecodedColor, PaletteDocument};
//!
//! let bytes = std::fs::read("swatches.aco").unwrap();
//! let palette = PaletteDocument::decode(&bytes).unwrap();
//!
//! for entry in palette.entries() {
//!     if let Some(DecodedColor::Rgb(rgb)) = entry.color() {
//!         println!("{} {}", entry.display_name(), rgb.html());
//!     }
//! }
//!
//! // Write it back out
//! let out = palette.encode();
//! std::fs::write("copy.aco", out).unwrap();
//! ```

pub mod aco;
pub mod color;
pub mod error;
pub mod gimp;

pub use aco::{
    AcoError, ByteCursor, ColorSpace, DecodedColor, EncodeOptions, Entry, EntryValue,
    MalformedReason, Name, OpaqueRecord, PaletteDocument, RecordCodec, Statistics, Version,
};
pub use color::{Cmyk, Gray, Rgb};
pub use error::{Error, Result};
pub use gimp::{GimpError, GimpPalette};

/// Version of swatchbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
