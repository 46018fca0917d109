//! # swatchbook-tests
//!
//! Test support for swatchbook.
//!
//! This crate provides:
//! - Byte-level ACO builders for hand-written fixtures
//! - Seeded random palettes for round-trip testing
//! - Reference color conversions from the `palette` crate
//!
//! ## Test Categories
//!
//! 1. **Round trip**: decode/encode stability and byte-identical re-encoding
//! 2. **Palette properties**: name grouping, statistics, lost records
//! 3. **Malformed input**: truncation, bad versions, bad name guards
//! 4. **Reference**: HSB conversion against an independent implementation
//! 5. **Concurrency**: independent documents decoded in parallel

pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use fixtures::{AcoBuilder, to_bytes};
pub use patterns::{SpaceMix, random_palette};
