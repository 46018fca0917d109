//! ACO Decode Error Types

use std::fmt;

/// Why a version 2 name block was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The word before the name length was not zero
    LeadingGuard(u16),
    /// The word after the name text was not zero
    TrailingGuard(u16),
    /// The name length word was zero; it must count the terminator
    ZeroNameLength,
}

/// Errors that can occur when decoding or assembling ACO palettes
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AcoError {
    /// Header version is not 1 or 2
    UnsupportedVersion(u16),
    /// A read needed more bytes than the buffer has left
    TruncatedInput {
        offset: usize,
        requested: usize,
        available: usize,
    },
    /// A version 2 name block is structurally invalid
    MalformedRecord {
        index: usize,
        offset: usize,
        reason: MalformedReason,
    },
    /// More entries than a 16-bit header count can describe
    TooManyEntries(usize),
    /// A name longer than its 16-bit length word can describe
    NameTooLong { index: usize, len: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeadingGuard(word) => {
                write!(f, "expected zero before name length, found 0x{:04X}", word)
            }
            Self::TrailingGuard(word) => {
                write!(f, "expected zero after name text, found 0x{:04X}", word)
            }
            Self::ZeroNameLength => write!(f, "name length is zero"),
        }
    }
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion(version) => {
                write!(f, "Unsupported palette version: {} (expected 1 or 2)", version)
            }
            Self::TruncatedInput {
                offset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Truncated input at offset {}: needed {} bytes, {} available",
                    offset, requested, available
                )
            }
            Self::MalformedRecord {
                index,
                offset,
                reason,
            } => {
                write!(
                    f,
                    "Malformed record {} at offset {}: {}",
                    index, offset, reason
                )
            }
            Self::TooManyEntries(count) => {
                write!(f, "Too many entries: {} (maximum {})", count, u16::MAX)
            }
            Self::NameTooLong { index, len } => {
                write!(
                    f,
                    "Name of entry {} has {} code units (maximum {})",
                    index,
                    len,
                    u16::MAX - 1
                )
            }
        }
    }
}

impl std::error::Error for AcoError {}
