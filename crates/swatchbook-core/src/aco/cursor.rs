//! Forward-only big-endian word reader
//!
//! ACO files are a flat sequence of big-endian 16-bit words. The cursor
//! hands them out in order and never seeks backwards.

use super::error::AcoError;

/// Reader over an immutable byte buffer that owns its read offset
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Start reading at the beginning of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read offset in bytes
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// True once every byte has been consumed
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Read `count` big-endian words
    pub fn read_words(&mut self, count: usize) -> Result<Vec<u16>, AcoError> {
        let bytes = self.take(count)?;
        Ok(be_words(bytes).collect())
    }

    /// Read a single big-endian word
    pub fn read_word(&mut self) -> Result<u16, AcoError> {
        let [word] = self.read_array::<1>()?;
        Ok(word)
    }

    /// Read exactly `N` big-endian words into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u16; N], AcoError> {
        let bytes = self.take(N)?;
        let mut words = [0u16; N];
        for (slot, word) in words.iter_mut().zip(be_words(bytes)) {
            *slot = word;
        }
        Ok(words)
    }

    /// Read `count` raw UTF-16 code units
    ///
    /// The units are not validated; unpaired surrogates are kept as-is.
    pub fn read_utf16(&mut self, count: usize) -> Result<Vec<u16>, AcoError> {
        let bytes = self.take(count)?;
        Ok(be_words(bytes).collect())
    }

    /// Consume `count` words worth of bytes
    ///
    /// Fails when the cursor is already at the end, even for `count == 0`.
    fn take(&mut self, count: usize) -> Result<&'a [u8], AcoError> {
        let requested = count.saturating_mul(2);
        let available = self.remaining();

        if self.is_at_end() || available < requested {
            return Err(AcoError::TruncatedInput {
                offset: self.offset,
                requested,
                available,
            });
        }

        let bytes = &self.data[self.offset..self.offset + requested];
        self.offset += requested;
        Ok(bytes)
    }
}

fn be_words(bytes: &[u8]) -> impl Iterator<Item = u16> + '_ {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
}
