//! Byte-level ACO fixture builder
//!
//! Writes the file format directly, independent of the library encoder, so
//! tests can produce layouts the encoder never would (wrong counts, bad
//! guard words, inverted CMYK, HSB).

/// Flatten words to big-endian bytes
pub fn to_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Builder for raw ACO files
#[derive(Debug, Clone)]
pub struct AcoBuilder {
    version: u16,
    count: Option<u16>,
    records: Vec<Vec<u16>>,
}

impl AcoBuilder {
    pub fn new(version: u16) -> Self {
        Self {
            version,
            count: None,
            records: Vec::new(),
        }
    }

    /// Header count to write instead of the real record count
    pub fn claim_count(mut self, count: u16) -> Self {
        self.count = Some(count);
        self
    }

    /// A record with no name block (version 1 layout)
    pub fn record(mut self, words: [u16; 5]) -> Self {
        self.records.push(words.to_vec());
        self
    }

    /// A record followed by a well-formed name block
    pub fn named(self, words: [u16; 5], name: &str) -> Self {
        let units: Vec<u16> = name.encode_utf16().collect();
        self.with_name_block(words, 0, units.len() as u16 + 1, &units, 0)
    }

    /// A record followed by an arbitrary name block
    pub fn with_name_block(
        mut self,
        words: [u16; 5],
        leading: u16,
        len_word: u16,
        units: &[u16],
        trailing: u16,
    ) -> Self {
        let mut record = words.to_vec();
        record.push(leading);
        record.push(len_word);
        record.extend_from_slice(units);
        record.push(trailing);
        self.records.push(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.count.unwrap_or(self.records.len() as u16);
        let mut words = vec![self.version, count];
        for record in &self.records {
            words.extend_from_slice(record);
        }
        to_bytes(&words)
    }
}
