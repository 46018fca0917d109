//! ACO Palette Document
//!
//! The palette as a whole: header, entries in file order, a name index and
//! per-space statistics. Documents are built once, by [`PaletteDocument::decode`]
//! or [`PaletteDocument::from_entries`], and are immutable afterwards.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::cursor::ByteCursor;
use super::error::AcoError;
use super::record::{DecodedRecord, MAX_NAME_UNITS, RECORD_SIZE, RecordCodec};
use super::types::{ColorSpace, DecodedColor, Entry, EntryValue, Name, OpaqueRecord, Version};

/// How many records of each color space a palette contained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    pub rgb: usize,
    pub hsb: usize,
    pub cmyk: usize,
    pub lab: usize,
    pub gray: usize,
    pub wide_cmyk: usize,
    /// HSB records that needed the full sector conversion (diagnostic)
    pub converted: usize,
    /// Counts for tags outside the known set
    pub other: BTreeMap<u16, usize>,
}

impl Statistics {
    /// Number of records seen in `space`
    pub fn get(&self, space: ColorSpace) -> usize {
        match space {
            ColorSpace::Rgb => self.rgb,
            ColorSpace::Hsb => self.hsb,
            ColorSpace::Cmyk => self.cmyk,
            ColorSpace::Lab => self.lab,
            ColorSpace::Gray => self.gray,
            ColorSpace::WideCmyk => self.wide_cmyk,
            ColorSpace::Other(tag) => self.other.get(&tag).copied().unwrap_or(0),
        }
    }

    /// Total records counted, across all spaces
    pub fn total(&self) -> usize {
        self.rgb
            + self.hsb
            + self.cmyk
            + self.lab
            + self.gray
            + self.wide_cmyk
            + self.other.values().sum::<usize>()
    }

    fn record(&mut self, space: ColorSpace) {
        match space {
            ColorSpace::Rgb => self.rgb += 1,
            ColorSpace::Hsb => self.hsb += 1,
            ColorSpace::Cmyk => self.cmyk += 1,
            ColorSpace::Lab => self.lab += 1,
            ColorSpace::Gray => self.gray += 1,
            ColorSpace::WideCmyk => self.wide_cmyk += 1,
            ColorSpace::Other(tag) => *self.other.entry(tag).or_insert(0) += 1,
        }
    }
}

/// Options for writing a palette
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Output version; `None` keeps the document's own version
    pub version: Option<Version>,
    /// Write names with an odd number of code units instead of
    /// replacing them with an empty name
    pub preserve_odd_names: bool,
}

impl EncodeOptions {
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_preserve_odd_names(mut self, preserve: bool) -> Self {
        self.preserve_odd_names = preserve;
        self
    }
}

/// An Adobe Color palette
///
/// Entries keep file order and are addressed by position with
/// [`get`](Self::get). Colors sharing a name are grouped and returned
/// together by [`get_name`](Self::get_name). Records in spaces that do not
/// decode are kept in the entry list and also listed in
/// [`lost`](Self::lost).
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteDocument {
    version: Version,
    entries: Vec<Entry>,
    names: IndexMap<Name, Vec<DecodedColor>>,
    statistics: Statistics,
    lost: Vec<OpaqueRecord>,
}

impl PaletteDocument {
    /// Decode a complete ACO file
    pub fn decode(data: &[u8]) -> Result<Self, AcoError> {
        let mut cursor = ByteCursor::new(data);

        let [version, count] = cursor.read_array::<2>()?;
        let version = Version::try_from(version)?;
        let count = count as usize;

        let mut builder = Builder::new(version, count);

        for index in 0..count {
            let record = cursor.read_array::<5>()?;
            let name = if version.has_names() {
                Some(RecordCodec::read_name(&mut cursor, index)?)
            } else {
                None
            };

            let decoded = RecordCodec::decode(record);
            if let EntryValue::Opaque(_) = decoded.value {
                debug!(index, tag = record[0], "keeping undecodable record verbatim");
            } else {
                trace!(index, space = ?decoded.space, "decoded record");
            }
            builder.push_decoded(decoded, name);
        }

        if cursor.remaining() > 0 {
            trace!(trailing = cursor.remaining(), "ignoring bytes after last record");
        }

        let document = builder.finish();
        debug!(
            version = u16::from(version),
            count,
            lost = document.lost.len(),
            "decoded ACO palette"
        );
        Ok(document)
    }

    /// Read `reader` to the end and decode it
    pub fn from_reader<R: Read>(mut reader: R) -> crate::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::decode(&data)?)
    }

    /// Read and decode the file at `path`
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::decode(&data)?)
    }

    /// Assemble a document from entries, in order
    ///
    /// Statistics count each entry under the space it will be written as.
    /// Version 1 files cannot carry names, so names are dropped for
    /// [`Version::V1`] and the document matches what a decode would give.
    pub fn from_entries(
        version: Version,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<Self, AcoError> {
        let entries: Vec<Entry> = entries.into_iter().collect();
        if entries.len() > u16::MAX as usize {
            return Err(AcoError::TooManyEntries(entries.len()));
        }

        let mut builder = Builder::new(version, entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let entry = if version.has_names() {
                if let Some(name) = entry.name().filter(|n| n.len() > MAX_NAME_UNITS) {
                    return Err(AcoError::NameTooLong {
                        index,
                        len: name.len(),
                    });
                }
                entry
            } else {
                Entry::unnamed(*entry.value())
            };
            builder.push(entry);
        }
        Ok(builder.finish())
    }

    /// Encode with the document's version and default options
    pub fn encode(&self) -> Vec<u8> {
        self.encode_with(&EncodeOptions::default())
    }

    /// Encode with explicit options
    pub fn encode_with(&self, options: &EncodeOptions) -> Vec<u8> {
        let version = options.version.unwrap_or(self.version);
        let per_entry = if version.has_names() {
            RECORD_SIZE + 6
        } else {
            RECORD_SIZE
        };

        let mut out = Vec::with_capacity(4 + self.entries.len() * per_entry);
        out.extend_from_slice(&u16::from(version).to_be_bytes());
        // Entry count fits: decode reads it from a u16, from_entries checks
        out.extend_from_slice(&(self.entries.len() as u16).to_be_bytes());

        for entry in &self.entries {
            RecordCodec::write_record(entry.value(), &mut out);
            if version.has_names() {
                RecordCodec::write_name(entry.name(), options.preserve_odd_names, &mut out);
            }
        }

        out
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Number of entries, opaque records included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in file order
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Entries at each index; negative indices count from the end
    pub fn values_at(&self, indices: &[isize]) -> Vec<Option<&Entry>> {
        indices
            .iter()
            .map(|&i| {
                let index = if i < 0 {
                    self.entries.len().checked_sub(i.unsigned_abs())?
                } else {
                    i as usize
                };
                self.entries.get(index)
            })
            .collect()
    }

    /// Colors named `name`, in file order
    ///
    /// `None` when no decoded color has this name.
    pub fn get_name(&self, name: &str) -> Option<&[DecodedColor]> {
        let units: Vec<u16> = name.encode_utf16().collect();
        self.get_name_units(&units)
    }

    /// Colors whose name is exactly these code units
    pub fn get_name_units(&self, units: &[u16]) -> Option<&[DecodedColor]> {
        self.names.get(units).map(Vec::as_slice)
    }

    /// All entries in file order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Decoded colors in file order, skipping opaque records
    pub fn colors(&self) -> impl Iterator<Item = &DecodedColor> {
        self.entries.iter().filter_map(Entry::color)
    }

    /// Name groups, in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = (&Name, &[DecodedColor])> {
        self.names
            .iter()
            .map(|(name, colors)| (name, colors.as_slice()))
    }

    /// Records that could not be decoded, in file order
    pub fn lost(&self) -> &[OpaqueRecord] {
        &self.lost
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Accumulates entries and keeps the indexes in step
struct Builder {
    version: Version,
    entries: Vec<Entry>,
    names: IndexMap<Name, Vec<DecodedColor>>,
    statistics: Statistics,
    lost: Vec<OpaqueRecord>,
}

impl Builder {
    fn new(version: Version, capacity: usize) -> Self {
        Self {
            version,
            entries: Vec::with_capacity(capacity),
            names: IndexMap::new(),
            statistics: Statistics::default(),
            lost: Vec::new(),
        }
    }

    fn push_decoded(&mut self, decoded: DecodedRecord, name: Option<Name>) {
        self.statistics.record(decoded.space);
        if decoded.converted {
            self.statistics.converted += 1;
        }
        self.index(&decoded.value, name.as_ref());
        self.entries.push(Entry::new(decoded.value, name));
    }

    fn push(&mut self, entry: Entry) {
        self.statistics.record(entry.value().color_space());
        self.index(entry.value(), entry.name());
        self.entries.push(entry);
    }

    fn index(&mut self, value: &EntryValue, name: Option<&Name>) {
        match value {
            EntryValue::Opaque(record) => self.lost.push(*record),
            EntryValue::Color(color) => {
                if let Some(name) = name {
                    self.names.entry(name.clone()).or_default().push(*color);
                }
            }
        }
    }

    fn finish(self) -> PaletteDocument {
        PaletteDocument {
            version: self.version,
            entries: self.entries,
            names: self.names,
            statistics: self.statistics,
            lost: self.lost,
        }
    }
}
