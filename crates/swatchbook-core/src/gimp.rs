//! GIMP Palette Reader
//!
//! GIMP `.gpl` palettes are plain text, RGB only:
//!
//! ```text
//! GIMP Palette
//! Name: W3C Named Colours
//! Columns: 2
//! #
//! 255 255 255    White
//! 255 0   0      Red
//! ```
//!
//! Like ACO palettes, several entries may share a name, so lookups by name
//! return every matching color.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::color::Rgb;

const MAGIC: &str = "GIMP Palette";
const DEFAULT_NAME: &str = "(unnamed)";

/// Errors that can occur when parsing GIMP palettes
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GimpError {
    /// A color line did not start with three channel values
    MissingChannels { line: usize },
    /// A channel was not an integer in 0..=255
    InvalidColor { line: usize, value: String },
}

impl fmt::Display for GimpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChannels { line } => {
                write!(f, "line {}: expected three color channels", line)
            }
            Self::InvalidColor { line, value } => {
                write!(f, "line {}: invalid color channel '{}'", line, value)
            }
        }
    }
}

impl std::error::Error for GimpError {}

/// A parsed GIMP palette
#[derive(Debug, Clone)]
pub struct GimpPalette {
    name: String,
    valid: bool,
    colors: Vec<Rgb>,
    names: IndexMap<String, Vec<Rgb>>,
}

impl GimpPalette {
    /// Parse palette text
    pub fn parse(text: &str) -> Result<Self, GimpError> {
        let mut palette = Self {
            name: DEFAULT_NAME.to_string(),
            valid: false,
            colors: Vec::new(),
            names: IndexMap::new(),
        };

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = strip_comment(raw).trim_end();
            if line.is_empty() {
                continue;
            }

            if line == MAGIC {
                palette.valid = true;
                continue;
            }

            if let Some((key, value)) = header_field(line) {
                if key.to_ascii_lowercase().contains("name") {
                    palette.name = value.to_string();
                }
                continue;
            }

            let (rgb, name) = parse_color(line.trim_start(), line_no)?;
            palette.colors.push(rgb);
            palette.names.entry(name).or_default().push(rgb);
        }

        debug!(
            name = %palette.name,
            colors = palette.colors.len(),
            valid = palette.valid,
            "parsed GIMP palette"
        );
        Ok(palette)
    }

    /// Read and parse the file at `path`
    pub fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// Palette name from the `Name:` header
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the `GIMP Palette` magic line was present
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index` in file order
    pub fn get(&self, index: usize) -> Option<&Rgb> {
        self.colors.get(index)
    }

    /// Colors at each index; negative indices count from the end
    pub fn values_at(&self, indices: &[isize]) -> Vec<Option<&Rgb>> {
        indices
            .iter()
            .map(|&i| {
                let index = if i < 0 {
                    self.colors.len().checked_sub(i.unsigned_abs())?
                } else {
                    i as usize
                };
                self.colors.get(index)
            })
            .collect()
    }

    /// Colors named `name`, in file order
    pub fn get_name(&self, name: &str) -> Option<&[Rgb]> {
        self.names.get(name).map(Vec::as_slice)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Name groups, in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = (&str, &[Rgb])> {
        self.names
            .iter()
            .map(|(name, colors)| (name.as_str(), colors.as_slice()))
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// `Key: value` header lines, where the key is a single word
fn header_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some((key, value.trim()))
}

fn parse_color(line: &str, line_no: usize) -> Result<(Rgb, String), GimpError> {
    let mut rest = line;
    let mut channels = [0u8; 3];

    for slot in channels.iter_mut() {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..token_end];
        if token.is_empty() {
            return Err(GimpError::MissingChannels { line: line_no });
        }
        *slot = token.parse().map_err(|_| GimpError::InvalidColor {
            line: line_no,
            value: token.to_string(),
        })?;
        rest = rest[token_end..].trim_start();
    }

    let [r, g, b] = channels;
    Ok((Rgb::from_u8(r, g, b), rest.trim().to_string()))
}
