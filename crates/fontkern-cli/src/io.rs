//! Shared file I/O utilities.

use std::{
    fs::{read, read_to_string},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

/// A font file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read font data from the file.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read font: {}", self.path.display()))
    }
}

/// Read a glyph map file. See [`parse_glyph_map`] for the format.
pub fn read_glyph_map(path: &Path) -> Result<IndexMap<String, String>> {
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read glyph map: {}", path.display()))?;
    parse_glyph_map(&text).with_context(|| format!("Invalid glyph map: {}", path.display()))
}

/// Parse `glyph<TAB>value` lines.
///
/// Blank lines and lines starting with `#` are ignored. The value may be
/// empty. A glyph listed twice keeps its last value.
pub fn parse_glyph_map(text: &str) -> Result<IndexMap<String, String>> {
    let mut map = IndexMap::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((glyph, value)) = line.split_once('\t') else {
            bail!("line {}: expected `glyph<TAB>value`", number + 1);
        };
        if glyph.is_empty() {
            bail!("line {}: empty glyph", number + 1);
        }
        map.insert(glyph.to_owned(), value.to_owned());
    }
    Ok(map)
}
