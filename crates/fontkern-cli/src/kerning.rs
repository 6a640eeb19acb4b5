//! `kerning` subcommand.

use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use font_kerning::{Font, KernTable};
use indexmap::IndexMap;
use log::info;

use crate::{io::FontFile, parallel::run_parallel};

/// How glyphs are identified in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphKey {
    /// Decimal glyph id.
    #[default]
    Id,
    /// `post` table glyph name, `gid{N}` when the font has none.
    Name,
}

#[derive(Debug, Clone, Default)]
pub struct KerningOptions {
    pub key: GlyphKey,
    /// Keyed by the identifiers selected with `key`.
    pub glyph_map: Option<IndexMap<String, String>>,
    pub limit: Option<usize>,
}

impl KerningOptions {
    /// Flatten the kerning of font data and apply the glyph map.
    pub fn kerning(&self, data: &[u8]) -> font_kerning::Result<KernTable<String>> {
        let font = Font::new(data)?;
        let table = match self.key {
            GlyphKey::Id => font.kerning()?.map_glyphs(|gid| gid.to_u16().to_string()),
            GlyphKey::Name => font.named_kerning()?,
        };
        Ok(match &self.glyph_map {
            Some(map) => table.decompose(map),
            None => table,
        })
    }
}

/// Render one font's kerning: a `# path` header line, then one row per pair.
pub fn render_kerning(path: &Path, table: &KernTable<String>, limit: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", path.display());
    for pair in table.iter().take(limit.unwrap_or(usize::MAX)) {
        let _ = writeln!(out, "{pair}");
    }
    out
}

pub fn dump_kerning(fonts: &[PathBuf], options: &KerningOptions) -> Result<()> {
    run_parallel("kerning", fonts, |path| {
        let data = FontFile::new(path).read()?;
        let table = options
            .kerning(&data)
            .with_context(|| format!("Failed to flatten kerning of {}", path.display()))?;
        info!("{}: {} kerning pairs", path.display(), table.len());
        Ok(render_kerning(path, &table, options.limit))
    })
}
