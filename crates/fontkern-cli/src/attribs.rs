//! `attribs` subcommand.

use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use font_attribs::{TableAttribs, table_attribs};
use log::warn;

use crate::{io::FontFile, parallel::run_parallel};

/// Render one font's attributes: a `# path` header line, then one row per
/// attribute.
pub fn render_attribs(path: &Path, attribs: &TableAttribs) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", path.display());
    for attrib in attribs {
        let _ = writeln!(out, "{attrib}");
    }
    out
}

pub fn dump_attribs(fonts: &[PathBuf]) -> Result<()> {
    run_parallel("attribs", fonts, |path| {
        let data = FontFile::new(path).read()?;
        let attribs = table_attribs(&data)
            .with_context(|| format!("Failed to read attributes of {}", path.display()))?;
        for warning in &attribs.warnings {
            warn!("{}: {warning}", path.display());
        }
        Ok(render_attribs(path, &attribs))
    })
}
