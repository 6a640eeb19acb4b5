//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::{
    attribs::dump_attribs,
    io::read_glyph_map,
    kerning::{GlyphKey, KerningOptions, dump_kerning},
};

#[derive(Parser)]
#[command(name = "fontkern", version)]
#[command(about = "Dump flattened GPOS kerning and table attributes of OpenType fonts")]
pub struct Cli {
    /// Log skipped lookups and subtables (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Initialize logging. `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logger(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(Env::default().default_filter_or(default)).init();
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print flattened kerning as `left<TAB>right<TAB>value` rows
    Kerning {
        /// Input .otf or .ttf font files
        #[arg(required = true)]
        fonts: Vec<PathBuf>,

        /// Identify glyphs by post table name instead of glyph id
        #[arg(short, long)]
        names: bool,

        /// Replace glyphs through a two-column `glyph<TAB>value` file; pairs
        /// with an unlisted glyph are dropped
        #[arg(short, long, value_name = "FILE")]
        glyph_map: Option<PathBuf>,

        /// Print at most this many pairs per font
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print OS/2, hhea, gasp and head attributes as `table<TAB>attrib<TAB>value` rows
    Attribs {
        /// Input .otf or .ttf font files
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Kerning { fonts, names, glyph_map, limit } => {
                let options = KerningOptions {
                    key: if names { GlyphKey::Name } else { GlyphKey::Id },
                    glyph_map: glyph_map.as_deref().map(read_glyph_map).transpose()?,
                    limit,
                };
                dump_kerning(&fonts, &options)?;
            }
            Commands::Attribs { fonts } => {
                dump_attribs(&fonts)?;
            }
        }
        Ok(())
    }
}
