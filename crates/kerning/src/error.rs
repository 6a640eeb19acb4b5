//! Error types for kerning extraction.

use std::result;

use read_fonts::ReadError;

/// Errors that can occur while flattening a font's kerning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("no GPOS table in font")]
    NoGposTable,

    #[error("no GPOS kern feature in font")]
    NoKernFeature,
}

pub type Result<T> = result::Result<T, Error>;
