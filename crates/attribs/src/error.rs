//! Error types for attribute extraction.

use std::result;

use read_fonts::ReadError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),
}

pub type Result<T> = result::Result<T, Error>;
