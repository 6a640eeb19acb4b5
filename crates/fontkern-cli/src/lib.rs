//! fontkern CLI library.

pub mod attribs;
pub mod cli;
pub mod io;
pub mod kerning;
pub mod parallel;

pub use kerning::{GlyphKey, KerningOptions};
