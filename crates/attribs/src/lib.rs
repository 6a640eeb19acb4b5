//! # Font Attributes
//!
//! Read a flat list of attributes from a font's `OS/2`, `hhea`, `gasp` and
//! `head` tables.
//!
//! Which fields are read, and how each is converted, is described by the
//! descriptor tables in [`fields`]. Fields that a table's version does not
//! carry are reported as warnings instead of failing the whole font.
//!
//! ## Example
//!
//! ```no_run
//! let data = std::fs::read("input.ttf").unwrap();
//! let attribs = font_attribs::table_attribs(&data).unwrap();
//! for attrib in &attribs {
//!     println!("{attrib}");
//! }
//! ```

mod attribs;
mod error;
pub mod fields;
mod value;

pub use attribs::{Attrib, TableAttribs, TableKind, Warning};
pub use error::{Error, Result};
pub use value::AttribValue;

/// Read the attributes of font data.
pub fn table_attribs(data: &[u8]) -> Result<TableAttribs> {
    let font = read_fonts::FontRef::new(data)?;
    Ok(TableAttribs::from_font(&font))
}
