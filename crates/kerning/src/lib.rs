//! # Font Kerning
//!
//! Flatten the pair kerning of an OpenType font's GPOS `kern` feature into a
//! plain, ordered list of `(left, right, value)` entries.
//!
//! Format 1 (glyph pair) and format 2 (class pair) subtables are expanded,
//! class pairs by Cartesian product of their glyph classes. Identical entries
//! found in several subtables or lookups are reported once.
//!
//! ## Example
//!
//! ```no_run
//! use font_kerning::Font;
//!
//! let data = std::fs::read("input.ttf").unwrap();
//! let font = Font::new(&data).unwrap();
//! for pair in &font.named_kerning().unwrap() {
//!     println!("{pair}");
//! }
//! ```

mod classes;
mod error;
mod expand;
mod features;
mod flatten;
mod font;
mod model;
mod table;

pub use classes::transpose;
pub use error::{Error, Result};
pub use expand::{expand_format1, expand_format2};
pub use features::{KERN, resolve_kern_lookups};
pub use font::{Font, kerning_source};
pub use model::{
    FeatureRecord, KerningSource, Lookup, PAIR_ADJUSTMENT, PairClasses, PairGlyphs, PairValue,
    Subtable,
};
pub use table::{GlyphMap, KernPair, KernTable};

/// Flatten the kerning of font data, with glyph names as identifiers.
pub fn flatten_kerning(data: &[u8]) -> Result<KernTable<String>> {
    Font::new(data)?.named_kerning()
}

/// Flatten the kerning of font data, then replace every glyph name through
/// `map`. Pairs with a name missing from the map are dropped.
pub fn flatten_kerning_with<V, M>(data: &[u8], map: &M) -> Result<KernTable<V>>
where
    V: Clone,
    M: GlyphMap<String, V> + ?Sized,
{
    Ok(flatten_kerning(data)?.decompose(map))
}
