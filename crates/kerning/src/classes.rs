//! Class definition transposition.

use indexmap::IndexMap;

/// Invert a class definition: `glyph -> class` becomes `class -> [glyph]`.
///
/// Glyphs keep the order they are given in. Only explicitly listed glyphs are
/// placed; the implicit class 0 ("every glyph not listed") is not filled in,
/// so a class with no listed glyphs has no entry at all.
pub fn transpose<G>(class_def: impl IntoIterator<Item = (G, u16)>) -> IndexMap<u16, Vec<G>> {
    let mut classes: IndexMap<u16, Vec<G>> = IndexMap::new();
    for (glyph, class) in class_def {
        classes.entry(class).or_default().push(glyph);
    }
    classes
}
