//! Owned view of the kerning-relevant parts of a GPOS table.
//!
//! The loader in [`crate::Font`] copies features, lookups and pair adjustment
//! subtables out of `read-fonts` into these types. Everything downstream
//! (feature resolution, expansion, deduplication) works on this model, which
//! keeps it independent of the font's byte layout and generic over the glyph
//! identifier.

use read_fonts::types::Tag;

/// A feature record: tag plus the lookups it references, in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub tag: Tag,
    pub lookup_indices: Vec<u16>,
}

impl FeatureRecord {
    pub fn new(tag: Tag, lookup_indices: impl IntoIterator<Item = u16>) -> Self {
        Self { tag, lookup_indices: lookup_indices.into_iter().collect() }
    }
}

/// A GPOS lookup.
///
/// Only pair adjustment lookups (type 2, possibly behind an extension) carry
/// subtables; other lookup types are kept with their type and no subtables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<G> {
    pub lookup_type: u16,
    pub subtables: Vec<Subtable<G>>,
}

/// GPOS lookup type 2.
pub const PAIR_ADJUSTMENT: u16 = 2;

impl<G> Lookup<G> {
    /// A pair adjustment lookup with the given subtables.
    pub fn pair(subtables: impl IntoIterator<Item = Subtable<G>>) -> Self {
        Self { lookup_type: PAIR_ADJUSTMENT, subtables: subtables.into_iter().collect() }
    }

    /// A lookup of a type the flattener does not read.
    pub fn unsupported(lookup_type: u16) -> Self {
        Self { lookup_type, subtables: Vec::new() }
    }

    /// Placeholder for a lookup whose header could not be read. Keeps the
    /// lookup list indices of the following lookups intact.
    pub fn unreadable() -> Self {
        Self::unsupported(0)
    }
}

/// A lookup subtable, discriminated by format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtable<G> {
    /// Format 1: explicit glyph pairs.
    PairGlyphs(PairGlyphs<G>),
    /// Format 2: class-on-class adjustments.
    PairClasses(PairClasses<G>),
    /// Any other format.
    Other { format: u16 },
}

impl<G> Subtable<G> {
    pub fn format(&self) -> u16 {
        match self {
            Self::PairGlyphs(_) => 1,
            Self::PairClasses(_) => 2,
            Self::Other { format } => *format,
        }
    }
}

/// One entry of a pair set: second glyph and its horizontal advance adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairValue<G> {
    pub second: G,
    pub x_advance: i16,
}

impl<G> PairValue<G> {
    pub fn new(second: G, x_advance: i16) -> Self {
        Self { second, x_advance }
    }
}

/// Pair adjustment positioning, format 1.
///
/// `pair_sets[i]` holds the records for the glyph at `coverage[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairGlyphs<G> {
    pub coverage: Vec<G>,
    pub pair_sets: Vec<Vec<PairValue<G>>>,
}

/// Pair adjustment positioning, format 2.
///
/// `class1_records[c1][c2]` is the horizontal advance adjustment between
/// class `c1` of `class_def1` and class `c2` of `class_def2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairClasses<G> {
    pub class_def1: Vec<(G, u16)>,
    pub class_def2: Vec<(G, u16)>,
    pub class1_records: Vec<Vec<i16>>,
}

/// The feature list and lookup list of a GPOS table, as far as kerning
/// needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KerningSource<G> {
    pub features: Vec<FeatureRecord>,
    pub lookups: Vec<Lookup<G>>,
}

impl<G> KerningSource<G> {
    pub fn new(features: Vec<FeatureRecord>, lookups: Vec<Lookup<G>>) -> Self {
        Self { features, lookups }
    }

    /// Re-key every glyph identifier in the model.
    ///
    /// Used to switch from glyph ids to glyph names before flattening, so
    /// deduplication happens on the identifiers the caller will see.
    pub fn map_glyphs<H, F>(&self, mut f: F) -> KerningSource<H>
    where
        F: FnMut(&G) -> H,
    {
        let lookups = self
            .lookups
            .iter()
            .map(|lookup| Lookup {
                lookup_type: lookup.lookup_type,
                subtables: lookup
                    .subtables
                    .iter()
                    .map(|subtable| match subtable {
                        Subtable::PairGlyphs(table) => Subtable::PairGlyphs(PairGlyphs {
                            coverage: table.coverage.iter().map(&mut f).collect(),
                            pair_sets: table
                                .pair_sets
                                .iter()
                                .map(|set| {
                                    set.iter()
                                        .map(|rec| PairValue::new(f(&rec.second), rec.x_advance))
                                        .collect()
                                })
                                .collect(),
                        }),
                        Subtable::PairClasses(table) => Subtable::PairClasses(PairClasses {
                            class_def1: table.class_def1.iter().map(|(g, c)| (f(g), *c)).collect(),
                            class_def2: table.class_def2.iter().map(|(g, c)| (f(g), *c)).collect(),
                            class1_records: table.class1_records.clone(),
                        }),
                        Subtable::Other { format } => Subtable::Other { format: *format },
                    })
                    .collect(),
            })
            .collect();

        KerningSource { features: self.features.clone(), lookups }
    }
}
