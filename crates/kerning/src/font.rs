//! Font parsing and GPOS loading.

use std::{
    fmt::{self, Formatter},
    result,
};

use log::warn;
use read_fonts::{
    FontRef, ReadError, TableProvider,
    tables::{
        gpos::{Gpos, PairPos, PositionSubtables, ValueRecord},
        layout::ClassDef,
        post::Post,
    },
    types::GlyphId16,
};

use crate::{
    Result,
    error::Error,
    model::{FeatureRecord, KerningSource, Lookup, PairClasses, PairGlyphs, PairValue, Subtable},
    table::{GlyphMap, KernTable},
};

type ReadResult<T> = result::Result<T, ReadError>;

/// A parsed font ready for kerning extraction.
pub struct Font<'a> {
    data: &'a [u8],
    inner: FontRef<'a>,
}

impl std::fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("data_len", &self.data.len()).finish_non_exhaustive()
    }
}

impl<'a> Font<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Ok(Self { data, inner: FontRef::new(data)? })
    }

    /// Load the kern-relevant parts of GPOS, keyed by glyph id.
    pub fn kerning_source(&self) -> Result<KerningSource<GlyphId16>> {
        kerning_source(&self.inner)
    }

    /// Flattened kerning keyed by glyph id.
    pub fn kerning(&self) -> Result<KernTable<GlyphId16>> {
        self.kerning_source()?.flatten()
    }

    /// Flattened kerning keyed by glyph name.
    ///
    /// Names come from the `post` table; glyphs without one are named
    /// `gid{N}`. Deduplication runs on the names.
    pub fn named_kerning(&self) -> Result<KernTable<String>> {
        let names = GlyphNames::from_font(&self.inner);
        self.kerning_source()?.map_glyphs(|gid| names.get(*gid)).flatten()
    }

    /// Flattened kerning with both glyphs of every pair replaced through
    /// `map`. Pairs with an unmapped glyph are dropped.
    pub fn decomposed_kerning<V, M>(&self, map: &M) -> Result<KernTable<V>>
    where
        V: Clone,
        M: GlyphMap<GlyphId16, V> + ?Sized,
    {
        Ok(self.kerning()?.decompose(map))
    }
}

/// Load the kern-relevant parts of a font's GPOS table.
///
/// Fails with [`Error::NoGposTable`] when the font has no GPOS table.
pub fn kerning_source(font: &FontRef) -> Result<KerningSource<GlyphId16>> {
    let gpos = font.gpos().map_err(|e| match e {
        ReadError::TableIsMissing(_) => Error::NoGposTable,
        e => Error::Parse(e),
    })?;
    GposLoader(&gpos).load()
}

/// Copies feature records and pair adjustment lookups out of a GPOS table.
struct GposLoader<'a, 'b>(&'b Gpos<'a>);

impl GposLoader<'_, '_> {
    fn load(&self) -> Result<KerningSource<GlyphId16>> {
        Ok(KerningSource::new(self.features()?, self.lookups()?))
    }

    fn features(&self) -> Result<Vec<FeatureRecord>> {
        let feature_list = self.0.feature_list()?;
        feature_list
            .feature_records()
            .iter()
            .map(|record| -> Result<FeatureRecord> {
                let feature = record.feature(feature_list.offset_data())?;
                Ok(FeatureRecord::new(
                    record.feature_tag(),
                    feature.lookup_list_indices().iter().map(|i| i.get()),
                ))
            })
            .collect()
    }

    fn lookups(&self) -> Result<Vec<Lookup<GlyphId16>>> {
        let lookup_list = self.0.lookup_list()?;
        Ok(lookup_list
            .lookups()
            .iter()
            .enumerate()
            .map(|(index, lookup)| {
                let lookup = match lookup {
                    Ok(lookup) => lookup,
                    Err(e) => {
                        warn!("lookup {index} is unreadable: {e}");
                        return Lookup::unreadable();
                    }
                };
                match lookup.subtables() {
                    Ok(PositionSubtables::Pair(subtables)) => {
                        Lookup::pair(subtables.iter().enumerate().filter_map(|(i, subtable)| {
                            load_subtable(subtable)
                                .inspect_err(|e| {
                                    warn!("lookup {index} subtable {i} is unreadable: {e}")
                                })
                                .ok()
                        }))
                    }
                    Ok(_) => Lookup::unsupported(lookup.lookup_type()),
                    Err(e) => {
                        warn!("lookup {index} subtables are unreadable: {e}");
                        Lookup::unsupported(lookup.lookup_type())
                    }
                }
            })
            .collect())
    }
}

fn load_subtable(subtable: ReadResult<PairPos<'_>>) -> ReadResult<Subtable<GlyphId16>> {
    match subtable {
        Ok(PairPos::Format1(table)) => {
            let coverage = table.coverage()?.iter().map(|g| glyph_id(g.to_u32())).collect();
            let pair_sets = table
                .pair_sets()
                .iter()
                .map(|set| -> ReadResult<Vec<PairValue<GlyphId16>>> {
                    set?.pair_value_records()
                        .iter()
                        .map(|record| -> ReadResult<PairValue<GlyphId16>> {
                            let record = record?;
                            Ok(PairValue::new(
                                record.second_glyph(),
                                x_advance(record.value_record1()),
                            ))
                        })
                        .collect()
                })
                .collect::<ReadResult<Vec<_>>>()?;
            Ok(Subtable::PairGlyphs(PairGlyphs { coverage, pair_sets }))
        }
        Ok(PairPos::Format2(table)) => {
            let class_def1 = class_entries(table.class_def1()?);
            let class_def2 = class_entries(table.class_def2()?);
            let class1_records = table
                .class1_records()
                .iter()
                .map(|class1| -> ReadResult<Vec<i16>> {
                    class1?
                        .class2_records()
                        .iter()
                        .map(|class2| -> ReadResult<i16> {
                            Ok(x_advance(class2?.value_record1()))
                        })
                        .collect()
                })
                .collect::<ReadResult<Vec<_>>>()?;
            Ok(Subtable::PairClasses(PairClasses { class_def1, class_def2, class1_records }))
        }
        Err(ReadError::InvalidFormat(format)) => Ok(Subtable::Other { format: format as u16 }),
        Err(e) => Err(e),
    }
}

/// Explicitly assigned classes only. Class 0 slots (gaps in a format 1
/// array, class 0 ranges) are left out, like unlisted glyphs.
fn class_entries(class_def: ClassDef<'_>) -> Vec<(GlyphId16, u16)> {
    class_def
        .iter()
        .filter(|&(_, class)| class != 0)
        .map(|(g, c)| (glyph_id(g.to_u32()), c))
        .collect()
}

/// A value format without X_ADVANCE reads as no adjustment.
fn x_advance(record: &ValueRecord) -> i16 {
    record.x_advance().unwrap_or_default()
}

fn glyph_id(gid: u32) -> GlyphId16 {
    GlyphId16::new(gid as u16)
}

/// Glyph names from the `post` table.
struct GlyphNames<'a> {
    post: Option<Post<'a>>,
}

impl<'a> GlyphNames<'a> {
    fn from_font(font: &FontRef<'a>) -> Self {
        Self { post: font.post().ok() }
    }

    fn get(&self, gid: GlyphId16) -> String {
        self.post
            .as_ref()
            .and_then(|post| post.glyph_name(gid.into()))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("gid{}", gid.to_u16()))
    }
}
