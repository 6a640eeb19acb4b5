//! Kerning flattening over a loaded GPOS model.

use std::hash::Hash;

use indexmap::IndexSet;
use log::debug;

use crate::{
    Error, Result,
    expand::{expand_format1, expand_format2},
    features::resolve_kern_lookups,
    model::{KerningSource, PAIR_ADJUSTMENT, Subtable},
    table::KernTable,
};

impl<G: Clone + Eq + Hash> KerningSource<G> {
    /// Flatten every kern lookup into an ordered, deduplicated table.
    ///
    /// Lookups are visited in the order the `kern` feature lists them, and
    /// subtables in stored order. An identical (left, right, value) triple
    /// found in several subtables or lookups is reported once, at its first
    /// position.
    pub fn flatten(&self) -> Result<KernTable<G>> {
        let indices = resolve_kern_lookups(&self.features)
            .filter(|indices| !indices.is_empty())
            .ok_or(Error::NoKernFeature)?;

        let mut pairs = IndexSet::new();
        for &index in indices {
            let Some(lookup) = self.lookups.get(index as usize) else {
                debug!("kern lookup {index} is out of range, skipping");
                continue;
            };
            if lookup.lookup_type != PAIR_ADJUSTMENT {
                debug!("kern lookup {index} has type {}, skipping", lookup.lookup_type);
                continue;
            }
            for subtable in &lookup.subtables {
                match subtable {
                    Subtable::PairGlyphs(table) => expand_format1(table, &mut pairs),
                    Subtable::PairClasses(table) => expand_format2(table, &mut pairs),
                    Subtable::Other { format } => {
                        debug!("kern lookup {index}: ignoring subtable format {format}");
                    }
                }
            }
        }

        debug!("flattened {} kerning pairs from {} lookups", pairs.len(), indices.len());
        Ok(pairs.into_iter().collect())
    }
}
