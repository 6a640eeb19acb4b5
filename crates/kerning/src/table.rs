//! Flattened kerning: pairs, tables, and glyph decomposition.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::{self, Display, Formatter},
    hash::{BuildHasher, Hash},
    slice, vec,
};

use indexmap::IndexMap;

/// A single flattened kerning entry.
///
/// Equality covers all three fields: the same glyph pair with two different
/// values is two distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernPair<G> {
    pub left: G,
    pub right: G,
    pub value: i32,
}

impl<G> KernPair<G> {
    pub fn new(left: G, right: G, value: i32) -> Self {
        Self { left, right, value }
    }
}

impl<G: Display> Display for KernPair<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.left, self.right, self.value)
    }
}

/// A lookup from glyph identifier to a caller-defined replacement.
///
/// A miss (`None`) is distinct from any stored value, including "empty" ones.
pub trait GlyphMap<K, V> {
    fn lookup(&self, glyph: &K) -> Option<&V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> GlyphMap<K, V> for HashMap<K, V, S> {
    fn lookup(&self, glyph: &K) -> Option<&V> {
        self.get(glyph)
    }
}

impl<K: Ord, V> GlyphMap<K, V> for BTreeMap<K, V> {
    fn lookup(&self, glyph: &K) -> Option<&V> {
        self.get(glyph)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> GlyphMap<K, V> for IndexMap<K, V, S> {
    fn lookup(&self, glyph: &K) -> Option<&V> {
        self.get(glyph)
    }
}

/// An ordered list of kerning pairs, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernTable<G>(Vec<KernPair<G>>);

impl<G> Default for KernTable<G> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<G> KernTable<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, KernPair<G>> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[KernPair<G>] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<KernPair<G>> {
        self.0
    }

    /// Re-key both sides of every pair. Nothing is dropped.
    pub fn map_glyphs<H>(&self, mut f: impl FnMut(&G) -> H) -> KernTable<H> {
        self.0.iter().map(|pair| KernPair::new(f(&pair.left), f(&pair.right), pair.value)).collect()
    }

    /// Replace both glyphs of every pair through `map`.
    ///
    /// Pairs where either glyph has no entry in the map are dropped. Order is
    /// preserved and no deduplication happens after the replacement.
    pub fn decompose<V, M>(&self, map: &M) -> KernTable<V>
    where
        V: Clone,
        M: GlyphMap<G, V> + ?Sized,
    {
        self.0
            .iter()
            .filter_map(|pair| {
                let left = map.lookup(&pair.left)?;
                let right = map.lookup(&pair.right)?;
                Some(KernPair::new(left.clone(), right.clone(), pair.value))
            })
            .collect()
    }
}

impl<G> FromIterator<KernPair<G>> for KernTable<G> {
    fn from_iter<I: IntoIterator<Item = KernPair<G>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<G> IntoIterator for KernTable<G> {
    type Item = KernPair<G>;
    type IntoIter = vec::IntoIter<KernPair<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, G> IntoIterator for &'a KernTable<G> {
    type Item = &'a KernPair<G>;
    type IntoIter = slice::Iter<'a, KernPair<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<G: Display> Display for KernTable<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pair in &self.0 {
            writeln!(f, "{pair}")?;
        }
        Ok(())
    }
}
