//! Kern feature lookup resolution.

use read_fonts::types::Tag;

use crate::model::FeatureRecord;

/// The horizontal kerning feature tag.
pub const KERN: Tag = Tag::new(b"kern");

/// Lookup indices of the first `kern` feature record, in stored order.
///
/// Later `kern` records (other script/language systems) are not consulted.
pub fn resolve_kern_lookups(features: &[FeatureRecord]) -> Option<&[u16]> {
    features.iter().find(|r| r.tag == KERN).map(|r| r.lookup_indices.as_slice())
}
