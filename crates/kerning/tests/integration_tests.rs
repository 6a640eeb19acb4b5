//! Kerning extraction from fonts assembled in memory with write-fonts.

use std::collections::HashMap;

use font_kerning::{Error, Font, KernPair, Subtable, flatten_kerning, flatten_kerning_with};
use font_types::{GlyphId16, Tag};
use write_fonts::{
    FontBuilder,
    tables::{
        gpos::{
            Class1Record, Class2Record, Gpos, PairPos, PairPosFormat1, PairPosFormat2, PairSet,
            PairValueRecord, PositionLookup, PositionLookupList, SinglePos, SinglePosFormat1,
            ValueRecord,
        },
        head::Head,
        layout::{
            ClassDef, ClassDefFormat1, CoverageTable, Feature, FeatureList, FeatureRecord, Lookup, LookupFlag,
            ScriptList,
        },
        post::Post,
    },
};

// Glyph order of every test font. The last glyph has no post name.
const NOTDEF: u16 = 0;
const A: u16 = 1;
const T: u16 = 2;
const V: u16 = 3;
const LOWER_A: u16 = 4;
const E: u16 = 5;
const O: u16 = 6;
const UNNAMED: u16 = 7;

/// Indices into the standard Macintosh glyph name list.
const NAME_INDEX: [u16; 7] = [0, 36, 55, 57, 68, 72, 82];

const KERN: Tag = Tag::new(b"kern");
const MARK: Tag = Tag::new(b"mark");

fn gid(id: u16) -> GlyphId16 {
    GlyphId16::new(id)
}

fn kern(value: i16) -> ValueRecord {
    ValueRecord::new().with_x_advance(value)
}

/// A format 1 subtable. First glyphs must be given in glyph id order.
fn pair_glyphs(pairs: &[(u16, &[(u16, i16)])]) -> PositionLookup {
    let coverage = CoverageTable::format_1(pairs.iter().map(|(first, _)| gid(*first)).collect());
    let pair_sets = pairs
        .iter()
        .map(|(_, set)| {
            PairSet::new(
                set.iter()
                    .map(|&(second, value)| {
                        PairValueRecord::new(gid(second), kern(value), ValueRecord::new())
                    })
                    .collect(),
            )
        })
        .collect();
    pair_lookup(vec![PairPos::Format1(PairPosFormat1::new(coverage, pair_sets))])
}

/// A format 2 subtable. Classes must be contiguous from 1.
fn pair_classes(
    class_def1: &[(u16, u16)],
    class_def2: &[(u16, u16)],
    values: &[&[i16]],
) -> PositionLookup {
    let mut firsts: Vec<_> = class_def1.iter().map(|(g, _)| gid(*g)).collect();
    firsts.sort();
    let class1_records = values
        .iter()
        .map(|row| {
            Class1Record::new(
                row.iter().map(|&value| Class2Record::new(kern(value), ValueRecord::new())).collect(),
            )
        })
        .collect();
    pair_lookup(vec![PairPos::Format2(PairPosFormat2::new(
        CoverageTable::format_1(firsts),
        ClassDef::from_iter(class_def1.iter().map(|&(g, c)| (gid(g), c))),
        ClassDef::from_iter(class_def2.iter().map(|&(g, c)| (gid(g), c))),
        class1_records,
    ))])
}

fn pair_lookup(subtables: Vec<PairPos>) -> PositionLookup {
    PositionLookup::Pair(Lookup::new(LookupFlag::empty(), subtables))
}

fn single_lookup(glyph: u16, value: i16) -> PositionLookup {
    PositionLookup::Single(Lookup::new(
        LookupFlag::empty(),
        vec![SinglePos::Format1(SinglePosFormat1::new(
            CoverageTable::format_1(vec![gid(glyph)]),
            kern(value),
        ))],
    ))
}

fn gpos(features: Vec<(Tag, Vec<u16>)>, lookups: Vec<PositionLookup>) -> Gpos {
    let feature_records = features
        .into_iter()
        .map(|(tag, indices)| FeatureRecord::new(tag, Feature::new(None, indices)))
        .collect();
    Gpos::new(
        ScriptList::new(vec![]),
        FeatureList::new(feature_records),
        PositionLookupList::new(lookups),
    )
}

/// Create a minimal font with `head`, a version 2 `post` and an optional GPOS
fn make_test_font(gpos: Option<&Gpos>) -> Vec<u8> {
    let head = Head {
        font_revision: font_types::Fixed::from_f64(1.0),
        checksum_adjustment: 0,
        magic_number: 0x5F0F3CF5,
        flags: write_fonts::tables::head::Flags::empty(),
        units_per_em: 1000,
        created: font_types::LongDateTime::new(0),
        modified: font_types::LongDateTime::new(0),
        x_min: 0,
        y_min: 0,
        x_max: 500,
        y_max: 700,
        mac_style: write_fonts::tables::head::MacStyle::empty(),
        lowest_rec_ppem: 8,
        font_direction_hint: 2,
        index_to_loc_format: 0,
    };

    let post = Post {
        version: font_types::Version16Dot16::VERSION_2_0,
        italic_angle: font_types::Fixed::from_f64(0.0),
        underline_position: font_types::FWord::new(-100),
        underline_thickness: font_types::FWord::new(50),
        is_fixed_pitch: 0,
        min_mem_type42: 0,
        max_mem_type42: 0,
        min_mem_type1: 0,
        max_mem_type1: 0,
        num_glyphs: Some(NAME_INDEX.len() as u16),
        glyph_name_index: Some(NAME_INDEX.to_vec()),
        string_data: Some(vec![]),
    };

    let mut builder = FontBuilder::new();
    builder.add_table(&head).unwrap();
    builder.add_table(&post).unwrap();
    if let Some(gpos) = gpos {
        builder.add_table(gpos).unwrap();
    }
    builder.build()
}

/// Point the lookup list entry `index` of the font's GPOS past the end of
/// the table.
fn break_lookup_offset(data: &mut [u8], index: usize) {
    let gpos_start = {
        let font = read_fonts::FontRef::new(data).unwrap();
        let record = font
            .table_directory
            .table_records()
            .iter()
            .find(|record| record.tag() == Tag::new(b"GPOS"))
            .unwrap();
        record.offset() as usize
    };
    let lookup_list_offset = u16::from_be_bytes([data[gpos_start + 8], data[gpos_start + 9]]);
    let entry = gpos_start + lookup_list_offset as usize + 2 + 2 * index;
    data[entry..entry + 2].copy_from_slice(&0xFFFFu16.to_be_bytes());
}
fn ids(pairs: &[(u16, u16, i32)]) -> Vec<KernPair<GlyphId16>> {
    pairs.iter().map(|&(l, r, v)| KernPair::new(gid(l), gid(r), v)).collect()
}

fn names(pairs: &[(&str, &str, i32)]) -> Vec<KernPair<String>> {
    pairs.iter().map(|&(l, r, v)| KernPair::new(l.to_string(), r.to_string(), v)).collect()
}

#[test]
fn test_font_without_gpos() {
    let data = make_test_font(None);
    let font = Font::new(&data).unwrap();

    assert!(matches!(font.kerning(), Err(Error::NoGposTable)));
    assert!(matches!(flatten_kerning(&data), Err(Error::NoGposTable)));
}

#[test]
fn test_gpos_without_kern_feature() {
    let table = gpos(vec![(MARK, vec![0])], vec![pair_glyphs(&[(A, &[(V, -80)])])]);
    let data = make_test_font(Some(&table));

    assert!(matches!(flatten_kerning(&data), Err(Error::NoKernFeature)));
}

#[test]
fn test_unparseable_data() {
    assert!(matches!(Font::new(b"not a font"), Err(Error::Parse(_))));
    assert!(matches!(flatten_kerning(&[]), Err(Error::Parse(_))));
}

#[test]
fn test_format1_by_glyph_id() {
    let table = gpos(
        vec![(KERN, vec![0])],
        vec![pair_glyphs(&[(A, &[(V, -80), (O, 0)]), (T, &[(O, -40), (LOWER_A, -35)])])],
    );
    let data = make_test_font(Some(&table));
    let font = Font::new(&data).unwrap();

    assert_eq!(
        font.kerning().unwrap().into_vec(),
        ids(&[(A, V, -80), (A, O, 0), (T, O, -40), (T, LOWER_A, -35)])
    );
}

#[test]
fn test_format2_by_glyph_name() {
    let table = gpos(
        vec![(KERN, vec![0])],
        vec![pair_classes(
            &[(A, 1), (T, 2)],
            &[(V, 1), (LOWER_A, 2), (O, 2)],
            &[&[0, 0, 0], &[0, -80, 0], &[0, -30, -50]],
        )],
    );
    let data = make_test_font(Some(&table));

    assert_eq!(
        flatten_kerning(&data).unwrap().into_vec(),
        names(&[("A", "V", -80), ("T", "V", -30), ("T", "a", -50), ("T", "o", -50)])
    );
}

#[test]
fn test_non_pair_lookup_in_kern_is_ignored() {
    let table = gpos(
        vec![(KERN, vec![0, 1])],
        vec![single_lookup(A, 20), pair_glyphs(&[(T, &[(E, -25)])])],
    );
    let data = make_test_font(Some(&table));

    assert_eq!(flatten_kerning(&data).unwrap().into_vec(), names(&[("T", "e", -25)]));
}

#[test]
fn test_only_unreferenced_lookups_yield_empty_table() {
    let table = gpos(
        vec![(KERN, vec![1]), (MARK, vec![0])],
        vec![pair_glyphs(&[(A, &[(V, -80)])]), single_lookup(A, 20)],
    );
    let data = make_test_font(Some(&table));

    assert!(flatten_kerning(&data).unwrap().is_empty());
}

#[test]
fn test_dedup_across_lookups_and_formats() {
    let table = gpos(
        vec![(KERN, vec![1, 0])],
        vec![
            pair_classes(&[(A, 1)], &[(V, 1), (O, 1)], &[&[0, 0], &[0, -60]]),
            pair_glyphs(&[(A, &[(V, -60), (V, -70)])]),
        ],
    );
    let data = make_test_font(Some(&table));

    assert_eq!(
        flatten_kerning(&data).unwrap().into_vec(),
        names(&[("A", "V", -60), ("A", "V", -70), ("A", "o", -60)])
    );
}

#[test]
fn test_unnamed_glyph_falls_back_to_gid() {
    let table = gpos(vec![(KERN, vec![0])], vec![pair_glyphs(&[(A, &[(UNNAMED, 15)])])]);
    let data = make_test_font(Some(&table));

    assert_eq!(flatten_kerning(&data).unwrap().into_vec(), names(&[("A", "gid7", 15)]));
}

#[test]
fn test_decomposed_kerning() {
    let table = gpos(
        vec![(KERN, vec![0])],
        vec![pair_glyphs(&[(A, &[(V, -80), (O, -20)]), (T, &[(O, -40)])])],
    );
    let data = make_test_font(Some(&table));
    let font = Font::new(&data).unwrap();

    let by_gid = HashMap::from([(gid(A), 'a'), (gid(T), 't'), (gid(O), 'o')]);
    assert_eq!(
        font.decomposed_kerning(&by_gid).unwrap().into_vec(),
        vec![KernPair::new('a', 'o', -20), KernPair::new('t', 'o', -40)]
    );

    let by_name = HashMap::from([("A".to_string(), 'x'), ("V".to_string(), 'y')]);
    assert_eq!(
        flatten_kerning_with(&data, &by_name).unwrap().into_vec(),
        vec![KernPair::new('x', 'y', -80)]
    );
}

#[test]
fn test_kerning_source_reads_features_and_lookup_types() {
    let table = gpos(
        vec![(KERN, vec![1, 0]), (MARK, vec![2])],
        vec![
            pair_glyphs(&[(A, &[(V, -80)])]),
            pair_classes(&[(T, 1)], &[(O, 1)], &[&[0, 0], &[0, -40]]),
            single_lookup(NOTDEF, 0),
        ],
    );
    let data = make_test_font(Some(&table));
    let source = Font::new(&data).unwrap().kerning_source().unwrap();

    assert_eq!(source.features.len(), 2);
    assert_eq!(source.features[0].tag, KERN);
    assert_eq!(source.features[0].lookup_indices, vec![1, 0]);
    let types: Vec<_> = source.lookups.iter().map(|l| l.lookup_type).collect();
    assert_eq!(types, vec![2, 2, 1]);
    assert_eq!(source.lookups[0].subtables[0].format(), 1);
    assert_eq!(source.lookups[1].subtables[0].format(), 2);
    assert!(source.lookups[2].subtables.is_empty());
}

#[test]
fn test_stored_class_zero_is_not_expanded() {
    // Format 1 class arrays store T with class 0 between A and V.
    let subtable = PairPos::Format2(PairPosFormat2::new(
        CoverageTable::format_1(vec![gid(A), gid(T), gid(V)]),
        ClassDef::Format1(ClassDefFormat1 {
            start_glyph_id: gid(A),
            class_value_array: vec![1, 0, 1],
        }),
        ClassDef::Format1(ClassDefFormat1 { start_glyph_id: gid(E), class_value_array: vec![1] }),
        [[0, -50], [0, -20]]
            .iter()
            .map(|row| {
                Class1Record::new(
                    row.iter().map(|&v| Class2Record::new(kern(v), ValueRecord::new())).collect(),
                )
            })
            .collect(),
    ));
    let table = gpos(vec![(KERN, vec![0])], vec![pair_lookup(vec![subtable])]);
    let data = make_test_font(Some(&table));
    let font = Font::new(&data).unwrap();

    assert_eq!(font.kerning().unwrap().into_vec(), ids(&[(A, E, -20), (V, E, -20)]));

    let source = font.kerning_source().unwrap();
    let Subtable::PairClasses(classes) = &source.lookups[0].subtables[0] else {
        panic!("expected a class pair subtable");
    };
    assert_eq!(classes.class_def1, vec![(gid(A), 1), (gid(V), 1)]);
    assert_eq!(classes.class_def2, vec![(gid(E), 1)]);
}

#[test]
fn test_unreadable_lookup_outside_kern_is_skipped() {
    let table = gpos(
        vec![(KERN, vec![0]), (MARK, vec![1])],
        vec![pair_glyphs(&[(A, &[(V, -80)])]), single_lookup(A, 20)],
    );
    let mut data = make_test_font(Some(&table));
    break_lookup_offset(&mut data, 1);
    let font = Font::new(&data).unwrap();

    assert_eq!(font.kerning().unwrap().into_vec(), ids(&[(A, V, -80)]));
    let source = font.kerning_source().unwrap();
    assert_eq!(source.lookups.len(), 2);
    assert!(source.lookups[1].subtables.is_empty());
}

#[test]
fn test_unreadable_kern_lookup_contributes_nothing() {
    let table = gpos(
        vec![(KERN, vec![0, 1])],
        vec![pair_glyphs(&[(A, &[(V, -80)])]), pair_glyphs(&[(T, &[(O, -40)])])],
    );
    let mut data = make_test_font(Some(&table));
    break_lookup_offset(&mut data, 0);

    assert_eq!(flatten_kerning(&data).unwrap().into_vec(), names(&[("T", "o", -40)]));
}
