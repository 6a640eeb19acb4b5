//! Field descriptors: which attributes are read from each table, and how.
//!
//! Each descriptor pairs the attribute's OpenType field name with a reader.
//! A reader returns `None` when the field does not exist in the table's
//! version (for example `sCapHeight` in OS/2 version 1).

use read_fonts::{
    tables::{gasp::Gasp, head::Head, hhea::Hhea, os2::Os2},
    types::MajorMinor,
};

use crate::value::AttribValue;

pub type Os2Field = (&'static str, fn(&Os2<'_>) -> Option<AttribValue>);
pub type HheaField = (&'static str, fn(&Hhea<'_>) -> Option<AttribValue>);
pub type GaspField = (&'static str, fn(&Gasp<'_>) -> Option<AttribValue>);
pub type HeadField = (&'static str, fn(&Head<'_>) -> Option<AttribValue>);

pub const OS2_FIELDS: &[Os2Field] = &[
    ("fsSelection", |t| AttribValue::int(t.fs_selection().bits())),
    ("fsType", |t| AttribValue::int(t.fs_type())),
    ("panose", |t| AttribValue::panose(t.panose_10())),
    ("sCapHeight", |t| t.s_cap_height().and_then(AttribValue::int)),
    ("sFamilyClass", |t| AttribValue::int(t.s_family_class())),
    ("sTypoAscender", |t| AttribValue::int(t.s_typo_ascender())),
    ("sTypoDescender", |t| AttribValue::int(t.s_typo_descender())),
    ("sTypoLineGap", |t| AttribValue::int(t.s_typo_line_gap())),
    ("sxHeight", |t| t.sx_height().and_then(AttribValue::int)),
    ("ulCodePageRange1", |t| t.ul_code_page_range_1().and_then(AttribValue::int)),
    ("ulCodePageRange2", |t| t.ul_code_page_range_2().and_then(AttribValue::int)),
    ("ulUnicodeRange1", |t| AttribValue::int(t.ul_unicode_range_1())),
    ("ulUnicodeRange2", |t| AttribValue::int(t.ul_unicode_range_2())),
    ("ulUnicodeRange3", |t| AttribValue::int(t.ul_unicode_range_3())),
    ("ulUnicodeRange4", |t| AttribValue::int(t.ul_unicode_range_4())),
    ("usBreakChar", |t| t.us_break_char().and_then(AttribValue::int)),
    ("usDefaultChar", |t| t.us_default_char().and_then(AttribValue::int)),
    ("usFirstCharIndex", |t| AttribValue::int(t.us_first_char_index())),
    ("usLastCharIndex", |t| AttribValue::int(t.us_last_char_index())),
    ("usMaxContext", |t| t.us_max_context().and_then(AttribValue::int)),
    ("usWeightClass", |t| AttribValue::int(t.us_weight_class())),
    ("usWidthClass", |t| AttribValue::int(t.us_width_class())),
    ("usWinAscent", |t| AttribValue::int(t.us_win_ascent())),
    ("usWinDescent", |t| AttribValue::int(t.us_win_descent())),
    ("version", |t| AttribValue::int(t.version())),
    ("yStrikeoutPosition", |t| AttribValue::int(t.y_strikeout_position())),
    ("yStrikeoutSize", |t| AttribValue::int(t.y_strikeout_size())),
    ("ySubscriptXOffset", |t| AttribValue::int(t.y_subscript_x_offset())),
    ("ySubscriptXSize", |t| AttribValue::int(t.y_subscript_x_size())),
    ("ySubscriptYOffset", |t| AttribValue::int(t.y_subscript_y_offset())),
    ("ySubscriptYSize", |t| AttribValue::int(t.y_subscript_y_size())),
    ("ySuperscriptXOffset", |t| AttribValue::int(t.y_superscript_x_offset())),
    ("ySuperscriptXSize", |t| AttribValue::int(t.y_superscript_x_size())),
    ("ySuperscriptYOffset", |t| AttribValue::int(t.y_superscript_y_offset())),
    ("ySuperscriptYSize", |t| AttribValue::int(t.y_superscript_y_size())),
];

pub const HHEA_FIELDS: &[HheaField] = &[
    ("ascent", |t| AttribValue::int(t.ascender().to_i16())),
    ("caretOffset", |t| AttribValue::int(t.caret_offset())),
    ("caretSlopeRise", |t| AttribValue::int(t.caret_slope_rise())),
    ("caretSlopeRun", |t| AttribValue::int(t.caret_slope_run())),
    ("descent", |t| AttribValue::int(t.descender().to_i16())),
    ("lineGap", |t| AttribValue::int(t.line_gap().to_i16())),
    ("tableVersion", |t| packed_version(t.version())),
];

pub const GASP_FIELDS: &[GaspField] = &[
    ("gaspRange", |t| {
        let ranges = t
            .gasp_ranges()
            .iter()
            .map(|r| (r.range_max_ppem(), r.range_gasp_behavior().bits()))
            .collect();
        Some(AttribValue::Ranges(ranges))
    }),
    ("version", |t| AttribValue::int(t.version())),
];

pub const HEAD_FIELDS: &[HeadField] = &[
    ("fontRevision", |t| Some(AttribValue::Float(t.font_revision().to_f64()))),
    ("macStyle", |t| AttribValue::int(t.mac_style().bits())),
    ("modified", |t| AttribValue::mac_timestamp(t.modified().as_secs())),
    ("tableVersion", |t| packed_version(t.version())),
    ("unitsPerEm", |t| AttribValue::int(t.units_per_em())),
    ("xMax", |t| AttribValue::int(t.x_max())),
    ("xMin", |t| AttribValue::int(t.x_min())),
    ("yMax", |t| AttribValue::int(t.y_max())),
    ("yMin", |t| AttribValue::int(t.y_min())),
];

/// A major/minor version as its 32-bit on-disk value (`0x00010000` for 1.0).
fn packed_version(version: MajorMinor) -> Option<AttribValue> {
    AttribValue::int((u32::from(version.major) << 16) | u32::from(version.minor))
}
