//! Table attribute extraction.

use std::{
    fmt::{self, Display, Formatter},
    result,
};

use log::debug;
use read_fonts::{FontRead, FontRef, ReadError, TableProvider, TopLevelTable, tables::gasp};

use crate::{
    fields::{GASP_FIELDS, HEAD_FIELDS, HHEA_FIELDS, OS2_FIELDS},
    value::AttribValue,
};

/// The tables attributes are read from, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Os2,
    Hhea,
    Gasp,
    Head,
}

impl TableKind {
    pub const ALL: [Self; 4] = [Self::Os2, Self::Hhea, Self::Gasp, Self::Head];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Os2 => "OS/2",
            Self::Hhea => "hhea",
            Self::Gasp => "gasp",
            Self::Head => "head",
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One attribute of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Attrib {
    pub table: &'static str,
    pub attrib: &'static str,
    pub value: AttribValue,
}

impl Display for Attrib {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.table, self.attrib, self.value)
    }
}

/// A problem met while extracting attributes. Extraction always continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The field does not exist in this table's version, or its value
    /// cannot be represented.
    MissingAttribute { table: &'static str, attrib: &'static str },
    /// The table is present but could not be parsed.
    UnreadableTable { table: &'static str, reason: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { table, attrib } => {
                write!(f, "missing attrib {attrib} in {table}")
            }
            Self::UnreadableTable { table, reason } => {
                write!(f, "unreadable {table} table: {reason}")
            }
        }
    }
}

/// Attributes of a font, in table then field order, plus any warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableAttribs {
    pub attribs: Vec<Attrib>,
    pub warnings: Vec<Warning>,
}

impl TableAttribs {
    /// Read every known table of `font`. Absent tables are skipped silently.
    pub fn from_font(font: &FontRef) -> Self {
        let mut out = Self::default();
        for kind in TableKind::ALL {
            match kind {
                TableKind::Os2 => out.read_table(kind, font.os2(), OS2_FIELDS),
                TableKind::Hhea => out.read_table(kind, font.hhea(), HHEA_FIELDS),
                TableKind::Gasp => {
                    let table: result::Result<gasp::Gasp, _> =
                        font.expect_data_for_tag(gasp::Gasp::TAG).and_then(FontRead::read);
                    out.read_table(kind, table, GASP_FIELDS)
                }
                TableKind::Head => out.read_table(kind, font.head(), HEAD_FIELDS),
            }
        }
        out
    }

    fn read_table<T, F>(
        &mut self,
        kind: TableKind,
        table: result::Result<T, ReadError>,
        fields: &[(&'static str, F)],
    ) where
        F: Fn(&T) -> Option<AttribValue>,
    {
        let table = match table {
            Ok(table) => table,
            Err(ReadError::TableIsMissing(_)) => {
                debug!("no {kind} table");
                return;
            }
            Err(e) => {
                self.warnings
                    .push(Warning::UnreadableTable { table: kind.tag(), reason: e.to_string() });
                return;
            }
        };

        for &(attrib, ref read) in fields {
            match read(&table) {
                Some(value) => self.attribs.push(Attrib { table: kind.tag(), attrib, value }),
                None => {
                    self.warnings.push(Warning::MissingAttribute { table: kind.tag(), attrib })
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.attribs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attribs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attrib> {
        self.attribs.iter()
    }

    /// The value of `attrib` in `table`, if it was read.
    pub fn get(&self, table: &str, attrib: &str) -> Option<&AttribValue> {
        self.attribs.iter().find(|a| a.table == table && a.attrib == attrib).map(|a| &a.value)
    }
}

impl<'a> IntoIterator for &'a TableAttribs {
    type Item = &'a Attrib;
    type IntoIter = std::slice::Iter<'a, Attrib>;

    fn into_iter(self) -> Self::IntoIter {
        self.attribs.iter()
    }
}
