//! Attribute values.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, NaiveDateTime};

/// Seconds between 1904-01-01 (the OpenType epoch) and 1970-01-01.
const MAC_EPOCH_OFFSET: i64 = 2_082_844_800;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttribValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// `(upper ppem, behavior flags)` pairs, in table order.
    Ranges(Vec<(u16, u16)>),
    Timestamp(NaiveDateTime),
}

impl AttribValue {
    pub fn int(value: impl Into<i64>) -> Option<Self> {
        Some(Self::Int(value.into()))
    }

    /// A PANOSE classification rendered as ten dash-separated digits.
    pub fn panose(digits: &[u8]) -> Option<Self> {
        let text = digits.iter().map(u8::to_string).collect::<Vec<_>>().join("-");
        Some(Self::Text(text))
    }

    /// A timestamp in seconds since 1904-01-01 UTC.
    ///
    /// Returns `None` when the moment cannot be represented.
    pub fn mac_timestamp(secs: i64) -> Option<Self> {
        let dt = DateTime::from_timestamp(secs.checked_sub(MAC_EPOCH_OFFSET)?, 0)?;
        Some(Self::Timestamp(dt.naive_utc()))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for AttribValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Ranges(ranges) => {
                f.write_str("{")?;
                for (i, (ppem, behavior)) in ranges.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ppem}: {behavior}")?;
                }
                f.write_str("}")
            }
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
