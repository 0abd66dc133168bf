use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Serialize, Serializer};
use time::PrimitiveDateTime;

use crate::utils::time::format_timestamp;

/// Spellings read as a missing value, matching common data-frame readers.
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[must_use]
pub fn is_null_marker(raw: &str) -> bool {
    NULL_MARKERS.contains(&raw)
}

/// Type a column settles on after inspecting every non-null cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
    Timestamp,
}

impl ColumnKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
        }
    }

    /// Narrowest kind able to hold every value in `cells`.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = Self::Integer;
        for raw in cells {
            if is_null_marker(raw) {
                continue;
            }
            let trimmed = raw.trim();
            match kind {
                Self::Integer if trimmed.parse::<i64>().is_ok() => {}
                Self::Integer | Self::Float if trimmed.parse::<f64>().is_ok() => {
                    kind = Self::Float;
                }
                _ => return Self::Text,
            }
        }
        kind
    }
}

/// One typed value of the ticket table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(PrimitiveDateTime),
}

impl CellValue {
    /// Reads `raw` under the column's settled kind.
    #[must_use]
    pub fn parse(raw: &str, kind: ColumnKind) -> Self {
        if is_null_marker(raw) {
            return Self::Null;
        }
        match kind {
            ColumnKind::Integer => raw.trim().parse().map_or(Self::Null, Self::Integer),
            ColumnKind::Float => parse_finite_float(raw.trim()).map_or(Self::Null, Self::Float),
            ColumnKind::Text => Self::Text(raw.to_string()),
            ColumnKind::Timestamp => {
                crate::utils::time::parse_timestamp(raw).map_or(Self::Null, Self::Timestamp)
            }
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<PrimitiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Timestamp(value) => serializer.serialize_str(&format_timestamp(*value)),
        }
    }
}

impl JsonSchema for CellValue {
    fn schema_name() -> Cow<'static, str> {
        "CellValue".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Positional ticket value; timestamps render as `YYYY-MM-DD HH:MM:SS`.",
            "type": ["integer", "number", "string", "null"]
        })
    }
}

/// Non-finite spellings (`inf`, `-infinity`) keep the column numeric but read
/// as null, so they drop out of averages.
fn parse_finite_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
