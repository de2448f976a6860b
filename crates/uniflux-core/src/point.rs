// ── Point model ──
//
// The output unit of every builder: a table name, an indexed tag set and a
// field set. Both maps are ordered so emitted points (and their encodings)
// are identical across runs for the same input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use uniflux_api::{FlexBool, FlexInt};

/// Tag set: indexed string dimensions that identify a series.
pub type Tags = BTreeMap<String, String>;

/// Field set: the measured values carried by one point.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single field value.
///
/// Serializes untagged, so the JSON shape of a field set is a plain
/// `{ "key": 1.5, "other": "text" }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl FieldValue {
    /// Numeric view of the value, for integers and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<&FlexInt> for FieldValue {
    fn from(v: &FlexInt) -> Self {
        Self::Float(v.val())
    }
}

impl From<&FlexBool> for FieldValue {
    fn from(v: &FlexBool) -> Self {
        Self::Bool(v.val())
    }
}

/// One emitted measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub table: String,
    pub tags: Tags,
    pub fields: Fields,
}

impl Point {
    pub fn new(table: impl Into<String>, tags: Tags, fields: Fields) -> Self {
        Self {
            table: table.into(),
            tags,
            fields,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

/// Build a [`Fields`] map from `key => value` pairs, converting each value
/// through `FieldValue::from`.
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut fields = $crate::point::Fields::new();
        $( fields.insert(::std::string::String::from($key), $crate::point::FieldValue::from($value)); )*
        fields
    }};
}

/// Build a [`Tags`] map from `key => value` pairs.
macro_rules! tags {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut tags = $crate::point::Tags::new();
        $( tags.insert(::std::string::String::from($key), ::std::string::String::from($value)); )*
        tags
    }};
}

pub(crate) use fields;
pub(crate) use tags;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flex_values_convert_to_native_fields() {
        assert_eq!(FieldValue::from(&FlexInt::from(7_i64)), FieldValue::Float(7.0));
        assert_eq!(FieldValue::from(&FlexBool::new(true)), FieldValue::Bool(true));
    }

    #[test]
    fn macros_build_ordered_maps() {
        let tags = tags! { "name" => "gw", "mac" => &String::from("aa") };
        let fields = fields! { "b" => 2_i64, "a" => "x" };
        assert_eq!(tags.keys().collect::<Vec<_>>(), ["mac", "name"]);
        assert_eq!(fields.get("a"), Some(&FieldValue::Str("x".into())));
        assert_eq!(fields.get("b").and_then(FieldValue::as_f64), Some(2.0));
    }

    #[test]
    fn point_serializes_to_wire_shape() {
        let point = Point::new(
            "usg",
            tags! { "mac" => "aa:bb" },
            fields! { "cpu" => 1.5, "ip" => "10.0.0.1", "up" => true, "num" => 3_i64 },
        );
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "table": "usg",
                "tags": { "mac": "aa:bb" },
                "fields": { "cpu": 1.5, "ip": "10.0.0.1", "num": 3, "up": true }
            })
        );
    }
}
