// ── Tolerant scalar wrappers ──
//
// The controller is inconsistent about how it encodes numbers and booleans
// across firmware versions: `12`, `"12"`, `12.5`, `"true"`, `1` all show up
// for the same field. These wrappers accept every shape, keep the original
// text for use as a tag value, and never fail on a bad scalar.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Any JSON scalar, as the controller might send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

// ── FlexInt ─────────────────────────────────────────────────────────

/// A number that may arrive as a JSON number or a numeric string.
///
/// `val()` is the parsed value (zero when missing, null, or unparseable);
/// `txt()` is the text as received, or the number rendered when it arrived
/// as a JSON number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexInt {
    val: f64,
    txt: String,
}

impl FlexInt {
    pub fn new(val: f64) -> Self {
        Self {
            val,
            txt: val.to_string(),
        }
    }

    fn from_text(raw: &str) -> Self {
        let val = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self {
            val,
            txt: raw.to_owned(),
        }
    }

    pub fn val(&self) -> f64 {
        self.val
    }

    pub fn txt(&self) -> &str {
        &self.txt
    }
}

impl From<f64> for FlexInt {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

impl From<i64> for FlexInt {
    fn from(val: i64) -> Self {
        #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
        Self {
            val: val as f64,
            txt: val.to_string(),
        }
    }
}

impl From<&str> for FlexInt {
    fn from(raw: &str) -> Self {
        Self::from_text(raw)
    }
}

impl fmt::Display for FlexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.txt)
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawScalar>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawScalar::Number(n)) => Self::new(n),
            Some(RawScalar::Text(s)) => Self::from_text(&s),
            Some(RawScalar::Bool(b)) => Self {
                val: if b { 1.0 } else { 0.0 },
                txt: b.to_string(),
            },
        })
    }
}

impl Serialize for FlexInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.val)
    }
}

// ── FlexBool ────────────────────────────────────────────────────────

/// A boolean that may arrive as a JSON bool, `"true"`/`"false"`, or `1`/`0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexBool {
    val: bool,
    txt: String,
}

impl FlexBool {
    pub fn new(val: bool) -> Self {
        Self {
            val,
            txt: val.to_string(),
        }
    }

    fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        let val = trimmed.eq_ignore_ascii_case("true")
            || trimmed.parse::<f64>().is_ok_and(|n| n != 0.0);
        Self {
            val,
            txt: raw.to_owned(),
        }
    }

    pub fn val(&self) -> bool {
        self.val
    }

    pub fn txt(&self) -> &str {
        &self.txt
    }
}

impl From<bool> for FlexBool {
    fn from(val: bool) -> Self {
        Self::new(val)
    }
}

impl fmt::Display for FlexBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.txt)
    }
}

impl<'de> Deserialize<'de> for FlexBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawScalar>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawScalar::Bool(b)) => Self::new(b),
            Some(RawScalar::Number(n)) => Self {
                val: n != 0.0,
                txt: n.to_string(),
            },
            Some(RawScalar::Text(s)) => Self::from_text(&s),
        })
    }
}

impl Serialize for FlexBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.val)
    }
}

// ── Nullable strings ────────────────────────────────────────────────

/// `deserialize_with` helper for text fields: JSON `null` reads as empty.
pub fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
