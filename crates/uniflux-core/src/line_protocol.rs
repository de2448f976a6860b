// ── InfluxDB line protocol ──
//
// `measurement,tag=v,... field=v,... [timestamp]`
//
// Tags come out in key order (the map is ordered). Empty tag values are
// skipped because the protocol has no way to write them. Non-finite floats
// are skipped for the same reason. The protocol is newline-delimited, so
// CR and LF inside names and values become spaces.

use crate::error::EncodeError;
use crate::point::{FieldValue, Point};

/// Render one point. `timestamp` is in nanoseconds since the epoch; `None`
/// leaves it to the server.
pub fn encode(point: &Point, timestamp: Option<i64>) -> Result<String, EncodeError> {
    let fields: Vec<String> = point
        .fields
        .iter()
        .filter_map(|(key, value)| {
            encode_value(value).map(|v| format!("{}={v}", escape_key(key)))
        })
        .collect();

    if fields.is_empty() {
        return Err(EncodeError::NoFields {
            table: point.table.clone(),
        });
    }

    let mut line = escape_measurement(&point.table);
    for (key, value) in point.tags.iter().filter(|(_, v)| !v.is_empty()) {
        line.push(',');
        line.push_str(&escape_key(key));
        line.push('=');
        line.push_str(&escape_key(value));
    }
    line.push(' ');
    line.push_str(&fields.join(","));
    if let Some(ts) = timestamp {
        line.push(' ');
        line.push_str(&ts.to_string());
    }
    Ok(line)
}

/// Render a batch, one line per point, newline-terminated.
pub fn encode_all<'a>(
    points: impl IntoIterator<Item = &'a Point>,
    timestamp: Option<i64>,
) -> Result<String, EncodeError> {
    let mut out = String::new();
    for point in points {
        out.push_str(&encode(point, timestamp)?);
        out.push('\n');
    }
    Ok(out)
}

fn encode_value(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Int(i) => Some(format!("{i}i")),
        FieldValue::Float(f) if f.is_finite() => Some(format!("{f}")),
        FieldValue::Float(_) => None,
        FieldValue::Bool(b) => Some(b.to_string()),
        FieldValue::Str(s) => Some(format!(
            "\"{}\"",
            single_line(s).replace('\\', "\\\\").replace('"', "\\\"")
        )),
    }
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

fn escape_measurement(s: &str) -> String {
    single_line(s).replace(',', "\\,").replace(' ', "\\ ")
}

/// Tag keys, tag values and field keys share one escaping rule.
fn escape_key(s: &str) -> String {
    single_line(s)
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}
