//! Output formatting: line protocol, JSON, YAML, table.
//!
//! Renders points in the format selected by `--output`. Line protocol goes
//! through `uniflux_core::line_protocol`, structured formats use serde, and
//! the table is a per-table point count built with `tabled`.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use uniflux_core::{Report, line_protocol};

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Tabled)]
struct TableCountRow {
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Points")]
    points: usize,
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render every point in a report.
///
/// `timestamp` (nanoseconds) only applies to line protocol.
pub fn render_points(
    format: OutputFormat,
    report: &Report,
    timestamp: Option<i64>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Line => {
            let body = line_protocol::encode_all(report.points(), timestamp)
                .map_err(uniflux_core::CoreError::from)?;
            Ok(body.trim_end_matches('\n').to_owned())
        }
        OutputFormat::Json => render_json(report.points(), false),
        OutputFormat::JsonCompact => render_json(report.points(), true),
        OutputFormat::Yaml => render_yaml(report.points()),
        OutputFormat::Table => {
            let rows: Vec<TableCountRow> = report
                .counts()
                .iter()
                .map(|(table, points)| TableCountRow {
                    table: table.clone(),
                    points: *points,
                })
                .collect();
            Ok(render_table(&rows))
        }
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// `line` and `table` both use `detail_fn`, since a single item has no
/// tabular or line-protocol shape of its own.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> Result<String, CliError>,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Line | OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uniflux_core::{Fields, FieldValue, Point, Sink, Tags};

    use super::*;

    fn report() -> Report {
        let mut report = Report::new();
        for table in ["usw", "usw_ports", "usw_ports"] {
            let mut fields = Fields::new();
            fields.insert("rx_bytes".into(), FieldValue::Float(10.0));
            let mut tags = Tags::new();
            tags.insert("name".into(), "core".into());
            report.send(Point::new(table, tags, fields));
        }
        report
    }

    #[test]
    fn line_output_has_one_line_per_point() {
        let out = render_points(OutputFormat::Line, &report(), Some(42)).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.lines().next(), Some("usw,name=core rx_bytes=10 42"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn json_compact_is_one_array() {
        let out = render_points(OutputFormat::JsonCompact, &report(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_counts_points() {
        let out = render_points(OutputFormat::Table, &report(), None).unwrap();
        assert!(out.contains("usw_ports"));
        assert!(out.contains("Points"));
    }

    #[test]
    fn yaml_lists_tables() {
        let out = render_points(OutputFormat::Yaml, &report(), None).unwrap();
        assert!(out.contains("table: usw_ports"));
    }
}
