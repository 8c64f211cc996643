//! Output mode control.
//!
//! [`OutputMode`] decides how a table leaves the process: box-drawn with or
//! without color, or serialized as JSON or CSV. Structured modes write the
//! table cells only; the index column exists at render time alone.

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use blox_seeker::ColumnStats;
use blox_table::{ColumnType, Table};

/// Controls how a detected table is written.
///
/// This is the user-facing enum for the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Box table with colors
    Term,
    /// Box table without colors
    Text,
    /// `{"headers", "types", "rows", "stats"}` document
    Json,
    /// Header row and body rows as CSV
    Csv,
}

impl OutputMode {
    /// Parses a mode name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    /// Resolves Auto to Term or Text. Other modes are returned unchanged.
    pub fn resolve_auto(self, stdout_is_tty: bool) -> OutputMode {
        match self {
            OutputMode::Auto if stdout_is_tty => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
            OutputMode::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

#[derive(Serialize)]
struct Document<'a> {
    headers: &'a [String],
    types: &'a [ColumnType],
    rows: &'a [Vec<String>],
    stats: Option<&'a ColumnStats>,
}

/// Serializes a table and its optional statistics as pretty JSON.
pub fn to_json(table: &Table, stats: Option<&ColumnStats>) -> Result<String, SerializeError> {
    let document = Document {
        headers: table.headers(),
        types: table.column_types(),
        rows: table.rows(),
        stats,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Serializes a table as CSV, header row first.
///
/// A table without columns yields an empty string.
pub fn to_csv(table: &Table) -> Result<String, SerializeError> {
    if table.column_count() == 0 {
        return Ok(String::new());
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(table.headers())
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    for row in table.rows() {
        wtr.write_record(row)
            .map_err(|e| SerializeError::Csv(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blox_table::parse_text;

    fn sample() -> Table {
        parse_text("Name\tAge\nAlice\t30\nBob, Jr\t25\n")
            .table()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(OutputMode::parse("JSON"), Some(OutputMode::Json));
        assert_eq!(OutputMode::parse(" csv "), Some(OutputMode::Csv));
        assert_eq!(OutputMode::parse("yaml"), None);
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(OutputMode::Auto.resolve_auto(true), OutputMode::Term);
        assert_eq!(OutputMode::Auto.resolve_auto(false), OutputMode::Text);
        assert_eq!(OutputMode::Json.resolve_auto(true), OutputMode::Json);
        assert_eq!(OutputMode::Text.resolve_auto(true), OutputMode::Text);
    }

    #[test]
    fn test_json_document_shape() {
        let json = to_json(&sample(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["headers"], serde_json::json!(["Name", "Age"]));
        assert_eq!(value["types"], serde_json::json!(["text", "integer"]));
        assert_eq!(value["rows"][1], serde_json::json!(["Bob, Jr", "25"]));
        assert!(value["stats"].is_null());
    }

    #[test]
    fn test_json_includes_stats() {
        let stats = ColumnStats::from_values("Age", [30.0, 25.0]);
        let json = to_json(&sample(), Some(&stats)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stats"]["column"], "Age");
        assert_eq!(value["stats"]["count"], 2);
        assert_eq!(value["stats"]["sum"], 55.0);
    }

    #[test]
    fn test_csv_quotes_and_skips_index() {
        let csv = to_csv(&sample()).unwrap();
        assert_eq!(csv, "Name,Age\nAlice,30\n\"Bob, Jr\",25\n");
    }

    #[test]
    fn test_csv_without_columns() {
        assert_eq!(to_csv(&Table::default()).unwrap(), "");
    }
}
