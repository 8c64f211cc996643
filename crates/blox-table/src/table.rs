//! The [`Table`] value threaded through every engine stage.
//!
//! A table owns its headers, its rows and the column types inferred once
//! after parsing. Stages never mutate a table; they build a new one with
//! [`Table::project`] or [`Table::with_rows`], which carry the existing
//! column types over instead of inferring them again.

use serde::Serialize;

use crate::infer::infer;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Whole numbers with an optional sign: `42`, `-7`.
    Integer,
    /// Numbers with one decimal point: `3.14`, `-0.5`.
    Float,
    /// Numbers with a size unit: `4.0K`, `12 MB`, `3GiB`.
    Filesize,
    /// Numbers followed by `%`: `95.5%`.
    Percentage,
    /// Anything else.
    #[default]
    Text,
}

impl ColumnType {
    /// Returns `true` for the types eligible for numeric comparison,
    /// numeric sort and statistics.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ColumnType::Text)
    }

    /// Returns the display name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Filesize => "filesize",
            ColumnType::Percentage => "percentage",
            ColumnType::Text => "text",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Headers, rows and per-column types of a detected table.
///
/// Every row has exactly as many cells as there are headers, and there is
/// exactly one column type per header. Constructors enforce both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_types: Vec<ColumnType>,
}

impl Table {
    /// Builds a table and infers its column types.
    ///
    /// Short rows are right-padded with empty cells; cells beyond the header
    /// count are dropped.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = normalize_rows(rows, headers.len());
        let column_types = infer(&headers, &rows);
        Table {
            headers,
            rows,
            column_types,
        }
    }

    /// Builds a table with known column types, skipping inference.
    ///
    /// Missing types default to [`ColumnType::Text`]; extra ones are dropped.
    pub fn with_types(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        mut column_types: Vec<ColumnType>,
    ) -> Self {
        column_types.resize(headers.len(), ColumnType::Text);
        let rows = normalize_rows(rows, headers.len());
        Table {
            headers,
            rows,
            column_types,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    /// Returns the type of the column at `index`.
    pub fn column_type(&self, index: usize) -> Option<ColumnType> {
        self.column_types.get(index).copied()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at the given row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Iterates over the cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).map(String::as_str))
    }

    /// Builds a new table holding the given columns in the given order.
    ///
    /// Indices may repeat. Out-of-range indices are skipped.
    pub fn project(&self, columns: &[usize]) -> Table {
        let columns: Vec<usize> = columns
            .iter()
            .copied()
            .filter(|&c| c < self.headers.len())
            .collect();

        let headers = columns.iter().map(|&c| self.headers[c].clone()).collect();
        let column_types = columns.iter().map(|&c| self.column_types[c]).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| columns.iter().map(|&c| row[c].clone()).collect())
            .collect();

        Table {
            headers,
            rows,
            column_types,
        }
    }

    /// Builds a new table with the same columns and the given rows.
    pub fn with_rows(&self, rows: Vec<Vec<String>>) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: normalize_rows(rows, self.headers.len()),
            column_types: self.column_types.clone(),
        }
    }
}

fn normalize_rows(rows: Vec<Vec<String>>, width: usize) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect()
}
