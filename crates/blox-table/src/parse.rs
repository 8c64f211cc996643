//! Building a [`Table`] from detected text.

use crate::detect::{content_lines, detect, Detection, SplitStrategy};
use crate::table::Table;

/// Result of running detection and parsing over captured output.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// A table, together with the strategy that produced it.
    Table(Table, SplitStrategy),
    /// Output that is not tabular, kept verbatim.
    Text(String),
}

impl Parsed {
    /// Returns the table, if one was detected.
    pub fn table(&self) -> Option<&Table> {
        match self {
            Parsed::Table(table, _) => Some(table),
            Parsed::Text(_) => None,
        }
    }
}

/// Splits non-blank lines into a table with the given strategy.
///
/// The first line becomes the headers and every later line a row. Rows are
/// padded or truncated to the header count, and column types are inferred.
pub fn parse(lines: &[&str], strategy: SplitStrategy) -> Table {
    let Some((header, body)) = lines.split_first() else {
        return Table::default();
    };

    let headers = strategy.split(header);
    let rows = body.iter().map(|line| strategy.split(line)).collect();
    Table::new(headers, rows)
}

/// Detects and parses `text` in one step.
///
/// Blank lines are dropped before detection. Text that does not form a table
/// is returned unchanged as [`Parsed::Text`].
pub fn parse_text(text: &str) -> Parsed {
    let lines = content_lines(text);
    match detect(&lines) {
        Detection::Table { strategy, .. } => {
            let table = parse(&lines, strategy);
            tracing::debug!(
                %strategy,
                columns = table.column_count(),
                rows = table.row_count(),
                "table parsed"
            );
            Parsed::Table(table, strategy)
        }
        Detection::Text => Parsed::Text(text.to_string()),
    }
}
