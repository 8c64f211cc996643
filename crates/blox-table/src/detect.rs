//! Table detection over a fixed priority list of split strategies.
//!
//! Each [`SplitStrategy`] is tried in [`SplitStrategy::PRIORITY`] order and
//! the first one that splits the header line and at least one later line
//! into the same number of non-empty cells wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(" {2,}").expect("multi-space pattern is valid"));

/// Rule used to carve a line into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitStrategy {
    /// Split on every tab character.
    Tab,
    /// Split on every `|`, ignoring one leading and one trailing pipe.
    Pipe,
    /// Split on every comma.
    Comma,
    /// Split on runs of two or more spaces.
    MultiSpace,
    /// Split on any whitespace run.
    SingleSpace,
}

impl SplitStrategy {
    /// Order in which strategies are tried.
    pub const PRIORITY: [SplitStrategy; 5] = [
        SplitStrategy::Tab,
        SplitStrategy::Pipe,
        SplitStrategy::Comma,
        SplitStrategy::MultiSpace,
        SplitStrategy::SingleSpace,
    ];

    /// Splits a line into trimmed cells.
    pub fn split(self, line: &str) -> Vec<String> {
        let cells: Vec<&str> = match self {
            SplitStrategy::Tab => line.split('\t').collect(),
            SplitStrategy::Comma => line.split(',').collect(),
            SplitStrategy::Pipe => {
                let line = line.trim();
                let line = line.strip_prefix('|').unwrap_or(line);
                let line = line.strip_suffix('|').unwrap_or(line);
                line.split('|').collect()
            }
            SplitStrategy::MultiSpace => MULTI_SPACE.split(line.trim()).collect(),
            SplitStrategy::SingleSpace => line.split_whitespace().collect(),
        };
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Returns the column count if this strategy fits the given lines.
    ///
    /// The first line is the header. It must split into at least two
    /// non-empty cells, and at least one later line must split into the
    /// same number of non-empty cells.
    pub fn column_count(self, lines: &[&str]) -> Option<usize> {
        let (header, rest) = lines.split_first()?;
        let columns = self.clean_count(header).filter(|&n| n >= 2)?;

        rest.iter()
            .any(|line| self.clean_count(line) == Some(columns))
            .then_some(columns)
    }

    /// Number of cells in `line`, or `None` if any cell is empty.
    fn clean_count(self, line: &str) -> Option<usize> {
        let cells = self.split(line);
        cells
            .iter()
            .all(|c| !c.is_empty())
            .then_some(cells.len())
    }

    /// Returns the display name of this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            SplitStrategy::Tab => "tab",
            SplitStrategy::Pipe => "pipe",
            SplitStrategy::Comma => "comma",
            SplitStrategy::MultiSpace => "multi-space",
            SplitStrategy::SingleSpace => "single-space",
        }
    }
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of table detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The lines form a table split by `strategy` into `columns` columns.
    Table {
        strategy: SplitStrategy,
        columns: usize,
    },
    /// No strategy fits; the text is shown as-is.
    Text,
}

impl Detection {
    /// Returns `true` if a table was detected.
    pub fn is_table(&self) -> bool {
        matches!(self, Detection::Table { .. })
    }

    /// Returns the winning strategy, if any.
    pub fn strategy(&self) -> Option<SplitStrategy> {
        match self {
            Detection::Table { strategy, .. } => Some(*strategy),
            Detection::Text => None,
        }
    }
}

/// Returns the non-blank lines of `text`, in order.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Decides whether the given non-blank lines form a table.
///
/// Fewer than two lines never form a table.
pub fn detect(lines: &[&str]) -> Detection {
    if lines.len() < 2 {
        return Detection::Text;
    }

    for strategy in SplitStrategy::PRIORITY {
        if let Some(columns) = strategy.column_count(lines) {
            tracing::debug!(%strategy, columns, "table detected");
            return Detection::Table { strategy, columns };
        }
    }

    tracing::debug!(lines = lines.len(), "no split strategy fits");
    Detection::Text
}
