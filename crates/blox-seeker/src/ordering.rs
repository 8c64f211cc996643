//! Sort keys for the `sort` stage.
//!
//! Provides [`Dir`] for sort direction and [`SortBy`] for a column plus
//! direction.

use std::cmp::Ordering;

use crate::column::ColumnRef;
use crate::value::Value;

/// Sort direction.
///
/// `Desc` is a reversal of the finished ascending sort, not a descending
/// comparator: rows with equal keys come out in reverse input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Ascending order, then reversed.
    Desc,
}

impl Dir {
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// The column to sort by.
    pub column: ColumnRef,
    /// The sort direction.
    pub dir: Dir,
}

impl SortBy {
    /// Creates an ascending sort on the given column.
    pub fn asc(column: impl Into<ColumnRef>) -> Self {
        SortBy::new(column, Dir::Asc)
    }

    /// Creates a reversed sort on the given column.
    pub fn desc(column: impl Into<ColumnRef>) -> Self {
        SortBy::new(column, Dir::Desc)
    }

    pub fn new(column: impl Into<ColumnRef>, dir: Dir) -> Self {
        SortBy {
            column: column.into(),
            dir,
        }
    }
}

/// Compares two sort keys.
///
/// Numbers use a total order so that every pair compares. A number sorts
/// before text, which never happens within one column.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Number(_), Value::Text(_)) => Ordering::Less,
        (Value::Text(_), Value::Number(_)) => Ordering::Greater,
    }
}
