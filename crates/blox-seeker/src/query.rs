//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for the four table
//! stages and runs them in a fixed order:
//!
//! ```text
//! select → where → sort → limit
//! ```
//!
//! Each stage is also available as a free function over a [`Table`].

use blox_table::Table;

use crate::clause::Condition;
use crate::column::ColumnRef;
use crate::diagnostic::{Diagnostic, Stage};
use crate::error::Result;
use crate::ordering::{compare_values, Dir, SortBy};
use crate::value::Value;

/// A table query.
///
/// # Example
///
/// ```
/// use blox_seeker::Query;
/// use blox_table::parse_text;
///
/// let table = parse_text("Name\tAge\nAlice\t30\nBob\t25\nCarol\t35\n")
///     .table()
///     .cloned()
///     .unwrap();
///
/// let outcome = Query::new()
///     .filter_str("Age>27")
///     .unwrap()
///     .sort_desc("Age")
///     .limit(1)
///     .build()
///     .run(&table);
///
/// assert_eq!(outcome.table.rows(), [["Carol", "35"]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    select: Option<Vec<ColumnRef>>,
    filter: Option<Condition>,
    sort: Option<SortBy>,
    limit: Option<i64>,
}

/// The table left after a query, with any problems met along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub table: Table,
    pub diagnostics: Vec<Diagnostic>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query returns the table unchanged.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Stage builders
    // ========================================================================

    /// Keeps only the given columns, in the given order.
    pub fn select<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        self.select = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Keeps only rows matching the condition.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }

    /// Parses a condition and keeps only rows matching it.
    ///
    /// Returns an error if the condition is malformed.
    pub fn filter_str(self, condition: &str) -> Result<Self> {
        Ok(self.filter(Condition::parse(condition)?))
    }

    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sorts ascending by a column.
    pub fn sort_asc(self, column: impl Into<ColumnRef>) -> Self {
        self.sort_by(SortBy::asc(column))
    }

    /// Sorts ascending by a column, then reverses the rows.
    pub fn sort_desc(self, column: impl Into<ColumnRef>) -> Self {
        self.sort_by(SortBy::desc(column))
    }

    /// Keeps the first `n` rows. Zero or a negative `n` keeps none.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Finalizes the query.
    ///
    /// This is a no-op that exists for builder API readability.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn selected(&self) -> Option<&[ColumnRef]> {
        self.select.as_deref()
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.filter.as_ref()
    }

    pub fn sorting(&self) -> Option<&SortBy> {
        self.sort.as_ref()
    }

    pub fn limit_value(&self) -> Option<i64> {
        self.limit
    }

    /// Returns `true` if no stage is set.
    pub fn is_empty(&self) -> bool {
        self.select.is_none() && self.filter.is_none() && self.sort.is_none() && self.limit.is_none()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Runs every configured stage over `table`.
    pub fn run(&self, table: &Table) -> Outcome {
        let mut diagnostics = Vec::new();

        let mut current = match &self.select {
            Some(columns) => select(table, columns),
            None => table.clone(),
        };

        if let Some(condition) = &self.filter {
            let (filtered, diagnostic) = filter(&current, condition);
            current = filtered;
            diagnostics.extend(diagnostic);
        }

        if let Some(sort_by) = &self.sort {
            let (sorted, diagnostic) = sort(&current, sort_by);
            current = sorted;
            diagnostics.extend(diagnostic);
        }

        if let Some(n) = self.limit {
            current = limit(&current, n);
        }

        tracing::debug!(
            rows_in = table.row_count(),
            rows_out = current.row_count(),
            columns = current.column_count(),
            "query applied"
        );

        Outcome {
            table: current,
            diagnostics,
        }
    }
}

// ============================================================================
// Stages
// ============================================================================

/// Projects the table onto the referenced columns.
///
/// References that resolve to no column are dropped silently. Duplicates
/// are kept.
pub fn select(table: &Table, columns: &[ColumnRef]) -> Table {
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|column| column.resolve(table.headers()))
        .collect();
    table.project(&indices)
}

/// Keeps the rows whose cell in the condition's column matches.
///
/// An unknown column keeps no rows and reports a diagnostic.
pub fn filter(table: &Table, condition: &Condition) -> (Table, Option<Diagnostic>) {
    let Some(index) = condition.column.resolve(table.headers()) else {
        return (
            table.with_rows(Vec::new()),
            Some(Diagnostic::unknown_column(Stage::Where, &condition.column)),
        );
    };

    let column_type = table.column_type(index).unwrap_or_default();
    let rows = table
        .rows()
        .iter()
        .filter(|row| condition.matches(&row[index], column_type))
        .cloned()
        .collect();
    (table.with_rows(rows), None)
}

/// Sorts rows by one column.
///
/// Numeric columns sort by magnitude, with unparseable cells as zero. Text
/// sorts by plain string order. The sort is stable; [`Dir::Desc`] reverses
/// the result. An unknown column leaves the table as is and reports a
/// diagnostic.
pub fn sort(table: &Table, sort_by: &SortBy) -> (Table, Option<Diagnostic>) {
    let Some(index) = sort_by.column.resolve(table.headers()) else {
        return (
            table.clone(),
            Some(Diagnostic::unknown_column(Stage::Sort, &sort_by.column)),
        );
    };

    let column_type = table.column_type(index).unwrap_or_default();
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| {
        compare_values(
            &Value::sort_key(&a[index], column_type),
            &Value::sort_key(&b[index], column_type),
        )
    });
    if sort_by.dir == Dir::Desc {
        rows.reverse();
    }
    (table.with_rows(rows), None)
}

/// Keeps the first `n` rows. Zero or a negative `n` keeps none.
pub fn limit(table: &Table, n: i64) -> Table {
    let keep = usize::try_from(n).unwrap_or(0);
    let rows = table.rows().iter().take(keep).cloned().collect();
    table.with_rows(rows)
}
