//! Summary statistics over one numeric column.

use serde::Serialize;

use blox_table::{parse_number, Table};

use crate::column::ColumnRef;

/// Count, sum, min, max and mean of the numeric cells in a column.
///
/// Cells that do not parse as numbers are left out. A column with no
/// numeric cells has every field at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    /// Header of the summarized column.
    pub column: String,
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl ColumnStats {
    /// Folds numeric values into statistics.
    pub fn from_values<I>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return ColumnStats {
                column: column.into(),
                count: 0,
                sum: 0.0,
                min: 0.0,
                max: 0.0,
                avg: 0.0,
            };
        }

        ColumnStats {
            column: column.into(),
            count,
            sum,
            min,
            max,
            avg: sum / count as f64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Computes statistics for the referenced column.
///
/// Returns `None` if the column does not resolve.
pub fn stats(table: &Table, column: &ColumnRef) -> Option<ColumnStats> {
    let index = column.resolve(table.headers())?;
    let header = table.headers()[index].clone();
    Some(ColumnStats::from_values(
        header,
        table.column(index).filter_map(parse_number),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &str, cells: &[&str]) -> Table {
        Table::new(
            vec![header.to_string()],
            cells.iter().map(|c| vec![c.to_string()]).collect(),
        )
    }

    #[test]
    fn stats_over_integers() {
        let stats = stats(&table("Value", &["10", "20", "30"]), &ColumnRef::name("value")).unwrap();
        assert_eq!(stats.column, "Value");
        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, 60.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.avg, 20.0);
    }

    #[test]
    fn non_numeric_cells_are_skipped() {
        let stats = stats(&table("Size", &["1K", "-", "2K"]), &ColumnRef::index(0)).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 3072.0);
    }

    #[test]
    fn no_numeric_cells_gives_zeroes() {
        let stats = stats(&table("Name", &["a", "b"]), &ColumnRef::index(0)).unwrap();
        assert!(stats.is_empty());
        assert_eq!(stats, ColumnStats::from_values("Name", []));
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.avg, 0.0);
    }

    #[test]
    fn unknown_column_is_none() {
        assert!(stats(&table("Value", &["1"]), &ColumnRef::name("x")).is_none());
    }
}
