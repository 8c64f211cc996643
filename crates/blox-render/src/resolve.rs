//! Width resolution for table columns.
//!
//! Columns start at their natural width, the widest of header and cells.
//! When the table would not fit the terminal, data columns shrink in
//! proportion to their natural width. The index column, always first, keeps
//! its natural width.

use crate::util::display_width;

/// Resolved widths for all columns in a table, index column first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the total width of all columns (without decorations).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Full rendered line width, borders and padding included.
    pub fn line_width(&self) -> usize {
        self.total() + overhead(self.widths.len())
    }
}

/// Characters spent on borders and padding for `columns` columns: one
/// space each side of every cell, a separator between cells, and the two
/// outer borders.
pub fn overhead(columns: usize) -> usize {
    if columns == 0 {
        0
    } else {
        3 * columns + 1
    }
}

/// Natural width of each column over the header row and every body row.
pub fn natural_widths<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h.as_ref())).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell.as_ref()));
        }
    }

    widths
}

/// Fits natural widths into `total_width`.
///
/// The first column is the index and is never shrunk. Every other column
/// scales by the same factor and keeps at least one character. With very
/// many columns even one character each may not fit; the table is then
/// wider than requested rather than losing columns.
pub fn fit_widths(natural: &[usize], total_width: usize) -> ResolvedWidths {
    let natural_total: usize = natural.iter().sum();
    if natural_total + overhead(natural.len()) <= total_width {
        return ResolvedWidths {
            widths: natural.to_vec(),
        };
    }

    let Some((&index_width, data)) = natural.split_first() else {
        return ResolvedWidths { widths: vec![] };
    };

    let data_total: usize = data.iter().sum();
    let available = total_width
        .saturating_sub(overhead(natural.len()))
        .saturating_sub(index_width);

    let mut widths = Vec::with_capacity(natural.len());
    widths.push(index_width);
    widths.extend(data.iter().map(|&w| {
        if data_total == 0 {
            w.max(1)
        } else {
            (w * available / data_total).max(1)
        }
    }));

    // The one-character floor can push the sum past the budget; take the
    // difference back from the widest columns.
    let mut excess = widths[1..].iter().sum::<usize>().saturating_sub(available);
    while excess > 0 {
        let widest = (1..widths.len())
            .filter(|&i| widths[i] > 1)
            .max_by_key(|&i| widths[i]);
        let Some(i) = widest else { break };
        widths[i] -= 1;
        excess -= 1;
    }

    tracing::debug!(
        natural = natural_total,
        fitted = widths.iter().sum::<usize>(),
        total_width,
        "columns shrunk to fit"
    );
    ResolvedWidths { widths }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overhead_counts_borders() {
        assert_eq!(overhead(0), 0);
        assert_eq!(overhead(1), 4);
        assert_eq!(overhead(3), 10);
    }

    #[test]
    fn natural_widths_cover_header_and_cells() {
        let headers = vec!["#", "Name"];
        let rows = vec![vec!["0", "Alice"], vec!["1", "Bo"]];
        assert_eq!(natural_widths(&headers, &rows), [1, 5]);
    }

    #[test]
    fn fitting_tables_keep_natural_widths() {
        let fitted = fit_widths(&[1, 10, 10], 80);
        assert_eq!(fitted.widths, [1, 10, 10]);
        assert_eq!(fitted.line_width(), 31);
    }

    #[test]
    fn wide_tables_shrink_proportionally() {
        // overhead 10, index 2 → 28 columns for 40 + 20 of data
        let fitted = fit_widths(&[2, 40, 20], 40);
        assert_eq!(fitted.widths, [2, 18, 9]);
        assert!(fitted.line_width() <= 40);
    }

    #[test]
    fn index_is_never_shrunk() {
        let fitted = fit_widths(&[3, 100], 10);
        assert_eq!(fitted.widths, [3, 1]);
    }

    #[test]
    fn minimum_widths_are_paid_for_by_wide_columns() {
        // overhead 13, index 1 → 6 columns for 5 + 113 + 4 of data
        let fitted = fit_widths(&[1, 5, 113, 4], 20);
        assert_eq!(fitted.widths, [1, 1, 4, 1]);
        assert_eq!(fitted.line_width(), 20);
    }

    #[test]
    fn too_many_columns_overflow() {
        let fitted = fit_widths(&[1, 9, 9, 9, 9, 9, 9], 20);
        assert!(fitted.widths[1..].iter().all(|&w| w == 1));
    }

    #[test]
    fn empty_input() {
        assert!(fit_widths(&[], 80).widths.is_empty());
    }
}
