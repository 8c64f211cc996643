//! The box-drawn table renderer.
//!
//! ```text
//! ╭───┬───────┬─────╮
//! │ # │ Name  │ Age │
//! ├───┼───────┼─────┤
//! │ 0 │ Alice │  30 │
//! │ 1 │ Bob   │  25 │
//! ╰───┴───────┴─────╯
//! ```

use blox_table::Table;

use crate::border::{BorderChars, BorderStyle, LineType};
use crate::palette::Palette;
use crate::resolve::{fit_widths, natural_widths};
use crate::util::{pad_center, pad_left, pad_right, truncate_end};

/// Header of the synthetic index column.
pub const INDEX_HEADER: &str = "#";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Renders a [`Table`] as a bordered, width-fitted block of text.
#[derive(Clone, Debug)]
pub struct TableRenderer {
    palette: Palette,
    border: BorderStyle,
    width: usize,
}

impl TableRenderer {
    /// Create a renderer for the given total line width.
    pub fn new(palette: Palette, border: BorderStyle, width: usize) -> Self {
        TableRenderer {
            palette,
            border,
            width,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Renders the table, index column first.
    ///
    /// The index counts rows in display order from 0. Headers are centered;
    /// numeric columns and the index are right-aligned, text left-aligned.
    /// Odd body rows get the alternate tint. A table without body rows still
    /// gets its borders and header. Lines are joined with `\n`, with no
    /// trailing newline.
    pub fn render(&self, table: &Table) -> String {
        if table.column_count() == 0 {
            return String::new();
        }

        let headers: Vec<&str> = std::iter::once(INDEX_HEADER)
            .chain(table.headers().iter().map(String::as_str))
            .collect();
        let indices: Vec<String> = (0..table.row_count()).map(|i| i.to_string()).collect();
        let rows: Vec<Vec<&str>> = table
            .rows()
            .iter()
            .zip(&indices)
            .map(|(row, index)| {
                std::iter::once(index.as_str())
                    .chain(row.iter().map(String::as_str))
                    .collect()
            })
            .collect();

        let aligns: Vec<Align> = std::iter::once(Align::Right)
            .chain(table.column_types().iter().map(|t| {
                if t.is_numeric() {
                    Align::Right
                } else {
                    Align::Left
                }
            }))
            .collect();

        let fitted = fit_widths(&natural_widths(&headers, &rows), self.width);
        let widths = &fitted.widths;
        let chars = self.border.chars();

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.rule(&chars, widths, LineType::Top));
        lines.push(self.header_line(&chars, &headers, widths));
        lines.push(self.rule(&chars, widths, LineType::Middle));
        for (position, row) in rows.iter().enumerate() {
            lines.push(self.body_line(&chars, row, widths, &aligns, position % 2 == 1));
        }
        lines.push(self.rule(&chars, widths, LineType::Bottom));

        tracing::debug!(
            rows = rows.len(),
            columns = widths.len(),
            width = self.width,
            line_width = fitted.line_width(),
            "table rendered"
        );
        lines.join("\n")
    }

    fn rule(&self, chars: &BorderChars, widths: &[usize], line_type: LineType) -> String {
        self.palette
            .border
            .apply_to(chars.horizontal_line(widths, line_type))
            .to_string()
    }

    fn header_line(&self, chars: &BorderChars, headers: &[&str], widths: &[usize]) -> String {
        let cells = headers.iter().zip(widths).map(|(header, &width)| {
            let text = pad_center(&truncate_end(header, width), width);
            self.palette.header.apply_to(text).to_string()
        });
        self.join_cells(chars, cells)
    }

    fn body_line(
        &self,
        chars: &BorderChars,
        row: &[&str],
        widths: &[usize],
        aligns: &[Align],
        odd: bool,
    ) -> String {
        let cells = row
            .iter()
            .zip(widths)
            .zip(aligns)
            .enumerate()
            .map(|(column, ((cell, &width), &align))| {
                let cut = truncate_end(cell, width);
                let text = match align {
                    Align::Right => pad_left(&cut, width),
                    Align::Left => pad_right(&cut, width),
                };
                if column == 0 {
                    self.palette.index.apply_to(text).to_string()
                } else if odd {
                    self.palette.alt_row.apply_to(text).to_string()
                } else {
                    text
                }
            });
        self.join_cells(chars, cells)
    }

    /// Wraps cells as `│ a │ b │`.
    fn join_cells(&self, chars: &BorderChars, cells: impl Iterator<Item = String>) -> String {
        let vertical = self.palette.border.apply_to(chars.vertical).to_string();
        let separator = format!(" {} ", vertical);
        let body: Vec<String> = cells.collect();
        format!("{} {} {}", vertical, body.join(&separator), vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn plain(width: usize) -> TableRenderer {
        TableRenderer::new(Palette::plain(), BorderStyle::Rounded, width)
    }

    #[test]
    fn renders_nushell_style_box() {
        let t = table(&["Name", "Age"], &[&["Alice", "30"], &["Bob", "25"]]);
        let expected = "\
╭───┬───────┬─────╮
│ # │ Name  │ Age │
├───┼───────┼─────┤
│ 0 │ Alice │  30 │
│ 1 │ Bob   │  25 │
╰───┴───────┴─────╯";
        assert_eq!(plain(80).render(&t), expected);
    }

    #[test]
    fn zero_row_table_renders_header() {
        let t = table(&["Name", "Age"], &[]);
        let out = plain(80).render(&t);
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("│ # │ Name │ Age │"));
    }

    #[test]
    fn no_columns_renders_nothing() {
        assert_eq!(plain(80).render(&Table::default()), "");
    }

    #[test]
    fn wide_tables_fit_and_truncate() {
        let long = "x".repeat(100);
        let t = table(&["Name", "Note"], &[&["Alice", long.as_str()]]);
        let out = plain(40).render(&t);
        for line in out.lines() {
            assert!(display_width(line) <= 40, "{line}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn centered_headers_and_left_aligned_text() {
        let t = table(&["Id", "Description"], &[&["1", "a"], &["22", "b"]]);
        let out = plain(80).render(&t);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "│ # │ Id │ Description │");
        assert_eq!(lines[3], "│ 0 │  1 │ a           │");
        assert_eq!(lines[4], "│ 1 │ 22 │ b           │");
    }

    #[test]
    fn colored_output_tints_odd_rows_only() {
        let t = table(&["Name"], &[&["a"], &["b"]]);
        let palette = Palette::colored();
        let dim_b = palette.alt_row.apply_to("b   ").to_string();
        let out = TableRenderer::new(palette, BorderStyle::Rounded, 80).render(&t);
        let lines: Vec<&str> = out.lines().collect();
        assert!(!lines[3].contains(&Palette::colored().alt_row.apply_to("a   ").to_string()));
        assert!(lines[4].contains(&dim_b));
    }

    #[test]
    fn ascii_border() {
        let t = table(&["a", "b"], &[&["1", "2"]]);
        let out = TableRenderer::new(Palette::plain(), BorderStyle::Ascii, 80).render(&t);
        assert_eq!(out.lines().next(), Some("+---+---+---+"));
        assert_eq!(out.lines().nth(1), Some("| # | a | b |"));
    }
}
