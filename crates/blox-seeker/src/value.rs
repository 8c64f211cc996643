//! Cell values coerced for comparison.

use blox_table::{parse_number, ColumnType};

/// A cell as seen by a comparison: either a number or the raw text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Magnitude of a numeric cell (file sizes in bytes, percentages
    /// without the `%`).
    Number(f64),
    /// The cell text, unchanged.
    Text(&'a str),
}

impl<'a> Value<'a> {
    /// Reads a cell for equality checks.
    ///
    /// Numeric columns yield a number when the cell parses; anything else
    /// stays text.
    pub fn of(cell: &'a str, column_type: ColumnType) -> Self {
        if column_type.is_numeric() {
            if let Some(number) = parse_number(cell) {
                return Value::Number(number);
            }
        }
        Value::Text(cell)
    }

    /// Reads a cell as a sort key.
    ///
    /// Numeric columns always yield a number; cells that fail to parse sort
    /// as zero.
    pub fn sort_key(cell: &'a str, column_type: ColumnType) -> Self {
        if column_type.is_numeric() {
            Value::Number(parse_number(cell).unwrap_or(0.0))
        } else {
            Value::Text(cell)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_parse_cells() {
        assert_eq!(Value::of("4.0K", ColumnType::Filesize), Value::Number(4096.0));
        assert_eq!(Value::of("-", ColumnType::Integer), Value::Text("-"));
        assert_eq!(Value::of("42", ColumnType::Text), Value::Text("42"));
    }

    #[test]
    fn unparseable_sort_keys_are_zero() {
        assert_eq!(Value::sort_key("n/a", ColumnType::Float), Value::Number(0.0));
        assert_eq!(Value::sort_key("b", ColumnType::Text), Value::Text("b"));
        assert_eq!(Value::sort_key("7", ColumnType::Integer), Value::Number(7.0));
    }
}
