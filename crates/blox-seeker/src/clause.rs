//! `where` conditions: parsing and per-cell evaluation.
//!
//! A condition is written `<column><op><value>`, e.g. `Age>27`,
//! `Name~^A` or `Status = "Up 2 hours"`. The earliest operator in the text
//! splits it; spaces around the operator are ignored, and one layer of
//! matching quotes around the value is removed.

use regex::Regex;

use blox_table::{parse_number, ColumnType};

use crate::column::ColumnRef;
use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::value::Value;

/// Right-hand side of a condition, prepared at parse time.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A literal value, with its numeric reading when it has one.
    Literal { raw: String, number: Option<f64> },
    /// A compiled pattern for `~`.
    Regex(Regex),
}

/// A single `where` predicate.
///
/// # Example
///
/// ```
/// use blox_seeker::{Condition, ColumnRef, Op};
///
/// let condition = Condition::parse("Age >= 30").unwrap();
/// assert_eq!(condition.column, ColumnRef::name("Age"));
/// assert_eq!(condition.op, Op::Gte);
/// ```
#[derive(Debug, Clone)]
pub struct Condition {
    /// The column to test.
    pub column: ColumnRef,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub operand: Operand,
}

impl Condition {
    /// Parses a condition from its textual form.
    ///
    /// Fails when there is no operator, no column before it, an ordering
    /// operator with a non-numeric value, or an invalid `~` pattern.
    pub fn parse(text: &str) -> Result<Self> {
        let (start, op, len) = find_operator(text)
            .ok_or_else(|| SeekerError::condition(text, "expected one of = != > >= < <= ~"))?;

        let column = text[..start].trim();
        if column.is_empty() {
            return Err(SeekerError::condition(text, "missing column"));
        }

        let value = unquote(text[start + len..].trim());
        let operand = match op {
            Op::Regex => Operand::Regex(Regex::new(value)?),
            _ => {
                let number = parse_number(value);
                if op.is_ordering() && number.is_none() {
                    return Err(SeekerError::condition(
                        text,
                        "ordering comparisons need a numeric value",
                    ));
                }
                Operand::Literal {
                    raw: value.to_string(),
                    number,
                }
            }
        };

        Ok(Condition {
            column: ColumnRef::from(column),
            op,
            operand,
        })
    }

    /// Evaluates this condition against one cell of a column of the given
    /// type.
    ///
    /// Ordering operators only match cells that parse as numbers. `=` and
    /// `!=` compare numerically when the column is numeric and both sides
    /// parse, and as exact text otherwise. `~` searches the raw text.
    pub fn matches(&self, cell: &str, column_type: ColumnType) -> bool {
        match (&self.operand, self.op) {
            (Operand::Regex(regex), _) => regex.is_match(cell),
            (Operand::Literal { number, .. }, op) if op.is_ordering() => {
                match (parse_number(cell), number) {
                    (Some(left), Some(right)) => left
                        .partial_cmp(right)
                        .is_some_and(|ordering| op.eval_ordering(ordering)),
                    _ => false,
                }
            }
            (Operand::Literal { raw, number }, op) => {
                let equal = match (Value::of(cell, column_type), number) {
                    (Value::Number(left), Some(right)) => left == *right,
                    _ => cell == raw,
                };
                match op {
                    Op::Ne => !equal,
                    _ => equal,
                }
            }
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match &self.operand {
            Operand::Literal { raw, .. } => raw.as_str(),
            Operand::Regex(regex) => regex.as_str(),
        };
        write!(f, "{}{}{}", self.column, self.op, value)
    }
}

impl std::str::FromStr for Condition {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Condition::parse(s)
    }
}

/// Finds the earliest operator, as (byte offset, operator, symbol length).
fn find_operator(text: &str) -> Option<(usize, Op, usize)> {
    text.char_indices()
        .find_map(|(i, _)| Op::at_start(&text[i..]).map(|(op, len)| (i, op, len)))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
