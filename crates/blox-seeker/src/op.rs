//! Comparison operators for `where` conditions.

use std::cmp::Ordering;

/// Comparison operator in a `where` condition.
///
/// - **Equality**: `Eq`, `Ne` compare numerically on numeric columns and as
///   exact strings otherwise
/// - **Ordering**: `Gt`, `Gte`, `Lt`, `Lte` need both sides to be numbers
/// - **Pattern**: `Regex` searches the raw cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `~`
    Regex,
}

impl Op {
    /// Every operator, two-character symbols first so that `>=` is never
    /// read as `>` followed by `=`.
    pub const ALL: [Op; 7] = [
        Op::Ne,
        Op::Gte,
        Op::Lte,
        Op::Eq,
        Op::Gt,
        Op::Lt,
        Op::Regex,
    ];

    /// Returns `true` for the operators that compare by magnitude.
    pub fn is_ordering(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Regex => false,
        }
    }

    /// Returns the operator whose symbol starts `text`, with the symbol's
    /// byte length.
    pub fn at_start(text: &str) -> Option<(Op, usize)> {
        Op::ALL
            .iter()
            .find(|op| text.starts_with(op.symbol()))
            .map(|&op| (op, op.symbol().len()))
    }

    /// Returns the symbol written in conditions.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Regex => "~",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
