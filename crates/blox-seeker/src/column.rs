//! Column references and their resolution against table headers.

use std::convert::Infallible;
use std::str::FromStr;

/// A reference to one column, by name or by position.
///
/// Any text that parses as an integer is a position, so a header literally
/// named `2` can only be reached by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// Case-insensitive header name or name prefix.
    ByName(String),
    /// Zero-based position. Negative values count from the right, so `-1`
    /// is the last column.
    ByIndex(i64),
}

impl ColumnRef {
    pub fn name(name: impl Into<String>) -> Self {
        ColumnRef::ByName(name.into())
    }

    pub fn index(index: i64) -> Self {
        ColumnRef::ByIndex(index)
    }

    /// Resolves this reference to a column position.
    ///
    /// Names match a header exactly (ignoring case) first; failing that, the
    /// first header that starts with the name (ignoring case) wins.
    ///
    /// ```rust
    /// use blox_seeker::ColumnRef;
    ///
    /// let headers = ["Name".to_string(), "Age".to_string(), "Agent".to_string()];
    /// assert_eq!(ColumnRef::name("age").resolve(&headers), Some(1));
    /// assert_eq!(ColumnRef::name("agen").resolve(&headers), Some(2));
    /// assert_eq!(ColumnRef::index(-1).resolve(&headers), Some(2));
    /// assert_eq!(ColumnRef::index(3).resolve(&headers), None);
    /// ```
    pub fn resolve(&self, headers: &[String]) -> Option<usize> {
        match self {
            ColumnRef::ByIndex(index) => resolve_index(*index, headers.len()),
            ColumnRef::ByName(name) => resolve_name(name, headers),
        }
    }
}

fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let position = if index < 0 { len + index } else { index };
    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}

fn resolve_name(name: &str, headers: &[String]) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let wanted = name.to_lowercase();
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    lowered
        .iter()
        .position(|h| *h == wanted)
        .or_else(|| lowered.iter().position(|h| h.starts_with(&wanted)))
}

impl FromStr for ColumnRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(index) => ColumnRef::ByIndex(index),
            Err(_) => ColumnRef::ByName(s.to_string()),
        })
    }
}

impl From<&str> for ColumnRef {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(column) => column,
            Err(never) => match never {},
        }
    }
}

impl From<i64> for ColumnRef {
    fn from(index: i64) -> Self {
        ColumnRef::ByIndex(index)
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::ByName(name) => write!(f, "{}", name),
            ColumnRef::ByIndex(index) => write!(f, "{}", index),
        }
    }
}

/// Parses a comma-separated column list, skipping empty entries.
pub fn parse_list(list: &str) -> Vec<ColumnRef> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ColumnRef::from)
        .collect()
}
