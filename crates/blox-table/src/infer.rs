//! Column type inference.
//!
//! Every non-empty cell is classified on its own with [`classify`]. A column
//! takes the majority class only when that class covers more than 70% of
//! its non-empty cells; otherwise it is [`ColumnType::Text`]. Real command
//! output mixes markers like `-` into numeric columns, so a unanimous vote
//! is not required.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::ColumnType;

static FILESIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))\s?([A-Za-z]{1,3})$")
        .expect("filesize pattern is valid")
});

/// Order used to break ties between equally common classes.
const CLASSES: [ColumnType; 5] = [
    ColumnType::Integer,
    ColumnType::Float,
    ColumnType::Percentage,
    ColumnType::Filesize,
    ColumnType::Text,
];

/// Classifies a single cell value.
pub fn classify(value: &str) -> ColumnType {
    let value = value.trim();
    if is_integer(value) {
        ColumnType::Integer
    } else if is_float(value) {
        ColumnType::Float
    } else if parse_percentage(value).is_some() {
        ColumnType::Percentage
    } else if parse_filesize(value).is_some() {
        ColumnType::Filesize
    } else {
        ColumnType::Text
    }
}

/// Coerces a numeric-looking cell to its magnitude.
///
/// Integers and floats parse as-is, percentages drop the `%`, and file sizes
/// are converted to bytes. Returns `None` for anything else.
///
/// ```rust
/// use blox_table::parse_number;
///
/// assert_eq!(parse_number("-12"), Some(-12.0));
/// assert_eq!(parse_number("95.5%"), Some(95.5));
/// assert_eq!(parse_number("2kB"), Some(2000.0));
/// assert_eq!(parse_number("4.0K"), Some(4096.0));
/// assert_eq!(parse_number("-"), None);
/// ```
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if is_integer(value) || is_float(value) {
        return value.parse().ok();
    }
    parse_percentage(value).or_else(|| parse_filesize(value))
}

/// Infers one column type from a header and its cell values.
pub fn infer_column<'a, I>(header: &str, values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = [0usize; CLASSES.len()];
    let mut total = 0usize;

    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        let class = classify(value);
        if let Some(slot) = CLASSES.iter().position(|&c| c == class) {
            counts[slot] += 1;
        }
        total += 1;
    }

    if total == 0 {
        return ColumnType::Text;
    }

    let above_threshold = |count: usize| count * 10 > total * 7;

    // max_by_key keeps the last maximum, so walk the classes in reverse to
    // let the earlier class win a tie.
    let (best, best_count) = CLASSES
        .iter()
        .zip(counts)
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(class, count)| (*class, count))
        .unwrap_or((ColumnType::Text, 0));

    let declared = if above_threshold(best_count) {
        best
    } else if above_threshold(counts[0] + counts[1]) {
        ColumnType::Float
    } else {
        ColumnType::Text
    };

    if matches!(declared, ColumnType::Integer | ColumnType::Float) && is_percent_header(header) {
        ColumnType::Percentage
    } else {
        declared
    }
}

/// Infers the type of every column.
pub fn infer(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnType> {
    let types: Vec<ColumnType> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let values = rows
                .iter()
                .filter_map(|row| row.get(index).map(String::as_str));
            infer_column(header, values)
        })
        .collect();

    tracing::debug!(?types, "column types inferred");
    types
}

fn is_percent_header(header: &str) -> bool {
    header.contains('%') || header.to_lowercase().contains("percent")
}

fn strip_sign(value: &str) -> &str {
    value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value)
}

fn is_integer(value: &str) -> bool {
    let digits = strip_sign(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(value: &str) -> bool {
    let body = strip_sign(value);
    let mut points = 0;
    let mut digits = 0;
    for b in body.bytes() {
        match b {
            b'.' => points += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    points == 1 && digits > 0
}

fn parse_percentage(value: &str) -> Option<f64> {
    let number = value.strip_suffix('%')?.trim_end();
    if is_integer(number) || is_float(number) {
        number.parse().ok()
    } else {
        None
    }
}

fn parse_filesize(value: &str) -> Option<f64> {
    let captures = FILESIZE.captures(value)?;
    let number: f64 = captures.get(1)?.as_str().parse().ok()?;
    let multiplier = unit_multiplier(captures.get(2)?.as_str())?;
    Some(number * multiplier)
}

/// Bytes per unit. Two- and three-letter units follow their SI or IEC
/// meaning; single letters are what `ls -h` and `df -h` print, which are
/// binary multiples.
fn unit_multiplier(unit: &str) -> Option<f64> {
    const KB: f64 = 1000.0;
    const KIB: f64 = 1024.0;
    let multiplier = match unit.to_ascii_lowercase().as_str() {
        "b" => 1.0,
        "k" | "kib" => KIB,
        "m" | "mib" => KIB.powi(2),
        "g" | "gib" => KIB.powi(3),
        "t" | "tib" => KIB.powi(4),
        "p" | "pib" => KIB.powi(5),
        "kb" => KB,
        "mb" => KB.powi(2),
        "gb" => KB.powi(3),
        "tb" => KB.powi(4),
        "pb" => KB.powi(5),
        _ => return None,
    };
    Some(multiplier)
}
