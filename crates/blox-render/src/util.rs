//! Measuring, cutting and padding cell text by terminal columns.
//!
//! Escape sequences pass through every helper here untouched and count as
//! zero columns. Command output often carries its own colors (`ls --color`, `grep
//! --color`), so cells cannot be measured by byte or char count.

use console::{measure_text_width, pad_str, Alignment};

/// Marker appended to truncated cells.
pub const ELLIPSIS: &str = "…";

const RESET: &str = "\x1b[0m";

/// Terminal columns `s` occupies, escape codes excluded.
///
/// # Example
///
/// ```rust
/// use blox_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Cuts `s` down to `max_width` columns, ending it with [`ELLIPSIS`].
///
/// Text that already fits comes back unchanged. A cut string that holds
/// escape codes gets a reset before the ellipsis so an open color does not
/// bleed into the border.
///
/// # Example
///
/// ```rust
/// use blox_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8), "Hello W…");
/// assert_eq!(truncate_end("Short", 10), "Short");
/// assert_eq!(truncate_end("Short", 1), "…");
/// ```
pub fn truncate_end(s: &str, max_width: usize) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - measure_text_width(ELLIPSIS);
    let mut result = truncate_to_display_width(s, target_width);
    if result.contains('\x1b') {
        result.push_str(RESET);
    }
    result.push_str(ELLIPSIS);
    result
}

/// Right-aligns `s` in `width` columns.
///
/// ```rust
/// use blox_render::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Left-aligns `s` in `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers `s` in `width` columns. An odd leftover space goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Keeps characters from the start until `max_width` columns are used.
/// Escape sequences are copied through without counting.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }

        if in_escape {
            result.push(c);
            // CSI sequences end with a letter (@ through ~)
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_end_counts_columns() {
        assert_eq!(truncate_end("hello", 5), "hello");
        assert_eq!(truncate_end("hello", 4), "hel…");
        assert_eq!(truncate_end("hello", 0), "");
        assert_eq!(truncate_end("日本語", 4), "日…");
    }

    #[test]
    fn truncate_end_keeps_escapes_and_resets() {
        let out = truncate_end("\x1b[31mred text\x1b[0m", 4);
        assert_eq!(out, "\x1b[31mred\x1b[0m…");
        assert_eq!(display_width(&out), 4);
    }

    #[test]
    fn padding() {
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_center("hi", 6), "  hi  ");
        assert_eq!(pad_center("hi", 5), " hi  ");
        assert_eq!(pad_left("\x1b[31m7\x1b[0m", 3), "  \x1b[31m7\x1b[0m");
    }
}
