//! Box-drawing glyph sets.

use std::str::FromStr;

use crate::error::RenderError;

/// Border style for the rendered table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    #[default]
    Rounded,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// ASCII borders: +, -, |
    Ascii,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub fn chars(self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Rounded => "rounded",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Ascii => "ascii",
        }
    }
}

impl FromStr for BorderStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rounded" => Ok(BorderStyle::Rounded),
            "light" => Ok(BorderStyle::Light),
            "heavy" => Ok(BorderStyle::Heavy),
            "double" => Ok(BorderStyle::Double),
            "ascii" => Ok(BorderStyle::Ascii),
            _ => Err(RenderError::UnknownBorder(s.to_string())),
        }
    }
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

/// Line type for horizontal borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Top,
    /// Between the header and the body.
    Middle,
    Bottom,
}

impl BorderChars {
    /// Builds a horizontal rule over columns of the given content widths.
    ///
    /// Each column is padded by one space on either side, so a segment is
    /// two characters wider than its column.
    pub fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> String {
        let (left, junction, right) = match line_type {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(junction);
            }
            line.extend(std::iter::repeat(self.horizontal).take(width + 2));
        }
        line.push(right);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_is_default() {
        assert_eq!(BorderStyle::default(), BorderStyle::Rounded);
    }

    #[test]
    fn parse_border_names() {
        assert_eq!("Heavy".parse::<BorderStyle>(), Ok(BorderStyle::Heavy));
        assert_eq!(" ascii ".parse::<BorderStyle>(), Ok(BorderStyle::Ascii));
        assert_eq!(
            "dotted".parse::<BorderStyle>(),
            Err(RenderError::UnknownBorder("dotted".into()))
        );
        assert_eq!(BorderStyle::Double.to_string(), "double");
    }

    #[test]
    fn horizontal_lines_use_junctions() {
        let chars = BorderStyle::Rounded.chars();
        assert_eq!(chars.horizontal_line(&[1, 3], LineType::Top), "╭───┬─────╮");
        assert_eq!(chars.horizontal_line(&[1, 3], LineType::Middle), "├───┼─────┤");
        assert_eq!(chars.horizontal_line(&[1, 3], LineType::Bottom), "╰───┴─────╯");
    }

    #[test]
    fn ascii_line() {
        let chars = BorderStyle::Ascii.chars();
        assert_eq!(chars.horizontal_line(&[2], LineType::Middle), "+----+");
    }
}
