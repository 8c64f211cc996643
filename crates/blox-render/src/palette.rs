//! Colors used by the renderer.

use console::Style;

/// Styles for each part of the output.
///
/// [`Palette::colored`] forces styling on, since whether to color is
/// decided once from settings rather than by `console`'s own terminal
/// detection. [`Palette::plain`] applies nothing.
#[derive(Debug, Clone)]
pub struct Palette {
    pub border: Style,
    pub header: Style,
    pub index: Style,
    /// Tint for odd body rows.
    pub alt_row: Style,
    pub stats_title: Style,
    pub stats_label: Style,
    pub count: Style,
    pub sum: Style,
    pub min: Style,
    pub max: Style,
    pub avg: Style,
    pub warning: Style,
}

impl Palette {
    /// The default colors: gray borders, bold green headers, cyan index.
    pub fn colored() -> Self {
        let forced = || Style::new().force_styling(true);
        Palette {
            border: forced().black().bright(),
            header: forced().green().bright().bold(),
            index: forced().cyan().bright(),
            alt_row: forced().dim(),
            stats_title: forced().yellow().bright().bold(),
            stats_label: forced().white().bold(),
            count: forced().cyan().bright(),
            sum: forced().green().bright(),
            min: forced().blue().bright(),
            max: forced().magenta().bright(),
            avg: forced().yellow().bright(),
            warning: forced().yellow().bold(),
        }
    }

    /// No styling at all.
    pub fn plain() -> Self {
        let none = || Style::new().force_styling(false);
        Palette {
            border: none(),
            header: none(),
            index: none(),
            alt_row: none(),
            stats_title: none(),
            stats_label: none(),
            count: none(),
            sum: none(),
            min: none(),
            max: none(),
            avg: none(),
            warning: none(),
        }
    }

    /// Picks [`Palette::colored`] or [`Palette::plain`].
    pub fn for_color(color: bool) -> Self {
        if color {
            Palette::colored()
        } else {
            Palette::plain()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::plain()
    }
}
