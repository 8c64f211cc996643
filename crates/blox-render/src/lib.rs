//! Terminal rendering for parsed command-output tables.
//!
//! [`TableRenderer`] turns a [`Table`](blox_table::Table) into a box-drawn
//! block with a leading index column, centered bold headers, right-aligned
//! numeric columns and alternate-row tinting. Columns are fitted to the
//! terminal width; cells that no longer fit end in `…`.
//!
//! ```rust
//! use blox_render::{BorderStyle, Palette, TableRenderer};
//! use blox_table::parse_text;
//!
//! let table = parse_text("Name\tAge\nAlice\t30\n").table().cloned().unwrap();
//! let out = TableRenderer::new(Palette::plain(), BorderStyle::Rounded, 80).render(&table);
//! assert!(out.starts_with("╭───┬"));
//! ```
//!
//! All width arithmetic is ANSI-aware, so cells that already carry color
//! codes line up.

mod border;
mod error;
mod palette;
mod resolve;
mod stats;
mod table;
mod util;

pub use border::{BorderChars, BorderStyle, LineType};
pub use error::RenderError;
pub use palette::Palette;
pub use resolve::{fit_widths, natural_widths, overhead, ResolvedWidths};
pub use stats::render_stats;
pub use table::{TableRenderer, INDEX_HEADER};
pub use util::{display_width, pad_center, pad_left, pad_right, truncate_end, ELLIPSIS};

/// Width used when the terminal size is unknown.
pub const FALLBACK_WIDTH: usize = 80;

/// Narrowest width the renderer is given.
pub const MIN_WIDTH: usize = 20;

/// Gets the current terminal width, or None if not available.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
