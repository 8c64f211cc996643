//! The statistics block printed below a table.

use blox_seeker::ColumnStats;

use crate::palette::Palette;

/// Renders statistics as a labeled block.
///
/// ```text
/// Statistics for column 'Value':
///    Count: 3
///    Sum: 60.00
///    Min: 10.00
///    Max: 30.00
///    Avg: 20.00
/// ```
pub fn render_stats(stats: &ColumnStats, palette: &Palette) -> String {
    let title = palette
        .stats_title
        .apply_to(format!("Statistics for column '{}':", stats.column));

    let items = [
        ("Count", stats.count.to_string(), &palette.count),
        ("Sum", format!("{:.2}", stats.sum), &palette.sum),
        ("Min", format!("{:.2}", stats.min), &palette.min),
        ("Max", format!("{:.2}", stats.max), &palette.max),
        ("Avg", format!("{:.2}", stats.avg), &palette.avg),
    ];

    let mut lines = vec![title.to_string()];
    lines.extend(items.into_iter().map(|(label, value, style)| {
        format!(
            "{} {}",
            palette.stats_label.apply_to(format!("   {}:", label)),
            style.apply_to(value)
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_stats_block() {
        let stats = ColumnStats::from_values("Value", [10.0, 20.0, 30.0]);
        let expected = "\
Statistics for column 'Value':
   Count: 3
   Sum: 60.00
   Min: 10.00
   Max: 30.00
   Avg: 20.00";
        assert_eq!(render_stats(&stats, &Palette::plain()), expected);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = ColumnStats::from_values("Name", []);
        let out = render_stats(&stats, &Palette::plain());
        assert!(out.contains("Count: 0"));
        assert!(out.contains("Avg: 0.00"));
    }
}
