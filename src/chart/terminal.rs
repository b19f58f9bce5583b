//! Horizontal stacked bar chart rendered as text
//!
//! Used for the on-screen chart (colored) and for `.txt` chart files
//! (plain glyphs, no escape codes).

use super::tally::{YearTally, average_success_rate};
use crate::constants::{FAILURE_GLYPH, PLAIN_FAILURE_GLYPH, PLAIN_SUCCESS_GLYPH, SUCCESS_GLYPH};
use colored::Colorize;
use std::fmt::Write;

/// How bar segments are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Block glyphs, green success and red failure segments
    Colored,
    /// `#` for success and `-` for failure, no escape codes
    Plain,
}

impl TextStyle {
    fn glyphs(self) -> (char, char) {
        match self {
            TextStyle::Colored => (SUCCESS_GLYPH, FAILURE_GLYPH),
            TextStyle::Plain => (PLAIN_SUCCESS_GLYPH, PLAIN_FAILURE_GLYPH),
        }
    }
}

/// Render one bar per year, the longest spanning `bar_width` characters
pub fn render_text(tallies: &[YearTally], title: &str, bar_width: usize, style: TextStyle) -> String {
    let mut out = String::new();
    let (success_glyph, failure_glyph) = style.glyphs();
    let max_total = tallies.iter().map(YearTally::total).max().unwrap_or(0);

    let heading = match style {
        TextStyle::Colored => title.bold().to_string(),
        TextStyle::Plain => title.to_string(),
    };
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(
        out,
        "Legend: {} successful  {} failed\n",
        paint(&success_glyph.to_string(), true, style),
        paint(&failure_glyph.to_string(), false, style)
    );

    for tally in tallies {
        let success_len = scaled(tally.successes, max_total, bar_width);
        let failure_len = scaled(tally.failures, max_total, bar_width);
        let padding = bar_width.saturating_sub(success_len + failure_len);

        let _ = writeln!(
            out,
            "{:>6} {}{}{} {} ok / {} failed ({:.1}%)",
            tally.year,
            paint(&success_glyph.to_string().repeat(success_len), true, style),
            paint(&failure_glyph.to_string().repeat(failure_len), false, style),
            " ".repeat(padding),
            tally.successes,
            tally.failures,
            tally.success_rate()
        );
    }

    if let Some(average) = average_success_rate(tallies) {
        let _ = writeln!(out, "\nAverage success rate: {:.1}%", average);
    }
    out
}

/// Bar length for `count`, never zero for a non-zero count
fn scaled(count: u32, max_total: u32, bar_width: usize) -> usize {
    if count == 0 || max_total == 0 {
        return 0;
    }
    let length = (count as f64 / max_total as f64 * bar_width as f64).round() as usize;
    length.max(1)
}

fn paint(segment: &str, success: bool, style: TextStyle) -> String {
    match (style, success) {
        (TextStyle::Plain, _) => segment.to_string(),
        (TextStyle::Colored, true) => segment.green().to_string(),
        (TextStyle::Colored, false) => segment.red().to_string(),
    }
}
