//! Year-by-year success/failure charts
//!
//! Records are first grouped with [`tally_by_year`], then drawn either to the
//! terminal as a colored bar chart or to a file. The file format follows the
//! extension: `.svg` produces a stacked bar chart, `.txt` the plain text chart.

pub mod svg;
pub mod tally;
pub mod terminal;

pub use tally::{YearTally, average_success_rate, tally_by_year};
pub use terminal::{TextStyle, render_text};

use crate::config::ChartConfig;
use crate::error::{MissionError, Result};
use crate::models::MissionRecord;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a chart goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartTarget {
    /// Print to standard output
    Display,
    /// Write to a file, format chosen by extension
    File(PathBuf),
}

/// Supported chart file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Text,
}

impl ChartFormat {
    /// Pick the format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(ChartFormat::Svg),
            Some("txt") => Ok(ChartFormat::Text),
            _ => Err(MissionError::invalid_argument(
                format!("--plot-file {}", path.display()),
                "chart files must end in .svg or .txt",
            )),
        }
    }
}

/// Draw the per-year chart for `records`
///
/// An empty record set is a [`MissionError::Render`] error, which callers
/// treat as a warning rather than a failure.
pub fn render_chart(records: &[MissionRecord], target: &ChartTarget, config: &ChartConfig) -> Result<()> {
    let tallies = tally_by_year(records);
    if tallies.is_empty() {
        return Err(MissionError::render("no missions to plot"));
    }

    match target {
        ChartTarget::Display => {
            let text = render_text(&tallies, &config.title, config.bar_width, TextStyle::Colored);
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        ChartTarget::File(path) => {
            match ChartFormat::from_path(path)? {
                ChartFormat::Svg => svg::render_svg(&tallies, path, config)?,
                ChartFormat::Text => {
                    let text = render_text(&tallies, &config.title, config.bar_width, TextStyle::Plain);
                    fs::write(path, text).map_err(|e| MissionError::file_access(path, e))?;
                }
            }
            info!("Chart written to {}", path.display());
        }
    }

    Ok(())
}
