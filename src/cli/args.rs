//! Command-line argument definitions for the mission analyzer
//!
//! All options are optional and combine freely; filters are ANDed together.

use crate::chart::{ChartFormat, ChartTarget};
use crate::filters::FilterOptions;
use crate::models::parse_success_token;
use crate::{MissionError, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the space mission analyzer
///
/// Loads a CSV file of space missions, filters it, and prints a table with
/// optional summary statistics and a year-by-year outcome chart.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "mission_analyzer",
    version,
    about = "Filter, summarize and chart space mission records from a CSV file",
    long_about = "Reads space missions (year, name, type, success, countries, impact) from a CSV \
                  file, keeps the missions matching every given filter, and prints them as a table. \
                  Optionally adds summary statistics, a per-year success/failure chart, and a CSV \
                  export of the filtered missions."
)]
pub struct Args {
    /// Path to the mission CSV file
    ///
    /// Overrides MISSION_ANALYZER_DATA. Defaults to data.csv in the current directory.
    #[arg(long = "data", value_name = "PATH", help = "Path to the mission CSV file")]
    pub data: Option<PathBuf>,

    /// Keep only missions launched in a prime year
    #[arg(short = 'p', long = "prime", help = "Keep only missions launched in a prime year")]
    pub prime: bool,

    /// Keep only missions whose year is divisible by N
    #[arg(
        short = 'a',
        long = "divisible-by",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Keep only missions whose year is divisible by N"
    )]
    pub divisible_by: Option<i64>,

    /// Keep only missions of this type
    ///
    /// Matching is case-insensitive unless --case-sensitive is given.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Keep only missions of this type"
    )]
    pub mission_type: Option<String>,

    /// Keep only missions involving this country
    #[arg(
        short = 'c',
        long = "country",
        value_name = "COUNTRY",
        help = "Keep only missions involving this country"
    )]
    pub country: Option<String>,

    /// Keep only successful (true) or failed (false) missions
    #[arg(
        short = 's',
        long = "success",
        value_name = "BOOL",
        value_parser = parse_success_flag,
        help = "Keep only successful (true) or failed (false) missions"
    )]
    pub success: Option<bool>,

    /// Keep only missions with an impact score of at least this value
    #[arg(
        short = 'i',
        long = "impact",
        value_name = "IMPACT",
        allow_negative_numbers = true,
        help = "Keep only missions with impact >= IMPACT"
    )]
    pub impact: Option<f64>,

    /// Print summary statistics after the table
    #[arg(long = "summary", help = "Print summary statistics after the table")]
    pub summary: bool,

    /// Draw the per-year success/failure chart in the terminal
    #[arg(long = "plot", help = "Draw the per-year outcome chart in the terminal")]
    pub plot: bool,

    /// Write the per-year chart to a file instead of the terminal
    ///
    /// The extension picks the format: .svg for a bar chart image, .txt for
    /// the plain text chart.
    #[arg(
        long = "plot-file",
        value_name = "PATH",
        help = "Write the chart to PATH (.svg or .txt) instead of the terminal"
    )]
    pub plot_file: Option<PathBuf>,

    /// Match type and country with exact case
    #[arg(long = "case-sensitive", help = "Match type and country with exact case")]
    pub case_sensitive: bool,

    /// Write the filtered missions to a CSV file
    #[arg(
        long = "export",
        value_name = "PATH",
        help = "Write the filtered missions to a CSV file"
    )]
    pub export: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Validate the argument combination before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.divisible_by == Some(0) {
            return Err(MissionError::invalid_argument(
                "--divisible-by 0",
                "divisor must be non-zero",
            ));
        }

        if let Some(impact) = self.impact {
            if !impact.is_finite() {
                return Err(MissionError::invalid_argument(
                    format!("--impact {}", impact),
                    "threshold must be a finite number",
                ));
            }
        }

        if let Some(path) = &self.plot_file {
            ChartFormat::from_path(path)?;
        }

        Ok(())
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Filter criteria selected on the command line
    pub fn to_filter_options(&self) -> FilterOptions {
        FilterOptions {
            prime_years: self.prime,
            divisible_by: self.divisible_by,
            mission_type: self.mission_type.clone(),
            country: self.country.clone(),
            success: self.success,
            min_impact: self.impact,
            case_sensitive: self.case_sensitive,
        }
    }

    /// Chart destination, `--plot-file` taking precedence over `--plot`
    pub fn chart_target(&self) -> Option<ChartTarget> {
        match (&self.plot_file, self.plot) {
            (Some(path), _) => Some(ChartTarget::File(path.clone())),
            (None, true) => Some(ChartTarget::Display),
            (None, false) => None,
        }
    }
}

/// Value parser for `--success`, accepting the same tokens as the data file
pub fn parse_success_flag(value: &str) -> Result<bool> {
    parse_success_token(value).ok_or_else(|| {
        MissionError::invalid_argument(
            format!("--success {}", value),
            "expected true or false",
        )
    })
}
