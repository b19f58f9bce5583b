//! Configuration management and validation.
//!
//! Provides the analyzer configuration with built-in defaults, environment
//! overrides and command-line overrides applied in that order.

use crate::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH,
    DEFAULT_COUNTRY_SEPARATOR, DEFAULT_DATA_PATH, ENV_COUNTRY_SEPARATOR, ENV_DATA_PATH,
};
use crate::error::{MissionError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Chart rendering settings
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Title drawn above the chart
    pub title: String,

    /// SVG canvas width in pixels
    pub width: u32,

    /// SVG canvas height in pixels
    pub height: u32,

    /// Width in characters of the longest terminal bar
    pub bar_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

/// Top-level analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Mission dataset to load
    pub data_path: PathBuf,

    /// Separator between tokens of the countries column
    pub country_separator: char,

    /// Match mission type and country with exact case
    pub case_sensitive: bool,

    /// Chart rendering settings
    pub chart: ChartConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            country_separator: DEFAULT_COUNTRY_SEPARATOR,
            case_sensitive: false,
            chart: ChartConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration: defaults, then process environment, then CLI data path
    pub fn load_layered(cli_data_path: Option<PathBuf>) -> Result<Self> {
        Self::load_layered_from(|key| std::env::var(key).ok(), cli_data_path)
    }

    /// Layered load with an explicit environment lookup
    pub fn load_layered_from<F>(lookup: F, cli_data_path: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_PATH).filter(|value| !value.trim().is_empty()) {
            debug!("{} overrides data path: {}", ENV_DATA_PATH, path);
            config.data_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_COUNTRY_SEPARATOR) {
            config.country_separator = parse_separator(&value)?;
            debug!(
                "{} overrides country separator: {:?}",
                ENV_COUNTRY_SEPARATOR, config.country_separator
            );
        }

        if let Some(path) = cli_data_path {
            config.data_path = path;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the dataset path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the countries separator
    pub fn with_country_separator(mut self, separator: char) -> Self {
        self.country_separator = separator;
        self
    }

    /// Enable exact-case matching for categorical filters
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Replace chart settings
    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// Check the configuration for values the loader and renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(MissionError::configuration("Data path cannot be empty"));
        }

        if self.country_separator == ',' || self.country_separator.is_whitespace() {
            return Err(MissionError::configuration(format!(
                "Country separator {:?} would clash with the CSV layout",
                self.country_separator
            )));
        }

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(MissionError::configuration(
                "Chart dimensions must be greater than 0",
            ));
        }

        if self.chart.bar_width == 0 {
            return Err(MissionError::configuration(
                "Chart bar width must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn parse_separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(MissionError::configuration(format!(
            "{} must be a single character, got '{}'",
            ENV_COUNTRY_SEPARATOR, value
        ))),
    }
}
