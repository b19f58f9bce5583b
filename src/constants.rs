//! Application constants for the mission analyzer
//!
//! This module contains default values, column names and environment
//! variable names used throughout the application.

// =============================================================================
// Dataset Defaults
// =============================================================================

/// Input file used when neither the command line nor the environment names one
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Separator between tokens in the countries column (e.g. "USA/USSR")
pub const DEFAULT_COUNTRY_SEPARATOR: char = '/';

/// Documented range of mission years; informational only
pub const DOCUMENTED_YEAR_RANGE: (i32, i32) = (1970, 1999);

/// Canonical header written by the exporter, in column order
pub const CANONICAL_HEADER: &[&str] = &[
    "year",
    "name",
    "mission_type",
    "success",
    "countries",
    "impact",
];

/// Token pairs accepted for the success column and the `--success` flag
pub const TRUE_TOKENS: &[&str] = &["true", "yes", "y", "1"];
pub const FALSE_TOKENS: &[&str] = &["false", "no", "n", "0"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the default input path
pub const ENV_DATA_PATH: &str = "MISSION_ANALYZER_DATA";

/// Overrides the country separator (single character)
pub const ENV_COUNTRY_SEPARATOR: &str = "MISSION_ANALYZER_COUNTRY_SEPARATOR";

// =============================================================================
// Report and Chart Layout
// =============================================================================

/// Column widths of the record table: year, mission, type, success, countries
pub mod table_widths {
    pub const YEAR: usize = 6;
    pub const MISSION: usize = 25;
    pub const TYPE: usize = 15;
    pub const SUCCESS: usize = 8;
    pub const COUNTRIES: usize = 20;
}

/// Length of the rule printed under the table header
pub const TABLE_RULE_WIDTH: usize = 85;

/// Message printed instead of a table when nothing matched
pub const NO_MATCHES_MESSAGE: &str = "No missions match the specified criteria.";

/// Default chart title
pub const DEFAULT_CHART_TITLE: &str = "Space Mission Outcomes by Year";

/// Default SVG canvas size in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 1200;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

/// Default width of the longest terminal bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Glyphs used by the terminal chart
pub const SUCCESS_GLYPH: char = '█';
pub const FAILURE_GLYPH: char = '░';

/// Glyphs used by the plain-text chart file
pub const PLAIN_SUCCESS_GLYPH: char = '#';
pub const PLAIN_FAILURE_GLYPH: char = '-';
