//! Space Mission Analyzer Library
//!
//! A Rust library for filtering, summarizing and charting space mission
//! records stored in a comma-separated file.
//!
//! This library provides tools for:
//! - Loading mission CSV files with typed validation and line-numbered errors
//! - Composable filters (prime year, divisibility, type, country, outcome, impact)
//! - Tabular reports and summary statistics
//! - Per-year success/failure charts for the terminal, SVG or plain text
//! - Exporting filtered missions back to CSV

pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod filters;
pub mod loader;
pub mod models;
pub mod report;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::AnalyzerConfig;
pub use error::{MissionError, Result};
pub use models::MissionRecord;
