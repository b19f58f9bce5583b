//! Error handling for mission analysis operations.
//!
//! Provides error types with context for dataset access, row validation,
//! argument checking and chart rendering failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MissionError {
    #[error("Cannot access data file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data in {source_label} at line {line}: {reason}")]
    DataFormat {
        source_label: String,
        line: u64,
        reason: String,
    },

    #[error("Invalid argument {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Cannot render chart: {reason}")]
    Render { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MissionError {
    /// Create a file access error for the given path
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a data format error pointing at a line of the input
    pub fn data_format(source_label: impl Into<String>, line: u64, reason: impl Into<String>) -> Self {
        Self::DataFormat {
            source_label: source_label.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a render error
    pub fn render(reason: impl Into<String>) -> Self {
        Self::Render {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error should be reported as a warning rather than abort the run
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Render { .. })
    }
}

pub type Result<T> = std::result::Result<T, MissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_message_names_line() {
        let error = MissionError::data_format("missions.csv", 7, "year 'abc' is not an integer");
        assert_eq!(
            error.to_string(),
            "Invalid data in missions.csv at line 7: year 'abc' is not an integer"
        );
    }

    #[test]
    fn test_only_render_errors_are_warnings() {
        assert!(MissionError::render("no data").is_warning());
        assert!(!MissionError::invalid_argument("-a", "zero").is_warning());
        assert!(!MissionError::configuration("bad").is_warning());
    }
}
