//! Core data structures for mission analysis.
//!
//! Defines the typed mission record, the raw CSV row shape it is parsed from
//! and written back to, and the success token parser shared by the loader
//! and the command line.

use crate::constants::{FALSE_TOKENS, TRUE_TOKENS};
use serde::{Deserialize, Serialize};

/// One mission entry, validated once at load time
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRecord {
    pub year: i32,
    pub name: String,
    pub mission_type: String,
    pub success: bool,
    pub countries: Vec<String>,
    pub impact: f64,
}

impl MissionRecord {
    /// Countries joined back into the single-column form
    pub fn countries_label(&self, separator: char) -> String {
        self.countries.join(&separator.to_string())
    }
}

/// A CSV row exactly as it appears in the file, before type validation.
///
/// Accepts both the canonical column names and the ones used by the
/// long-form mission datasets (`mission_name`, `participating_countries`,
/// `scientific_impact`). Missing columns deserialize to `None` so the loader
/// can name the field in its error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMissionRow {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default, alias = "mission_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default, alias = "participating_countries")]
    pub countries: Option<String>,
    #[serde(default, alias = "scientific_impact")]
    pub impact: Option<String>,
}

impl RawMissionRow {
    /// Build the canonical row for a record
    pub fn from_record(record: &MissionRecord, separator: char) -> Self {
        Self {
            year: Some(record.year.to_string()),
            name: Some(record.name.clone()),
            mission_type: Some(record.mission_type.clone()),
            success: Some(record.success.to_string()),
            countries: Some(record.countries_label(separator)),
            impact: Some(record.impact.to_string()),
        }
    }
}

/// Interpret a success token, case-insensitively, ignoring surrounding whitespace
pub fn parse_success_token(token: &str) -> Option<bool> {
    let lowered = token.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Split a countries cell into trimmed, non-empty tokens
pub fn split_countries(cell: &str, separator: char) -> Vec<String> {
    cell.split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_token() {
        assert_eq!(parse_success_token("true"), Some(true));
        assert_eq!(parse_success_token("True"), Some(true));
        assert_eq!(parse_success_token(" FALSE "), Some(false));
        assert_eq!(parse_success_token("yes"), Some(true));
        assert_eq!(parse_success_token("0"), Some(false));
        assert_eq!(parse_success_token("maybe"), None);
        assert_eq!(parse_success_token(""), None);
    }

    #[test]
    fn test_split_countries() {
        assert_eq!(split_countries("USA", '/'), vec!["USA"]);
        assert_eq!(split_countries("USA/ USSR", '/'), vec!["USA", "USSR"]);
        assert_eq!(split_countries("ESA//Japan/", '/'), vec!["ESA", "Japan"]);
        assert!(split_countries(" / ", '/').is_empty());
    }

    #[test]
    fn test_raw_row_from_record() {
        let record = MissionRecord {
            year: 1975,
            name: "Apollo-Soyuz".to_string(),
            mission_type: "Earth Orbit".to_string(),
            success: true,
            countries: vec!["USA".to_string(), "USSR".to_string()],
            impact: 6.5,
        };

        let row = RawMissionRow::from_record(&record, '/');
        assert_eq!(row.year.as_deref(), Some("1975"));
        assert_eq!(row.success.as_deref(), Some("true"));
        assert_eq!(row.countries.as_deref(), Some("USA/USSR"));
        assert_eq!(row.impact.as_deref(), Some("6.5"));
    }
}
