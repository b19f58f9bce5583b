//! Tabular text rendering of mission records

use crate::constants::{NO_MATCHES_MESSAGE, TABLE_RULE_WIDTH, table_widths};
use crate::models::MissionRecord;
use std::fmt::Write;

/// Render records as an aligned table, in their given order
///
/// An empty slice renders the "no missions match" message instead of an
/// empty table.
pub fn format_table(records: &[MissionRecord], country_separator: char) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_MATCHES_MESSAGE);
    }

    let mut out = String::new();
    push_row(
        &mut out,
        ["Year", "Mission", "Type", "Success", "Countries", "Impact"].map(String::from),
    );
    out.push_str(&"-".repeat(TABLE_RULE_WIDTH));
    out.push('\n');

    for record in records {
        push_row(
            &mut out,
            [
                record.year.to_string(),
                record.name.clone(),
                record.mission_type.clone(),
                success_mark(record.success).to_string(),
                record.countries_label(country_separator),
                record.impact.to_string(),
            ],
        );
    }
    out
}

/// ✓ for a successful mission, ✗ otherwise
pub fn success_mark(success: bool) -> &'static str {
    if success { "✓" } else { "✗" }
}

fn push_row(out: &mut String, cells: [String; 6]) {
    let [year, mission, mission_type, success, countries, impact] = cells;
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:<yw$} {:<mw$} {:<tw$} {:<sw$} {:<cw$} {}",
        year,
        mission,
        mission_type,
        success,
        countries,
        impact,
        yw = table_widths::YEAR,
        mw = table_widths::MISSION,
        tw = table_widths::TYPE,
        sw = table_widths::SUCCESS,
        cw = table_widths::COUNTRIES,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, name: &str, success: bool, countries: &[&str], impact: f64) -> MissionRecord {
        MissionRecord {
            year,
            name: name.to_string(),
            mission_type: "Mars".to_string(),
            success,
            countries: countries.iter().map(|c| c.to_string()).collect(),
            impact,
        }
    }

    #[test]
    fn test_empty_table_prints_message() {
        assert_eq!(
            format_table(&[], '/'),
            "No missions match the specified criteria.\n"
        );
    }

    #[test]
    fn test_table_rows_follow_input_order() {
        let records = vec![
            record(1976, "Viking 2", true, &["USA"], 8.0),
            record(1971, "Mars 2", false, &["USSR"], 3.5),
        ];

        let table = format_table(&records, '/');
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Year   Mission"));
        assert_eq!(lines[1], "-".repeat(TABLE_RULE_WIDTH));
        assert!(lines[2].starts_with("1976   Viking 2"));
        assert!(lines[2].contains("✓"));
        assert!(lines[2].ends_with(" 8"));
        assert!(lines[3].starts_with("1971   Mars 2"));
        assert!(lines[3].contains("✗"));
        assert!(lines[3].ends_with(" 3.5"));
    }

    #[test]
    fn test_countries_joined_with_separator() {
        let records = vec![record(1975, "Apollo-Soyuz", true, &["USA", "USSR"], 6.0)];
        let table = format_table(&records, '/');
        assert!(table.contains("USA/USSR"));
    }
}
