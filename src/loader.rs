//! Mission dataset loading and export
//!
//! Reads the comma-separated mission file into typed records, validating
//! every field once, and writes records back out in the same layout.

use crate::constants::{CANONICAL_HEADER, DOCUMENTED_YEAR_RANGE};
use crate::error::{MissionError, Result};
use crate::models::{MissionRecord, RawMissionRow, parse_success_token, split_countries};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Required columns with the alternative name each may appear under
const REQUIRED_COLUMNS: &[(&str, Option<&str>)] = &[
    ("year", None),
    ("name", Some("mission_name")),
    ("mission_type", None),
    ("success", None),
    ("countries", Some("participating_countries")),
    ("impact", Some("scientific_impact")),
];

/// Load every mission record from a file
///
/// # Errors
/// * `MissionError::FileAccess` if the path is missing, a directory or unreadable
/// * `MissionError::DataFormat` for a missing column or a row that fails validation
pub fn load_records(path: &Path, country_separator: char) -> Result<Vec<MissionRecord>> {
    debug!("Opening mission dataset: {}", path.display());

    if path.is_dir() {
        return Err(MissionError::file_access(
            path,
            std::io::Error::other("path is a directory"),
        ));
    }

    let file = File::open(path).map_err(|e| MissionError::file_access(path, e))?;
    let source_label = path.display().to_string();
    let records = read_records(BufReader::new(file), &source_label, country_separator)?;

    info!("Loaded {} missions from {}", records.len(), source_label);
    Ok(records)
}

/// Parse mission records from any reader; `source_label` names the input in errors
pub fn read_records<R: Read>(
    reader: R,
    source_label: &str,
    country_separator: char,
) -> Result<Vec<MissionRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_failure(source_label, e))?
        .clone();
    check_columns(&headers, source_label)?;

    let mut row = StringRecord::new();
    let mut records = Vec::new();

    while csv_reader
        .read_record(&mut row)
        .map_err(|e| csv_failure(source_label, e))?
    {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawMissionRow = row
            .deserialize(Some(&headers))
            .map_err(|e| MissionError::data_format(source_label, line, e.to_string()))?;

        records.push(parse_row(&raw, source_label, line, country_separator)?);
    }

    Ok(records)
}

/// Write records with the canonical header, one row per record
pub fn write_records<W: Write>(
    writer: W,
    records: &[MissionRecord],
    country_separator: char,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(CANONICAL_HEADER)
        .map_err(write_failure)?;
    for record in records {
        csv_writer
            .serialize(RawMissionRow::from_record(record, country_separator))
            .map_err(write_failure)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write records to a file, replacing it if it exists
pub fn save_records(path: &Path, records: &[MissionRecord], country_separator: char) -> Result<()> {
    let file = File::create(path).map_err(|e| MissionError::file_access(path, e))?;
    write_records(BufWriter::new(file), records, country_separator)?;

    info!("Exported {} missions to {}", records.len(), path.display());
    Ok(())
}

fn check_columns(headers: &StringRecord, source_label: &str) -> Result<()> {
    for (column, alias) in REQUIRED_COLUMNS {
        let present = headers
            .iter()
            .any(|h| h == *column || alias.is_some_and(|a| h == a));
        if !present {
            return Err(MissionError::data_format(
                source_label,
                1,
                format!("missing required column '{}'", column),
            ));
        }
    }
    Ok(())
}

fn parse_row(
    raw: &RawMissionRow,
    source_label: &str,
    line: u64,
    country_separator: char,
) -> Result<MissionRecord> {
    let invalid = |reason: String| MissionError::data_format(source_label, line, reason);

    let year_text = required(&raw.year, "year").map_err(&invalid)?;
    let year: i32 = year_text
        .parse()
        .map_err(|_| invalid(format!("year '{}' is not an integer", year_text)))?;
    if year < DOCUMENTED_YEAR_RANGE.0 || year > DOCUMENTED_YEAR_RANGE.1 {
        debug!(
            "{} line {}: year {} outside documented range {}-{}",
            source_label, line, year, DOCUMENTED_YEAR_RANGE.0, DOCUMENTED_YEAR_RANGE.1
        );
    }

    let name = required(&raw.name, "name").map_err(&invalid)?;
    let mission_type = required(&raw.mission_type, "mission_type").map_err(&invalid)?;

    let success_text = required(&raw.success, "success").map_err(&invalid)?;
    let success = parse_success_token(success_text)
        .ok_or_else(|| invalid(format!("success '{}' is not a boolean", success_text)))?;

    let countries_text = required(&raw.countries, "countries").map_err(&invalid)?;
    let countries = split_countries(countries_text, country_separator);
    if countries.is_empty() {
        return Err(invalid(format!(
            "countries '{}' contains no country names",
            countries_text
        )));
    }

    let impact_text = required(&raw.impact, "impact").map_err(&invalid)?;
    let impact: f64 = impact_text
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| invalid(format!("impact '{}' is not a number", impact_text)))?;

    Ok(MissionRecord {
        year,
        name: name.to_string(),
        mission_type: mission_type.to_string(),
        success,
        countries,
        impact,
    })
}

fn required<'a>(value: &'a Option<String>, field: &str) -> std::result::Result<&'a str, String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(format!("missing value for '{}'", field)),
    }
}

fn csv_failure(source_label: &str, error: csv::Error) -> MissionError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => MissionError::Io(io_error),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => MissionError::data_format(
            source_label,
            line,
            format!("expected {} fields, found {}", expected_len, len),
        ),
        csv::ErrorKind::Utf8 { err, .. } => {
            MissionError::data_format(source_label, line, format!("invalid UTF-8: {}", err))
        }
        other => MissionError::data_format(source_label, line, format!("{:?}", other)),
    }
}

fn write_failure(error: csv::Error) -> MissionError {
    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => MissionError::Io(io_error),
        other => MissionError::Io(std::io::Error::other(format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    const SAMPLE: &str = "\
year,name,mission_type,success,countries,impact
1971,Mars 3,Mars,true,USSR,8
1974,Venera 9,Venus,false,USSR,3
1975,Apollo-Soyuz,Earth Orbit,true,USA/USSR,6.5
";

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records_parses_typed_fields() {
        let file = write_temp(SAMPLE);
        let records = load_records(file.path(), '/').unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].year, 1971);
        assert_eq!(records[0].name, "Mars 3");
        assert!(records[0].success);
        assert_eq!(records[0].impact, 8.0);
        assert!(!records[1].success);
        assert_eq!(records[2].countries, vec!["USA", "USSR"]);
        assert_eq!(records[2].impact, 6.5);
    }

    #[test]
    fn test_long_column_names_and_capitalized_booleans() {
        let contents = "\
year,mission_name,mission_type,success,participating_countries,scientific_impact
1971,Mars 1,Mars,True,USSR,5
1980,Test Mission,Earth,False,USSR,2
";
        let records = read_records(contents.as_bytes(), "inline", '/').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Mars 1");
        assert!(records[0].success);
        assert_eq!(records[1].name, "Test Mission");
        assert!(!records[1].success);
        assert_eq!(records[1].impact, 2.0);
    }

    #[test]
    fn test_header_with_spaces_is_accepted() {
        let contents = "year, name, mission_type, success, countries, impact\n1976, Viking 1, Mars, true, USA, 9\n";
        let records = read_records(contents.as_bytes(), "inline", '/').unwrap();
        assert_eq!(records[0].name, "Viking 1");
        assert_eq!(records[0].countries, vec!["USA"]);
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.csv");

        match load_records(&missing, '/') {
            Err(MissionError::FileAccess { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected FileAccess error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_file_access_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_records(temp_dir.path(), '/');
        assert!(matches!(result, Err(MissionError::FileAccess { .. })));
    }

    #[test]
    fn test_bad_year_reports_line() {
        let contents = "\
year,name,mission_type,success,countries,impact
1971,Mars 3,Mars,true,USSR,8
nineteen,Venera 9,Venus,false,USSR,3
";
        match read_records(contents.as_bytes(), "inline", '/') {
            Err(MissionError::DataFormat { line, reason, .. }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("year"));
            }
            other => panic!("Expected DataFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let header = "year,name,mission_type,success,countries,impact\n";
        let bad_rows = [
            "1971,Mars 3,Mars,perhaps,USSR,8\n",
            "1971,Mars 3,Mars,true,USSR,high\n",
            "1971,Mars 3,Mars,true,USSR,NaN\n",
            "1971,,Mars,true,USSR,8\n",
            "1971,Mars 3,Mars,true, / ,8\n",
            "1971,Mars 3,Mars,true,USSR\n",
        ];

        for row in bad_rows {
            let contents = format!("{}{}", header, row);
            let result = read_records(contents.as_bytes(), "inline", '/');
            match result {
                Err(MissionError::DataFormat { line, .. }) => assert_eq!(line, 2, "row: {}", row),
                other => panic!("Expected DataFormat error for {:?}, got {:?}", row, other),
            }
        }
    }

    #[test]
    fn test_missing_column_is_reported_on_header_line() {
        let contents = "year,name,mission_type,success,countries\n1971,Mars 3,Mars,true,USSR\n";
        match read_records(contents.as_bytes(), "inline", '/') {
            Err(MissionError::DataFormat { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("impact"));
            }
            other => panic!("Expected DataFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_file_loads_empty() {
        let contents = "year,name,mission_type,success,countries,impact\n";
        let records = read_records(contents.as_bytes(), "inline", '/').unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_out_of_range_year_is_accepted() {
        let contents = "year,name,mission_type,success,countries,impact\n2004,Rosetta,Comet,true,ESA,9\n";
        let records = read_records(contents.as_bytes(), "inline", '/').unwrap();
        assert_eq!(records[0].year, 2004);
    }

    #[test]
    fn test_write_reproduces_loaded_rows() {
        let records = read_records(SAMPLE.as_bytes(), "inline", '/').unwrap();

        let mut buffer = Vec::new();
        write_records(&mut buffer, &records, '/').unwrap();
        let written = String::from_utf8(buffer).unwrap();

        assert_eq!(written, SAMPLE);
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[], '/').unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "year,name,mission_type,success,countries,impact\n"
        );
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.csv");
        let records = read_records(SAMPLE.as_bytes(), "inline", '/').unwrap();

        save_records(&path, &records, '/').unwrap();
        let reloaded = load_records(&path, '/').unwrap();

        assert_eq!(reloaded, records);
    }
}
