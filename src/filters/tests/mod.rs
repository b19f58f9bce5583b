//! Tests for predicates and filter composition


use crate::models::MissionRecord;

/// Create a test mission record
pub fn create_test_mission(
    year: i32,
    name: &str,
    mission_type: &str,
    success: bool,
    countries: &[&str],
    impact: f64,
) -> MissionRecord {
    MissionRecord {
        year,
        name: name.to_string(),
        mission_type: mission_type.to_string(),
        success,
        countries: countries.iter().map(|c| c.to_string()).collect(),
        impact,
    }
}

/// The six-mission fixture used across filter tests
///
/// Years 1971, 1972, 1973, 1975, 1977, 1980; only 1973 is prime.
pub fn create_sample_missions() -> Vec<MissionRecord> {
    vec![
        create_test_mission(1971, "Mars 1", "Mars", true, &["USSR"], 5.0),
        create_test_mission(1972, "Pioneer 10", "Jupiter", true, &["USA"], 8.0),
        create_test_mission(1973, "Pioneer 11", "Jupiter", true, &["USA"], 7.0),
        create_test_mission(1975, "Viking 1", "Mars", true, &["USA"], 9.0),
        create_test_mission(1977, "Voyager 1", "Outer Planets", true, &["USA"], 10.0),
        create_test_mission(1980, "Test Mission", "Earth", false, &["USSR"], 2.0),
    ]
}

/// Names of the given records, in order
pub fn names(records: &[MissionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
