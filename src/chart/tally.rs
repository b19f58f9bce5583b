//! Per-year success/failure aggregation

use crate::models::MissionRecord;
use std::collections::BTreeMap;

/// Mission outcomes for a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTally {
    pub year: i32,
    pub successes: u32,
    pub failures: u32,
}

impl YearTally {
    /// All missions flown that year
    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }

    /// Success percentage for the year
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.successes as f64 / total as f64) * 100.0,
        }
    }
}

/// Group records by year, ascending
pub fn tally_by_year(records: &[MissionRecord]) -> Vec<YearTally> {
    let mut by_year: BTreeMap<i32, YearTally> = BTreeMap::new();

    for record in records {
        let tally = by_year.entry(record.year).or_insert(YearTally {
            year: record.year,
            successes: 0,
            failures: 0,
        });
        if record.success {
            tally.successes += 1;
        } else {
            tally.failures += 1;
        }
    }

    by_year.into_values().collect()
}

/// Mean of the per-year success rates, `None` without data
pub fn average_success_rate(tallies: &[YearTally]) -> Option<f64> {
    if tallies.is_empty() {
        return None;
    }
    let sum: f64 = tallies.iter().map(YearTally::success_rate).sum();
    Some(sum / tallies.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, success: bool) -> MissionRecord {
        MissionRecord {
            year,
            name: format!("Mission {}", year),
            mission_type: "Lunar".to_string(),
            success,
            countries: vec!["USA".to_string()],
            impact: 5.0,
        }
    }

    #[test]
    fn test_tally_groups_and_sorts_by_year() {
        let records = vec![
            record(1974, false),
            record(1971, true),
            record(1974, true),
            record(1971, true),
            record(1974, false),
        ];

        let tallies = tally_by_year(&records);

        assert_eq!(
            tallies,
            vec![
                YearTally { year: 1971, successes: 2, failures: 0 },
                YearTally { year: 1974, successes: 1, failures: 2 },
            ]
        );
        assert_eq!(tallies[1].total(), 3);
        assert!((tallies[1].success_rate() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_success_rate() {
        assert_eq!(average_success_rate(&[]), None);

        let tallies = vec![
            YearTally { year: 1971, successes: 1, failures: 0 },
            YearTally { year: 1972, successes: 1, failures: 1 },
        ];
        assert_eq!(average_success_rate(&tallies), Some(75.0));
    }

    #[test]
    fn test_empty_records_give_no_tallies() {
        assert!(tally_by_year(&[]).is_empty());
    }
}
