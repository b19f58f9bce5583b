//! Conjunctive filter composition
//!
//! Turns the optional criteria selected on the command line into a single
//! predicate (the logical AND of every active criterion) and applies it to a
//! record sequence without reordering it.

use super::predicates::{
    has_country, is_divisible_by, is_prime, matches_category, matches_success, meets_impact,
};
use crate::error::{MissionError, Result};
use crate::models::MissionRecord;
use std::fmt;
use tracing::{debug, info};

/// Optional filter criteria; `None`/`false` imposes no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Keep only prime years
    pub prime_years: bool,
    /// Keep only years divisible by this value
    pub divisible_by: Option<i64>,
    /// Keep only this mission type
    pub mission_type: Option<String>,
    /// Keep only missions listing this country
    pub country: Option<String>,
    /// Keep only this success status
    pub success: Option<bool>,
    /// Keep only missions with at least this impact
    pub min_impact: Option<f64>,
    /// Exact-case matching for mission type and country
    pub case_sensitive: bool,
}

/// One active criterion
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    PrimeYear,
    DivisibleBy(i64),
    MissionType(String),
    Country(String),
    Success(bool),
    MinImpact(f64),
}

impl RecordFilter {
    /// Test a single record against this criterion
    pub fn matches(&self, record: &MissionRecord, case_sensitive: bool) -> bool {
        match self {
            RecordFilter::PrimeYear => is_prime(i64::from(record.year)),
            // The divisor is validated non-zero when the filter is built
            RecordFilter::DivisibleBy(divisor) => {
                is_divisible_by(i64::from(record.year), *divisor).unwrap_or(false)
            }
            RecordFilter::MissionType(value) => {
                matches_category(&record.mission_type, value, case_sensitive)
            }
            RecordFilter::Country(value) => has_country(&record.countries, value, case_sensitive),
            RecordFilter::Success(wanted) => matches_success(record.success, *wanted),
            RecordFilter::MinImpact(minimum) => meets_impact(record.impact, *minimum),
        }
    }
}

impl fmt::Display for RecordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFilter::PrimeYear => write!(f, "prime year"),
            RecordFilter::DivisibleBy(divisor) => write!(f, "year divisible by {}", divisor),
            RecordFilter::MissionType(value) => write!(f, "type = {}", value),
            RecordFilter::Country(value) => write!(f, "country includes {}", value),
            RecordFilter::Success(wanted) => write!(f, "success = {}", wanted),
            RecordFilter::MinImpact(minimum) => write!(f, "impact >= {}", minimum),
        }
    }
}

/// The AND of every active criterion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeFilter {
    filters: Vec<RecordFilter>,
    case_sensitive: bool,
}

impl CompositeFilter {
    /// Validate options and build the combined filter
    ///
    /// # Errors
    /// * `MissionError::InvalidArgument` for a zero divisor, blank mission type
    ///   or country, or a non-finite impact threshold
    pub fn from_options(options: &FilterOptions) -> Result<Self> {
        let mut filters = Vec::new();

        if options.prime_years {
            filters.push(RecordFilter::PrimeYear);
        }

        if let Some(divisor) = options.divisible_by {
            if divisor == 0 {
                return Err(MissionError::invalid_argument(
                    "--divisible-by 0",
                    "cannot test divisibility by zero",
                ));
            }
            filters.push(RecordFilter::DivisibleBy(divisor));
        }

        if let Some(mission_type) = &options.mission_type {
            filters.push(RecordFilter::MissionType(non_blank("--type", mission_type)?));
        }

        if let Some(country) = &options.country {
            filters.push(RecordFilter::Country(non_blank("--country", country)?));
        }

        if let Some(success) = options.success {
            filters.push(RecordFilter::Success(success));
        }

        if let Some(minimum) = options.min_impact {
            if !minimum.is_finite() {
                return Err(MissionError::invalid_argument(
                    format!("--impact {}", minimum),
                    "impact threshold must be a finite number",
                ));
            }
            filters.push(RecordFilter::MinImpact(minimum));
        }

        debug!("Built composite filter with {} criteria", filters.len());
        Ok(Self {
            filters,
            case_sensitive: options.case_sensitive,
        })
    }

    /// Active criteria in the order they were added
    pub fn filters(&self) -> &[RecordFilter] {
        &self.filters
    }

    /// True when no criterion is active
    pub fn is_identity(&self) -> bool {
        self.filters.is_empty()
    }

    /// True iff the record satisfies every active criterion
    pub fn matches(&self, record: &MissionRecord) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(record, self.case_sensitive))
    }

    /// The matching subsequence, in original order
    pub fn apply(&self, records: &[MissionRecord]) -> Vec<MissionRecord> {
        let filtered: Vec<MissionRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        info!(
            "Filtering complete: {} -> {} missions ({})",
            records.len(),
            filtered.len(),
            self.describe()
        );
        filtered
    }

    /// Human-readable list of active criteria
    pub fn describe(&self) -> String {
        if self.filters.is_empty() {
            return "no filters".to_string();
        }
        self.filters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

fn non_blank(argument: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MissionError::invalid_argument(
            argument,
            "value cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}
