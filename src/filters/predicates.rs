//! Record predicates
//!
//! Pure boolean tests on a mission record or one of its fields. None of
//! these allocate or mutate; the composer combines them.

use crate::error::{MissionError, Result};

/// True iff `n` is a prime number
///
/// Trial division by odd candidates up to the integer square root. Values
/// below 2 (including all negatives) are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let n = n as u64;
    let limit = n.isqrt();
    let mut candidate = 3;
    while candidate <= limit {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// True iff `divisor` divides `n` evenly
///
/// # Errors
/// * `MissionError::InvalidArgument` when `divisor` is zero
pub fn is_divisible_by(n: i64, divisor: i64) -> Result<bool> {
    if divisor == 0 {
        return Err(MissionError::invalid_argument(
            "divisor",
            "cannot test divisibility by zero",
        ));
    }

    // checked_rem only fails here for i64::MIN / -1, which divides evenly
    Ok(n.checked_rem(divisor).is_none_or(|remainder| remainder == 0))
}

/// Exact match of a categorical field against a requested value
pub fn matches_category(field: &str, value: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        field == value
    } else {
        field.to_lowercase() == value.to_lowercase()
    }
}

/// True if `value` is one of the record's country tokens
pub fn has_country(countries: &[String], value: &str, case_sensitive: bool) -> bool {
    countries
        .iter()
        .any(|country| matches_category(country, value, case_sensitive))
}

/// Exact boolean match of the success flag
pub fn matches_success(success: bool, wanted: bool) -> bool {
    success == wanted
}

/// True iff `impact >= minimum`
pub fn meets_impact(impact: f64, minimum: f64) -> bool {
    impact >= minimum
}
