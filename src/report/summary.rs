//! Summary statistics over a mission sequence
//!
//! Counts, success rate, average impact and per-category breakdowns. Every
//! rate is guarded against the empty sequence.

use crate::models::MissionRecord;
use std::collections::HashMap;
use std::fmt::Write;

/// Aggregate statistics for a (possibly filtered) record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Number of missions
    pub total: usize,
    /// Number of successful missions
    pub successes: usize,
    /// Earliest and latest year, `None` when there is no data
    pub year_range: Option<(i32, i32)>,
    /// Sum of impact scores, kept for the average
    pub impact_sum: f64,
    /// Missions per type, most common first
    pub by_type: Vec<(String, usize)>,
    /// Missions per country, most common first
    pub by_country: Vec<(String, usize)>,
}

impl SummaryStats {
    /// Compute statistics for the given records
    pub fn from_records(records: &[MissionRecord]) -> Self {
        let successes = records.iter().filter(|r| r.success).count();
        let impact_sum: f64 = records.iter().map(|r| r.impact).sum();

        let year_range = records
            .iter()
            .map(|r| r.year)
            .fold(None, |range, year| match range {
                None => Some((year, year)),
                Some((lo, hi)) => Some((i32::min(lo, year), i32::max(hi, year))),
            });

        let by_type = most_common(records.iter().map(|r| vec![r.mission_type.as_str()]));
        let by_country = most_common(
            records
                .iter()
                .map(|r| r.countries.iter().map(String::as_str).collect()),
        );

        Self {
            total: records.len(),
            successes,
            year_range,
            impact_sum,
            by_type,
            by_country,
        }
    }

    /// Number of failed missions
    pub fn failures(&self) -> usize {
        self.total - self.successes
    }

    /// Success percentage, 0 for an empty set
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.successes as f64 / self.total as f64) * 100.0
        }
    }

    /// Mean impact score, 0 for an empty set
    pub fn average_impact(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.impact_sum / self.total as f64
        }
    }

    /// Whether the statistics cover any missions
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count category occurrences, most common first, ties in order of first appearance.
/// A category listed twice in one item is counted once for that item.
fn most_common<'a, I>(items: I) -> Vec<(String, usize)>
where
    I: Iterator<Item = Vec<&'a str>>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for mut categories in items {
        categories.sort_unstable();
        categories.dedup();
        for category in categories {
            match index.get(category) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(category, counts.len());
                    counts.push((category.to_string(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Render the summary block printed after the table
pub fn format_summary(stats: &SummaryStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Summary Statistics ===");
    let _ = writeln!(out, "Total missions: {}", stats.total);
    match stats.year_range {
        Some((first, last)) => {
            let _ = writeln!(out, "Years covered: {} to {}", first, last);
        }
        None => {
            let _ = writeln!(out, "Years covered: no data");
        }
    }
    let _ = writeln!(
        out,
        "Successful missions: {} ({} failed)",
        stats.successes,
        stats.failures()
    );
    let _ = writeln!(out, "Success rate: {:.1}%", stats.success_rate());
    let _ = writeln!(out, "Average impact: {:.1}", stats.average_impact());

    if !stats.is_empty() {
        let _ = writeln!(out, "\nMission types breakdown:");
        for (mission_type, count) in &stats.by_type {
            let _ = writeln!(out, "  {}: {}", mission_type, pluralize(*count));
        }

        let _ = writeln!(out, "\nParticipating countries breakdown:");
        for (country, count) in &stats.by_country {
            let _ = writeln!(out, "  {}: {}", country, pluralize(*count));
        }
    }

    out
}

fn pluralize(count: usize) -> String {
    if count == 1 {
        "1 mission".to_string()
    } else {
        format!("{} missions", count)
    }
}
