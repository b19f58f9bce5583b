//! Text reporting for mission records
//!
//! - [`table`] - aligned record table in input order
//! - [`summary`] - counts, success rate, average impact, breakdowns

pub mod summary;
pub mod table;

pub use summary::{SummaryStats, format_summary};
pub use table::{format_table, success_mark};
