//! Mission filtering
//!
//! # Architecture
//!
//! - [`predicates`] - pure tests on a record field (primality, divisibility,
//!   categorical and boolean equality, impact threshold)
//! - [`composer`] - builds the conjunctive [`CompositeFilter`] from
//!   [`FilterOptions`] and applies it
//!
//! Filters never mutate the loaded records: [`CompositeFilter::apply`]
//! returns a new vector holding the matching records in their original
//! order. With no active criteria it returns every record.
//!
//! # Example Usage
//!
//! ```rust
//! use mission_analyzer::filters::{CompositeFilter, FilterOptions};
//! use mission_analyzer::models::MissionRecord;
//!
//! # fn example(records: Vec<MissionRecord>) -> mission_analyzer::Result<()> {
//! let options = FilterOptions {
//!     mission_type: Some("Mars".to_string()),
//!     success: Some(true),
//!     ..FilterOptions::default()
//! };
//! let filter = CompositeFilter::from_options(&options)?;
//! let successful_mars = filter.apply(&records);
//! println!("{} of {} missions match", successful_mars.len(), records.len());
//! # Ok(())
//! # }
//! ```

pub mod composer;
pub mod predicates;

#[cfg(test)]
pub mod tests;

pub use composer::{CompositeFilter, FilterOptions, RecordFilter};
pub use predicates::{
    has_country, is_divisible_by, is_prime, matches_category, matches_success, meets_impact,
};
