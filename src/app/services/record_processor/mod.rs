//! Record processing module for decoded renewal records
//!
//! Runs after line parsing and before export:
//! - [`validation`] - Feed composition check (every record must be an `AG` event)
//! - [`deduplication`] - One representative record per case code, with audit messages
//!
//! # Example Usage
//!
//! ```rust
//! use annuity_processor::app::models::{AnnuityRecord, ProcessResult};
//! use annuity_processor::app::services::record_processor::deduplicate_records;
//! use annuity_processor::config::ProcessorConfig;
//!
//! let record = |raw: &str| AnnuityRecord {
//!     event_code: "AG".to_string(),
//!     case_code: "CASE-1".to_string(),
//!     next_renewal_date_raw: raw.to_string(),
//!     ..Default::default()
//! };
//!
//! let mut report = ProcessResult::new();
//! let unique = deduplicate_records(
//!     vec![record("20230101"), record("20240101")],
//!     &ProcessorConfig::default(),
//!     &mut report,
//! );
//!
//! assert_eq!(unique.len(), 1);
//! assert_eq!(unique[0].next_renewal_date_raw, "20240101");
//! ```

pub mod deduplication;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use deduplication::{
    Selection, analyze_case_groups, deduplicate_records, group_by_case, select_representative,
};
pub use validation::{check_feed_composition, count_non_conforming};
