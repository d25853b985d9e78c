//! Fixed-width parser for annuity renewal export files
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting, width validation and skip reporting
//! - [`decoder`] - Decoding of a single line into an [`AnnuityRecord`](crate::app::models::AnnuityRecord)
//! - [`field_parsers`] - Character-offset slicing and numeric parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use annuity_processor::app::models::ProcessResult;
//! use annuity_processor::app::services::record_parser::RecordParser;
//!
//! let mut report = ProcessResult::new();
//! let parser = RecordParser::default();
//! let result = parser.parse_content("HEADER\nTRAILER", &mut report, None);
//!
//! assert!(result.records.is_empty());
//! assert_eq!(result.stats.candidate_lines, 0);
//! ```

pub mod decoder;
pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::{DecodedLine, FieldIssue, decode_record};
pub use field_parsers::FixedWidthLine;
pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats};
