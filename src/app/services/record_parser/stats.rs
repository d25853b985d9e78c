//! Parsing statistics and result structures for renewal line parsing
//!
//! This module provides types for tracking how many candidate lines were
//! decoded or skipped, and carries the decoded records to the next stage.

use crate::app::models::AnnuityRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Successfully decoded records, in file order
    pub records: Vec<AnnuityRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines between the header and the trailer
    pub candidate_lines: usize,

    /// Number of lines decoded into records
    pub records_decoded: usize,

    /// Number of lines skipped (wrong width or decode failure)
    pub lines_skipped: usize,

    /// Numeric columns that could not be parsed on decoded lines
    pub numeric_issues: usize,

    /// One entry per skipped line, for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.candidate_lines == 0 {
            0.0
        } else {
            (self.records_decoded as f64 / self.candidate_lines as f64) * 100.0
        }
    }

    /// Every candidate line is either decoded or skipped
    pub fn is_balanced(&self) -> bool {
        self.records_decoded + self.lines_skipped == self.candidate_lines
    }
}
