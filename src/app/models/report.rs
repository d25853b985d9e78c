//! Run report: diagnostic messages, severity flags and summary counters
//!
//! A [`ProcessResult`] is created at the start of a run and passed by
//! mutable reference through every stage. Stages append messages through
//! the severity helpers, which also mirror each message to `tracing`.
//! The `has_warnings` and `has_errors` flags only ever go from false to true.

use crate::constants::severity_prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

/// Severity of a report message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Message prefix for this severity
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Info => severity_prefix::INFO,
            Severity::Warning => severity_prefix::WARNING,
            Severity::Error => severity_prefix::ERROR,
        }
    }
}

/// One diagnostic line of the run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMessage {
    pub severity: Severity,
    pub text: String,
}

impl fmt::Display for ReportMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.prefix(), self.text)
    }
}

/// Counters collected while a run progresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Lines between the header and trailer lines
    pub candidate_lines: usize,
    /// Candidate lines decoded into records
    pub decoded_records: usize,
    /// Candidate lines skipped (wrong width or failed decode)
    pub skipped_lines: usize,
    /// Numeric columns that could not be parsed
    pub numeric_issues: usize,
    /// Distinct case codes after deduplication
    pub unique_cases: usize,
    /// Rows written to the correction workbook
    pub exported_rows: usize,
}

impl RunStats {
    /// Percentage of candidate lines that decoded successfully
    pub fn decode_rate(&self) -> f64 {
        if self.candidate_lines == 0 {
            0.0
        } else {
            (self.decoded_records as f64 / self.candidate_lines as f64) * 100.0
        }
    }
}

/// Aggregate outcome of one processing run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Number of records decoded from the feed (0 when the feed is rejected)
    pub total_records: usize,

    /// Ordered, append-only diagnostics
    pub messages: Vec<ReportMessage>,

    /// Set once any stage reports an error
    pub has_errors: bool,

    /// Set once any stage reports a flagged warning
    pub has_warnings: bool,

    /// Summary counters
    pub stats: RunStats,
}

impl ProcessResult {
    /// Create an empty result for a new run
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, text: String) {
        self.messages.push(ReportMessage { severity, text });
    }

    /// Append an informational message
    pub fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{}", text);
        self.push(Severity::Info, text);
    }

    /// Append a warning message without raising the warning flag
    ///
    /// Used for per-line skips, which are recorded but do not mark the run.
    pub fn warn(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!("{}", text);
        self.push(Severity::Warning, text);
    }

    /// Append a warning message and raise `has_warnings`
    pub fn flag_warning(&mut self, text: impl Into<String>) {
        self.warn(text);
        self.has_warnings = true;
    }

    /// Append an error message and raise `has_errors`
    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        error!("{}", text);
        self.push(Severity::Error, text);
        self.has_errors = true;
    }

    /// Reject the whole run: record the reason, zero the total and raise `has_errors`
    pub fn abort(&mut self, text: impl Into<String>) {
        self.warn(text);
        self.total_records = 0;
        self.has_errors = true;
    }

    /// Messages of the given severity, in order
    pub fn messages_with(&self, severity: Severity) -> impl Iterator<Item = &ReportMessage> {
        self.messages.iter().filter(move |m| m.severity == severity)
    }

    /// True if any message text contains `needle`
    pub fn contains_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }

    /// Messages rendered with their severity prefix
    pub fn lines(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.to_string()).collect()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Run Summary: {} records from {} candidate lines ({:.1}% decoded) | \
             Skipped: {} | Unique cases: {} | Exported rows: {} | Warnings: {} | Errors: {}",
            self.total_records,
            self.stats.candidate_lines,
            self.stats.decode_rate(),
            self.stats.skipped_lines,
            self.stats.unique_cases,
            self.stats.exported_rows,
            self.has_warnings,
            self.has_errors
        )
    }
}
