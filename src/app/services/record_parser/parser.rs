//! Line scanning for renewal export files
//!
//! Splits the file content on line feeds, drops the header and trailer
//! lines, enforces the record width and hands each candidate line to the
//! decoder. Problem lines are skipped with a warning; the run never stops
//! on a single bad line.

use indicatif::ProgressBar;
use tracing::debug;

use super::decoder::decode_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::ProcessResult;
use crate::config::ProcessorConfig;

/// Parser for fixed-width renewal export content
#[derive(Debug, Clone)]
pub struct RecordParser {
    record_length: usize,
    strip_carriage_returns: bool,
    report_numeric_issues: bool,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::from_config(&ProcessorConfig::default())
    }
}

impl RecordParser {
    /// Create a parser using the line settings of `config`
    pub fn from_config(config: &ProcessorConfig) -> Self {
        Self {
            record_length: config.record_length,
            strip_carriage_returns: config.strip_carriage_returns,
            report_numeric_issues: config.report_numeric_issues,
        }
    }

    /// Decode every candidate line of `content`
    ///
    /// The first line is the header and the last is the trailer; only the
    /// lines in between are decoded. Diagnostics go to `report`.
    pub fn parse_content(
        &self,
        content: &str,
        report: &mut ProcessResult,
        progress_bar: Option<&ProgressBar>,
    ) -> ParseResult {
        let lines: Vec<&str> = content.split('\n').collect();
        if lines.len() < 2 {
            report.warn("No data lines found in the provided content.");
            return ParseResult::default();
        }

        let candidates = &lines[1..lines.len() - 1];
        let mut stats = ParseStats::new();
        let mut records = Vec::with_capacity(candidates.len());

        if let Some(pb) = progress_bar {
            pb.set_length(candidates.len() as u64);
            pb.set_position(0);
        }

        for (index, raw_line) in candidates.iter().enumerate() {
            // Line numbers are 1-based and count the header line
            let line_number = index + 2;
            stats.candidate_lines += 1;

            let line = if self.strip_carriage_returns {
                raw_line.strip_suffix('\r').unwrap_or(raw_line)
            } else {
                raw_line
            };

            let length = line.chars().count();
            if length != self.record_length {
                let message = format!(
                    "Record length requirement not met at line {}: expected {} characters, found {}",
                    line_number, self.record_length, length
                );
                stats.lines_skipped += 1;
                stats.errors.push(message.clone());
                report.warn(message);
            } else {
                match decode_record(line, line_number, self.record_length) {
                    Ok(decoded) => {
                        for issue in &decoded.numeric_issues {
                            stats.numeric_issues += 1;
                            if self.report_numeric_issues {
                                report.warn(format!(
                                    "Line {}: {} value '{}' is not a number",
                                    line_number, issue.field, issue.value
                                ));
                            }
                        }
                        records.push(decoded.record);
                        stats.records_decoded += 1;
                    }
                    Err(e) => {
                        let message =
                            format!("Failed to parse record at line {}: {}", line_number, e);
                        debug!("Skipped line {}: {}", line_number, e);
                        stats.lines_skipped += 1;
                        stats.errors.push(message.clone());
                        report.warn(message);
                    }
                }
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        report.info(format!(
            "Processing complete: {} of {} candidate lines decoded",
            stats.records_decoded, stats.candidate_lines
        ));

        ParseResult { records, stats }
    }
}
