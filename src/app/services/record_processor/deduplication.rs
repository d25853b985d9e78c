//! Per-case deduplication of renewal records
//!
//! Every case code keeps exactly one representative record:
//! 1. If any record of the case has the empty next-renewal sentinel, the
//!    first such record in file order is kept, so a pending correction
//!    surfaces exactly once.
//! 2. Otherwise the record with the greatest raw `yyyyMMdd` string wins.
//!    The comparison is on the digit string, which orders chronologically
//!    because the format is zero-padded.
//!
//! Cases are emitted in the order their code first appears in the input.

use crate::app::models::{AnnuityRecord, ProcessResult, has_next_renewal_date};
use crate::config::ProcessorConfig;
use crate::constants::COUNTRY_MISMATCH_NOTE;
use std::collections::HashMap;
use tracing::debug;

/// How the representative of a case was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First of `empty_count` records with the empty sentinel
    EmptyDated { empty_count: usize },
    /// Greatest raw next-renewal value among non-empty records
    Latest,
}

/// Group records by case code, keeping first-seen case order and file order within a case
pub fn group_by_case(records: Vec<AnnuityRecord>) -> Vec<(String, Vec<AnnuityRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<AnnuityRecord>> = HashMap::new();

    for record in records {
        if !groups.contains_key(&record.case_code) {
            order.push(record.case_code.clone());
        }
        groups
            .entry(record.case_code.clone())
            .or_default()
            .push(record);
    }

    order
        .into_iter()
        .filter_map(|case_code| {
            groups
                .remove(&case_code)
                .map(|group| (case_code, group))
        })
        .collect()
}

/// Pick the representative of one non-empty case group
///
/// Returns `None` only for an empty group.
pub fn select_representative(group: Vec<AnnuityRecord>) -> Option<(AnnuityRecord, Selection)> {
    let empty_count = group
        .iter()
        .filter(|record| !has_next_renewal_date(record))
        .count();

    if empty_count > 0 {
        return group
            .into_iter()
            .find(|record| !has_next_renewal_date(record))
            .map(|record| (record, Selection::EmptyDated { empty_count }));
    }

    // Strictly greater only, so the earliest record wins a tie
    let mut latest: Option<AnnuityRecord> = None;
    for record in group {
        let replace = match &latest {
            Some(current) => {
                record.next_renewal_date_raw.as_bytes() > current.next_renewal_date_raw.as_bytes()
            }
            None => true,
        };
        if replace {
            latest = Some(record);
        }
    }

    latest.map(|record| (record, Selection::Latest))
}

/// Reduce `records` to one representative per case code
///
/// Appends one audit message per case to `report`. Repeated empty-dated
/// records outside the configured countries raise the warning flag.
pub fn deduplicate_records(
    records: Vec<AnnuityRecord>,
    config: &ProcessorConfig,
    report: &mut ProcessResult,
) -> Vec<AnnuityRecord> {
    let input_count = records.len();
    let mut deduplicated = Vec::new();

    for (case_code, group) in group_by_case(records) {
        let group_size = group.len();
        let Some((representative, selection)) = select_representative(group) else {
            continue;
        };

        let message = format!(
            "{}: Annuity record added. Latest Annuity Date = {}, Annuity dates count: {}, Country: {}",
            case_code,
            representative.next_renewal_date_raw,
            group_size,
            representative.country_code
        );

        match selection {
            Selection::EmptyDated { empty_count }
                if empty_count > 1 && !config.allows_repeat_empty(&representative.country_code) =>
            {
                report.flag_warning(format!("{} {}", message, COUNTRY_MISMATCH_NOTE));
            }
            _ => report.info(message),
        }

        debug!(
            "Case {}: kept 1 of {} records ({:?})",
            case_code, group_size, selection
        );
        deduplicated.push(representative);
    }

    debug!(
        "Deduplication complete: {} records reduced to {} cases",
        input_count,
        deduplicated.len()
    );

    deduplicated
}

/// Analyze case grouping in a collection of records
///
/// # Returns
///
/// Tuple of (total_cases, duplicate_cases, empty_dated_cases)
pub fn analyze_case_groups(records: &[AnnuityRecord]) -> (usize, usize, usize) {
    let mut groups: HashMap<&str, (usize, bool)> = HashMap::new();

    for record in records {
        let entry = groups.entry(record.case_code.as_str()).or_insert((0, false));
        entry.0 += 1;
        entry.1 |= !has_next_renewal_date(record);
    }

    let total_cases = groups.len();
    let duplicate_cases = groups.values().filter(|(count, _)| *count > 1).count();
    let empty_dated_cases = groups.values().filter(|(_, empty)| *empty).count();

    (total_cases, duplicate_cases, empty_dated_cases)
}
