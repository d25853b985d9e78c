//! Projection of representative records onto correction worksheet rows

use crate::app::models::{AnnuityRecord, has_next_renewal_date};
use crate::constants::EXPORT_ACTION;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Content of the "Next Renewal Date" column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextRenewalCell {
    /// The record has the empty sentinel; written as the literal `NULL`
    Null,
    /// A decoded next renewal date
    Date(NaiveDate),
    /// Raw value present but no decoded date (non-AG record); left blank
    Blank,
}

/// One row of the correction worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub case_code: String,
    pub action: String,
    pub next_renewal: NextRenewalCell,
    /// Source annuity term plus one; absent for empty-dated cases
    pub annuity_term: Option<i32>,
}

/// Project one representative record onto a worksheet row
pub fn project_row(record: &AnnuityRecord) -> ExportRow {
    let (next_renewal, annuity_term) = if has_next_renewal_date(record) {
        let cell = record
            .next_renewal_date
            .map(NextRenewalCell::Date)
            .unwrap_or(NextRenewalCell::Blank);
        (cell, record.annuity_term.and_then(|term| term.checked_add(1)))
    } else {
        (NextRenewalCell::Null, None)
    };

    ExportRow {
        case_code: record.case_code.trim().to_string(),
        action: EXPORT_ACTION.to_string(),
        next_renewal,
        annuity_term,
    }
}

/// Project all representatives, preserving order
pub fn project_rows(records: &[AnnuityRecord]) -> Vec<ExportRow> {
    records.iter().map(project_row).collect()
}
