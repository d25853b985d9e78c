//! Data models for annuity renewal processing
//!
//! This module contains the decoded renewal event record and the predicates
//! used by the deduplication and export stages. Records are plain data: they
//! are built once per valid input line and never mutated afterwards.

pub mod report;

use crate::constants::{ANNUITY_GENERATED_EVENT, EMPTY_DATE_SENTINEL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use report::{ProcessResult, ReportMessage, RunStats, Severity};

// =============================================================================
// Annuity Record Structure
// =============================================================================

/// One decoded renewal event line
///
/// Text fields hold the trimmed substring of their column. Date fields are
/// only populated for annuity generated (`AG`) events; numeric fields are
/// `None` when the column could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnuityRecord {
    /// Event code (e.g. "AG")
    pub event_code: String,

    /// Date of the event (AG only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,

    /// IPR unique reference number
    pub ipr_reference: String,

    pub owner_name: String,
    pub account_number: String,

    /// Case identifier used to group events of the same IP case
    pub case_code: String,

    pub file_number: String,
    pub agent_case_code: String,
    pub client_ref: String,
    pub client_code: String,

    /// Two-letter jurisdiction code
    pub country_code: String,

    pub renewal_type_code: String,
    pub renewal_type_name: String,
    pub registration_number: String,
    pub division_code: String,

    /// Linked flag (the historical layout gives it a zero-width column)
    pub linked_flag: String,

    /// Annuity term, `None` when the column is not a number
    pub annuity_term: Option<i32>,

    /// Date of the renewal (AG only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<NaiveDate>,

    /// Raw `yyyyMMdd` next renewal value, `00000000` when there is none
    pub next_renewal_date_raw: String,

    /// Decoded next renewal date (AG only, absent for the sentinel)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_renewal_date: Option<NaiveDate>,

    /// Expiry date of the right (AG only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// Event amount, `None` when the column is not a number
    pub event_amount: Option<f64>,

    pub currency: String,
    pub invoice_number: String,
    pub invoice_item_number: String,

    /// Date the right lapses if not renewed (AG only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_lapse_date: Option<NaiveDate>,

    pub event_narrative: String,

    /// The untouched input line
    pub raw_line: String,
}

/// True when the record carries a next renewal date (raw value is not the sentinel)
pub fn has_next_renewal_date(record: &AnnuityRecord) -> bool {
    record.next_renewal_date_raw != EMPTY_DATE_SENTINEL
}

/// True when the record is an annuity generated event
pub fn is_annuity_generated(record: &AnnuityRecord) -> bool {
    record.event_code == ANNUITY_GENERATED_EVENT
}
