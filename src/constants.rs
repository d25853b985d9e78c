//! Application constants for the annuity processor
//!
//! This module contains the fixed-width feed layout, reserved values and
//! output naming used throughout the pipeline.

// =============================================================================
// Feed Format
// =============================================================================

/// Width in characters of every data line in the renewal export
pub const EXPECTED_RECORD_LENGTH: usize = 512;

/// Raw next-renewal value meaning "no next renewal date recorded"
pub const EMPTY_DATE_SENTINEL: &str = "00000000";

/// The only event code carrying date payloads (annuity generated)
pub const ANNUITY_GENERATED_EVENT: &str = "AG";

/// Jurisdictions known to legitimately produce repeated empty-dated events
pub const REPEAT_EMPTY_COUNTRIES: &[&str] = &["MX", "RU"];

/// Annotation appended to audit messages for unexpected repeated empty dates
pub const COUNTRY_MISMATCH_NOTE: &str = "*** Country code different from MX and RU ***";

/// Half-open character range of one field within a data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub start: usize,
    pub end: usize,
}

impl FieldSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by this span
    pub const fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Field offsets of the renewal export (0-based, half-open)
///
/// Some ranges overlap (`COUNTRY_CODE` sits inside `CLIENT_CODE`) and
/// `LINKED_FLAG` is zero-width. Both match the historical layout consumed by
/// downstream tooling and are kept as-is.
pub mod layout {
    use super::FieldSpan;

    pub const EVENT_CODE: FieldSpan = FieldSpan::new(0, 2);
    pub const EVENT_DATE: FieldSpan = FieldSpan::new(2, 10);
    pub const IPR_REFERENCE: FieldSpan = FieldSpan::new(16, 22);
    pub const OWNER_NAME: FieldSpan = FieldSpan::new(23, 57);
    pub const ACCOUNT_NUMBER: FieldSpan = FieldSpan::new(58, 64);
    pub const CASE_CODE: FieldSpan = FieldSpan::new(65, 79);
    pub const FILE_NUMBER: FieldSpan = FieldSpan::new(80, 94);
    pub const AGENT_CASE_CODE: FieldSpan = FieldSpan::new(95, 109);
    pub const CLIENT_REF: FieldSpan = FieldSpan::new(110, 144);
    pub const CLIENT_CODE: FieldSpan = FieldSpan::new(145, 179);
    pub const COUNTRY_CODE: FieldSpan = FieldSpan::new(160, 162);
    pub const RENEWAL_TYPE_CODE: FieldSpan = FieldSpan::new(162, 163);
    pub const RENEWAL_TYPE_NAME: FieldSpan = FieldSpan::new(164, 179);
    pub const REGISTRATION_NUMBER: FieldSpan = FieldSpan::new(180, 194);
    pub const DIVISION_CODE: FieldSpan = FieldSpan::new(195, 200);
    pub const LINKED_FLAG: FieldSpan = FieldSpan::new(201, 201);
    pub const ANNUITY_TERM: FieldSpan = FieldSpan::new(202, 204);
    pub const RENEWAL_DATE: FieldSpan = FieldSpan::new(204, 212);
    pub const NEXT_RENEWAL_DATE: FieldSpan = FieldSpan::new(212, 220);
    pub const EXPIRY_DATE: FieldSpan = FieldSpan::new(220, 228);
    pub const EVENT_AMOUNT: FieldSpan = FieldSpan::new(228, 242);
    pub const CURRENCY: FieldSpan = FieldSpan::new(243, 245);
    pub const INVOICE_NUMBER: FieldSpan = FieldSpan::new(246, 252);
    pub const INVOICE_ITEM_NUMBER: FieldSpan = FieldSpan::new(253, 256);
    pub const FUTURE_LAPSE_DATE: FieldSpan = FieldSpan::new(257, 265);
    pub const EVENT_NARRATIVE: FieldSpan = FieldSpan::new(265, 464);

    /// Furthest character offset any field reads
    pub const LAST_FIELD_END: usize = EVENT_NARRATIVE.end;
}

// =============================================================================
// Report Messages
// =============================================================================

/// Severity prefixes used in report messages
pub mod severity_prefix {
    pub const INFO: &str = "[INF]";
    pub const WARNING: &str = "[WRN]";
    pub const ERROR: &str = "[ERR]";
}

// =============================================================================
// Export
// =============================================================================

/// Constant action written for every exported case
pub const EXPORT_ACTION: &str = "Update";

/// Cell value written when a case has no next renewal date
pub const EXPORT_NULL_DATE: &str = "NULL";

/// Column headers and widths of the correction worksheet
pub const EXPORT_COLUMNS: &[(&str, f64)] = &[
    ("Case Code", 30.0),
    ("Action", 15.0),
    ("Next Renewal Date", 15.0),
    ("Annuity Term", 15.0),
];

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Default suffix of the exported workbook name (prefixed with the run date)
pub const DEFAULT_OUTPUT_SUFFIX: &str = "Next_Annuity_Date_NULLER";

/// Default directory receiving exported workbooks
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Excel number format for date cells
pub const EXPORT_DATE_FORMAT: &str = "yyyy-mm-dd";
