//! Decoding of a single fixed-width renewal line
//!
//! Text columns are trimmed substrings. Numeric columns never fail the line:
//! an unparseable value becomes `None` and is returned as a [`FieldIssue`]
//! so the caller can report it. Date columns are decoded only for `AG`
//! events, and a bad date does fail the line.

use super::field_parsers::{FixedWidthLine, parse_optional_f64, parse_optional_i32};
use crate::app::models::{AnnuityRecord, is_annuity_generated};
use crate::app::services::date_codec::decode_date;
use crate::constants::{FieldSpan, layout};
use crate::error::{AnnuityError, Result};
use chrono::NaiveDate;
use tracing::debug;

/// A numeric column whose text could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub value: String,
}

/// A decoded record together with its numeric parse issues
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLine {
    pub record: AnnuityRecord,
    pub numeric_issues: Vec<FieldIssue>,
}

/// Decode one data line of exactly `expected_length` characters
///
/// `line_number` is 1-based and only used for error context.
pub fn decode_record(line: &str, line_number: usize, expected_length: usize) -> Result<DecodedLine> {
    let fields = FixedWidthLine::new(line);
    if fields.char_len() != expected_length {
        return Err(AnnuityError::malformed_record(
            line_number,
            format!(
                "expected {} characters, found {}",
                expected_length,
                fields.char_len()
            ),
        ));
    }

    let mut numeric_issues = Vec::new();

    let annuity_term_text = fields.field(layout::ANNUITY_TERM);
    let annuity_term = parse_optional_i32(annuity_term_text);
    if annuity_term.is_none() {
        numeric_issues.push(FieldIssue {
            field: "annuity_term",
            value: annuity_term_text.to_string(),
        });
    }

    let event_amount_text = fields.field(layout::EVENT_AMOUNT);
    let event_amount = parse_optional_f64(event_amount_text);
    if event_amount.is_none() {
        numeric_issues.push(FieldIssue {
            field: "event_amount",
            value: event_amount_text.to_string(),
        });
    }

    let mut record = AnnuityRecord {
        event_code: fields.field_string(layout::EVENT_CODE),
        event_date: None,
        ipr_reference: fields.field_string(layout::IPR_REFERENCE),
        owner_name: fields.field_string(layout::OWNER_NAME),
        account_number: fields.field_string(layout::ACCOUNT_NUMBER),
        case_code: fields.field_string(layout::CASE_CODE),
        file_number: fields.field_string(layout::FILE_NUMBER),
        agent_case_code: fields.field_string(layout::AGENT_CASE_CODE),
        client_ref: fields.field_string(layout::CLIENT_REF),
        client_code: fields.field_string(layout::CLIENT_CODE),
        country_code: fields.field_string(layout::COUNTRY_CODE),
        renewal_type_code: fields.field_string(layout::RENEWAL_TYPE_CODE),
        renewal_type_name: fields.field_string(layout::RENEWAL_TYPE_NAME),
        registration_number: fields.field_string(layout::REGISTRATION_NUMBER),
        division_code: fields.field_string(layout::DIVISION_CODE),
        linked_flag: fields.field_string(layout::LINKED_FLAG),
        annuity_term,
        renewal_date: None,
        next_renewal_date_raw: fields.field_string(layout::NEXT_RENEWAL_DATE),
        next_renewal_date: None,
        expiry_date: None,
        event_amount,
        currency: fields.field_string(layout::CURRENCY),
        invoice_number: fields.field_string(layout::INVOICE_NUMBER),
        invoice_item_number: fields.field_string(layout::INVOICE_ITEM_NUMBER),
        future_lapse_date: None,
        event_narrative: fields.field_string(layout::EVENT_NARRATIVE),
        raw_line: line.to_string(),
    };

    if is_annuity_generated(&record) {
        record.event_date = decode_date_field(&fields, layout::EVENT_DATE, "event_date")?;
        record.renewal_date = decode_date_field(&fields, layout::RENEWAL_DATE, "renewal_date")?;
        record.expiry_date = decode_date_field(&fields, layout::EXPIRY_DATE, "expiry_date")?;
        record.future_lapse_date =
            decode_date_field(&fields, layout::FUTURE_LAPSE_DATE, "future_lapse_date")?;
        // The sentinel decodes to None, which keeps next_renewal_date in step with the raw value
        record.next_renewal_date = decode_date("next_renewal_date", &record.next_renewal_date_raw)?;
    }

    debug!(
        "Decoded line {}: case {} event {} next renewal {}",
        line_number, record.case_code, record.event_code, record.next_renewal_date_raw
    );

    Ok(DecodedLine {
        record,
        numeric_issues,
    })
}

fn decode_date_field(
    fields: &FixedWidthLine<'_>,
    span: FieldSpan,
    name: &str,
) -> Result<Option<NaiveDate>> {
    decode_date(name, fields.field(span))
}
