//! Tests for single-line decoding

use super::*;
use crate::app::models::has_next_renewal_date;
use crate::app::services::record_parser::decode_record;
use crate::error::AnnuityError;
use chrono::NaiveDate;

#[test]
fn test_decode_ag_line_fields() {
    let line = ag_line("CASE-0001", "20240201", "DE");
    let decoded = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap();
    let record = decoded.record;

    assert_eq!(record.event_code, "AG");
    assert_eq!(record.ipr_reference, "IPR042");
    assert_eq!(record.owner_name, "ACME INNOVATIONS GMBH");
    assert_eq!(record.account_number, "ACC123");
    assert_eq!(record.case_code, "CASE-0001");
    assert_eq!(record.file_number, "FILE-0042");
    assert_eq!(record.agent_case_code, "AGENT-0042");
    assert_eq!(record.client_ref, "CLIENT REF 42");
    assert_eq!(record.country_code, "DE");
    assert_eq!(record.renewal_type_code, "A");
    assert_eq!(record.renewal_type_name, "ANNUITY");
    assert_eq!(record.registration_number, "REG-998877");
    assert_eq!(record.division_code, "DIV01");
    assert_eq!(record.annuity_term, Some(5));
    assert_eq!(record.event_amount, Some(1250.50));
    assert_eq!(record.currency, "EU");
    assert_eq!(record.invoice_number, "INV042");
    assert_eq!(record.invoice_item_number, "001");
    assert_eq!(record.event_narrative, "Annuity generated for renewal");

    assert_eq!(record.event_date, NaiveDate::from_ymd_opt(2023, 1, 15));
    assert_eq!(record.renewal_date, NaiveDate::from_ymd_opt(2023, 2, 1));
    assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2033, 2, 1));
    assert_eq!(record.future_lapse_date, NaiveDate::from_ymd_opt(2024, 8, 1));
    assert_eq!(record.next_renewal_date_raw, "20240201");
    assert_eq!(record.next_renewal_date, NaiveDate::from_ymd_opt(2024, 2, 1));

    assert!(decoded.numeric_issues.is_empty());
}

#[test]
fn test_raw_line_retained() {
    let line = ag_line("CASE-0001", "20240201", "DE");
    let decoded = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap();
    assert_eq!(decoded.record.raw_line, line);
}

#[test]
fn test_overlapping_columns_preserved() {
    let line = ag_line("CASE-0001", "20240201", "MX");
    let record = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap().record;

    // Client code spans the country, renewal type code and renewal type name columns
    assert!(record.client_code.starts_with("CLI001"));
    assert!(record.client_code.contains("MXA ANNUITY"));
}

#[test]
fn test_linked_flag_always_empty() {
    let line = LineBuilder::from_line(&ag_line("CASE-0001", "20240201", "DE"))
        .set(FieldSpan::new(201, 202), "Y")
        .build();
    let record = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap().record;
    assert_eq!(record.linked_flag, "");
}

#[test]
fn test_sentinel_leaves_next_renewal_absent() {
    let line = ag_line("CASE-0001", "00000000", "DE");
    let record = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap().record;

    assert_eq!(record.next_renewal_date_raw, "00000000");
    assert_eq!(record.next_renewal_date, None);
    assert!(!has_next_renewal_date(&record));
}

#[test]
fn test_non_ag_line_has_no_dates() {
    // Date columns of other events are not decoded, so garbage there is harmless
    let line = LineBuilder::from_line(&ag_line("CASE-0001", "20240201", "DE"))
        .set(layout::EVENT_CODE, "RN")
        .set(layout::EVENT_DATE, "NOTADATE")
        .set(layout::EXPIRY_DATE, "        ")
        .build();
    let record = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap().record;

    assert_eq!(record.event_code, "RN");
    assert_eq!(record.event_date, None);
    assert_eq!(record.renewal_date, None);
    assert_eq!(record.expiry_date, None);
    assert_eq!(record.future_lapse_date, None);
    assert_eq!(record.next_renewal_date, None);
    assert_eq!(record.next_renewal_date_raw, "20240201");
}

#[test]
fn test_invalid_date_fails_ag_line() {
    let line = LineBuilder::from_line(&ag_line("CASE-0001", "20240201", "DE"))
        .set(layout::EXPIRY_DATE, "2033XX01")
        .build();
    let err = decode_record(&line, 7, EXPECTED_RECORD_LENGTH).unwrap_err();

    assert!(matches!(err, AnnuityError::InvalidDate { ref field, .. } if field == "expiry_date"));
}

#[test]
fn test_numeric_issues_reported() {
    let line = LineBuilder::from_line(&ag_line("CASE-0001", "20240201", "DE"))
        .set(layout::ANNUITY_TERM, "X1")
        .set(layout::EVENT_AMOUNT, "              ")
        .build();
    let decoded = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap();

    assert_eq!(decoded.record.annuity_term, None);
    assert_eq!(decoded.record.event_amount, None);
    assert_eq!(decoded.numeric_issues.len(), 2);
    assert_eq!(decoded.numeric_issues[0].field, "annuity_term");
    assert_eq!(decoded.numeric_issues[0].value, "X1");
    assert_eq!(decoded.numeric_issues[1].field, "event_amount");
    assert_eq!(decoded.numeric_issues[1].value, "");
}

#[test]
fn test_wrong_width_rejected() {
    let line = LineBuilder::with_length(500).set(layout::EVENT_CODE, "AG").build();
    let err = decode_record(&line, 4, EXPECTED_RECORD_LENGTH).unwrap_err();

    assert!(matches!(err, AnnuityError::MalformedRecord { line: 4, .. }));
}

#[test]
fn test_decode_is_deterministic() {
    let line = ag_line("CASE-0001", "20240201", "DE");
    let first = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap();
    let second = decode_record(&line, 2, EXPECTED_RECORD_LENGTH).unwrap();
    assert_eq!(first, second);
}
