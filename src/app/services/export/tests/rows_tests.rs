//! Tests for row projection

use super::*;
use crate::app::services::export::{NextRenewalCell, project_row, project_rows};

#[test]
fn test_empty_dated_row_is_null_without_term() {
    let row = project_row(&empty_dated_record("CASE-A"));

    assert_eq!(row.case_code, "CASE-A");
    assert_eq!(row.action, "Update");
    assert_eq!(row.next_renewal, NextRenewalCell::Null);
    assert_eq!(row.annuity_term, None);
}

#[test]
fn test_dated_row_increments_term() {
    let row = project_row(&dated_record("CASE-B", 2024, 6, 30, Some(4)));

    assert_eq!(
        row.next_renewal,
        NextRenewalCell::Date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    );
    assert_eq!(row.annuity_term, Some(5));
}

#[test]
fn test_unparseable_term_stays_absent() {
    let row = project_row(&dated_record("CASE-C", 2024, 6, 30, None));
    assert_eq!(row.annuity_term, None);
}

#[test]
fn test_raw_without_decoded_date_is_blank() {
    let mut record = dated_record("CASE-D", 2024, 6, 30, Some(1));
    record.next_renewal_date = None;

    let row = project_row(&record);
    assert_eq!(row.next_renewal, NextRenewalCell::Blank);
    assert_eq!(row.annuity_term, Some(2));
}

#[test]
fn test_project_rows_preserves_order() {
    let records = vec![
        dated_record("CASE-2", 2025, 1, 1, Some(1)),
        empty_dated_record("CASE-1"),
    ];

    let rows = project_rows(&records);
    let cases: Vec<_> = rows.iter().map(|r| r.case_code.as_str()).collect();
    assert_eq!(cases, vec!["CASE-2", "CASE-1"]);
}
