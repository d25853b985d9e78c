//! Tests for the export service

mod parquet_tests;
mod rows_tests;

use crate::app::models::AnnuityRecord;
use chrono::NaiveDate;

/// Representative record with a decoded next renewal date
pub fn dated_record(case_code: &str, year: i32, month: u32, day: u32, term: Option<i32>) -> AnnuityRecord {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    AnnuityRecord {
        event_code: "AG".to_string(),
        case_code: case_code.to_string(),
        country_code: "DE".to_string(),
        annuity_term: term,
        next_renewal_date_raw: date.format("%Y%m%d").to_string(),
        next_renewal_date: Some(date),
        ..Default::default()
    }
}

/// Representative record carrying the empty sentinel
pub fn empty_dated_record(case_code: &str) -> AnnuityRecord {
    AnnuityRecord {
        event_code: "AG".to_string(),
        case_code: case_code.to_string(),
        country_code: "MX".to_string(),
        annuity_term: Some(9),
        next_renewal_date_raw: "00000000".to_string(),
        ..Default::default()
    }
}
