//! `yyyyMMdd` date codec for the renewal export
//!
//! Dates in the feed are 8-digit strings: four year digits, a 1-based
//! two-digit month and a two-digit day. The all-zero value is reserved and
//! means "no date". No time-of-day decoding is done here.

use crate::constants::EMPTY_DATE_SENTINEL;
use crate::error::{AnnuityError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid date pattern"));

/// Decode a raw `yyyyMMdd` value
///
/// Returns `Ok(None)` for the `00000000` sentinel. Anything that is not eight
/// digits, or that names a day the calendar does not have, fails with
/// [`AnnuityError::InvalidDate`] tagged with `field`.
pub fn decode_date(field: &str, value: &str) -> Result<Option<NaiveDate>> {
    if value == EMPTY_DATE_SENTINEL {
        return Ok(None);
    }

    let captures = DATE_PATTERN
        .captures(value)
        .ok_or_else(|| AnnuityError::invalid_date(field, value))?;

    // Each group is all digits of bounded width, so these parses cannot overflow
    let year: i32 = captures[1].parse().map_err(|_| AnnuityError::invalid_date(field, value))?;
    let month: u32 = captures[2].parse().map_err(|_| AnnuityError::invalid_date(field, value))?;
    let day: u32 = captures[3].parse().map_err(|_| AnnuityError::invalid_date(field, value))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| AnnuityError::invalid_date(field, value))
}

/// Encode a date as `yyyyMMdd`, or the sentinel when there is none
pub fn encode_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y%m%d").to_string(),
        None => EMPTY_DATE_SENTINEL.to_string(),
    }
}
