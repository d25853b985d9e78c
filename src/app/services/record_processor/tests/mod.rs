//! Tests for record processor module
//!
//! Fixtures build decoded records directly, without going through the parser.


use crate::app::models::AnnuityRecord;

/// Create a decoded AG record for `case_code`
pub fn create_test_record(case_code: &str, next_renewal_raw: &str, country_code: &str) -> AnnuityRecord {
    AnnuityRecord {
        event_code: "AG".to_string(),
        case_code: case_code.to_string(),
        country_code: country_code.to_string(),
        next_renewal_date_raw: next_renewal_raw.to_string(),
        annuity_term: Some(4),
        ..Default::default()
    }
}

/// Same as [`create_test_record`], tagged with a narrative to tell duplicates apart
pub fn create_tagged_record(
    case_code: &str,
    next_renewal_raw: &str,
    country_code: &str,
    tag: &str,
) -> AnnuityRecord {
    AnnuityRecord {
        event_narrative: tag.to_string(),
        ..create_test_record(case_code, next_renewal_raw, country_code)
    }
}
