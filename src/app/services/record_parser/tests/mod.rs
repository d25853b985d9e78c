//! Test utilities for fixed-width renewal line parsing
//!
//! Provides a builder that lays field values out at their feed offsets so
//! tests can describe lines by field instead of by raw padding.

use crate::constants::{EXPECTED_RECORD_LENGTH, FieldSpan, layout};

// Test modules
mod decoder_tests;

/// Builds a blank-padded fixed-width line field by field
#[derive(Debug, Clone)]
pub struct LineBuilder {
    chars: Vec<char>,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::with_length(EXPECTED_RECORD_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self {
            chars: vec![' '; length],
        }
    }

    /// Start from an existing line, to change a few fields
    pub fn from_line(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
        }
    }

    /// Write `value` at the start of `span`, truncated to the span width
    pub fn set(mut self, span: FieldSpan, value: &str) -> Self {
        for (offset, ch) in value.chars().take(span.width()).enumerate() {
            self.chars[span.start + offset] = ch;
        }
        self
    }

    pub fn build(self) -> String {
        self.chars.into_iter().collect()
    }
}

/// A fully populated AG line for `case_code`
pub fn ag_line(case_code: &str, next_renewal_raw: &str, country_code: &str) -> String {
    LineBuilder::new()
        .set(layout::EVENT_CODE, "AG")
        .set(layout::EVENT_DATE, "20230115")
        .set(layout::IPR_REFERENCE, "IPR042")
        .set(layout::OWNER_NAME, "ACME INNOVATIONS GMBH")
        .set(layout::ACCOUNT_NUMBER, "ACC123")
        .set(layout::CASE_CODE, case_code)
        .set(layout::FILE_NUMBER, "FILE-0042")
        .set(layout::AGENT_CASE_CODE, "AGENT-0042")
        .set(layout::CLIENT_REF, "CLIENT REF 42")
        .set(layout::CLIENT_CODE, "CLI001")
        .set(layout::COUNTRY_CODE, country_code)
        .set(layout::RENEWAL_TYPE_CODE, "A")
        .set(layout::RENEWAL_TYPE_NAME, "ANNUITY")
        .set(layout::REGISTRATION_NUMBER, "REG-998877")
        .set(layout::DIVISION_CODE, "DIV01")
        .set(layout::ANNUITY_TERM, "05")
        .set(layout::RENEWAL_DATE, "20230201")
        .set(layout::NEXT_RENEWAL_DATE, next_renewal_raw)
        .set(layout::EXPIRY_DATE, "20330201")
        .set(layout::EVENT_AMOUNT, "1250.50")
        .set(layout::CURRENCY, "EU")
        .set(layout::INVOICE_NUMBER, "INV042")
        .set(layout::INVOICE_ITEM_NUMBER, "001")
        .set(layout::FUTURE_LAPSE_DATE, "20240801")
        .set(layout::EVENT_NARRATIVE, "Annuity generated for renewal")
        .build()
}

/// Wrap data lines with a header and trailer line
pub fn feed(lines: &[String]) -> String {
    let mut content = vec!["HEADER RENEWAL EXPORT".to_string()];
    content.extend(lines.iter().cloned());
    content.push("TRAILER".to_string());
    content.join("\n")
}
