//! Error handling for annuity feed processing.
//!
//! Provides error types with context for line decoding, date decoding,
//! feed composition checks and workbook export failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnuityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid date for {field}: '{value}' (expected yyyyMMdd)")]
    InvalidDate { field: String, value: String },

    #[error("Feed contains {non_conforming} of {total} records with an unexpected event code")]
    FeedComposition { non_conforming: usize, total: usize },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Config file could not be parsed: {path} - {reason}")]
    ConfigParse { path: PathBuf, reason: String },
}

impl AnnuityError {
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnuityError>;
