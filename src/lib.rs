//! Annuity Processor Library
//!
//! Validates fixed-width patent/trademark annuity renewal exports and
//! produces the next-renewal-date correction workbook.
//!
//! This library provides tools for:
//! - Decoding 512-character renewal lines into typed records
//! - Decoding and encoding `yyyyMMdd` dates with the `00000000` sentinel
//! - Skipping malformed lines with per-line diagnostics
//! - Rejecting feeds that are not made entirely of `AG` events
//! - Keeping one representative record per case code
//! - Writing the correction workbook through a pluggable delivery sink

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod date_codec;
        pub mod export;
        pub mod record_parser;
        pub mod record_processor;
    }
}

// Re-export commonly used types
pub use app::models::{AnnuityRecord, ProcessResult, ReportMessage, RunStats, Severity};
pub use config::ProcessorConfig;
pub use error::{AnnuityError, Result};
pub use processor::{AnnuityProcessor, process_content};
