//! Configuration management and validation.
//!
//! Provides the processor settings for line validation, deduplication
//! policy and export naming. Settings are layered: built-in defaults, then
//! an optional TOML file, then command-line overrides.

use crate::constants::{
    ANNUITY_GENERATED_EVENT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_SUFFIX, DEFAULT_SHEET_NAME,
    EXPECTED_RECORD_LENGTH, REPEAT_EMPTY_COUNTRIES, layout,
};
use crate::error::{AnnuityError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for one processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Width in characters every data line must have
    pub record_length: usize,

    /// Event code every record of the feed must carry
    pub accepted_event_code: String,

    /// Countries where repeated empty next-renewal dates are expected
    pub repeat_empty_countries: Vec<String>,

    /// Directory receiving the exported workbook
    pub output_dir: PathBuf,

    /// Workbook name suffix; the run date is prepended
    pub output_file_suffix: String,

    /// Name of the single worksheet
    pub sheet_name: String,

    /// Report unparseable numeric columns as warnings
    pub report_numeric_issues: bool,

    /// Remove a trailing carriage return before the width check
    pub strip_carriage_returns: bool,

    /// Optional Parquet dump of the deduplicated records
    pub records_parquet: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            record_length: EXPECTED_RECORD_LENGTH,
            accepted_event_code: ANNUITY_GENERATED_EVENT.to_string(),
            repeat_empty_countries: REPEAT_EMPTY_COUNTRIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            report_numeric_issues: true,
            strip_carriage_returns: false,
            records_parquet: None,
        }
    }
}

impl ProcessorConfig {
    /// Default config file location: `<config dir>/annuity-processor/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AnnuityError::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("annuity-processor").join("config.toml"))
    }

    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AnnuityError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, overlaid by `config_file` when given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the settings can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.record_length < layout::LAST_FIELD_END {
            return Err(AnnuityError::configuration(format!(
                "record_length {} is shorter than the feed layout ({} characters)",
                self.record_length,
                layout::LAST_FIELD_END
            )));
        }
        if self.accepted_event_code.trim().is_empty() {
            return Err(AnnuityError::configuration("accepted_event_code must not be empty"));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(AnnuityError::configuration("sheet_name must not be empty"));
        }
        if self.output_file_suffix.trim().is_empty() {
            return Err(AnnuityError::configuration("output_file_suffix must not be empty"));
        }
        Ok(())
    }

    /// True when repeated empty-dated records are expected for `country_code`
    pub fn allows_repeat_empty(&self, country_code: &str) -> bool {
        self.repeat_empty_countries
            .iter()
            .any(|code| code == country_code)
    }

    /// Workbook file name for a run on `run_date`
    pub fn output_file_name(&self, run_date: NaiveDate) -> String {
        format!(
            "{}_{}.xlsx",
            run_date.format("%Y-%m-%d"),
            self.output_file_suffix
        )
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Enable or disable carriage return stripping
    pub fn with_strip_carriage_returns(mut self, strip: bool) -> Self {
        self.strip_carriage_returns = strip;
        self
    }

    /// Enable or disable numeric issue warnings
    pub fn with_report_numeric_issues(mut self, report: bool) -> Self {
        self.report_numeric_issues = report;
        self
    }

    /// Write a Parquet dump of the deduplicated records to `path`
    pub fn with_records_parquet(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_parquet = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_feed_format() {
        let config = ProcessorConfig::default();
        assert_eq!(config.record_length, 512);
        assert_eq!(config.accepted_event_code, "AG");
        assert!(config.allows_repeat_empty("MX"));
        assert!(config.allows_repeat_empty("RU"));
        assert!(!config.allows_repeat_empty("DE"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_file_name() {
        let config = ProcessorConfig::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            config.output_file_name(date),
            "2026-03-09_Next_Annuity_Date_NULLER.xlsx"
        );
    }

    #[test]
    fn test_validate_rejects_short_record_length() {
        let config = ProcessorConfig {
            record_length: 300,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnnuityError::Configuration { .. })
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "output_dir = \"/tmp/renewals\"\nrepeat_empty_countries = [\"MX\", \"RU\", \"BR\"]"
        )
        .unwrap();

        let config = ProcessorConfig::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/renewals"));
        assert!(config.allows_repeat_empty("BR"));
        assert_eq!(config.record_length, 512);
        assert_eq!(config.sheet_name, "Sheet1");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "record_length = \"wide\"").unwrap();

        let err = ProcessorConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AnnuityError::ConfigParse { .. }));
    }

    #[test]
    fn test_builder_methods() {
        let config = ProcessorConfig::default()
            .with_output_dir("out")
            .with_strip_carriage_returns(true)
            .with_report_numeric_issues(false)
            .with_records_parquet("records.parquet");

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.strip_carriage_returns);
        assert!(!config.report_numeric_issues);
        assert_eq!(config.records_parquet, Some(PathBuf::from("records.parquet")));
    }
}
