//! Main processing pipeline.
//!
//! Orchestrates one run over a renewal export: line parsing, the feed
//! composition check, per-case deduplication, row projection and the
//! workbook export. All stages share one [`ProcessResult`], and the export
//! is awaited before [`AnnuityProcessor::process`] returns, so the result
//! always includes export diagnostics.

use crate::app::models::ProcessResult;
use crate::app::services::export::{
    DeliverySink, FileSystemSink, WorkbookWriter, XlsxWorkbookWriter, export_workbook,
    project_rows, write_records_parquet,
};
use crate::app::services::record_parser::RecordParser;
use crate::app::services::record_processor::{
    analyze_case_groups, check_feed_composition, deduplicate_records,
};
use crate::config::ProcessorConfig;
use crate::error::{AnnuityError, Result};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Pipeline driver for renewal export files
///
/// `W` serializes the workbook and `S` delivers it. The defaults write
/// `.xlsx` files into the configured output directory.
#[derive(Debug)]
pub struct AnnuityProcessor<W = XlsxWorkbookWriter, S = FileSystemSink> {
    config: ProcessorConfig,
    parser: RecordParser,
    writer: W,
    sink: S,
    run_date: Option<NaiveDate>,
    progress_bar: Option<ProgressBar>,
}

impl AnnuityProcessor {
    /// Create a processor writing `.xlsx` files into `config.output_dir`
    pub fn new(config: ProcessorConfig) -> Self {
        let sink = FileSystemSink::new(config.output_dir.clone());
        Self::with_components(config, XlsxWorkbookWriter, sink)
    }
}

impl<W, S> AnnuityProcessor<W, S>
where
    W: WorkbookWriter,
    S: DeliverySink,
{
    /// Create a processor with a custom workbook writer and delivery sink
    pub fn with_components(config: ProcessorConfig, writer: W, sink: S) -> Self {
        let parser = RecordParser::from_config(&config);
        Self {
            config,
            parser,
            writer,
            sink,
            run_date: None,
            progress_bar: None,
        }
    }

    /// Fix the date used in the output file name (defaults to today)
    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = Some(run_date);
        self
    }

    /// Report line parsing progress on `progress_bar`
    pub fn with_progress_bar(mut self, progress_bar: ProgressBar) -> Self {
        self.progress_bar = Some(progress_bar);
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Workbook file name for this run
    pub fn output_file_name(&self) -> String {
        let run_date = self
            .run_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        self.config.output_file_name(run_date)
    }

    /// Process the full content of one export file
    ///
    /// Never fails: any error is recorded in the returned result as an
    /// `[ERR]` message with `has_errors` set.
    pub async fn process(&mut self, content: &str) -> ProcessResult {
        let mut result = ProcessResult::new();

        if let Err(e) = self.run(content, &mut result).await {
            result.error(format!(
                "An error occurred while processing the file content: {}",
                e
            ));
        }

        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }

        info!("{}", result.summary());
        result
    }

    async fn run(&mut self, content: &str, result: &mut ProcessResult) -> Result<()> {
        self.config.validate()?;

        // Stage 1: decode candidate lines
        let parsed = self
            .parser
            .parse_content(content, result, self.progress_bar.as_ref());
        result.stats.candidate_lines = parsed.stats.candidate_lines;
        result.stats.decoded_records = parsed.stats.records_decoded;
        result.stats.skipped_lines = parsed.stats.lines_skipped;
        result.stats.numeric_issues = parsed.stats.numeric_issues;
        result.total_records = parsed.records.len();
        result.info(format!("Found {} records to process", parsed.records.len()));

        // Stage 2: the whole feed must be annuity generated events
        match check_feed_composition(&parsed.records, &self.config.accepted_event_code) {
            Ok(()) => {}
            Err(AnnuityError::FeedComposition { non_conforming, .. }) => {
                result.abort(format!(
                    "Found {} records with EventCode different from '{}'",
                    non_conforming, self.config.accepted_event_code
                ));
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        // Stage 3: one representative per case code
        let (total_cases, duplicate_cases, empty_dated_cases) = analyze_case_groups(&parsed.records);
        debug!(
            "Case groups: {} total, {} with duplicates, {} with empty next renewal dates",
            total_cases, duplicate_cases, empty_dated_cases
        );
        let unique = deduplicate_records(parsed.records, &self.config, result);
        result.stats.unique_cases = unique.len();
        result.info(format!("Found {} unique CaseCodes", unique.len()));

        // Stage 4: project and export; only starts once every diagnostic above is recorded
        let rows = project_rows(&unique);
        let file_name = self.output_file_name();
        match export_workbook(
            &self.writer,
            &mut self.sink,
            &file_name,
            &self.config.sheet_name,
            &rows,
        )
        .await
        {
            Ok(location) => {
                result.stats.exported_rows = rows.len();
                result.info(format!("File saved successfully: {}", location));
            }
            Err(e) => {
                result.error(format!(
                    "An error occurred while writing the no renewals file: {}",
                    e
                ));
            }
        }

        if let Some(path) = &self.config.records_parquet {
            match write_records_parquet(&unique, path) {
                Ok(count) => {
                    result.info(format!("Wrote {} records to {}", count, path.display()));
                }
                Err(e) => {
                    result.error(format!(
                        "An error occurred while writing the record dump {}: {}",
                        path.display(),
                        e
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Process `content` with `config`, writing the workbook into `config.output_dir`
pub async fn process_content(content: &str, config: ProcessorConfig) -> ProcessResult {
    AnnuityProcessor::new(config).process(content).await
}
