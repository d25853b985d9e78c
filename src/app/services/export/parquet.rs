//! Parquet dump of representative records
//!
//! Writes the deduplicated records with their decoded fields so the run
//! can be inspected with dataframe tooling. Dates are stored as ISO strings.

use crate::app::models::AnnuityRecord;
use crate::error::Result;
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

fn iso_dates(
    records: &[AnnuityRecord],
    date: impl Fn(&AnnuityRecord) -> Option<NaiveDate>,
) -> Vec<Option<String>> {
    records
        .iter()
        .map(|record| date(record).map(|d| d.format("%Y-%m-%d").to_string()))
        .collect()
}

fn text(records: &[AnnuityRecord], field: impl Fn(&AnnuityRecord) -> &str) -> Vec<String> {
    records.iter().map(|record| field(record).to_string()).collect()
}

/// Build the dataframe written by [`write_records_parquet`]
pub fn records_to_dataframe(records: &[AnnuityRecord]) -> Result<DataFrame> {
    let df = df!(
        "case_code" => text(records, |r| r.case_code.as_str()),
        "event_code" => text(records, |r| r.event_code.as_str()),
        "country_code" => text(records, |r| r.country_code.as_str()),
        "owner_name" => text(records, |r| r.owner_name.as_str()),
        "registration_number" => text(records, |r| r.registration_number.as_str()),
        "annuity_term" => records.iter().map(|r| r.annuity_term).collect::<Vec<_>>(),
        "next_renewal_date_raw" => text(records, |r| r.next_renewal_date_raw.as_str()),
        "next_renewal_date" => iso_dates(records, |r| r.next_renewal_date),
        "renewal_date" => iso_dates(records, |r| r.renewal_date),
        "expiry_date" => iso_dates(records, |r| r.expiry_date),
        "future_lapse_date" => iso_dates(records, |r| r.future_lapse_date),
        "event_amount" => records.iter().map(|r| r.event_amount).collect::<Vec<_>>(),
        "currency" => text(records, |r| r.currency.as_str())
    )?;
    Ok(df)
}

/// Write `records` to a Snappy-compressed Parquet file, returning the row count
pub fn write_records_parquet(records: &[AnnuityRecord], path: &Path) -> Result<usize> {
    let mut df = records_to_dataframe(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;

    debug!("Wrote {} records to {}", df.height(), path.display());
    Ok(df.height())
}
