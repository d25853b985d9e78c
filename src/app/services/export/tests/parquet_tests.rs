//! Tests for the Parquet record dump

use super::*;
use crate::app::services::export::{records_to_dataframe, write_records_parquet};
use polars::prelude::*;
use tempfile::TempDir;

#[test]
fn test_dataframe_has_one_row_per_record() {
    let records = vec![
        dated_record("CASE-A", 2024, 1, 31, Some(2)),
        empty_dated_record("CASE-B"),
    ];

    let df = records_to_dataframe(&records).unwrap();

    assert_eq!(df.height(), 2);
    let dates = df.column("next_renewal_date").unwrap().str().unwrap();
    assert_eq!(dates.get(0), Some("2024-01-31"));
    assert_eq!(dates.get(1), None);
}

#[test]
fn test_write_records_parquet_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dump").join("records.parquet");
    let records = vec![
        dated_record("CASE-A", 2024, 1, 31, Some(2)),
        empty_dated_record("CASE-B"),
        dated_record("CASE-C", 2025, 12, 1, None),
    ];

    let written = write_records_parquet(&records, &path).unwrap();
    assert_eq!(written, 3);

    let file = std::fs::File::open(&path).unwrap();
    let df = ParquetReader::new(file).finish().unwrap();
    assert_eq!(df.height(), 3);

    let cases = df.column("case_code").unwrap().str().unwrap();
    assert_eq!(cases.get(2), Some("CASE-C"));
}
