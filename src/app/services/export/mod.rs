//! Export of the correction workbook
//!
//! ## Architecture
//!
//! - [`rows`] - Projection of representative records onto worksheet rows
//! - [`workbook`] - [`WorkbookWriter`] port and the `.xlsx` implementation
//! - [`sink`] - [`DeliverySink`] port with file-system and in-memory sinks
//! - [`parquet`] - Optional Parquet dump of the representative records
//!
//! The export is a single awaited step: rows are serialized, then the
//! payload is handed to the sink. Callers see the outcome before
//! [`export_workbook`] returns.

pub mod parquet;
pub mod rows;
pub mod sink;
pub mod workbook;

#[cfg(test)]
pub mod tests;

pub use parquet::{records_to_dataframe, write_records_parquet};
pub use rows::{ExportRow, NextRenewalCell, project_row, project_rows};
pub use sink::{Delivery, DeliverySink, FileSystemSink, MemorySink};
pub use workbook::{WorkbookWriter, XlsxWorkbookWriter};

use crate::error::{AnnuityError, Result};
use tracing::debug;

/// Serialize `rows` and deliver them as `file_name`, returning the delivery location
pub async fn export_workbook<W, S>(
    writer: &W,
    sink: &mut S,
    file_name: &str,
    sheet_name: &str,
    rows: &[ExportRow],
) -> Result<String>
where
    W: WorkbookWriter,
    S: DeliverySink,
{
    let payload = writer
        .write_workbook(sheet_name, rows)
        .map_err(|e| AnnuityError::export(format!("could not build workbook: {}", e)))?;
    debug!(
        "Serialized {} rows into {} bytes for {}",
        rows.len(),
        payload.len(),
        file_name
    );

    sink.deliver(file_name, payload)
        .await
        .map_err(|e| AnnuityError::export(format!("could not deliver {}: {}", file_name, e)))
}
