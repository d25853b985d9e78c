//! Workbook serialization
//!
//! [`WorkbookWriter`] turns worksheet rows into a binary workbook. The
//! default implementation writes `.xlsx` with `rust_xlsxwriter`.

use super::rows::{ExportRow, NextRenewalCell};
use crate::constants::{EXPORT_COLUMNS, EXPORT_DATE_FORMAT, EXPORT_NULL_DATE};
use crate::error::Result;
use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

/// Serializes correction rows into a named worksheet
pub trait WorkbookWriter {
    fn write_workbook(&self, sheet_name: &str, rows: &[ExportRow]) -> Result<Vec<u8>>;
}

/// `.xlsx` writer with a bold header row and date-formatted cells
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbookWriter;

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write_workbook(&self, sheet_name: &str, rows: &[ExportRow]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format(EXPORT_DATE_FORMAT);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        for (col, (header, width)) in EXPORT_COLUMNS.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, *width)?;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let excel_row = index as u32 + 1;
            worksheet.write_string(excel_row, 0, row.case_code.as_str())?;
            worksheet.write_string(excel_row, 1, row.action.as_str())?;

            match row.next_renewal {
                NextRenewalCell::Null => {
                    worksheet.write_string(excel_row, 2, EXPORT_NULL_DATE)?;
                }
                NextRenewalCell::Date(date) => {
                    let cell = ExcelDateTime::from_ymd(
                        date.year() as u16,
                        date.month() as u8,
                        date.day() as u8,
                    )?;
                    worksheet.write_datetime_with_format(excel_row, 2, &cell, &date_format)?;
                }
                NextRenewalCell::Blank => {}
            }

            if let Some(term) = row.annuity_term {
                worksheet.write_number(excel_row, 3, term as f64)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
