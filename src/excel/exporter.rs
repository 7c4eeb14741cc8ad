//! Excel exporter implementation - RecordSet → single worksheet

use crate::error::{RosterError, RosterResult};
use crate::types::{Record, SHEET_NAME};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Writes records to a one-sheet workbook, one row per record
pub struct ExcelExporter<'a> {
    records: &'a [Record],
    /// Union of field names, in order of first appearance
    columns: Vec<String>,
}

impl<'a> ExcelExporter<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            columns: column_union(records),
        }
    }

    /// Header row, left to right
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Export the records to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> RosterResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(output_path)
            .map_err(|e| RosterError::Export(format!("Failed to save Excel file: {}", e)))
    }

    /// Render the workbook in memory, for callers that stream the bytes themselves
    pub fn to_buffer(&self) -> RosterResult<Vec<u8>> {
        let mut workbook = self.build()?;
        workbook
            .save_to_buffer()
            .map_err(|e| RosterError::Export(format!("Failed to render Excel file: {}", e)))
    }

    fn build(&self) -> RosterResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(SHEET_NAME)
                .map_err(|e| RosterError::Export(format!("Failed to set worksheet name: {}", e)))?;

            for (col_idx, name) in self.columns.iter().enumerate() {
                let col = column_number(col_idx)?;
                worksheet
                    .write_string_with_format(0, col, name, &header_format)
                    .map_err(|e| RosterError::Export(format!("Failed to write header: {}", e)))?;
            }

            for (row_idx, record) in self.records.iter().enumerate() {
                let row = u32::try_from(row_idx + 1)
                    .map_err(|_| RosterError::Export("Too many rows for a worksheet".to_string()))?;

                for (col_idx, name) in self.columns.iter().enumerate() {
                    // Missing and empty values both stay blank
                    let Some(value) = record.get(name).filter(|v| !v.is_empty()) else {
                        continue;
                    };
                    worksheet
                        .write_string(row, column_number(col_idx)?, value)
                        .map_err(|e| {
                            RosterError::Export(format!("Failed to write cell: {}", e))
                        })?;
                }
            }
        }

        Ok(workbook)
    }
}

/// Field names across all records, ordered by first appearance
fn column_union(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
    }
    columns
}

fn column_number(index: usize) -> RosterResult<u16> {
    u16::try_from(index)
        .map_err(|_| RosterError::Export("Too many columns for a worksheet".to_string()))
}
