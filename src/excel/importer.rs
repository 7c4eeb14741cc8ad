//! Excel importer implementation - spreadsheet → SourceTable / RecordSet

use crate::error::{RosterError, RosterResult};
use crate::types::{Cell, Record, RecordSet, SourceTable};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::Timelike;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the first worksheet of a workbook (.xlsx, .xlsm, .xls, .ods)
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the first worksheet as an untyped grid anchored at A1
    pub fn read_table(&self) -> RosterResult<SourceTable> {
        let range = self.first_sheet()?;
        let table = range_to_table(self.source_name(), &range);
        debug!(
            file = %self.path.display(),
            rows = table.height(),
            columns = table.width(),
            "read worksheet"
        );
        Ok(table)
    }

    /// Read the first worksheet as records, taking field names from row 0.
    ///
    /// Every record carries every header; blank cells become "".
    pub fn import_records(&self) -> RosterResult<RecordSet> {
        let table = self.read_table()?;
        let Some((header, body)) = table.rows.split_first() else {
            return Ok(Vec::new());
        };

        let width = table.width();
        let headers: Vec<String> = (0..width)
            .map(|col| match header.get(col).and_then(|c| c.as_deref()) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("col_{}", col),
            })
            .collect();

        let records = body
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(col, name)| {
                        let value = row.get(col).and_then(|c| c.as_deref()).unwrap_or("");
                        (name.as_str(), value)
                    })
                    .collect::<Record>()
            })
            .collect();
        Ok(records)
    }

    fn first_sheet(&self) -> RosterResult<Range<Data>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            RosterError::SourceRead(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| {
                RosterError::SourceRead(format!(
                    "Failed to read first worksheet of {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            None => Err(RosterError::SourceRead(format!(
                "{} contains no worksheets",
                self.path.display()
            ))),
        }
    }

    fn source_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Read the first worksheet of `path` as a source table
pub fn read_source_table<P: AsRef<Path>>(path: P) -> RosterResult<SourceTable> {
    ExcelImporter::new(path).read_table()
}

/// Generic header-row reader: first worksheet → records
pub fn read_records<P: AsRef<Path>>(path: P) -> RosterResult<RecordSet> {
    ExcelImporter::new(path).import_records()
}

/// Convert a calamine range into a grid whose (0, 0) is cell A1.
///
/// calamine ranges start at the first used cell, so offsets are restored here
/// to keep column C at position 2 regardless of leading blank rows/columns.
fn range_to_table(name: String, range: &Range<Data>) -> SourceTable {
    let Some((end_row, end_col)) = range.end() else {
        return SourceTable::new(name, Vec::new());
    };

    let rows = (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| range.get_value((row, col)).and_then(cell_text))
                .collect()
        })
        .collect();
    SourceTable::new(name, rows)
}

/// Text form of a cell; `None` for blank cells
fn cell_text(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(date_text(dt)),
        Data::Error(e) => Some(e.to_string()),
    }
}

/// ISO date (or date-time) for date cells; durations keep their serial value
fn date_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(value) if !dt.is_duration() => {
            if value.hour() == 0 && value.minute() == 0 && value.second() == 0 {
                value.format("%Y-%m-%d").to_string()
            } else {
                value.format("%Y-%m-%dT%H:%M:%S").to_string()
            }
        }
        _ => dt.as_f64().to_string(),
    }
}
