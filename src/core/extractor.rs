//! Fixed-layout extraction of staff records from source tables

use crate::core::report::Extraction;
use crate::error::{RosterError, RosterResult};
use crate::excel::read_source_table;
use crate::types::{required_columns, Record, RecordSet, SourceTable, COLUMN_MAPPING, HEADER_ROWS};
use std::path::Path;
use tracing::debug;

/// Records pulled from a single table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableExtraction {
    pub records: RecordSet,
    /// Source row index of the empty row that ended the scan
    pub stopped_at: Option<usize>,
}

/// Extract records from one table.
///
/// Rows 0-1 are skipped when the table has more than two rows. The scan stops
/// at the first row whose mapped cells are all blank; nothing after it is kept.
pub fn extract_table(table: &SourceTable) -> RosterResult<TableExtraction> {
    let required = required_columns();
    let columns = table.width();
    if columns < required {
        return Err(RosterError::SchemaMismatch { columns, required });
    }

    let start = if table.height() > HEADER_ROWS {
        HEADER_ROWS
    } else {
        0
    };

    let mut extraction = TableExtraction::default();
    for (index, row) in table.rows.iter().enumerate().skip(start) {
        let cells: Vec<Option<&str>> = COLUMN_MAPPING
            .iter()
            .map(|(col, _)| row.get(*col).and_then(|cell| cell.as_deref()))
            .collect();

        if is_blank_row(&cells) {
            extraction.stopped_at = Some(index);
            break;
        }

        let record: Record = COLUMN_MAPPING
            .iter()
            .zip(cells)
            .map(|((_, field), cell)| (*field, cell.unwrap_or_default()))
            .collect();
        extraction.records.push(record);
    }

    debug!(
        table = %table.name,
        rows = extraction.records.len(),
        stopped_at = ?extraction.stopped_at,
        "extracted table"
    );
    Ok(extraction)
}

/// Extract from in-memory tables, in order
pub fn extract_tables<'a, I>(tables: I) -> Extraction
where
    I: IntoIterator<Item = &'a SourceTable>,
{
    let mut extraction = Extraction::new();
    for table in tables {
        extraction.absorb(&table.name, extract_table(table));
    }
    extraction
}

/// Read each spreadsheet and extract from it; one bad file never stops the rest
pub fn extract_files<P: AsRef<Path>>(paths: &[P]) -> Extraction {
    let mut extraction = Extraction::new();
    for path in paths {
        let path = path.as_ref();
        let source = display_name(path);
        let result = read_source_table(path).and_then(|table| extract_table(&table));
        extraction.absorb(&source, result);
    }
    extraction
}

fn is_blank_row(cells: &[Option<&str>]) -> bool {
    cells
        .iter()
        .all(|cell| cell.map_or(true, |text| text.trim().is_empty()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
