//! Excel import/export for staff rosters
//!
//! - Import: first worksheet → untyped grid, or header-keyed records
//! - Export: records → single "Staff Data" worksheet

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::{read_records, read_source_table, ExcelImporter};
