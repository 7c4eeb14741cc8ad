//! Core roster transformations: extraction, reordering and per-file reporting

pub mod extractor;
pub mod reorderer;
pub mod report;

pub use extractor::{extract_files, extract_table, extract_tables, TableExtraction};
pub use reorderer::{reorder_record, reorder_records};
pub use report::{Extraction, ExtractionReport, FileOutcome, FileStatus, ReportLine, Severity};
