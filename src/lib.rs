//! Staff Roster - spreadsheet ↔ JSON conversion for staff rosters
//!
//! This library extracts staff records from roster spreadsheets using a fixed
//! column layout, reorders record fields into a canonical order, and exports
//! records back to a single-sheet workbook.
//!
//! # Features
//!
//! - Fixed column mapping (C, D, E, F, H, I, J) with header skipping
//! - Truncation at the first empty row of each file
//! - Per-file report: rows kept, schema mismatches, read failures
//! - Canonical field reordering with default-fill
//! - JSON (4-space indent) and Excel (.xlsx) output
//!
//! # Example
//!
//! ```no_run
//! use staff_roster::core::{extract_files, reorder_records};
//! use staff_roster::excel::ExcelExporter;
//! use std::path::Path;
//!
//! let extraction = extract_files(&["north.xlsx", "south.xlsx"]);
//! for line in extraction.report.lines() {
//!     println!("{}", line.text);
//! }
//!
//! let ordered = reorder_records(&extraction.records);
//! ExcelExporter::new(&ordered).export(Path::new("staff.xlsx"))?;
//! # Ok::<(), staff_roster::error::RosterError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod json;
pub mod logging;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{RosterError, RosterResult};
pub use types::{Record, RecordSet, SourceTable};
