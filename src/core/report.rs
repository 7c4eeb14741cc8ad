//! Per-file extraction outcomes, aggregated into one report value

use crate::core::extractor::TableExtraction;
use crate::error::{RosterError, RosterResult};
use crate::types::RecordSet;

/// What happened to one source file
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Rows kept; `stopped_at` is the source row index of the first empty row, if any
    Processed {
        rows: usize,
        stopped_at: Option<usize>,
    },
    /// Too few columns for the fixed mapping
    SchemaMismatch { columns: usize, required: usize },
    /// File unreadable or corrupt
    ReadFailure { detail: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub source: String,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// One displayable line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub severity: Severity,
    pub text: String,
}

impl ReportLine {
    fn new(severity: Severity, text: String) -> Self {
        Self { severity, text }
    }
}

impl FileOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self.status, FileStatus::Processed { .. })
    }

    /// Rows this file contributed to the record set
    pub fn rows(&self) -> usize {
        match self.status {
            FileStatus::Processed { rows, .. } => rows,
            _ => 0,
        }
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        let source = &self.source;
        match &self.status {
            FileStatus::Processed { rows, stopped_at } => {
                let mut lines = Vec::with_capacity(2);
                if let Some(index) = stopped_at {
                    lines.push(ReportLine::new(
                        Severity::Info,
                        format!(
                            "Empty row detected at row {} in file {}. Stopping processing.",
                            index, source
                        ),
                    ));
                }
                lines.push(ReportLine::new(
                    Severity::Success,
                    format!("Processed {} rows from {}", rows, source),
                ));
                lines
            }
            FileStatus::SchemaMismatch { columns, required } => vec![ReportLine::new(
                Severity::Warning,
                format!(
                    "File {} doesn't have enough columns. Expected at least {} columns, found {}.",
                    source, required, columns
                ),
            )],
            FileStatus::ReadFailure { detail } => vec![ReportLine::new(
                Severity::Error,
                format!("Error processing {}: {}", source, detail),
            )],
        }
    }
}

/// Outcomes for every input, in processing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    pub outcomes: Vec<FileOutcome>,
}

impl ExtractionReport {
    pub fn push(&mut self, source: impl Into<String>, status: FileStatus) {
        self.outcomes.push(FileOutcome {
            source: source.into(),
            status,
        });
    }

    pub fn total_rows(&self) -> usize {
        self.outcomes.iter().map(FileOutcome::rows).sum()
    }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_processed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.outcomes.iter().flat_map(FileOutcome::lines).collect()
    }
}

/// Combined extractor output: the record set plus its report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: RecordSet,
    pub report: ExtractionReport,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one table's result in; failures contribute no records
    pub fn absorb(&mut self, source: &str, result: RosterResult<TableExtraction>) {
        let status = match result {
            Ok(table) => {
                let status = FileStatus::Processed {
                    rows: table.records.len(),
                    stopped_at: table.stopped_at,
                };
                self.records.extend(table.records);
                status
            }
            Err(RosterError::SchemaMismatch { columns, required }) => {
                FileStatus::SchemaMismatch { columns, required }
            }
            Err(e) => FileStatus::ReadFailure {
                detail: e.to_string(),
            },
        };
        self.report.push(source, status);
    }
}
