//! Canonical field ordering for staff records

use crate::types::{Record, RecordSet, CANONICAL_ORDER};

/// Rebuild a record with exactly the canonical fields, in canonical order.
///
/// Absent fields are filled with "", fields outside the canonical set are dropped.
pub fn reorder_record(record: &Record) -> Record {
    let mut reordered = Record::with_capacity(CANONICAL_ORDER.len());
    for field in CANONICAL_ORDER {
        reordered.insert(field, record.get_or_empty(field));
    }
    reordered
}

/// Reorder every record, preserving record order and count
pub fn reorder_records(records: &[Record]) -> RecordSet {
    records.iter().map(reorder_record).collect()
}
