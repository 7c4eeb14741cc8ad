//! Caller-owned holder for the last produced record set
//!
//! The transformations never touch a session; front ends pass data in and out
//! explicitly and keep whatever they need between stages here.

use crate::types::{Record, RecordSet};

pub trait SessionStore {
    /// Most recently stored record set, if any
    fn get(&self) -> Option<&[Record]>;

    /// Replace the stored record set
    fn set(&mut self, records: RecordSet);

    /// Remove and return the stored record set
    fn take(&mut self) -> Option<RecordSet>;

    fn clear(&mut self) {
        self.take();
    }

    fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

/// In-memory session for a single interactive user
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    last: Option<RecordSet>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<&[Record]> {
        self.last.as_deref()
    }

    fn set(&mut self, records: RecordSet) {
        self.last = Some(records);
    }

    fn take(&mut self) -> Option<RecordSet> {
        self.last.take()
    }
}
