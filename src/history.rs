// src/history.rs
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::HistoryEntry;

/// Receives one entry per analysis. The engine only writes; nothing in the
/// scoring pipeline ever reads entries back.
pub trait HistorySink {
    fn record(&mut self, entry: HistoryEntry);
}

/// Append-only in-memory history, kept for the lifetime of the process and
/// never persisted.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl HistorySink for MemoryHistory {
    fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

// Lets the shell keep a handle on the history it hands to the analyzer
impl HistorySink for Rc<RefCell<MemoryHistory>> {
    fn record(&mut self, entry: HistoryEntry) {
        self.borrow_mut().record(entry);
    }
}
