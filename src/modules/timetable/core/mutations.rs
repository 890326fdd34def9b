// Store writes produced by the deciders.
//
// Purpose
// - Describe what must be persisted, without performing input or output.
//
// Responsibilities
// - Keep only the entries that actually changed, so a decision writes as little as it can.
// - Use a single batch whenever more than one entry changes.

use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::state::TimetableSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMutation {
    PutEntry(Entry),
    PutEntries(Vec<Entry>),
    DeleteEntry(String),
    PutSettings(TimetableSettings),
}

impl StoreMutation {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreMutation::PutEntry(_) => "put_entry",
            StoreMutation::PutEntries(_) => "put_entries",
            StoreMutation::DeleteEntry(_) => "delete_entry",
            StoreMutation::PutSettings(_) => "put_settings",
        }
    }
}

/// Entries of `after` that are new or differ from their counterpart in `before`.
pub fn changed_entries(before: &[Entry], after: &[Entry]) -> Vec<Entry> {
    after
        .iter()
        .filter(|entry| {
            before
                .iter()
                .find(|previous| previous.entry_id == entry.entry_id)
                != Some(*entry)
        })
        .cloned()
        .collect()
}

pub fn entry_writes(mut changed: Vec<Entry>) -> Option<StoreMutation> {
    match changed.len() {
        0 => None,
        1 => changed.pop().map(StoreMutation::PutEntry),
        _ => Some(StoreMutation::PutEntries(changed)),
    }
}
