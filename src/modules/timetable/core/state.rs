// Timetable is the ordered collection of entries for one owner.
//
// Notes
// - entries are kept in sequence order. The vector position is the source of truth
//   for ordering; order_id mirrors it after every accepted decision.
// - max_order_id never decreases, deletions included.
// - Loading renumbers ranks densely. A delete whose rank batch failed to persist leaves gaps in
//   the store, and those never reach a caller.
// - The owner is an opaque key. Unauthenticated callers share the "guest" owner.

use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::sequence::renumber;
use crate::shared::core::clock_time::ClockTime;
use serde::{Deserialize, Serialize};

pub const GUEST_OWNER_ID: &str = "guest";

/// Timetable level values persisted next to the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimetableSettings {
    pub open_time: ClockTime,
    pub max_order_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub owner_id: String,
    pub open_time: ClockTime,
    pub max_order_id: u32,
    pub entries: Vec<Entry>,
}

impl Timetable {
    pub fn new(owner_id: impl Into<String>, open_time: ClockTime) -> Self {
        Self {
            owner_id: owner_id.into(),
            open_time,
            max_order_id: 0,
            entries: Vec::new(),
        }
    }

    /// Rebuilds a timetable from stored parts, ordering entries by rank and then creation time,
    /// then renumbering them 1..=n.
    pub fn from_parts(
        owner_id: impl Into<String>,
        settings: TimetableSettings,
        mut entries: Vec<Entry>,
    ) -> Self {
        entries.sort_by_key(|entry| (entry.order_id, entry.created_at));
        let highest_rank = entries.iter().map(|entry| entry.order_id).max().unwrap_or(0);
        renumber(&mut entries);
        Self {
            owner_id: owner_id.into(),
            open_time: settings.open_time,
            max_order_id: settings.max_order_id.max(highest_rank),
            entries,
        }
    }

    pub fn settings(&self) -> TimetableSettings {
        TimetableSettings {
            open_time: self.open_time,
            max_order_id: self.max_order_id,
        }
    }

    pub fn position(&self, entry_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.entry_id == entry_id)
    }

    pub fn entry(&self, entry_id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.entry_id == entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
