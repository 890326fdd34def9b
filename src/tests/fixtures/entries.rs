// Shared test fixtures for entries and whole timetables.

use crate::modules::timetable::adapters::outbound::timetable_store_in_memory::InMemoryTimetableStore;
use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::sequence::resequence;
use crate::modules::timetable::core::state::{GUEST_OWNER_ID, Timetable};
use crate::shared::core::clock_time::ClockTime;

const ENTRY_JSON: &str = include_str!("json/entry.json");
const FIXED_CREATED_AT: i64 = 1_700_000_000_000;

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Entry> for EntryBuilder {
    fn from(entry: Entry) -> Self {
        Self { inner: entry }
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(ENTRY_JSON).unwrap(),
        }
    }

    pub fn entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.entry_id = v.into();
        self
    }

    pub fn order_id(mut self, v: u32) -> Self {
        self.inner.order_id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn duration(mut self, v: &str) -> Self {
        self.inner.duration = v.parse().unwrap();
        self
    }

    pub fn end_time(mut self, v: &str) -> Self {
        self.inner.end_time = v.parse().unwrap();
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }
}

/// A guest timetable with one entry per `(title, duration)` row, already renumbered and recomputed.
pub fn make_timetable(open_time: &str, rows: &[(&str, &str)]) -> Timetable {
    let open_time: ClockTime = open_time.parse().unwrap();
    let entries = (1i64..)
        .zip(rows)
        .map(|(n, (title, duration))| {
            EntryBuilder::new()
                .entry_id(format!("entry-{n:04}"))
                .title(*title)
                .duration(duration)
                .notes("")
                .created_at(FIXED_CREATED_AT + n)
                .build()
        })
        .collect();

    let entries = resequence(entries, open_time);
    Timetable {
        owner_id: GUEST_OWNER_ID.to_string(),
        open_time,
        max_order_id: entries.len() as u32,
        entries,
    }
}

/// Writes a `make_timetable` result for `owner_id` and returns it.
pub async fn seed_store(
    store: &InMemoryTimetableStore,
    owner_id: &str,
    open_time: &str,
    rows: &[(&str, &str)],
) -> Timetable {
    let timetable = Timetable {
        owner_id: owner_id.to_string(),
        ..make_timetable(open_time, rows)
    };
    store
        .put_entries_batch(owner_id, timetable.entries.clone())
        .await
        .unwrap();
    store
        .save_settings(owner_id, timetable.settings())
        .await
        .unwrap();
    timetable
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use crate::modules::timetable::core::sequence::is_consistent;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EntryBuilder::default().build();
        assert_eq!(built.entry_id, "entry-fixed-0001");
        assert_eq!(built.order_id, 1);
        assert_eq!(built.title, "Breakfast");
        assert_eq!(built.duration.to_string(), "00:30");
        assert_eq!(built.end_day_offset, 0);
        assert_eq!(built.created_at, FIXED_CREATED_AT);
    }

    #[rstest]
    fn make_timetable_returns_a_consistent_guest_timetable() {
        let timetable = make_timetable("08:00", &[("a", "00:10"), ("b", "00:20")]);
        assert_eq!(timetable.owner_id, GUEST_OWNER_ID);
        assert_eq!(timetable.max_order_id, 2);
        assert_ne!(timetable.entries[0].entry_id, timetable.entries[1].entry_id);
        assert!(is_consistent(&timetable.entries, timetable.open_time));
    }
}
