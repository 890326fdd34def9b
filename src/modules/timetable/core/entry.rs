// Entry is one row of a timetable.
//
// Notes
// - entry_id and created_at are assigned once at creation and never change.
// - order_id is the dense 1-based rank inside the owning timetable.
// - end_time and end_day_offset are derived. Only the sequence fold writes them.
// - created_at uses epoch milliseconds.

use crate::shared::core::clock_time::ClockTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub entry_id: String,
    pub order_id: u32,
    pub title: String,
    pub duration: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub end_day_offset: u32,
    pub notes: String,
    pub created_at: i64,
}

impl Entry {
    pub fn is_titled(&self) -> bool {
        !self.title.is_empty()
    }
}

/// User-authored fields of a new entry. Missing values default to blank text and 00:00.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NewEntry {
    pub title: String,
    pub duration: ClockTime,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EntryEdit {
    Title(String),
    Duration(ClockTime),
    Notes(String),
}

impl EntryEdit {
    /// Only duration edits move the end times of this and every later entry.
    pub fn affects_sequence(&self) -> bool {
        matches!(self, EntryEdit::Duration(_))
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            EntryEdit::Title(_) => "title",
            EntryEdit::Duration(_) => "duration",
            EntryEdit::Notes(_) => "notes",
        }
    }

    pub fn apply_to(self, entry: &mut Entry) {
        match self {
            EntryEdit::Title(title) => entry.title = title,
            EntryEdit::Duration(duration) => entry.duration = duration,
            EntryEdit::Notes(notes) => entry.notes = notes,
        }
    }
}
