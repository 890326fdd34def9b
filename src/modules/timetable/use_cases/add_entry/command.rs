use crate::modules::timetable::core::decision::DecideError;
use crate::modules::timetable::core::entry::NewEntry;
use crate::shared::core::clock_time::ClockTime;
use chrono::Utc;
use uuid::Uuid;

/// Most blank rows one seed request may create.
pub const MAX_BLANK_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEntry {
    pub entry_id: String,
    pub title: String,
    pub duration: ClockTime,
    pub notes: String,
    pub created_at: i64,
}

impl AddEntry {
    /// Assigns a fresh identifier and the current time.
    pub fn from_fields(fields: NewEntry) -> Self {
        Self {
            entry_id: Uuid::now_v7().to_string(),
            title: fields.title,
            duration: fields.duration,
            notes: fields.notes,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn blank() -> Self {
        Self::from_fields(NewEntry::default())
    }

    pub fn blank_rows(count: usize) -> Result<Vec<Self>, DecideError> {
        if count > MAX_BLANK_ROWS {
            return Err(DecideError::TooManyRows {
                requested: count,
                limit: MAX_BLANK_ROWS,
            });
        }
        Ok((0..count).map(|_| Self::blank()).collect())
    }
}
