// Ports define what the timetable needs from the outside world, without implementing it.
//
// Purpose
// - Describe per-owner document storage for entries and timetable settings.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - Use the in memory store, which can be switched offline and slowed down.

use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::state::TimetableSettings;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("timetable store offline")]
    Offline,

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimetableStore: Send + Sync {
    /// Entries of one owner, ordered by order_id.
    async fn list_entries(&self, owner_id: &str) -> Result<Vec<Entry>, StoreError>;

    /// Upsert keyed by entry_id.
    async fn put_entry(&self, owner_id: &str, entry: Entry) -> Result<(), StoreError>;

    /// Atomic multi-entry upsert: either every entry is written or none is.
    async fn put_entries_batch(&self, owner_id: &str, entries: Vec<Entry>)
    -> Result<(), StoreError>;

    /// Deleting an absent entry succeeds.
    async fn delete_entry(&self, owner_id: &str, entry_id: &str) -> Result<(), StoreError>;

    async fn load_settings(&self, owner_id: &str)
    -> Result<Option<TimetableSettings>, StoreError>;

    async fn save_settings(
        &self,
        owner_id: &str,
        settings: TimetableSettings,
    ) -> Result<(), StoreError>;
}
