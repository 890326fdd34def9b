// In memory implementation of the TimetableStore port.
//
// Purpose
// - Run handlers, sessions and the HTTP shell without a document database.
//
// Responsibilities
// - Store entries per owner keyed by entry_id, and one settings record per owner.
// - Apply batches under a single write lock so readers never observe half of one.
// - Simulate an unreachable backend and slow writes for tests.

use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::ports::{StoreError, TimetableStore};
use crate::modules::timetable::core::state::TimetableSettings;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimetableStore {
    entries: RwLock<HashMap<String, HashMap<String, Entry>>>,
    settings: RwLock<HashMap<String, TimetableSettings>>,
    is_offline: AtomicBool,
    write_delay_ms: AtomicU64,
}

impl InMemoryTimetableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_write_delay_ms(&self, delay_ms: u64) {
        self.write_delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Offline);
        }
        Ok(())
    }

    async fn before_write(&self) -> Result<(), StoreError> {
        let delay_ms = self.write_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        self.ensure_online()
    }
}

#[async_trait::async_trait]
impl TimetableStore for InMemoryTimetableStore {
    async fn list_entries(&self, owner_id: &str) -> Result<Vec<Entry>, StoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        let mut entries: Vec<Entry> = guard
            .get(owner_id)
            .map(|owned| owned.values().cloned().collect())
            .unwrap_or_default();
        entries.sort_by_key(|entry| (entry.order_id, entry.created_at));
        Ok(entries)
    }

    async fn put_entry(&self, owner_id: &str, entry: Entry) -> Result<(), StoreError> {
        self.before_write().await?;
        self.entries
            .write()
            .await
            .entry(owner_id.to_string())
            .or_default()
            .insert(entry.entry_id.clone(), entry);
        Ok(())
    }

    async fn put_entries_batch(
        &self,
        owner_id: &str,
        entries: Vec<Entry>,
    ) -> Result<(), StoreError> {
        self.before_write().await?;
        let mut guard = self.entries.write().await;
        let owned = guard.entry(owner_id.to_string()).or_default();
        for entry in entries {
            owned.insert(entry.entry_id.clone(), entry);
        }
        Ok(())
    }

    async fn delete_entry(&self, owner_id: &str, entry_id: &str) -> Result<(), StoreError> {
        self.before_write().await?;
        if let Some(owned) = self.entries.write().await.get_mut(owner_id) {
            owned.remove(entry_id);
        }
        Ok(())
    }

    async fn load_settings(
        &self,
        owner_id: &str,
    ) -> Result<Option<TimetableSettings>, StoreError> {
        self.ensure_online()?;
        Ok(self.settings.read().await.get(owner_id).copied())
    }

    async fn save_settings(
        &self,
        owner_id: &str,
        settings: TimetableSettings,
    ) -> Result<(), StoreError> {
        self.before_write().await?;
        self.settings
            .write()
            .await
            .insert(owner_id.to_string(), settings);
        Ok(())
    }
}
