// Editing session: the one state container that owns a timetable while a user edits it.
//
// Purpose
// - Apply every operation to the in memory timetable first, then persist in the background.
//
// Responsibilities
// - Serialize operations on the timetable through one async mutex.
// - Queue the store writes of each accepted decision to one writer task per session, which
//   applies them in the order the decisions were taken and reports each outcome on a channel.
// - Debounce duration edits, so a burst of edits runs a single recompute over the latest list.
// - Cancel a pending recompute on close. Writes already queued are still applied.
//
// Notes
// - A failed write is reported, not rolled back. Call reload to resync with the store.
// - Writes are queued while the timetable lock is held, so queue order is decision order.

use crate::modules::timetable::adapters::outbound::timetable_store::{
    dispatch_mutations, load_timetable,
};
use crate::modules::timetable::core::decision::{DecideError, Decision};
use crate::modules::timetable::core::entry::{Entry, EntryEdit, NewEntry};
use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::ports::{StoreError, TimetableStore};
use crate::modules::timetable::core::sequence::decide_recompute;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::add_entry::command::AddEntry;
use crate::modules::timetable::use_cases::add_entry::decide::{decide_add, decide_add_many};
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::delete_entry::command::DeleteEntry;
use crate::modules::timetable::use_cases::delete_entry::decide::decide_delete;
use crate::modules::timetable::use_cases::edit_entry_field::command::EditEntryField;
use crate::modules::timetable::use_cases::edit_entry_field::decide::decide_edit;
use crate::modules::timetable::use_cases::reorder_entries::command::ReorderEntries;
use crate::modules::timetable::use_cases::reorder_entries::decide::decide_reorder;
use crate::modules::timetable::use_cases::set_open_time::command::SetOpenTime;
use crate::modules::timetable::use_cases::set_open_time::decide::decide_set_open_time;
use crate::shared::core::clock_time::ClockTime;
use crate::shared::infrastructure::debounce::{DEFAULT_WINDOW, Debouncer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReport {
    Persisted {
        operation: &'static str,
    },
    PersistenceFailed {
        operation: &'static str,
        error: StoreError,
    },
    /// Sent every time the debounced recompute runs, with the list it produced.
    Recomputed {
        entries: Vec<Entry>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub debounce_window: Duration,
    pub default_open_time: ClockTime,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_WINDOW,
            default_open_time: ClockTime::MIDNIGHT,
        }
    }
}

pub struct TimetableSession<TStore>
where
    TStore: TimetableStore + 'static,
{
    owner_id: String,
    default_open_time: ClockTime,
    timetable: Arc<Mutex<Timetable>>,
    store: Arc<TStore>,
    debouncer: Debouncer,
    writes: UnboundedSender<PendingWrite>,
    reports: UnboundedSender<SessionReport>,
}

/// One accepted decision's store writes, waiting for the session writer.
struct PendingWrite {
    operation: &'static str,
    mutations: Vec<StoreMutation>,
}

impl<TStore> TimetableSession<TStore>
where
    TStore: TimetableStore + 'static,
{
    /// Loads the owner's timetable. The receiver yields one report per persisted operation.
    pub async fn open(
        owner_id: impl Into<String>,
        store: Arc<TStore>,
        config: SessionConfig,
    ) -> Result<(Self, UnboundedReceiver<SessionReport>), ApplicationError> {
        let owner_id = owner_id.into();
        let timetable = load_timetable(&*store, &owner_id, config.default_open_time).await?;
        tracing::info!(%owner_id, entries = timetable.len(), "timetable session opened");

        let (reports, receiver) = unbounded_channel();
        let writes = spawn_writer(store.clone(), owner_id.clone(), reports.clone());
        let session = Self {
            owner_id,
            default_open_time: config.default_open_time,
            timetable: Arc::new(Mutex::new(timetable)),
            store,
            debouncer: Debouncer::new(config.debounce_window),
            writes,
            reports,
        };
        Ok((session, receiver))
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub async fn snapshot(&self) -> Timetable {
        self.timetable.lock().await.clone()
    }

    pub fn has_pending_recompute(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub async fn add_entry(&self, fields: NewEntry) -> Result<Entry, ApplicationError> {
        let command = AddEntry::from_fields(fields);
        let entry_id = command.entry_id.clone();
        let timetable = self
            .apply("add_entry", |state| decide_add(state, command))
            .await?;
        timetable
            .entry(&entry_id)
            .cloned()
            .ok_or(ApplicationError::Rejected(DecideError::NotFound(entry_id)))
    }

    pub async fn seed_blank_rows(&self, count: usize) -> Result<Timetable, ApplicationError> {
        let commands = AddEntry::blank_rows(count)?;
        self.apply("seed_blank_rows", |state| decide_add_many(state, commands))
            .await
    }

    pub async fn delete_entry(&self, entry_id: &str) -> Result<Timetable, ApplicationError> {
        let command = DeleteEntry {
            entry_id: entry_id.to_string(),
        };
        self.apply("delete_entry", |state| decide_delete(state, command))
            .await
    }

    pub async fn reorder(
        &self,
        from_index: usize,
        to_index: Option<usize>,
    ) -> Result<Timetable, ApplicationError> {
        let command = ReorderEntries {
            from_index,
            to_index,
        };
        self.apply("reorder_entries", |state| decide_reorder(state, command))
            .await
    }

    /// Title and notes edits never touch end times. A duration edit (re)starts the
    /// debounce window; the recompute runs once the window passes without another one.
    pub async fn edit_field(
        &mut self,
        entry_id: &str,
        edit: EntryEdit,
    ) -> Result<Timetable, ApplicationError> {
        let affects_sequence = edit.affects_sequence();
        let command = EditEntryField {
            entry_id: entry_id.to_string(),
            edit,
        };
        let before = self.snapshot().await;
        let timetable = self
            .apply("edit_entry_field", |state| decide_edit(state, command))
            .await?;

        if affects_sequence && timetable != before {
            self.schedule_recompute();
        }
        Ok(timetable)
    }

    pub async fn set_open_time(&self, open_time: ClockTime) -> Result<Timetable, ApplicationError> {
        let command = SetOpenTime { open_time };
        self.apply("set_open_time", |state| decide_set_open_time(state, command))
            .await
    }

    /// Replaces the in memory timetable with what the store holds now.
    pub async fn reload(&self) -> Result<Timetable, ApplicationError> {
        let fresh = load_timetable(&*self.store, &self.owner_id, self.default_open_time).await?;
        *self.timetable.lock().await = fresh.clone();
        tracing::debug!(owner_id = %self.owner_id, "timetable session reloaded");
        Ok(fresh)
    }

    /// Returns true when a pending recompute was cancelled.
    pub fn close(mut self) -> bool {
        let cancelled = self.debouncer.cancel();
        tracing::info!(owner_id = %self.owner_id, cancelled, "timetable session closed");
        cancelled
    }

    async fn apply<F>(&self, operation: &'static str, decide: F) -> Result<Timetable, ApplicationError>
    where
        F: FnOnce(&Timetable) -> Decision,
    {
        let mut guard = self.timetable.lock().await;
        match decide(&*guard) {
            Decision::Accepted {
                timetable,
                mutations,
            } => {
                *guard = timetable.clone();
                enqueue(&self.writes, operation, mutations);
                Ok(timetable)
            }
            Decision::Unchanged => Ok(guard.clone()),
            Decision::Rejected { reason } => Err(ApplicationError::Rejected(reason)),
        }
    }

    fn schedule_recompute(&mut self) {
        let timetable = self.timetable.clone();
        let writes = self.writes.clone();
        let reports = self.reports.clone();

        self.debouncer.schedule(async move {
            let mut guard = timetable.lock().await;
            if let Decision::Accepted {
                timetable: next,
                mutations,
            } = decide_recompute(&guard)
            {
                *guard = next;
                enqueue(&writes, "recompute", mutations);
            }
            let _ = reports.send(SessionReport::Recomputed {
                entries: guard.entries.clone(),
            });
        });
    }
}

fn enqueue(
    writes: &UnboundedSender<PendingWrite>,
    operation: &'static str,
    mutations: Vec<StoreMutation>,
) {
    if writes
        .send(PendingWrite {
            operation,
            mutations,
        })
        .is_err()
    {
        tracing::warn!(operation, "timetable writer stopped, write dropped");
    }
}

/// Starts the session writer. It drains the queue one decision at a time and stops once every
/// sender is gone, after the writes already queued.
fn spawn_writer<TStore>(
    store: Arc<TStore>,
    owner_id: String,
    reports: UnboundedSender<SessionReport>,
) -> UnboundedSender<PendingWrite>
where
    TStore: TimetableStore + 'static,
{
    let (writes, mut queue) = unbounded_channel::<PendingWrite>();
    tokio::spawn(async move {
        while let Some(PendingWrite {
            operation,
            mutations,
        }) = queue.recv().await
        {
            let report = match dispatch_mutations(&*store, &owner_id, mutations).await {
                Ok(()) => SessionReport::Persisted { operation },
                Err(error) => {
                    tracing::warn!(%owner_id, operation, %error, "timetable write failed, in memory state kept");
                    SessionReport::PersistenceFailed { operation, error }
                }
            };
            let _ = reports.send(report);
        }
        tracing::debug!(%owner_id, "timetable writer stopped");
    });
    writes
}
