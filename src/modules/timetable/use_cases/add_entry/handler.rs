use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::decision::DecideError;
use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::add_entry::command::AddEntry;
use crate::modules::timetable::use_cases::add_entry::decide::{decide_add, decide_add_many};
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::commit::commit_decision;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

pub struct AddEntryHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> AddEntryHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    pub fn new(store: Arc<TStore>, default_open_time: ClockTime) -> Self {
        Self {
            store,
            default_open_time,
        }
    }

    pub async fn handle(&self, owner_id: &str, command: AddEntry) -> Result<Entry, ApplicationError> {
        let entry_id = command.entry_id.clone();
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        let decision = decide_add(&state, command);
        let timetable = commit_decision(&*self.store, state, decision).await?;
        tracing::info!(owner_id, %entry_id, "timetable entry added");
        timetable
            .entry(&entry_id)
            .cloned()
            .ok_or(ApplicationError::Rejected(DecideError::NotFound(entry_id)))
    }

    pub async fn seed_blank_rows(
        &self,
        owner_id: &str,
        count: usize,
    ) -> Result<Timetable, ApplicationError> {
        let commands = AddEntry::blank_rows(count)?;
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        let decision = decide_add_many(&state, commands);
        commit_decision(&*self.store, state, decision).await
    }
}
