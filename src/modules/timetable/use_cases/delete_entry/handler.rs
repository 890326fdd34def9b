use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::commit::commit_decision;
use crate::modules::timetable::use_cases::delete_entry::command::DeleteEntry;
use crate::modules::timetable::use_cases::delete_entry::decide::decide_delete;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

pub struct DeleteEntryHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> DeleteEntryHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    pub fn new(store: Arc<TStore>, default_open_time: ClockTime) -> Self {
        Self {
            store,
            default_open_time,
        }
    }

    pub async fn handle(
        &self,
        owner_id: &str,
        command: DeleteEntry,
    ) -> Result<Timetable, ApplicationError> {
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        let entry_id = command.entry_id.clone();
        let decision = decide_delete(&state, command);
        let timetable = commit_decision(&*self.store, state, decision).await?;
        tracing::info!(owner_id, %entry_id, "timetable entry deleted");
        Ok(timetable)
    }
}
