use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::commit::commit_decision;
use crate::modules::timetable::use_cases::reorder_entries::command::ReorderEntries;
use crate::modules::timetable::use_cases::reorder_entries::decide::decide_reorder;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

pub struct ReorderEntriesHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> ReorderEntriesHandler<TStore>
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
        command: ReorderEntries,
    ) -> Result<Timetable, ApplicationError> {
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        tracing::debug!(owner_id, from = command.from_index, to = ?command.to_index, "reordering timetable");
        let decision = decide_reorder(&state, command);
        commit_decision(&*self.store, state, decision).await
    }
}
