use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::commit::commit_decision;
use crate::modules::timetable::use_cases::set_open_time::command::SetOpenTime;
use crate::modules::timetable::use_cases::set_open_time::decide::decide_set_open_time;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

pub struct SetOpenTimeHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> SetOpenTimeHandler<TStore>
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
        command: SetOpenTime,
    ) -> Result<Timetable, ApplicationError> {
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        let decision = decide_set_open_time(&state, command);
        let timetable = commit_decision(&*self.store, state, decision).await?;
        tracing::info!(owner_id, open_time = %timetable.open_time, "timetable open time set");
        Ok(timetable)
    }
}
