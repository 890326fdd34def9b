use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::sequence::decide_recompute;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::commit::commit_decision;
use crate::modules::timetable::use_cases::edit_entry_field::command::EditEntryField;
use crate::modules::timetable::use_cases::edit_entry_field::decide::decide_edit;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

/// Request scoped edit. There is no burst to collapse across requests, so a duration edit
/// is followed by the recompute right away. The editing session debounces instead.
pub struct EditEntryFieldHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> EditEntryFieldHandler<TStore>
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
        command: EditEntryField,
    ) -> Result<Timetable, ApplicationError> {
        let affects_sequence = command.edit.affects_sequence();
        let field = command.edit.field_name();
        let state = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        let decision = decide_edit(&state, command);
        let timetable = commit_decision(&*self.store, state, decision).await?;
        tracing::debug!(owner_id, field, "timetable entry edited");

        if !affects_sequence {
            return Ok(timetable);
        }
        let decision = decide_recompute(&timetable);
        commit_decision(&*self.store, timetable, decision).await
    }
}
