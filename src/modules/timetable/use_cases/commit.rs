// Shared tail of every write handler.
//
// Responsibilities
// - Persist an accepted decision and hand back the resulting timetable.
// - Leave the store untouched for unchanged and rejected decisions.

use crate::modules::timetable::adapters::outbound::timetable_store::dispatch_mutations;
use crate::modules::timetable::core::decision::Decision;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;

pub async fn commit_decision<TStore>(
    store: &TStore,
    state: Timetable,
    decision: Decision,
) -> Result<Timetable, ApplicationError>
where
    TStore: TimetableStore + ?Sized,
{
    match decision {
        Decision::Accepted {
            timetable,
            mutations,
        } => {
            dispatch_mutations(store, &timetable.owner_id, mutations).await?;
            Ok(timetable)
        }
        Decision::Unchanged => Ok(state),
        Decision::Rejected { reason } => Err(ApplicationError::Rejected(reason)),
    }
}
