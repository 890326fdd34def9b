use crate::modules::timetable::adapters::outbound::timetable_store::load_timetable;
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::sequence::titled_first;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

pub struct GetTimetableHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    store: Arc<TStore>,
    default_open_time: ClockTime,
}

impl<TStore> GetTimetableHandler<TStore>
where
    TStore: TimetableStore + 'static,
{
    pub fn new(store: Arc<TStore>, default_open_time: ClockTime) -> Self {
        Self {
            store,
            default_open_time,
        }
    }

    /// `titled_first` only changes the listing order. Stored ranks and end times are untouched.
    pub async fn handle(
        &self,
        owner_id: &str,
        titled_first_view: bool,
    ) -> Result<Timetable, ApplicationError> {
        let mut timetable = load_timetable(&*self.store, owner_id, self.default_open_time).await?;
        if titled_first_view {
            timetable.entries = titled_first(&timetable.entries);
        }
        Ok(timetable)
    }
}
