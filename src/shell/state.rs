use crate::modules::timetable::adapters::outbound::timetable_store_in_memory::InMemoryTimetableStore;
use crate::modules::timetable::use_cases::add_entry::handler::AddEntryHandler;
use crate::modules::timetable::use_cases::delete_entry::handler::DeleteEntryHandler;
use crate::modules::timetable::use_cases::edit_entry_field::handler::EditEntryFieldHandler;
use crate::modules::timetable::use_cases::get_timetable::handler::GetTimetableHandler;
use crate::modules::timetable::use_cases::reorder_entries::handler::ReorderEntriesHandler;
use crate::modules::timetable::use_cases::set_open_time::handler::SetOpenTimeHandler;
use crate::shared::core::clock_time::ClockTime;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryTimetableStore>,
    pub get_handler: Arc<GetTimetableHandler<InMemoryTimetableStore>>,
    pub add_handler: Arc<AddEntryHandler<InMemoryTimetableStore>>,
    pub delete_handler: Arc<DeleteEntryHandler<InMemoryTimetableStore>>,
    pub edit_handler: Arc<EditEntryFieldHandler<InMemoryTimetableStore>>,
    pub reorder_handler: Arc<ReorderEntriesHandler<InMemoryTimetableStore>>,
    pub open_time_handler: Arc<SetOpenTimeHandler<InMemoryTimetableStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryTimetableStore>, default_open_time: ClockTime) -> Self {
        Self {
            get_handler: Arc::new(GetTimetableHandler::new(store.clone(), default_open_time)),
            add_handler: Arc::new(AddEntryHandler::new(store.clone(), default_open_time)),
            delete_handler: Arc::new(DeleteEntryHandler::new(store.clone(), default_open_time)),
            edit_handler: Arc::new(EditEntryFieldHandler::new(store.clone(), default_open_time)),
            reorder_handler: Arc::new(ReorderEntriesHandler::new(store.clone(), default_open_time)),
            open_time_handler: Arc::new(SetOpenTimeHandler::new(store.clone(), default_open_time)),
            store,
        }
    }

    pub fn in_memory(default_open_time: ClockTime) -> Self {
        Self::new(Arc::new(InMemoryTimetableStore::new()), default_open_time)
    }
}
