use crate::modules::timetable::core::entry::EntryEdit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntryField {
    pub entry_id: String,
    pub edit: EntryEdit,
}
