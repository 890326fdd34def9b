use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::timetable::adapters::inbound::identity::RequestOwner;
use crate::modules::timetable::core::state::GUEST_OWNER_ID;
use crate::modules::timetable::core::entry::{Entry, EntryEdit, NewEntry};
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::add_entry::command::AddEntry;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::delete_entry::command::DeleteEntry;
use crate::modules::timetable::use_cases::edit_entry_field::command::EditEntryField;
use crate::modules::timetable::use_cases::reorder_entries::command::ReorderEntries;
use crate::modules::timetable::use_cases::set_open_time::command::SetOpenTime;
use crate::shared::core::clock_time::ClockTime;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEntry {
    pub entry_id: String,
    pub order_id: u32,
    pub title: String,
    pub duration: String,
    pub end_time: String,
    pub end_day_offset: u32,
    pub notes: String,
    pub created_at: i64,
}

impl From<Entry> for GqlEntry {
    fn from(e: Entry) -> Self {
        Self {
            entry_id: e.entry_id,
            order_id: e.order_id,
            title: e.title,
            duration: e.duration.to_string(),
            end_time: e.end_time.to_string(),
            end_day_offset: e.end_day_offset,
            notes: e.notes,
            created_at: e.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimetable {
    pub owner_id: String,
    pub open_time: String,
    pub max_order_id: u32,
    pub entries: Vec<GqlEntry>,
}

impl From<Timetable> for GqlTimetable {
    fn from(t: Timetable) -> Self {
        Self {
            owner_id: t.owner_id,
            open_time: t.open_time.to_string(),
            max_order_id: t.max_order_id,
            entries: t.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlEntryField {
    Title,
    Duration,
    Notes,
}

fn gql_error(error: ApplicationError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}

/// Requests executed without the HTTP shell carry no owner and act as the guest.
fn request_owner(context: &Context<'_>) -> String {
    context
        .data_opt::<RequestOwner>()
        .map(|owner| owner.0.clone())
        .unwrap_or_else(|| GUEST_OWNER_ID.to_string())
}

fn parse_time(value: &str) -> GqlResult<ClockTime> {
    value
        .parse::<ClockTime>()
        .map_err(|e| gql_error(ApplicationError::from(e)))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn timetable(
        &self,
        context: &Context<'_>,
        titled_first: Option<bool>,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let timetable = state
            .get_handler
            .handle(&owner_id, titled_first.unwrap_or(false))
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_entry(
        &self,
        context: &Context<'_>,
        title: Option<String>,
        duration: Option<String>,
        notes: Option<String>,
    ) -> GqlResult<GqlEntry> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let duration = match duration {
            Some(value) => parse_time(&value)?,
            None => ClockTime::MIDNIGHT,
        };
        let command = AddEntry::from_fields(NewEntry {
            title: title.unwrap_or_default(),
            duration,
            notes: notes.unwrap_or_default(),
        });

        let entry = state
            .add_handler
            .handle(&owner_id, command)
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }

    async fn seed_blank_rows(
        &self,
        context: &Context<'_>,
        count: u32,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let timetable = state
            .add_handler
            .seed_blank_rows(&owner_id, count as usize)
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }

    async fn edit_entry(
        &self,
        context: &Context<'_>,
        entry_id: String,
        field: GqlEntryField,
        value: String,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let edit = match field {
            GqlEntryField::Title => EntryEdit::Title(value),
            GqlEntryField::Duration => EntryEdit::Duration(parse_time(&value)?),
            GqlEntryField::Notes => EntryEdit::Notes(value),
        };

        let timetable = state
            .edit_handler
            .handle(&owner_id, EditEntryField { entry_id, edit })
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }

    async fn delete_entry(
        &self,
        context: &Context<'_>,
        entry_id: String,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let timetable = state
            .delete_handler
            .handle(&owner_id, DeleteEntry { entry_id })
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }

    /// A missing `to_index` is a drop outside any slot and leaves the order as it is.
    async fn reorder_entries(
        &self,
        context: &Context<'_>,
        from_index: u32,
        to_index: Option<u32>,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let command = ReorderEntries {
            from_index: from_index as usize,
            to_index: to_index.map(|to| to as usize),
        };

        let timetable = state
            .reorder_handler
            .handle(&owner_id, command)
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }

    async fn set_open_time(
        &self,
        context: &Context<'_>,
        open_time: String,
    ) -> GqlResult<GqlTimetable> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = request_owner(context);
        let command = SetOpenTime {
            open_time: parse_time(&open_time)?,
        };

        let timetable = state
            .open_time_handler
            .handle(&owner_id, command)
            .await
            .map_err(gql_error)?;
        Ok(timetable.into())
    }
}
