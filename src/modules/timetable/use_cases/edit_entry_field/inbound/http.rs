use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::timetable::adapters::inbound::identity::owner_from_headers;
use crate::modules::timetable::core::entry::EntryEdit;
use crate::modules::timetable::use_cases::edit_entry_field::command::EditEntryField;
use crate::shell::http::error_status;
use crate::shell::state::AppState;

/// Body: `{"field": "title" | "duration" | "notes", "value": ...}`.
pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entry_id): Path<String>,
    body: Result<Json<EntryEdit>, JsonRejection>,
) -> impl IntoResponse {
    let Json(edit) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let owner_id = owner_from_headers(&headers);

    match state
        .edit_handler
        .handle(&owner_id, EditEntryField { entry_id, edit })
        .await
    {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}
