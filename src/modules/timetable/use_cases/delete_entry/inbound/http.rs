use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};

use crate::modules::timetable::adapters::inbound::identity::owner_from_headers;
use crate::modules::timetable::use_cases::delete_entry::command::DeleteEntry;
use crate::shell::http::error_status;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entry_id): Path<String>,
) -> impl IntoResponse {
    let owner_id = owner_from_headers(&headers);

    match state
        .delete_handler
        .handle(&owner_id, DeleteEntry { entry_id })
        .await
    {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}
