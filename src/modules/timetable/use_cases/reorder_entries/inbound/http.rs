use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::timetable::adapters::inbound::identity::owner_from_headers;
use crate::modules::timetable::use_cases::reorder_entries::command::ReorderEntries;
use crate::shell::http::error_status;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReorderEntries>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let owner_id = owner_from_headers(&headers);

    match state.reorder_handler.handle(&owner_id, command).await {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}
