use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::adapters::inbound::identity::owner_from_headers;
use crate::modules::timetable::core::entry::NewEntry;
use crate::modules::timetable::use_cases::add_entry::command::AddEntry;
use crate::shell::http::error_status;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SeedBlankRowsBody {
    pub count: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<NewEntry>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let owner_id = owner_from_headers(&headers);

    match state
        .add_handler
        .handle(&owner_id, AddEntry::from_fields(fields))
        .await
    {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}

pub async fn handle_blank_rows(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SeedBlankRowsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let owner_id = owner_from_headers(&headers);

    match state.add_handler.seed_blank_rows(&owner_id, body.count).await {
        Ok(timetable) => (StatusCode::CREATED, Json(timetable)).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}
