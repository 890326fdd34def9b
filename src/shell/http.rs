use axum::{
    Router,
    http::StatusCode,
    routing::{get, patch, post, put},
};

use crate::modules::timetable::core::decision::DecideError;
use crate::modules::timetable::use_cases::add_entry::inbound::http as add_http;
use crate::modules::timetable::use_cases::application_error::ApplicationError;
use crate::modules::timetable::use_cases::delete_entry::inbound::http as delete_http;
use crate::modules::timetable::use_cases::edit_entry_field::inbound::http as edit_http;
use crate::modules::timetable::use_cases::get_timetable::inbound::http as get_http;
use crate::modules::timetable::use_cases::reorder_entries::inbound::http as reorder_http;
use crate::modules::timetable::use_cases::set_open_time::inbound::http as open_time_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/timetable", get(get_http::handle))
        .route("/timetable/entries", post(add_http::handle))
        .route("/timetable/blank-rows", post(add_http::handle_blank_rows))
        .route(
            "/timetable/entries/{entry_id}",
            patch(edit_http::handle).delete(delete_http::handle),
        )
        .route("/timetable/reorder", post(reorder_http::handle))
        .route("/timetable/open-time", put(open_time_http::handle))
        .with_state(state)
}

pub fn error_status(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Rejected(DecideError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Rejected(DecideError::IndexOutOfRange { .. }) => StatusCode::CONFLICT,
        ApplicationError::Rejected(DecideError::RankExhausted(_)) => StatusCode::CONFLICT,
        ApplicationError::Rejected(DecideError::TooManyRows { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ApplicationError::InvalidTimeFormat(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Persistence(error) => {
            tracing::error!(%error, "timetable store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
