use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::adapters::inbound::identity::owner_from_headers;
use crate::shell::http::error_status;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TimetableQuery {
    #[serde(default)]
    pub titled_first: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TimetableQuery>,
) -> impl IntoResponse {
    let owner_id = owner_from_headers(&headers);

    match state
        .get_handler
        .handle(&owner_id, query.titled_first)
        .await
    {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_status(&error).into_response(),
    }
}

#[cfg(test)]
mod get_timetable_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;

    use super::handle;

    #[tokio::test]
    async fn it_should_return_the_callers_timetable() {
        let app = Router::new()
            .route("/timetable", get(handle))
            .with_state(AppState::in_memory("08:00".parse().unwrap()));

        let response = app
            .oneshot(
                Request::get("/timetable?titled_first=true")
                    .header("x-owner-id", "u-9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["owner_id"], "u-9");
        assert_eq!(json["open_time"], "08:00");
        assert_eq!(json["max_order_id"], 0);
    }
}
