use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-owner-id", "planner")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn end_times(timetable: &Value) -> Vec<String> {
    timetable["entries"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["end_time"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn sequences_a_day_over_http() {
    let app = router(AppState::in_memory("00:00".parse().unwrap()));

    let (status, _) = send(&app, json_request("PUT", "/timetable/open-time", r#"{"open_time":"08:00"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let mut ids = Vec::new();
    for body in [
        r#"{"title":"Breakfast","duration":"00:30"}"#,
        r#"{"title":"Commute","duration":"00:45"}"#,
        r#"{"title":"Work","duration":"08:00"}"#,
    ] {
        let (status, entry) = send(&app, json_request("POST", "/timetable/entries", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(entry["entry_id"].as_str().unwrap().to_string());
    }

    let (_, timetable) = send(&app, json_request("GET", "/timetable", "")).await;
    assert_eq!(end_times(&timetable), vec!["08:30", "09:15", "17:15"]);

    let (status, timetable) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/timetable/entries/{}", ids[0]),
            r#"{"field":"duration","value":"01:00"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(end_times(&timetable), vec!["09:00", "09:45", "17:45"]);

    let (_, timetable) = send(&app, json_request("POST", "/timetable/reorder", r#"{"from_index":2,"to_index":0}"#)).await;
    assert_eq!(end_times(&timetable), vec!["16:00", "17:00", "17:45"]);
    assert_eq!(timetable["entries"][0]["order_id"], 1);

    let (status, timetable) = send(
        &app,
        json_request("DELETE", &format!("/timetable/entries/{}", ids[2]), ""),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(end_times(&timetable), vec!["09:00", "09:45"]);
    assert_eq!(timetable["max_order_id"], 3);
}

#[tokio::test]
async fn keeps_owners_apart() {
    let app = router(AppState::in_memory("08:00".parse().unwrap()));

    send(&app, json_request("POST", "/timetable/blank-rows", r#"{"count":3}"#)).await;

    let guest = Request::get("/timetable").body(Body::empty()).unwrap();
    let (status, timetable) = send(&app, guest).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timetable["owner_id"], "guest");
    assert_eq!(timetable["entries"].as_array().map(Vec::len), Some(0));

    let (_, timetable) = send(&app, json_request("GET", "/timetable", "")).await;
    assert_eq!(timetable["entries"].as_array().map(Vec::len), Some(3));
}
