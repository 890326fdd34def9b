use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use timetable::modules::timetable::adapters::outbound::timetable_store_in_memory::InMemoryTimetableStore;
use timetable::shell::config::AppConfig;
use timetable::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use timetable::shell::http::router;
use timetable::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    // Timetables live in process memory and are lost on restart.
    let store = Arc::new(InMemoryTimetableStore::new());
    let state = AppState::new(store, config.default_open_time);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        default_open_time = %config.default_open_time,
        "timetable listening on http://{}/timetable, GraphQL at {}",
        config.bind_addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
