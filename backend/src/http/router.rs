//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Catalog snapshot
        .route(
            "/catalog",
            get(handlers::get_catalog).post(handlers::store_catalog),
        )
        // Dashboard and charts
        .route("/dash", get(handlers::get_dashboard))
        .route("/charts/team-external", get(handlers::get_team_external_chart))
        .route("/charts/segments", post(handlers::compute_segments))
        // Teams and clusters
        .route("/teams", get(handlers::list_teams))
        .route("/teams/filter", get(handlers::filter_teams))
        .route("/teams/{team_id}", get(handlers::get_team))
        .route("/clusters", get(handlers::list_clusters))
        .route(
            "/clusters/{cluster_id}/summary",
            get(handlers::get_cluster_summary),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Full catalog snapshots can be several megabytes.
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
