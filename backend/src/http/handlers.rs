//! HTTP handlers for the REST API.
//!
//! Each handler loads what it needs through the storage services and hands
//! it to the pure view computations in [`crate::services`].

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    BucketChart, CatalogInfo, CatalogSnapshot, ClusterListResponse, ClusterSummary,
    DashboardData, HealthResponse, PieChart, SegmentsRequest, Team, TeamFilterResult,
    TeamListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::{ClusterId, TeamId};
use crate::services::{self, buckets::BucketMetric};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// POST /v1/catalog
///
/// Store a catalog snapshot. Answers 201 when stored and 200 when the same
/// snapshot was already present.
pub async fn store_catalog(
    State(state): State<AppState>,
    Json(snapshot): Json<CatalogSnapshot>,
) -> Result<(StatusCode, Json<CatalogInfo>), AppError> {
    let outcome = db_services::store_catalog(state.repository.as_ref(), snapshot).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.info)))
}

/// GET /v1/catalog
pub async fn get_catalog(State(state): State<AppState>) -> HandlerResult<CatalogInfo> {
    let info = db_services::current_catalog(state.repository.as_ref()).await?;
    Ok(Json(info))
}

// =============================================================================
// Dashboard & Charts
// =============================================================================

/// GET /v1/dash
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardData> {
    let repo = state.repository.as_ref();
    let teams = db_services::list_teams(repo).await?;
    let resources = db_services::resource_count(repo).await?;

    let data = services::compute_dashboard(&teams, resources, Utc::now(), &state.dashboard);
    Ok(Json(data))
}

/// GET /v1/charts/team-external
pub async fn get_team_external_chart(
    State(state): State<AppState>,
) -> HandlerResult<BucketChart> {
    let teams = db_services::list_active_teams(state.repository.as_ref()).await?;
    Ok(Json(services::external_share_chart(&teams)))
}

/// POST /v1/charts/segments
///
/// Prepare an arbitrary pie from labeled sizes.
pub async fn compute_segments(Json(request): Json<SegmentsRequest>) -> HandlerResult<PieChart> {
    Ok(Json(PieChart {
        title: request.title.unwrap_or_default(),
        segments: services::compute_segments(&request.segments),
    }))
}

// =============================================================================
// Teams & Clusters
// =============================================================================

/// GET /v1/teams
pub async fn list_teams(State(state): State<AppState>) -> HandlerResult<TeamListResponse> {
    let teams = db_services::list_teams(state.repository.as_ref()).await?;
    let teams = services::summarize_teams(&teams);
    let total = teams.len();

    Ok(Json(TeamListResponse { teams, total }))
}

/// GET /v1/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<TeamId>,
) -> HandlerResult<Team> {
    let team = db_services::get_team(state.repository.as_ref(), team_id).await?;
    Ok(Json(team))
}

/// GET /v1/teams/filter?percentageOfExternalLessThan=..&percentageOfExternalGreaterThan=..
///
/// Active teams inside the bucket a chart row links to.
pub async fn filter_teams(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> HandlerResult<TeamFilterResult> {
    let query = services::DrillDownQuery::parse(
        Team::DRILL_DOWN.parameter,
        query.as_deref().unwrap_or_default(),
    )?;
    let teams = db_services::list_active_teams(state.repository.as_ref()).await?;

    Ok(Json(services::filter_teams(&teams, &query)))
}

/// GET /v1/clusters
pub async fn list_clusters(State(state): State<AppState>) -> HandlerResult<ClusterListResponse> {
    let repo = state.repository.as_ref();
    let clusters = db_services::list_clusters(repo).await?;
    let teams = db_services::list_active_teams(repo).await?;

    let mut clusters: Vec<ClusterSummary> = clusters
        .iter()
        .map(|cluster| services::summarize_cluster(cluster, &teams))
        .collect();
    clusters.sort_by(|a, b| a.name.cmp(&b.name));
    let total = clusters.len();

    Ok(Json(ClusterListResponse { clusters, total }))
}

/// GET /v1/clusters/{cluster_id}/summary
pub async fn get_cluster_summary(
    State(state): State<AppState>,
    Path(cluster_id): Path<ClusterId>,
) -> HandlerResult<ClusterSummary> {
    let repo = state.repository.as_ref();
    let cluster = db_services::get_cluster(repo, cluster_id).await?;
    let teams = db_services::list_active_teams(repo).await?;

    Ok(Json(services::summarize_cluster(&cluster, &teams)))
}
