//! Data Transfer Objects for the HTTP API.
//!
//! View payloads are re-exported from the routes module; only the envelopes
//! specific to HTTP live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    BucketChart, CatalogInfo, CatalogSnapshot, ClusterSummary, DashboardData, PieChart,
    SegmentsRequest, Team, TeamFilterResult, TeamSummary,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status: "connected", "disconnected" or "error: ..."
    pub repository: String,
}

/// Team list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamSummary>,
    pub total: usize,
}

/// Cluster list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterListResponse {
    pub clusters: Vec<ClusterSummary>,
    pub total: usize,
}
