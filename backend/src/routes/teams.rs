use serde::{Deserialize, Serialize};

use crate::models::{ClusterId, ProductAreaId, Status, TeamId};

/// Team list entry with its derived composition metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub status: Status,
    pub product_area_id: Option<ProductAreaId>,
    pub member_count: usize,
    pub external_percentage: i64,
}

/// Filtered team list opened from a bucket row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFilterResult {
    pub filter_name: String,
    pub label: String,
    pub less_than: i64,
    pub greater_than: i64,
    pub teams: Vec<TeamSummary>,
}

/// Internal/external split of a member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberComposition {
    pub total: usize,
    pub external: usize,
    pub internal: usize,
    pub external_percentage: i64,
}

/// Cluster list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub id: ClusterId,
    pub name: String,
    pub team_count: usize,
    pub composition: MemberComposition,
}

/// Route function name constants
pub const LIST_TEAMS: &str = "list_teams";
pub const GET_TEAM: &str = "get_team";
pub const FILTER_TEAMS: &str = "filter_teams";
pub const LIST_CLUSTERS: &str = "list_clusters";
pub const GET_CLUSTER_SUMMARY: &str = "get_cluster_summary";
