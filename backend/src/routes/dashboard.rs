use serde::{Deserialize, Serialize};

use crate::models::TeamRole;
use crate::routes::charts::{BucketChart, PieChart};

// =========================================================
// Dashboard types + route
// =========================================================

/// Number of members holding a role across all teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: TeamRole,
    pub count: usize,
}

/// Headline numbers of the catalog front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub teams: usize,
    pub teams_edited_last_week: usize,
    pub team_empty: usize,
    pub team_up_to5: usize,
    pub team_up_to10: usize,
    pub team_up_to20: usize,
    pub team_over20: usize,
    pub unique_resources_in_a_team: usize,
    pub resources: usize,
    pub roles: Vec<RoleCount>,
}

/// Summary plus the charts rendered next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub member_count_chart: PieChart,
    pub role_chart: PieChart,
    pub external_chart: BucketChart,
}

/// Route function name constant for dashboard data
pub const GET_DASHBOARD_DATA: &str = "get_dashboard_data";
