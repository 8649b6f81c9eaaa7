//! Team list views, including the list a bucket row drills down into.

use crate::models::Team;
use crate::routes::teams::{TeamFilterResult, TeamSummary};
use crate::services::buckets::{BucketMetric, DrillDownQuery};

pub fn team_summary(team: &Team) -> TeamSummary {
    TeamSummary {
        id: team.id,
        name: team.name.clone(),
        status: team.status,
        product_area_id: team.product_area_id,
        member_count: team.members.len(),
        external_percentage: team.metric(),
    }
}

/// Summaries of `teams`, ordered by name.
pub fn summarize_teams(teams: &[Team]) -> Vec<TeamSummary> {
    let mut summaries: Vec<TeamSummary> = teams.iter().map(team_summary).collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    summaries
}

/// Teams whose metric lies strictly between the query bounds.
///
/// For a query built from a bucket this is exactly the set of teams counted
/// in that bucket's row.
pub fn filter_teams(teams: &[Team], query: &DrillDownQuery) -> TeamFilterResult {
    let mut matching: Vec<TeamSummary> = teams
        .iter()
        .filter(|team| query.matches(team.metric()))
        .map(team_summary)
        .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name));

    TeamFilterResult {
        filter_name: query.filter_name.clone(),
        label: query.label.clone(),
        less_than: query.less_than,
        greater_than: query.greater_than,
        teams: matching,
    }
}
