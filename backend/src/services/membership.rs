//! Member composition metrics.

use std::collections::HashSet;

use crate::models::{Cluster, Team, TeamMember};
use crate::routes::teams::{ClusterSummary, MemberComposition};
use crate::services::buckets::{percentage_of, BucketMetric, DrillDownTarget};

/// Drill-down target for the external share of a team.
pub const TEAM_EXTERNAL_SHARE: DrillDownTarget = DrillDownTarget {
    parameter: "percentageOfExternal",
    subject: "Teams",
};

pub fn external_count(members: &[TeamMember]) -> usize {
    members.iter().filter(|m| m.resource.is_external()).count()
}

/// Rounded share of external members, `0` for an empty member list.
pub fn external_percentage(members: &[TeamMember]) -> i64 {
    percentage_of(external_count(members), members.len())
}

pub fn member_composition(members: &[TeamMember]) -> MemberComposition {
    let external = external_count(members);
    MemberComposition {
        total: members.len(),
        external,
        internal: members.len() - external,
        external_percentage: percentage_of(external, members.len()),
    }
}

/// Cluster view: its teams and the combined composition of everyone in it.
///
/// A person who is both a direct cluster member and a team member, or who
/// sits in several of the cluster's teams, is counted once.
pub fn summarize_cluster(cluster: &Cluster, teams: &[Team]) -> ClusterSummary {
    let cluster_teams: Vec<&Team> = teams
        .iter()
        .filter(|t| t.cluster_ids.contains(&cluster.id))
        .collect();

    let mut seen = HashSet::new();
    let people: Vec<TeamMember> = cluster
        .members
        .iter()
        .chain(cluster_teams.iter().flat_map(|t| t.members.iter()))
        .filter(|m| seen.insert(m.nav_ident.as_str()))
        .cloned()
        .collect();

    ClusterSummary {
        id: cluster.id,
        name: cluster.name.clone(),
        team_count: cluster_teams.len(),
        composition: member_composition(&people),
    }
}

impl BucketMetric for Team {
    const DRILL_DOWN: DrillDownTarget = TEAM_EXTERNAL_SHARE;

    fn metric(&self) -> i64 {
        external_percentage(&self.members)
    }
}
