//! Front page summary and charts.
//!
//! Everything here is derived from a slice of teams and an explicit `now`,
//! so the same catalog always renders the same dashboard.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Team, TeamRole};
use crate::routes::charts::{BucketChart, BucketRow, PieChart, Segment};
use crate::routes::dashboard::{DashboardData, DashboardSummary, RoleCount};
use crate::services::buckets::{
    bucketize_by, external_share_buckets, BucketDefinition, BucketMetric, DrillDownTarget,
};
use crate::services::segments::compute_segments;

pub const MEMBER_COUNT_CHART_TITLE: &str = "Antall medlemmer per team";
pub const ROLE_CHART_TITLE: &str = "Roller i team";
pub const EXTERNAL_CHART_TITLE: &str = "Andel eksterne i teamene";

const TEAM_SIZE: DrillDownTarget = DrillDownTarget {
    parameter: "memberCount",
    subject: "Teams",
};

/// Tunables of the dashboard computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Window for `teamsEditedLastWeek`, in days before `now`.
    pub edited_within_days: i64,
}

/// Largest accepted `edited_within_days`.
pub const MAX_EDITED_WITHIN_DAYS: i64 = 36_500;

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            edited_within_days: 7,
        }
    }
}

impl DashboardSettings {
    /// Check that the edit window is within `0..=MAX_EDITED_WITHIN_DAYS`.
    pub fn validate(&self) -> Result<(), String> {
        if (0..=MAX_EDITED_WITHIN_DAYS).contains(&self.edited_within_days) {
            Ok(())
        } else {
            Err(format!(
                "edited_within_days must be between 0 and {}, got {}",
                MAX_EDITED_WITHIN_DAYS, self.edited_within_days
            ))
        }
    }

    /// Earliest edit time counted as recent.
    ///
    /// A window too large for the calendar reaches back to the earliest
    /// representable instant.
    pub fn edited_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::try_days(self.edited_within_days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Member count groups shown on the dashboard.
pub fn team_size_buckets() -> Vec<BucketDefinition> {
    vec![
        BucketDefinition::new("Ingen medlemmer", 0, 1),
        BucketDefinition::new("Opp til 5 medlemmer", 1, 6),
        BucketDefinition::new("Opp til 10 medlemmer", 6, 11),
        BucketDefinition::new("Opp til 20 medlemmer", 11, 21),
        BucketDefinition::new("Over 20 medlemmer", 21, i64::MAX),
    ]
}

fn edited_since(team: &Team, cutoff: DateTime<Utc>) -> bool {
    team.change_stamp
        .as_ref()
        .is_some_and(|stamp| stamp.last_modified_date >= cutoff)
}

/// Role occurrences across all members, most frequent first.
///
/// A member holding two roles counts once for each. Equal counts keep the
/// declaration order of [`TeamRole`].
pub fn count_roles<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<RoleCount> {
    let mut counts: BTreeMap<TeamRole, usize> = BTreeMap::new();
    for team in teams {
        for member in &team.members {
            for role in &member.roles {
                *counts.entry(*role).or_insert(0) += 1;
            }
        }
    }

    let mut roles: Vec<RoleCount> = counts
        .into_iter()
        .map(|(role, count)| RoleCount { role, count })
        .collect();
    roles.sort_by(|a, b| b.count.cmp(&a.count));
    roles
}

fn external_chart_of(teams: &[&Team]) -> BucketChart {
    BucketChart {
        title: EXTERNAL_CHART_TITLE.to_string(),
        rows: bucketize_by(teams, &external_share_buckets(), &Team::DRILL_DOWN, |t| {
            t.metric()
        }),
    }
}

/// External share breakdown of `teams`, one row per reference bucket.
pub fn external_share_chart(teams: &[Team]) -> BucketChart {
    let teams: Vec<&Team> = teams.iter().collect();
    external_chart_of(&teams)
}

fn group_count(rows: &[BucketRow], index: usize) -> usize {
    rows.get(index).map(|r| r.count).unwrap_or(0)
}

/// Build the dashboard for the active teams in `teams`.
pub fn compute_dashboard(
    teams: &[Team],
    resource_count: usize,
    now: DateTime<Utc>,
    settings: &DashboardSettings,
) -> DashboardData {
    let active: Vec<&Team> = teams.iter().filter(|t| t.is_active()).collect();
    let cutoff = settings.edited_cutoff(now);

    let size_rows = bucketize_by(active.as_slice(), &team_size_buckets(), &TEAM_SIZE, |t| {
        t.members.len() as i64
    });

    let unique_resources: HashSet<&str> = active
        .iter()
        .flat_map(|t| t.members.iter().map(|m| m.nav_ident.as_str()))
        .collect();
    let roles = count_roles(active.iter().copied());

    let summary = DashboardSummary {
        teams: active.len(),
        teams_edited_last_week: active.iter().filter(|t| edited_since(t, cutoff)).count(),
        team_empty: group_count(&size_rows, 0),
        team_up_to5: group_count(&size_rows, 1),
        team_up_to10: group_count(&size_rows, 2),
        team_up_to20: group_count(&size_rows, 3),
        team_over20: group_count(&size_rows, 4),
        unique_resources_in_a_team: unique_resources.len(),
        resources: resource_count,
        roles,
    };

    let size_segments: Vec<Segment> = size_rows
        .iter()
        .map(|row| Segment::new(row.label.clone(), row.count as u64))
        .collect();
    let role_segments: Vec<Segment> = summary
        .roles
        .iter()
        .map(|rc| Segment::new(rc.role.as_str(), rc.count as u64))
        .collect();

    log::debug!(
        "Computed dashboard: {} active teams, {} roles",
        summary.teams,
        summary.roles.len()
    );

    DashboardData {
        member_count_chart: PieChart {
            title: MEMBER_COUNT_CHART_TITLE.to_string(),
            segments: compute_segments(&size_segments),
        },
        role_chart: PieChart {
            title: ROLE_CHART_TITLE.to_string(),
            segments: compute_segments(&role_segments),
        },
        external_chart: external_chart_of(&active),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChangeStamp, Resource, ResourceType, Status, TeamId, TeamMember};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn member(ident: &str, roles: Vec<TeamRole>, external: bool) -> TeamMember {
        TeamMember {
            nav_ident: ident.to_string(),
            roles,
            description: None,
            resource: Resource {
                nav_ident: ident.to_string(),
                given_name: None,
                family_name: None,
                email: None,
                resource_type: Some(if external {
                    ResourceType::External
                } else {
                    ResourceType::Internal
                }),
            },
        }
    }

    fn team(name: &str, members: Vec<TeamMember>, edited_days_ago: Option<i64>) -> Team {
        Team {
            id: TeamId::generate(),
            name: name.to_string(),
            description: None,
            product_area_id: None,
            cluster_ids: vec![],
            status: Status::Active,
            members,
            change_stamp: edited_days_ago.map(|days| ChangeStamp {
                last_modified_by: "S1".to_string(),
                last_modified_date: now() - TimeDelta::days(days),
            }),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let data = compute_dashboard(&[], 0, now(), &DashboardSettings::default());

        assert_eq!(data.summary.teams, 0);
        assert!(data.summary.roles.is_empty());
        assert!(data.role_chart.segments.is_empty());
        assert_eq!(data.member_count_chart.segments.len(), 5);
        assert!(data
            .member_count_chart
            .segments
            .iter()
            .all(|s| s.fraction_of_total == 0.0));
        assert!(data.external_chart.rows.iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_summary_counts() {
        let big: Vec<TeamMember> = (0..21)
            .map(|i| member(&format!("B{i}"), vec![TeamRole::Developer], false))
            .collect();
        let mut inactive = team("Nedlagt", vec![member("X1", vec![], true)], Some(1));
        inactive.status = Status::Inactive;

        let teams = vec![
            team("Tomt", vec![], None),
            team(
                "Lite",
                vec![
                    member("A1", vec![TeamRole::Developer, TeamRole::TechLead], false),
                    member("A2", vec![TeamRole::Tester], true),
                ],
                Some(2),
            ),
            team("Stort", big, Some(30)),
            inactive,
        ];

        let data = compute_dashboard(&teams, 40, now(), &DashboardSettings::default());
        let summary = &data.summary;

        assert_eq!(summary.teams, 3);
        assert_eq!(summary.teams_edited_last_week, 1);
        assert_eq!(summary.team_empty, 1);
        assert_eq!(summary.team_up_to5, 1);
        assert_eq!(summary.team_up_to10, 0);
        assert_eq!(summary.team_up_to20, 0);
        assert_eq!(summary.team_over20, 1);
        assert_eq!(summary.unique_resources_in_a_team, 23);
        assert_eq!(summary.resources, 40);
        assert_eq!(
            summary.roles[0],
            RoleCount {
                role: TeamRole::Developer,
                count: 22
            }
        );
    }

    #[test]
    fn test_unique_resources_counts_shared_members_once() {
        let teams = vec![
            team("A", vec![member("S1", vec![], false)], None),
            team("B", vec![member("S1", vec![], false)], None),
        ];
        let data = compute_dashboard(&teams, 1, now(), &DashboardSettings::default());
        assert_eq!(data.summary.unique_resources_in_a_team, 1);
    }

    #[test]
    fn test_role_ties_keep_declaration_order() {
        let teams = vec![team(
            "A",
            vec![
                member("A1", vec![TeamRole::Tester], false),
                member("A2", vec![TeamRole::Developer], false),
                member("A3", vec![TeamRole::Architect, TeamRole::Architect], false),
            ],
            None,
        )];

        let roles: Vec<TeamRole> = count_roles(&teams).into_iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![TeamRole::Architect, TeamRole::Developer, TeamRole::Tester]
        );
    }

    #[test]
    fn test_edited_window_is_configurable() {
        let teams = vec![team("A", vec![], Some(10))];
        let settings = DashboardSettings {
            edited_within_days: 14,
        };
        let data = compute_dashboard(&teams, 0, now(), &settings);
        assert_eq!(data.summary.teams_edited_last_week, 1);
    }

    #[test]
    fn test_oversized_edit_window_counts_every_stamp() {
        let teams = vec![team("A", vec![], Some(400)), team("B", vec![], None)];
        let settings = DashboardSettings {
            edited_within_days: i64::MAX / 2,
        };

        let data = compute_dashboard(&teams, 0, now(), &settings);
        assert_eq!(data.summary.teams_edited_last_week, 1);
        assert_eq!(settings.edited_cutoff(now()), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_settings_validation() {
        assert!(DashboardSettings::default().validate().is_ok());
        for days in [-1, MAX_EDITED_WITHIN_DAYS + 1, i64::MAX] {
            let settings = DashboardSettings {
                edited_within_days: days,
            };
            assert!(settings.validate().is_err(), "{days} accepted");
        }
    }

    #[test]
    fn test_external_share_chart_matches_dashboard() {
        let teams = vec![
            team("A", vec![member("A1", vec![], true)], None),
            team("B", vec![member("B1", vec![], false)], None),
        ];
        let data = compute_dashboard(&teams, 2, now(), &DashboardSettings::default());
        assert_eq!(external_share_chart(&teams), data.external_chart);
    }

    #[test]
    fn test_chart_titles_and_role_labels() {
        let teams = vec![team("A", vec![member("A1", vec![TeamRole::ProductOwner], true)], None)];
        let data = compute_dashboard(&teams, 1, now(), &DashboardSettings::default());

        assert_eq!(data.member_count_chart.title, MEMBER_COUNT_CHART_TITLE);
        assert_eq!(data.role_chart.title, ROLE_CHART_TITLE);
        assert_eq!(data.role_chart.segments[0].label, "PRODUCT_OWNER");
        assert_eq!(data.external_chart.title, EXTERNAL_CHART_TITLE);
        assert_eq!(data.external_chart.rows[4].count, 1);
    }
}
