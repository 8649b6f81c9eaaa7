pub mod catalog;
pub mod charts;
pub mod dashboard;
pub mod teams;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::catalog::GET_CATALOG, "get_catalog");
        assert_eq!(super::catalog::POST_CATALOG, "store_catalog");
        assert_eq!(
            super::charts::GET_TEAM_EXTERNAL_CHART,
            "get_team_external_chart"
        );
        assert_eq!(super::charts::COMPUTE_SEGMENTS, "compute_segments");
        assert_eq!(super::dashboard::GET_DASHBOARD_DATA, "get_dashboard_data");
        assert_eq!(super::teams::LIST_TEAMS, "list_teams");
        assert_eq!(super::teams::GET_TEAM, "get_team");
        assert_eq!(super::teams::FILTER_TEAMS, "filter_teams");
        assert_eq!(super::teams::LIST_CLUSTERS, "list_clusters");
        assert_eq!(super::teams::GET_CLUSTER_SUMMARY, "get_cluster_summary");
    }
}
