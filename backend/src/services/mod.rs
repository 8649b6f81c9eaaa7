//! Service layer for catalog views.
//!
//! Everything in this module is a pure transform over catalog records already
//! loaded by the caller. Storage access lives in [`crate::db::services`].

pub mod buckets;
pub mod dashboard;
pub mod membership;
pub mod segments;
pub mod team_filter;

pub use buckets::{
    bucketize, bucketize_by, external_share_buckets, percentage_of, BucketDefinition,
    BucketMetric, DrillDownError, DrillDownQuery, DrillDownTarget,
};
pub use dashboard::{compute_dashboard, external_share_chart, DashboardSettings};
pub use membership::{
    external_count, external_percentage, member_composition, summarize_cluster,
};
pub use segments::{compute_segments, PIE_PALETTE};
pub use team_filter::{filter_teams, summarize_teams, team_summary};
