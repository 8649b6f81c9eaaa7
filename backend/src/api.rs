//! Public API surface.
//!
//! Consolidates the catalog records and view DTOs. All types derive
//! Serialize/Deserialize with camelCase field names.

pub use crate::models::{
    AreaType, CatalogSnapshot, ChangeStamp, Cluster, ClusterId, ClusterMember, ProductArea,
    ProductAreaId, Resource, ResourceType, Status, Team, TeamId, TeamMember, TeamRole,
};
pub use crate::routes::catalog::CatalogInfo;
pub use crate::routes::charts::{
    BucketChart, BucketRow, PieChart, Segment, SegmentResult, SegmentsRequest,
};
pub use crate::routes::dashboard::{DashboardData, DashboardSummary, RoleCount};
pub use crate::routes::teams::{ClusterSummary, MemberComposition, TeamFilterResult, TeamSummary};
