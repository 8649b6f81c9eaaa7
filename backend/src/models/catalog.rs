//! Team catalog domain model.
//!
//! These types mirror the JSON served by the upstream catalog API
//! (camelCase field names, SCREAMING_SNAKE_CASE enum values) so that a
//! snapshot fetched from it can be stored without any mapping step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_uuid_id!(TeamId);
crate::define_uuid_id!(ProductAreaId);
crate::define_uuid_id!(ClusterId);

/// Employment relation of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Internal,
    External,
    Other,
}

/// Lifecycle status of a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Active,
    Planned,
    Inactive,
}

/// Classification used to group product areas on the overview page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaType {
    ProductArea,
    It,
    Project,
    #[default]
    Other,
}

/// Role a member holds in a team, cluster or product area.
///
/// Declaration order is the tie-breaker when roles are ranked by count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamRole {
    Developer,
    Tester,
    Lead,
    TechLead,
    TestLead,
    AgileCoach,
    Architect,
    DataManager,
    DataScientist,
    Designer,
    DomainExpert,
    Operations,
    DomainResponsible,
    DomainResource,
    BusinessAnalyst,
    FunctionalAdviser,
    SolutionArchitect,
    ProductOwner,
    SecurityArchitect,
    TechnicalAdviser,
    TechnicalTester,
    MaintenanceManager,
    Other,
}

impl TeamRole {
    /// Wire name of the role, as used in catalog JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Developer => "DEVELOPER",
            TeamRole::Tester => "TESTER",
            TeamRole::Lead => "LEAD",
            TeamRole::TechLead => "TECH_LEAD",
            TeamRole::TestLead => "TEST_LEAD",
            TeamRole::AgileCoach => "AGILE_COACH",
            TeamRole::Architect => "ARCHITECT",
            TeamRole::DataManager => "DATA_MANAGER",
            TeamRole::DataScientist => "DATA_SCIENTIST",
            TeamRole::Designer => "DESIGNER",
            TeamRole::DomainExpert => "DOMAIN_EXPERT",
            TeamRole::Operations => "OPERATIONS",
            TeamRole::DomainResponsible => "DOMAIN_RESPONSIBLE",
            TeamRole::DomainResource => "DOMAIN_RESOURCE",
            TeamRole::BusinessAnalyst => "BUSINESS_ANALYST",
            TeamRole::FunctionalAdviser => "FUNCTIONAL_ADVISER",
            TeamRole::SolutionArchitect => "SOLUTION_ARCHITECT",
            TeamRole::ProductOwner => "PRODUCT_OWNER",
            TeamRole::SecurityArchitect => "SECURITY_ARCHITECT",
            TeamRole::TechnicalAdviser => "TECHNICAL_ADVISER",
            TeamRole::TechnicalTester => "TECHNICAL_TESTER",
            TeamRole::MaintenanceManager => "MAINTENANCE_MANAGER",
            TeamRole::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit stamp of the last modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStamp {
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

/// A person known to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub nav_ident: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
}

impl Resource {
    pub fn full_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            (Some(given), None) => given.clone(),
            (None, Some(family)) => family.clone(),
            (None, None) => self.nav_ident.clone(),
        }
    }

    pub fn is_external(&self) -> bool {
        self.resource_type == Some(ResourceType::External)
    }
}

/// Membership of a resource in a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub nav_ident: String,
    #[serde(default)]
    pub roles: Vec<TeamRole>,
    #[serde(default)]
    pub description: Option<String>,
    pub resource: Resource,
}

/// Membership of a resource directly in a cluster or product area.
pub type ClusterMember = TeamMember;

/// A product team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_area_id: Option<ProductAreaId>,
    #[serde(default)]
    pub cluster_ids: Vec<ClusterId>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub change_stamp: Option<ChangeStamp>,
}

impl Team {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// A product area grouping several teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductArea {
    pub id: ProductAreaId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area_type: AreaType,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// A cluster of teams inside a product area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: ClusterId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_area_id: Option<ProductAreaId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub members: Vec<ClusterMember>,
    #[serde(default)]
    pub change_stamp: Option<ChangeStamp>,
}

impl Cluster {
    /// Orders members by nav ident, the order the catalog presents them in.
    pub fn sort_members(&mut self) {
        self.members.sort_by(|a, b| a.nav_ident.cmp(&b.nav_ident));
    }
}

/// Complete catalog payload as fetched from the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub product_areas: Vec<ProductArea>,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}
