//! Read access to teams, product areas and clusters.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Cluster, ClusterId, ProductArea, Team, TeamId};

/// Queries over the entities of the stored snapshot.
///
/// All list operations return an empty list when no snapshot is stored.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams regardless of status.
    async fn list_teams(&self) -> RepositoryResult<Vec<Team>>;

    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no team has this id
    async fn get_team(&self, team_id: TeamId) -> RepositoryResult<Team>;

    async fn list_product_areas(&self) -> RepositoryResult<Vec<ProductArea>>;

    async fn list_clusters(&self) -> RepositoryResult<Vec<Cluster>>;

    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no cluster has this id
    async fn get_cluster(&self, cluster_id: ClusterId) -> RepositoryResult<Cluster>;
}
