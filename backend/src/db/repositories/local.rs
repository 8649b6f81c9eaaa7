//! In-memory local repository implementation.
//!
//! Holds the current catalog snapshot plus id indexes for direct lookups.
//! Cloning the repository shares the underlying data.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{
    CatalogSnapshot, Cluster, ClusterId, ProductArea, Resource, Team, TeamId,
};
use crate::routes::catalog::CatalogInfo;

/// In-memory local repository.
///
/// # Example
/// ```
/// use teamcat::db::repositories::LocalRepository;
/// use teamcat::db::repository::TeamRepository;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let repo = LocalRepository::new();
/// let teams = runtime.block_on(repo.list_teams()).unwrap();
/// assert!(teams.is_empty());
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct StoredCatalog {
    snapshot: CatalogSnapshot,
    info: CatalogInfo,
    team_index: HashMap<TeamId, usize>,
    cluster_index: HashMap<ClusterId, usize>,
}

struct LocalData {
    catalog: Option<StoredCatalog>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            catalog: None,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Drop the stored snapshot. The version counter restarts.
    pub fn clear(&self) {
        self.data.write().catalog = None;
    }

    pub fn has_catalog(&self) -> bool {
        self.data.read().catalog.is_some()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Local repository is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }

    /// Run `f` against the stored snapshot, or return `empty` if none is stored.
    fn with_snapshot<T>(
        &self,
        operation: &str,
        empty: T,
        f: impl FnOnce(&StoredCatalog) -> T,
    ) -> RepositoryResult<T> {
        self.check_health(operation)?;
        let data = self.data.read();
        Ok(data.catalog.as_ref().map(f).unwrap_or(empty))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_catalog(
        &self,
        snapshot: CatalogSnapshot,
        checksum: &str,
    ) -> RepositoryResult<StoreOutcome> {
        self.check_health("store_catalog")?;

        let team_index = snapshot
            .teams
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i))
            .collect();
        let cluster_index = snapshot
            .clusters
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        let mut data = self.data.write();
        if let Some(stored) = data.catalog.as_ref().filter(|c| c.info.checksum == checksum) {
            return Ok(StoreOutcome {
                info: stored.info.clone(),
                created: false,
            });
        }
        let version = data.catalog.as_ref().map(|c| c.info.version).unwrap_or(0) + 1;
        let info = CatalogInfo {
            checksum: checksum.to_string(),
            version,
            stored_at: Utc::now(),
            team_count: snapshot.teams.len(),
            product_area_count: snapshot.product_areas.len(),
            cluster_count: snapshot.clusters.len(),
            resource_count: snapshot.resources.len(),
        };

        data.catalog = Some(StoredCatalog {
            snapshot,
            info: info.clone(),
            team_index,
            cluster_index,
        });
        Ok(StoreOutcome {
            info,
            created: true,
        })
    }

    async fn catalog_info(&self) -> RepositoryResult<Option<CatalogInfo>> {
        self.with_snapshot("catalog_info", None, |c| Some(c.info.clone()))
    }

    async fn list_resources(&self) -> RepositoryResult<Vec<Resource>> {
        self.with_snapshot("list_resources", Vec::new(), |c| {
            c.snapshot.resources.clone()
        })
    }
}

#[async_trait]
impl TeamRepository for LocalRepository {
    async fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        self.with_snapshot("list_teams", Vec::new(), |c| c.snapshot.teams.clone())
    }

    async fn get_team(&self, team_id: TeamId) -> RepositoryResult<Team> {
        let team = self.with_snapshot("get_team", None, |c| {
            c.team_index
                .get(&team_id)
                .and_then(|i| c.snapshot.teams.get(*i))
                .cloned()
        })?;
        team.ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Team {} not found", team_id),
                ErrorContext::new("get_team")
                    .with_entity("team")
                    .with_entity_id(team_id),
            )
        })
    }

    async fn list_product_areas(&self) -> RepositoryResult<Vec<ProductArea>> {
        self.with_snapshot("list_product_areas", Vec::new(), |c| {
            c.snapshot.product_areas.clone()
        })
    }

    async fn list_clusters(&self) -> RepositoryResult<Vec<Cluster>> {
        self.with_snapshot("list_clusters", Vec::new(), |c| {
            c.snapshot.clusters.clone()
        })
    }

    async fn get_cluster(&self, cluster_id: ClusterId) -> RepositoryResult<Cluster> {
        let cluster = self.with_snapshot("get_cluster", None, |c| {
            c.cluster_index
                .get(&cluster_id)
                .and_then(|i| c.snapshot.clusters.get(*i))
                .cloned()
        })?;
        cluster.ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Cluster {} not found", cluster_id),
                ErrorContext::new("get_cluster")
                    .with_entity("cluster")
                    .with_entity_id(cluster_id),
            )
        })
    }
}
