//! High-level storage service layer.
//!
//! Repository-agnostic operations over the catalog store. Validation,
//! normalization and checksum deduplication live here so they behave the
//! same for every repository implementation.
//!
//! # Usage
//!
//! ```no_run
//! use teamcat::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let teams = services::list_active_teams(&repo).await?;
//!     println!("Found {} active teams", teams.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use log::{debug, info};

use super::checksum::calculate_checksum;
use super::repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, StoreOutcome,
};
use crate::models::{CatalogSnapshot, Cluster, ClusterId, ProductArea, Team, TeamId};
use crate::routes::catalog::CatalogInfo;

// ==================== Health ====================

pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Catalog ====================

fn first_duplicate<T: Eq + Hash + Copy>(ids: impl IntoIterator<Item = T>) -> Option<T> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Reject snapshots with duplicate ids or unnamed teams.
pub fn validate_catalog(snapshot: &CatalogSnapshot) -> RepositoryResult<()> {
    let context = || ErrorContext::new("store_catalog");

    if let Some(id) = first_duplicate(snapshot.teams.iter().map(|t| t.id)) {
        return Err(RepositoryError::validation_with_context(
            "Duplicate team id",
            context().with_entity("team").with_entity_id(id),
        ));
    }
    if let Some(id) = first_duplicate(snapshot.clusters.iter().map(|c| c.id)) {
        return Err(RepositoryError::validation_with_context(
            "Duplicate cluster id",
            context().with_entity("cluster").with_entity_id(id),
        ));
    }
    if let Some(id) = first_duplicate(snapshot.product_areas.iter().map(|p| p.id)) {
        return Err(RepositoryError::validation_with_context(
            "Duplicate product area id",
            context().with_entity("product_area").with_entity_id(id),
        ));
    }
    if let Some(team) = snapshot.teams.iter().find(|t| t.name.trim().is_empty()) {
        return Err(RepositoryError::validation_with_context(
            "Team name must not be blank",
            context().with_entity("team").with_entity_id(team.id),
        ));
    }
    Ok(())
}

/// Store a catalog snapshot.
///
/// This function:
/// 1. Validates the snapshot
/// 2. Orders cluster members by nav ident
/// 3. Hands it to the repository, which skips the write when the checksum
///    matches the stored one and replaces the snapshot otherwise
pub async fn store_catalog<R: FullRepository + ?Sized>(
    repo: &R,
    mut snapshot: CatalogSnapshot,
) -> RepositoryResult<StoreOutcome> {
    validate_catalog(&snapshot)?;
    for cluster in &mut snapshot.clusters {
        cluster.sort_members();
    }

    let checksum = calculate_checksum(&serde_json::to_string(&snapshot)?);
    let (teams, clusters, resources) = (
        snapshot.teams.len(),
        snapshot.clusters.len(),
        snapshot.resources.len(),
    );

    let outcome = repo.store_catalog(snapshot, &checksum).await?;
    if outcome.created {
        info!(
            "Stored catalog version {} (checksum {}, {} teams, {} clusters, {} resources)",
            outcome.info.version, checksum, teams, clusters, resources
        );
    } else {
        info!(
            "Catalog with checksum {} already stored as version {}",
            checksum, outcome.info.version
        );
    }
    Ok(outcome)
}

/// Metadata of the stored catalog.
///
/// # Returns
/// * `Err(RepositoryError::NotFound)` - If no catalog has been stored yet
pub async fn current_catalog<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<CatalogInfo> {
    repo.catalog_info().await?.ok_or_else(|| {
        RepositoryError::not_found_with_context(
            "No catalog stored",
            ErrorContext::new("current_catalog").with_entity("catalog"),
        )
    })
}

pub async fn resource_count<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    Ok(repo.list_resources().await?.len())
}

// ==================== Teams ====================

pub async fn list_teams<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Team>> {
    repo.list_teams().await
}

/// Teams with status `ACTIVE`, the set every catalog view works on.
pub async fn list_active_teams<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Team>> {
    let teams: Vec<Team> = repo
        .list_teams()
        .await?
        .into_iter()
        .filter(Team::is_active)
        .collect();
    debug!("Loaded {} active teams", teams.len());
    Ok(teams)
}

pub async fn get_team<R: FullRepository + ?Sized>(repo: &R, team_id: TeamId) -> RepositoryResult<Team> {
    repo.get_team(team_id).await
}

// ==================== Product areas & clusters ====================

pub async fn list_product_areas<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<ProductArea>> {
    repo.list_product_areas().await
}

pub async fn list_clusters<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Cluster>> {
    repo.list_clusters().await
}

pub async fn get_cluster<R: FullRepository + ?Sized>(
    repo: &R,
    cluster_id: ClusterId,
) -> RepositoryResult<Cluster> {
    repo.get_cluster(cluster_id).await
}
