//! Catalog snapshot storage trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{CatalogSnapshot, Resource};
use crate::routes::catalog::CatalogInfo;

/// Result of storing a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOutcome {
    pub info: CatalogInfo,
    /// `false` when the snapshot matched the stored checksum and was skipped.
    pub created: bool,
}

/// Storage of the whole catalog snapshot.
///
/// A repository holds at most one snapshot; storing a new one replaces it.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check whether the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Replace the stored snapshot unless it carries the stored checksum.
    ///
    /// The snapshot is expected to be validated and normalized already. The
    /// checksum comparison and the write must be atomic, so concurrent
    /// stores of the same snapshot create exactly one version.
    ///
    /// # Arguments
    /// * `snapshot` - The catalog to store
    /// * `checksum` - SHA-256 of the normalized snapshot JSON
    ///
    /// # Returns
    /// * `Ok(StoreOutcome)` - The current metadata and whether a new version was written
    async fn store_catalog(
        &self,
        snapshot: CatalogSnapshot,
        checksum: &str,
    ) -> RepositoryResult<StoreOutcome>;

    /// Metadata of the stored snapshot, `None` before the first store.
    async fn catalog_info(&self) -> RepositoryResult<Option<CatalogInfo>>;

    /// All resources known to the catalog.
    async fn list_resources(&self) -> RepositoryResult<Vec<Resource>>;
}
