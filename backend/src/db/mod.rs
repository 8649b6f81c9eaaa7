//! Catalog storage.
//!
//! Storage goes through the repository traits so that the HTTP layer and the
//! tests never depend on a concrete backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / server binary                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Snapshot validation and normalization                │
//! │  - Checksum deduplication                               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! │  - CatalogRepository, TeamRepository                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────┐
//!     │  LocalRepository (in-memory) │
//!     └──────────────────────────────┘
//! ```

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{
    current_catalog, get_cluster, get_team, health_check, list_active_teams, list_clusters,
    list_product_areas, list_teams, resource_count, store_catalog, validate_catalog,
};

pub use checksum::calculate_checksum;
pub use repositories::LocalRepository;
pub use repository::{
    CatalogRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    StoreOutcome, TeamRepository,
};
