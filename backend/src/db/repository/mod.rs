//! Repository trait definitions.
//!
//! - [`error`]: Error types for repository operations
//! - [`catalog`]: Snapshot storage and metadata
//! - [`team`]: Queries over teams, product areas and clusters
//!
//! For functions that need both capabilities, use the [`FullRepository`] bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let teams = repo.list_teams().await?;
//!     let info = repo.catalog_info().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod team;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use catalog::{CatalogRepository, StoreOutcome};
pub use team::TeamRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: CatalogRepository + TeamRepository {}

// Blanket implementation: any type implementing both traits is a FullRepository
impl<T> FullRepository for T where T: CatalogRepository + TeamRepository {}
