use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of the stored catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    /// SHA-256 of the snapshot JSON, used for deduplication.
    pub checksum: String,
    /// Incremented each time a different snapshot is stored.
    pub version: u64,
    pub stored_at: DateTime<Utc>,
    pub team_count: usize,
    pub product_area_count: usize,
    pub cluster_count: usize,
    pub resource_count: usize,
}

/// Route function name constants
pub const GET_CATALOG: &str = "get_catalog";
pub const POST_CATALOG: &str = "store_catalog";
