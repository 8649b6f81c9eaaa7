use serde::{Deserialize, Serialize};

// =========================================================
// Bucket chart types
// =========================================================

/// One bar of a bucketed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRow {
    pub label: String,
    pub count: usize,
    pub percentage_of_total: i64,
    /// URL query string that reopens this bucket as a filtered list.
    pub drill_down_query: String,
}

/// Titled bucket breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketChart {
    pub title: String,
    pub rows: Vec<BucketRow>,
}

// =========================================================
// Pie chart types
// =========================================================

/// Pie input: one labeled, non-negative size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub label: String,
    pub size: u64,
}

impl Segment {
    pub fn new(label: impl Into<String>, size: u64) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }
}

/// Pie segment ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    pub label: String,
    pub size: u64,
    pub color_index: usize,
    pub color: String,
    pub fraction_of_total: f64,
    pub cumulative_start_fraction: f64,
    /// Whole-number share shown in the legend.
    pub percentage: i64,
}

/// Titled pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    pub segments: Vec<SegmentResult>,
}

/// Request body for preparing an arbitrary pie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentsRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub segments: Vec<Segment>,
}

/// Route function name constants
pub const GET_TEAM_EXTERNAL_CHART: &str = "get_team_external_chart";
pub const COMPUTE_SEGMENTS: &str = "compute_segments";
