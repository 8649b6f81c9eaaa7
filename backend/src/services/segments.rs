//! Pie segment preparation.

use crate::routes::charts::{Segment, SegmentResult};

/// Colors cycled through by segment position.
pub const PIE_PALETTE: [&str; 17] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
    "#795548",
];

/// Compute each segment's share of the total and where its slice starts.
///
/// Segments keep their input order. When the total is zero every fraction
/// and offset is `0`. The total is summed as `u128`, so any list of `u64`
/// sizes is accepted.
pub fn compute_segments(segments: &[Segment]) -> Vec<SegmentResult> {
    let total: u128 = segments.iter().map(|s| u128::from(s.size)).sum();

    let mut cumulative = 0.0;
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let fraction = if total == 0 {
                0.0
            } else {
                segment.size as f64 / total as f64
            };
            let start = cumulative;
            cumulative += fraction;

            let color_index = index % PIE_PALETTE.len();
            SegmentResult {
                label: segment.label.clone(),
                size: segment.size,
                color_index,
                color: PIE_PALETTE[color_index].to_string(),
                fraction_of_total: fraction,
                cumulative_start_fraction: start,
                percentage: (fraction * 100.0).round() as i64,
            }
        })
        .collect()
}
