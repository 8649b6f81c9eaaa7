//! Bucketed breakdowns of an integer metric.
//!
//! A bucket set is an ordered list of labeled half-open ranges `[low, high)`.
//! Callers supply sets that are contiguous and non-overlapping over the
//! domain they care about; a range with `low >= high` matches nothing.
//! Drill-down links encode the lower bound as `low - 1`, so they reopen
//! exactly the bucket's range only when `low > i64::MIN`.

use crate::routes::charts::BucketRow;

/// Whole-number percentage of `part` in `whole`, `0` when `whole` is empty.
pub fn percentage_of(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

/// Labeled half-open range over the metric domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDefinition {
    pub label: String,
    pub low: i64,
    pub high: i64,
}

impl BucketDefinition {
    pub fn new(label: impl Into<String>, low: i64, high: i64) -> Self {
        Self {
            label: label.into(),
            low,
            high,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value < self.high
    }
}

/// Reference buckets for the share of external members in a team.
///
/// The last range ends at 101 so that 100 % is included.
pub fn external_share_buckets() -> Vec<BucketDefinition> {
    vec![
        BucketDefinition::new("Ingen eksterne", 0, 1),
        BucketDefinition::new("1-25%", 1, 26),
        BucketDefinition::new("26-50%", 26, 51),
        BucketDefinition::new("51-75%", 51, 76),
        BucketDefinition::new("76-100%", 76, 101),
    ]
}

/// Where a bucket row links to: the filter parameter prefix and the noun
/// used in the filter's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillDownTarget {
    pub parameter: &'static str,
    pub subject: &'static str,
}

/// Entities that can be bucketed by a derived integer metric.
pub trait BucketMetric {
    /// Filter the rows of a breakdown of this entity link into.
    const DRILL_DOWN: DrillDownTarget;

    fn metric(&self) -> i64;
}

/// Errors raised while decoding a drill-down query string.
#[derive(Debug, thiserror::Error)]
pub enum DrillDownError {
    #[error("missing query parameter '{0}'")]
    MissingParameter(String),

    #[error("query parameter '{name}' is not an integer: '{value}'")]
    InvalidBound { name: String, value: String },

    #[error("malformed query string: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
}

/// Filter that reopens one bucket as a list.
///
/// Bounds use the exclusive filter semantics of the list view:
/// `less_than = high` and `greater_than = low - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDownQuery {
    pub parameter: String,
    pub less_than: i64,
    pub greater_than: i64,
    pub filter_name: String,
    pub label: String,
}

impl DrillDownQuery {
    /// Query selecting the metrics in `bucket`.
    ///
    /// Requires `bucket.low > i64::MIN`; at `i64::MIN` the exclusive lower
    /// bound saturates and the query no longer matches `i64::MIN` itself.
    pub fn for_bucket(target: &DrillDownTarget, bucket: &BucketDefinition) -> Self {
        Self {
            parameter: target.parameter.to_string(),
            less_than: bucket.high,
            greater_than: bucket.low.saturating_sub(1),
            filter_name: format!("{} med {}", target.subject, bucket.label.to_lowercase()),
            label: bucket.label.clone(),
        }
    }

    fn less_than_key(parameter: &str) -> String {
        format!("{}LessThan", parameter)
    }

    fn greater_than_key(parameter: &str) -> String {
        format!("{}GreaterThan", parameter)
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn encode(&self) -> String {
        let pairs = [
            (Self::less_than_key(&self.parameter), self.less_than.to_string()),
            (
                Self::greater_than_key(&self.parameter),
                self.greater_than.to_string(),
            ),
            ("filterName".to_string(), self.filter_name.clone()),
            ("label".to_string(), self.label.clone()),
        ];
        // Flat string pairs always serialize.
        serde_urlencoded::to_string(&pairs[..]).unwrap_or_else(|e| {
            log::warn!("Failed to encode drill-down query: {}", e);
            String::new()
        })
    }

    /// Decode a query string produced by [`encode`](Self::encode).
    ///
    /// Both bounds are required; `filterName` defaults to empty and `label`
    /// falls back to the filter name.
    pub fn parse(parameter: &str, query: &str) -> Result<Self, DrillDownError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        let bound = |key: String| -> Result<i64, DrillDownError> {
            let raw = lookup(&key).ok_or_else(|| DrillDownError::MissingParameter(key.clone()))?;
            raw.trim()
                .parse::<i64>()
                .map_err(|_| DrillDownError::InvalidBound {
                    name: key,
                    value: raw,
                })
        };

        let less_than = bound(Self::less_than_key(parameter))?;
        let greater_than = bound(Self::greater_than_key(parameter))?;
        let filter_name = lookup("filterName").unwrap_or_default();
        let label = lookup("label").unwrap_or_else(|| filter_name.clone());

        Ok(Self {
            parameter: parameter.to_string(),
            less_than,
            greater_than,
            filter_name,
            label,
        })
    }

    /// The `[low, high)` range this query was built from, for buckets with
    /// `low > i64::MIN`.
    pub fn bounds(&self) -> (i64, i64) {
        (self.greater_than.saturating_add(1), self.less_than)
    }

    pub fn matches(&self, value: i64) -> bool {
        self.greater_than < value && value < self.less_than
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}?{}", path, self.encode())
    }
}

/// Bucket `entities` by an arbitrary metric.
///
/// Returns one row per bucket in bucket order. Percentages are relative to
/// the whole input, so they are all `0` for an empty input.
pub fn bucketize_by<T, F>(
    entities: &[T],
    buckets: &[BucketDefinition],
    target: &DrillDownTarget,
    metric: F,
) -> Vec<BucketRow>
where
    F: Fn(&T) -> i64,
{
    let metrics: Vec<i64> = entities.iter().map(metric).collect();
    let total = metrics.len();

    buckets
        .iter()
        .map(|bucket| {
            let count = metrics.iter().filter(|m| bucket.contains(**m)).count();
            BucketRow {
                label: bucket.label.clone(),
                count,
                percentage_of_total: percentage_of(count, total),
                drill_down_query: DrillDownQuery::for_bucket(target, bucket).encode(),
            }
        })
        .collect()
}

/// Bucket entities by their own [`BucketMetric`].
pub fn bucketize<T: BucketMetric>(entities: &[T], buckets: &[BucketDefinition]) -> Vec<BucketRow> {
    bucketize_by(entities, buckets, &T::DRILL_DOWN, T::metric)
}
