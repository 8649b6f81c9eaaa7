//! Property tests for the bucketizer and the segment calculator.

use proptest::prelude::*;

use teamcat::api::Segment;
use teamcat::services::{
    bucketize_by, compute_segments, external_share_buckets, BucketDefinition, DrillDownQuery,
    DrillDownTarget,
};

const SCORE: DrillDownTarget = DrillDownTarget {
    parameter: "score",
    subject: "Rader",
};

/// Contiguous buckets covering `[0, 101)`, cut at the given points.
fn contiguous_buckets(mut cuts: Vec<i64>) -> Vec<BucketDefinition> {
    cuts.sort_unstable();
    cuts.dedup();
    let mut bounds = vec![0];
    bounds.extend(cuts.into_iter().filter(|c| *c > 0 && *c < 101));
    bounds.push(101);

    bounds
        .windows(2)
        .map(|w| BucketDefinition::new(format!("{}-{}", w[0], w[1] - 1), w[0], w[1]))
        .collect()
}

proptest! {
    #[test]
    fn counts_sum_to_input_length(
        metrics in prop::collection::vec(0i64..=100, 0..200),
        cuts in prop::collection::vec(1i64..101, 0..8),
    ) {
        let buckets = contiguous_buckets(cuts);
        let rows = bucketize_by(&metrics, &buckets, &SCORE, |m| *m);

        prop_assert_eq!(rows.len(), buckets.len());
        prop_assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), metrics.len());
    }

    #[test]
    fn each_metric_lands_in_exactly_one_reference_bucket(metric in 0i64..=100) {
        let rows = bucketize_by(&[metric], &external_share_buckets(), &SCORE, |m| *m);
        let hits: Vec<_> = rows.iter().filter(|r| r.count == 1).collect();

        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0].percentage_of_total, 100);
    }

    #[test]
    fn drill_down_reopens_the_same_bucket(
        metrics in prop::collection::vec(0i64..=100, 0..100),
    ) {
        let buckets = external_share_buckets();
        let rows = bucketize_by(&metrics, &buckets, &SCORE, |m| *m);

        for (row, bucket) in rows.iter().zip(&buckets) {
            let query = DrillDownQuery::parse(SCORE.parameter, &row.drill_down_query).unwrap();
            prop_assert_eq!(query.bounds(), (bucket.low, bucket.high));
            prop_assert_eq!(&query.label, &bucket.label);

            let reopened = metrics.iter().filter(|m| query.matches(**m)).count();
            prop_assert_eq!(reopened, row.count);
        }
    }

    #[test]
    fn segment_offsets_accumulate(sizes in prop::collection::vec(0u64..10_000, 0..40)) {
        let segments: Vec<Segment> = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| Segment::new(format!("S{i}"), *size))
            .collect();
        let result = compute_segments(&segments);

        prop_assert_eq!(result.len(), segments.len());
        let mut expected_start = 0.0;
        for (segment, input) in result.iter().zip(&segments) {
            prop_assert_eq!(&segment.label, &input.label);
            prop_assert!((segment.cumulative_start_fraction - expected_start).abs() < 1e-9);
            prop_assert!(segment.fraction_of_total >= 0.0);
            expected_start += segment.fraction_of_total;
        }

        let total: f64 = result.iter().map(|s| s.fraction_of_total).sum();
        if sizes.iter().any(|s| *s > 0) {
            prop_assert!((total - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(total, 0.0);
        }
    }

    #[test]
    fn segments_are_idempotent(sizes in prop::collection::vec(0u64..1_000, 0..20)) {
        let segments: Vec<Segment> = sizes.iter().map(|s| Segment::new("x", *s)).collect();
        prop_assert_eq!(compute_segments(&segments), compute_segments(&segments));
    }
}
