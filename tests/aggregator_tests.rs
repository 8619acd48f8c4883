use perfscope::aggregator::{
    compute_summary, partition_by_category, summarize_buckets, Observation, StatSummary,
};
use pretty_assertions::assert_eq;

struct Sample {
    duration: f64,
}

fn sample_sets() -> Vec<Vec<f64>> {
    vec![
        vec![1.0],
        vec![10.0, 20.0, 30.0],
        vec![0.1, 0.1, 0.1],
        vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
        vec![-5.0, 5.0],
        vec![1e-9, 1e9, 3.3],
        vec![16.6667; 101],
        (1..=500).map(|i| (i as f64).sqrt() * 7.3).collect(),
        (1..=64).map(|i| 1.0 / i as f64).collect(),
    ]
}

#[test]
fn test_summary_ordering_holds() {
    for values in sample_sets() {
        let summary = StatSummary::from_values(&values);
        assert!(
            summary.minimum <= summary.average && summary.average <= summary.maximum,
            "ordering broken for {:?}: {:?}",
            values,
            summary
        );
        assert_eq!(summary.count, values.len());
    }
}

#[test]
fn test_summary_scenario() {
    let samples = vec![
        Sample { duration: 10.0 },
        Sample { duration: 20.0 },
        Sample { duration: 30.0 },
    ];

    let summary = compute_summary(&samples, |s| s.duration);

    assert_eq!(
        summary,
        StatSummary {
            average: 20.0,
            minimum: 10.0,
            maximum: 30.0,
            count: 3,
        }
    );
}

#[test]
fn test_summary_empty_sentinel() {
    let summary = compute_summary(&Vec::<Sample>::new(), |s| s.duration);

    assert_eq!(
        summary,
        StatSummary {
            average: 0.0,
            minimum: 0.0,
            maximum: 0.0,
            count: 0,
        }
    );
}

#[test]
fn test_summary_single_value() {
    for x in [0.0, -3.5, 16.7, 1e12] {
        let summary = StatSummary::from_values(&[x]);
        assert_eq!(summary.average, x);
        assert_eq!(summary.minimum, x);
        assert_eq!(summary.maximum, x);
        assert_eq!(summary.count, 1);
    }
}

#[test]
fn test_partition_scenario() {
    let observations = vec![
        Observation::new("hover", 5.0),
        Observation::new("click", 15.0),
        Observation::new("hover", 7.0),
    ];

    let buckets = partition_by_category(&observations);

    assert_eq!(buckets.len(), 2);
    assert_eq!(
        buckets["hover"],
        vec![Observation::new("hover", 5.0), Observation::new("hover", 7.0)]
    );
    assert_eq!(buckets["click"], vec![Observation::new("click", 15.0)]);
}

#[test]
fn test_partition_preserves_multiset() {
    let labels = ["hover-sequential", "activate-all", "hover-zigzag", "rapid-toggle"];
    let observations: Vec<Observation> = (0..40)
        .map(|i| Observation::new(labels[i % labels.len()], i as f64))
        .collect();

    let buckets = partition_by_category(&observations);

    let total: usize = buckets.values().map(|b| b.len()).sum();
    assert_eq!(total, observations.len());

    let mut regrouped: Vec<f64> = buckets.values().flatten().map(|o| o.value).collect();
    regrouped.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let expected: Vec<f64> = (0..40).map(|i| i as f64).collect();
    assert_eq!(regrouped, expected);

    for bucket in buckets.values() {
        assert!(bucket.windows(2).all(|w| w[0].value < w[1].value));
    }
}

#[test]
fn test_partition_is_deterministic() {
    let observations = vec![
        Observation::new("b", 1.0),
        Observation::new("a", 2.0),
        Observation::unlabelled(3.0),
    ];

    assert_eq!(
        partition_by_category(&observations),
        partition_by_category(&observations)
    );
}

#[test]
fn test_summarize_buckets_matches_direct_summary() {
    let observations = vec![
        Observation::new("resize", 120.0),
        Observation::new("resize", 80.0),
        Observation::new("resize", 100.0),
    ];

    let summaries = summarize_buckets(&partition_by_category(&observations));

    assert_eq!(
        summaries["resize"],
        StatSummary::from_values(&[120.0, 80.0, 100.0])
    );
}
