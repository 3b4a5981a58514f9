//! Loading estimator configuration from YAML files.

use std::path::Path;

use bhramana::{
    ConfigError, ConfigLoadError, EstimatorConfig, GestureTracker, PivotConfig, PivotEstimator,
    Point2D,
};

#[test]
fn test_shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/default.yaml");
    let config = EstimatorConfig::from_yaml_file(&path).expect("shipped config loads");
    assert_eq!(config, EstimatorConfig::default());
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuned.yaml");

    let config = EstimatorConfig::default().with_pivot(
        PivotConfig::new()
            .with_resolution(6)
            .with_perp_offset(24)
            .with_parallel_epsilon(1e-6),
    );
    config.to_yaml_file(&path).unwrap();

    let loaded = EstimatorConfig::from_yaml_file(&path).unwrap();
    assert_eq!(loaded, config);

    // The loaded config drives a tracker
    let tracker = GestureTracker::new(loaded);
    assert!(!tracker.is_active());
}

#[test]
fn test_missing_file() {
    let err = EstimatorConfig::from_yaml_file("/nonexistent/bhramana.yaml").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        ("rotation:\n  min_samples: 1\n", ConfigError::MinSamplesTooSmall(1)),
        ("pivot:\n  perp_offset: 0\n", ConfigError::ZeroPerpOffset),
        (
            "rotation:\n  lead_fraction: 0.6\n  trail_fraction: 0.4\n",
            ConfigError::ChordFractions {
                lead: 0.6,
                trail: 0.4,
            },
        ),
    ];

    for (yaml, expected) in cases {
        match EstimatorConfig::from_yaml(yaml) {
            Err(ConfigLoadError::Validation(e)) => assert_eq!(e, expected),
            other => panic!("{:?} -> {:?}", yaml, other),
        }
    }
}

#[test]
fn test_error_messages() {
    let err = EstimatorConfig::from_yaml("pivot:\n  resolution: 1\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Config validation error: pivot.resolution must be at least 2, got 1"
    );
}

#[test]
fn test_extreme_pivot_values_do_not_panic() {
    let path: Vec<Point2D> = (0..20)
        .map(|i| {
            let a = (9.0 * i as f32).to_radians();
            Point2D::new(50.0 * a.cos(), 50.0 * a.sin())
        })
        .collect();

    for yaml in [
        "pivot:\n  perp_offset: 18446744073709551615\n",
        "pivot:\n  resolution: 9223372036854775808\n",
        "pivot:\n  resolution: 18446744073709551615\n",
    ] {
        let config = EstimatorConfig::from_yaml(yaml).expect("in-range values load");
        let estimator = PivotEstimator::new(config.pivot.clone());
        let _ = estimator.estimate(&path);
        let _ = estimator.estimate_detailed(&path);

        let mut tracker = GestureTracker::new(config);
        for p in &path {
            tracker.extend(*p);
        }
        tracker.end();
    }
}
