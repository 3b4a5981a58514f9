//! End-to-end checks of the rotation and pivot estimators on synthetic drags.

mod common;

use bhramana::{
    GestureEstimate, GestureTracker, PivotConfig, PivotEstimator, Point2D, RotationEstimator,
    estimate_pivot, estimate_rotation, estimate_rotation_about, line_intersection,
};

const CENTER: Point2D = Point2D { x: 100.0, y: 100.0 };
const RADIUS: f32 = 50.0;

// ============================================================================
// Defaults below the minimum sample counts
// ============================================================================

#[test]
fn test_short_paths_are_quiescent() {
    let path = common::arc(CENTER, RADIUS, 0.0, 180.0, 40);

    for n in 0..10 {
        assert_eq!(estimate_rotation(&path[..n]), 0.0, "n = {}", n);
    }
    for n in 0..8 {
        assert_eq!(estimate_pivot(&path[..n]), None, "n = {}", n);
    }
}

// ============================================================================
// Synthetic circle recovery
// ============================================================================

#[test]
fn test_half_circle_pivot_dense_sampling() {
    let path = common::arc(CENTER, RADIUS, 0.0, 180.0, 400);
    let pivot = estimate_pivot(&path).expect("pivot for a dense half circle");
    assert!(pivot.distance(&CENTER) < 5.0, "pivot {:?}", pivot);
}

#[test]
fn test_half_circle_pivot_forty_samples() {
    // With 40 samples the default 60-sample offset spans the whole path;
    // scale it to the sampling density.
    let path = common::arc(CENTER, RADIUS, 0.0, 180.0, 40);
    let estimator = PivotEstimator::new(PivotConfig::new().with_perp_offset(5));
    let pivot = estimator.estimate(&path).expect("pivot for 40 samples");
    assert!(pivot.distance(&CENTER) < 5.0, "pivot {:?}", pivot);
}

#[test]
fn test_pivot_recovered_under_jitter() {
    let clean = common::arc(CENTER, RADIUS, 20.0, 200.0, 600);
    let noisy = common::jitter(&clean, 0.3, 42);
    let pivot = estimate_pivot(&noisy).expect("pivot for a noisy arc");
    assert!(pivot.distance(&CENTER) < 5.0, "pivot {:?}", pivot);
}

#[test]
fn test_pivot_independent_of_direction() {
    let ccw = common::arc(CENTER, RADIUS, 0.0, 150.0, 300);
    let cw = common::arc(CENTER, RADIUS, 150.0, -150.0, 300);

    let a = estimate_pivot(&ccw).unwrap();
    let b = estimate_pivot(&cw).unwrap();
    assert!(a.distance(&CENTER) < 1.0);
    assert!(b.distance(&CENTER) < 1.0);
}

#[test]
fn test_quarter_turn_rotation() {
    // Chord midpoints sit 5% in from each end, so the reading is 90% of the
    // swept angle for uniform sampling
    let path = common::arc(CENTER, RADIUS, 0.0, 90.0, 41);
    let degrees = estimate_rotation(&path);
    assert!((degrees - 90.0).abs() < 10.0, "degrees {}", degrees);
    assert!((degrees - 81.0).abs() < 0.05, "degrees {}", degrees);
}

#[test]
fn test_rotation_ignores_start_heading() {
    for start in [0.0_f32, 45.0, 170.0, 260.0, 333.0] {
        let path = common::arc(Point2D::new(-40.0, 12.0), 80.0, start, 120.0, 101);
        let degrees = estimate_rotation(&path);
        assert!((degrees - 108.0).abs() < 0.1, "start {} -> {}", start, degrees);
    }
}

#[test]
fn test_rotation_under_jitter() {
    let clean = common::arc(CENTER, RADIUS, 0.0, 120.0, 300);
    let noisy = common::jitter(&clean, 0.1, 7);
    let degrees = estimate_rotation(&noisy);
    assert!((degrees - 108.0).abs() < 5.0, "degrees {}", degrees);
}

#[test]
fn test_straight_drag_has_no_rotation() {
    let path = common::straight(Point2D::new(0.0, 0.0), Point2D::new(300.0, 150.0), 200);
    let degrees = estimate_rotation(&path);
    assert!(degrees < 0.01 || degrees > 359.99, "degrees {}", degrees);
}

#[test]
fn test_horizontal_drag_has_no_pivot() {
    // Every secant is exactly horizontal, so every perpendicular is parallel
    let path: Vec<Point2D> = (0..200).map(|i| Point2D::new(i as f32, 50.0)).collect();
    assert_eq!(estimate_pivot(&path), None);
}

// ============================================================================
// Output ranges
// ============================================================================

#[test]
fn test_rotation_ranges() {
    for sweep in (-355..=355).step_by(5) {
        let path = common::arc(CENTER, RADIUS, 10.0, sweep as f32, 80);

        let chord = estimate_rotation(&path);
        assert!((0.0..360.0).contains(&chord), "sweep {} chord {}", sweep, chord);

        let about = estimate_rotation_about(&path, CENTER);
        assert!(about > -180.0 && about <= 180.0, "sweep {} about {}", sweep, about);
    }
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn test_parallel_lines_have_no_intersection() {
    let hit = line_intersection(
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(0.0, 5.0),
        Point2D::new(10.0, 5.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn test_diagonals_intersect_at_center() {
    let hit = line_intersection(
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(0.0, 10.0),
        Point2D::new(10.0, 0.0),
    );
    assert_eq!(hit, Some(Point2D::new(5.0, 5.0)));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_estimators_are_idempotent() {
    let path = common::jitter(&common::arc(CENTER, RADIUS, 5.0, 230.0, 350), 0.4, 99);
    let rotation = RotationEstimator::default();
    let pivot = PivotEstimator::default();

    let r1 = rotation.estimate(&path);
    let r2 = rotation.estimate(&path);
    assert_eq!(r1.to_bits(), r2.to_bits());

    let p1 = pivot.estimate(&path).unwrap();
    let p2 = pivot.estimate(&path).unwrap();
    assert_eq!((p1.x.to_bits(), p1.y.to_bits()), (p2.x.to_bits(), p2.y.to_bits()));
}

#[test]
fn test_estimators_run_on_independent_threads() {
    let paths: Vec<Vec<Point2D>> = (0..4)
        .map(|k| common::arc(CENTER, RADIUS, 30.0 * k as f32, 180.0, 400))
        .collect();
    let expected: Vec<_> = paths.iter().map(|p| estimate_pivot(p)).collect();

    let rotation = &RotationEstimator::default();
    let pivot = &PivotEstimator::default();
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| s.spawn(move || (rotation.estimate(path), pivot.estimate(path))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for ((_, p), e) in results.iter().zip(&expected) {
        assert_eq!(p, e);
    }
}

// ============================================================================
// Gesture lifecycle
// ============================================================================

#[test]
fn test_gesture_matches_snapshot_estimates() {
    let path = common::arc(CENTER, RADIUS, 0.0, 200.0, 300);
    let mut tracker = GestureTracker::default();

    tracker.begin(path[0]);
    for (i, p) in path.iter().enumerate().skip(1) {
        let est = tracker.extend(*p);
        let snapshot = &path[..=i];
        assert_eq!(est.rotation_degrees, estimate_rotation(snapshot));
        assert_eq!(est.pivot, estimate_pivot(snapshot));
    }

    let ended = tracker.end();
    assert!(ended.pivot.is_some());
    assert_eq!(tracker.estimate(), GestureEstimate::QUIESCENT);

    // A new gesture starts from scratch
    tracker.begin(Point2D::new(1.0, 1.0));
    assert_eq!(tracker.path().len(), 1);
    assert_eq!(tracker.estimate(), GestureEstimate::QUIESCENT);
}
