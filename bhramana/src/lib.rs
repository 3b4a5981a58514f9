//! # Bhramana
//!
//! Real-time rotation and pivot estimation from a freehand drag path.
//!
//! A pointer or finger traces a path across a surface. From the ordered
//! samples of that path this library estimates:
//!
//! - **Rotation**: how far the gesture has turned since it started, in
//!   degrees, by comparing the heading of a short chord at the start of the
//!   path with one at its end.
//! - **Pivot**: the point the gesture appears to rotate about, by
//!   intersecting lines erected perpendicular to the path and averaging the
//!   hits.
//!
//! Both estimators are pure functions of the path: nothing is cached between
//! calls, and degenerate input (too few samples, stationary drags, parallel
//! construction lines) yields a defined quiet value instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use bhramana::{GestureTracker, Point2D};
//!
//! let mut tracker = GestureTracker::default();
//! tracker.begin(Point2D::new(150.0, 100.0));
//!
//! for i in 1..=400 {
//!     let a = (90.0_f32 * i as f32 / 400.0).to_radians();
//!     let sample = Point2D::new(100.0 + 50.0 * a.cos(), 100.0 + 50.0 * a.sin());
//!     let estimate = tracker.extend(sample);
//!     if i % 100 == 0 {
//!         println!("{}", estimate.readout());
//!     }
//! }
//!
//! let final_estimate = tracker.end();
//! assert!(final_estimate.pivot.is_some());
//! ```
//!
//! Or call the estimators directly on a path snapshot:
//!
//! ```rust
//! use bhramana::{Point2D, estimate_pivot, estimate_rotation};
//!
//! let path: Vec<Point2D> = (0..10).map(|i| Point2D::new(i as f32, 0.0)).collect();
//! assert_eq!(estimate_rotation(&path), 0.0);
//! assert_eq!(estimate_pivot(&path), None);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: `Point2D`, `Line2D`, angle normalization, line intersection
//! - [`rotation`]: chord-to-chord and center-relative rotation
//! - [`pivot`]: perpendicular-intersection pivot estimate and diagnostics
//! - [`gesture`]: per-gesture state for input layers
//! - [`color`]: rotation-to-color mapping for renderers
//! - [`config`]: YAML-loadable estimator configuration

pub mod color;
pub mod config;
pub mod core;
pub mod gesture;
pub mod pivot;
pub mod rotation;

pub use config::{ConfigError, ConfigLoadError, EstimatorConfig};
pub use core::{Line2D, Point2D, line_intersection};
pub use gesture::{GestureEstimate, GestureTracker, format_degrees};
pub use pivot::{
    Degeneracy, PivotConfig, PivotDiagnostics, PivotEstimator, estimate_pivot, path_centroid,
};
pub use rotation::{RotationConfig, RotationEstimator, estimate_rotation, estimate_rotation_about};
