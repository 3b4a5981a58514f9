//! Drag gesture tracking.
//!
//! [`GestureTracker`] is the one mutable value an input layer needs: it owns
//! the path of the gesture in progress and re-runs both stateless
//! estimators over the whole path on every update.
//!
//! ```text
//! pointer down ──► begin(p)   path = [p],          estimate = quiescent
//! pointer move ──► extend(p)  path.push(p),        estimate recomputed
//! pointer up   ──► end()      path cleared,        estimate = quiescent
//! ```

use std::fmt;

use crate::config::EstimatorConfig;
use crate::core::Point2D;
use crate::pivot::{PivotDiagnostics, PivotEstimator, path_centroid};
use crate::rotation::RotationEstimator;

/// Outputs of one estimation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureEstimate {
    /// Chord-to-chord rotation in degrees, `[0, 360)`.
    pub rotation_degrees: f32,
    /// Estimated center of rotation.
    pub pivot: Option<Point2D>,
}

impl GestureEstimate {
    /// The value reported when no gesture is active.
    pub const QUIESCENT: GestureEstimate = GestureEstimate {
        rotation_degrees: 0.0,
        pivot: None,
    };

    /// Text readout of the rotation, e.g. `"Rotation: 42.50°"`.
    pub fn readout(&self) -> String {
        format!("Rotation: {}", format_degrees(self.rotation_degrees))
    }
}

impl fmt::Display for GestureEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_degrees(self.rotation_degrees))?;
        if let Some(pivot) = self.pivot {
            write!(f, " about ({:.1}, {:.1})", pivot.x, pivot.y)?;
        }
        Ok(())
    }
}

/// Format an angle with two decimals and a degree sign.
///
/// # Example
/// ```
/// assert_eq!(bhramana::format_degrees(12.3456), "12.35°");
/// ```
pub fn format_degrees(degrees: f32) -> String {
    format!("{:.2}°", degrees)
}

/// Owns the path of the gesture in progress and its latest estimate.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    rotation: RotationEstimator,
    pivot: PivotEstimator,
    path: Vec<Point2D>,
    active: bool,
    estimate: GestureEstimate,
}

impl GestureTracker {
    /// Create a tracker with the given estimator configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            rotation: RotationEstimator::new(config.rotation),
            pivot: PivotEstimator::new(config.pivot),
            path: Vec::new(),
            active: false,
            estimate: GestureEstimate::QUIESCENT,
        }
    }

    /// Start a new gesture at `point`, discarding any previous path.
    pub fn begin(&mut self, point: Point2D) -> GestureEstimate {
        if self.active {
            log::debug!("gesture restarted with {} samples pending", self.path.len());
        }
        self.path.clear();
        self.path.push(point);
        self.active = true;
        self.estimate = GestureEstimate::QUIESCENT;
        self.estimate
    }

    /// Append a sample and recompute the estimate over the whole path.
    ///
    /// A move without a preceding [`begin`](Self::begin) starts a gesture.
    /// Non-finite samples are dropped and leave the estimate unchanged.
    pub fn extend(&mut self, point: Point2D) -> GestureEstimate {
        if !point.is_finite() {
            log::debug!("dropping non-finite sample {:?}", point);
            return self.estimate;
        }
        if !self.active {
            return self.begin(point);
        }

        self.path.push(point);
        self.estimate = self.compute();
        log::trace!("gesture: {} samples -> {}", self.path.len(), self.estimate);
        self.estimate
    }

    /// Finish the gesture: clear the path and reset to the quiescent estimate.
    ///
    /// Returns the estimate that was current when the gesture ended.
    pub fn end(&mut self) -> GestureEstimate {
        let last = self.estimate;
        if self.active {
            log::debug!(
                "gesture ended after {} samples: {}",
                self.path.len(),
                last
            );
        }
        self.path.clear();
        self.active = false;
        self.estimate = GestureEstimate::QUIESCENT;
        last
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Samples of the gesture in progress.
    pub fn path(&self) -> &[Point2D] {
        &self.path
    }

    /// Latest estimate.
    pub fn estimate(&self) -> GestureEstimate {
        self.estimate
    }

    /// Pivot construction geometry for the current path.
    pub fn pivot_diagnostics(&self) -> PivotDiagnostics {
        self.pivot.estimate_detailed(&self.path)
    }

    /// Mean of the current samples.
    pub fn centroid(&self) -> Option<Point2D> {
        path_centroid(&self.path)
    }

    /// Center-relative rotation around the current pivot estimate, falling
    /// back to the path centroid when there is no pivot.
    pub fn rotation_about_pivot(&self) -> f32 {
        match self.estimate.pivot.or_else(|| self.centroid()) {
            Some(center) => self.rotation.estimate_about(&self.path, center),
            None => 0.0,
        }
    }

    fn compute(&self) -> GestureEstimate {
        GestureEstimate {
            rotation_degrees: self.rotation.estimate(&self.path),
            pivot: self.pivot.estimate(&self.path),
        }
    }
}
