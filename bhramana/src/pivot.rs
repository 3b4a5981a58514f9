//! Pivot (center of rotation) estimation from a drag path.
//!
//! For motion along a circular arc, the line perpendicular to the local
//! direction of travel passes through the circle's center. The estimator
//! erects such perpendiculars at `resolution - 1` interior samples, using a
//! secant of `±perp_offset` samples as the local direction, intersects each
//! consecutive pair and averages the hits:
//!
//! ```text
//!                 ╲   │   ╱        perpendiculars at path[k·step]
//!                  ╲  │  ╱
//!                   ╲ │ ╱
//!                    ╲│╱
//!                     ✕  ← mean of pairwise intersections
//!
//!          ╭──────────●──────────╮
//!        ╭─●                     ●─╮   path samples
//!       ●                           ●
//! ```
//!
//! Secants are clamped at the path ends instead of reading out of range.
//! Zero-length secants and parallel pairs are skipped, never retried.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::config::defaults;
use crate::core::{Line2D, Point2D, mean_point};

/// Configuration for the pivot estimator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PivotConfig {
    /// Number of sample bands; `resolution - 1` perpendiculars are built.
    /// Paths shorter than `2 * resolution` samples have no pivot.
    /// Default: 4
    #[serde(default = "defaults::resolution")]
    pub resolution: usize,

    /// Index offset (in samples) on each side of a sample used to
    /// approximate the local path direction.
    /// Default: 60
    #[serde(default = "defaults::perp_offset")]
    pub perp_offset: usize,

    /// Perpendicular pairs with `|det|` at or below this are treated as
    /// parallel. Default: 0.0 (exact equality)
    #[serde(default = "defaults::parallel_epsilon")]
    pub parallel_epsilon: f32,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            perp_offset: defaults::perp_offset(),
            parallel_epsilon: defaults::parallel_epsilon(),
        }
    }
}

impl PivotConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Builder-style setter for the secant offset.
    pub fn with_perp_offset(mut self, samples: usize) -> Self {
        self.perp_offset = samples;
        self
    }

    /// Builder-style setter for the parallel tolerance.
    pub fn with_parallel_epsilon(mut self, epsilon: f32) -> Self {
        self.parallel_epsilon = epsilon;
        self
    }

    /// Minimum number of samples needed for an estimate.
    #[inline]
    pub fn min_samples(&self) -> usize {
        self.resolution.saturating_mul(2)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 2 {
            return Err(ConfigError::ResolutionTooSmall(self.resolution));
        }
        if self.perp_offset == 0 {
            return Err(ConfigError::ZeroPerpOffset);
        }
        if !self.parallel_epsilon.is_finite() || self.parallel_epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.parallel_epsilon));
        }
        Ok(())
    }
}

/// Why part (or all) of an estimate was skipped.
///
/// `InsufficientData` means no estimate was attempted. The other variants
/// are degenerate geometry: the offending contribution was dropped and the
/// rest of the computation went ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// Path shorter than the minimum sample count.
    InsufficientData { samples: usize, required: usize },
    /// Secant endpoints coincide at this path index; no perpendicular.
    ZeroLengthSecant { index: usize },
    /// Perpendiculars at these two path indices are parallel.
    ParallelPerpendiculars { first: usize, second: usize },
}

impl Degeneracy {
    /// True for degenerate-geometry skips (as opposed to a too-short path).
    pub fn is_degenerate_geometry(&self) -> bool {
        !matches!(self, Degeneracy::InsufficientData { .. })
    }
}

/// Construction geometry behind a pivot estimate, for visualization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PivotDiagnostics {
    /// Path indices of the sampled points.
    pub sample_indices: Vec<usize>,
    /// Sampled path points, parallel to `sample_indices`.
    pub samples: Vec<Point2D>,
    /// Perpendicular line at each sample (`None` for a zero-length secant).
    pub perpendiculars: Vec<Option<Line2D>>,
    /// Intersections of consecutive perpendiculars that were not parallel.
    pub intersections: Vec<Point2D>,
    /// Mean of `intersections`, or `None` if there were none.
    pub pivot: Option<Point2D>,
    /// Everything that was skipped along the way.
    pub degeneracies: Vec<Degeneracy>,
}

/// Stateless pivot estimator.
#[derive(Clone, Debug, Default)]
pub struct PivotEstimator {
    config: PivotConfig,
}

impl PivotEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: PivotConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &PivotConfig {
        &self.config
    }

    /// Estimated center of rotation, or `None` if the path is too short or
    /// every consecutive perpendicular pair was degenerate.
    pub fn estimate(&self, path: &[Point2D]) -> Option<Point2D> {
        self.estimate_detailed(path).pivot
    }

    /// Estimate the pivot and keep the construction geometry.
    pub fn estimate_detailed(&self, path: &[Point2D]) -> PivotDiagnostics {
        let mut diag = PivotDiagnostics::default();
        let n = path.len();
        let required = self.config.min_samples();

        // Fewer than two bands builds at most one perpendicular
        if n < required || self.config.resolution < 2 {
            log::trace!("pivot: {} samples, need {}", n, required);
            diag.degeneracies.push(Degeneracy::InsufficientData {
                samples: n,
                required,
            });
            return diag;
        }

        let last = n - 1;
        let step = last / self.config.resolution;
        let offset = self.config.perp_offset;

        for i in 1..self.config.resolution {
            let idx = step * i;
            let left = idx.saturating_sub(offset);
            let right = idx.saturating_add(offset).min(last);

            let perpendicular = Line2D::perpendicular_through(path[idx], path[left], path[right]);
            if perpendicular.is_none() {
                diag.degeneracies.push(Degeneracy::ZeroLengthSecant { index: idx });
            }

            diag.sample_indices.push(idx);
            diag.samples.push(path[idx]);
            diag.perpendiculars.push(perpendicular);
        }

        for (k, pair) in diag.perpendiculars.windows(2).enumerate() {
            let (Some(a), Some(b)) = (pair[0], pair[1]) else {
                continue;
            };
            match a.intersection(&b, self.config.parallel_epsilon) {
                Some(hit) => diag.intersections.push(hit),
                None => diag.degeneracies.push(Degeneracy::ParallelPerpendiculars {
                    first: diag.sample_indices[k],
                    second: diag.sample_indices[k + 1],
                }),
            }
        }

        diag.pivot = mean_point(&diag.intersections);

        if !diag.degeneracies.is_empty() {
            log::trace!("pivot: skipped {:?}", diag.degeneracies);
        }
        log::trace!(
            "pivot: {} samples, {} intersections -> {:?}",
            n,
            diag.intersections.len(),
            diag.pivot
        );

        diag
    }
}

/// Pivot estimate with the default configuration.
///
/// # Example
/// ```
/// use bhramana::{Point2D, estimate_pivot};
///
/// let short = vec![Point2D::new(1.0, 1.0); 7];
/// assert_eq!(estimate_pivot(&short), None);
/// ```
pub fn estimate_pivot(path: &[Point2D]) -> Option<Point2D> {
    PivotEstimator::default().estimate(path)
}

/// Naive pivot: the mean of all path samples.
///
/// Cheap and always defined for a non-empty path, but biased toward the
/// arc itself for anything short of a full circle.
pub fn path_centroid(path: &[Point2D]) -> Option<Point2D> {
    mean_point(path)
}
