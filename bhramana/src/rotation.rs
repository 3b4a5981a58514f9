//! Rotation estimation from a drag path.
//!
//! The primary method compares the heading of a short chord at the start of
//! the path with the heading of a short chord at its end:
//!
//! ```text
//!   start0 ──► start1                 end0 ──► end1
//!   path[0]    path[⌊(n-1)·0.1⌋]      path[⌊(n-1)·0.9⌋]   path[n-1]
//!
//!   rotation = heading(end chord) - heading(start chord), in [0, 360)
//! ```
//!
//! Using chords instead of single points makes the heading robust to
//! endpoint jitter and needs no pivot estimate at all. The center-relative
//! method ([`RotationEstimator::estimate_about`]) measures the sweep of the
//! first and last samples around a supplied center instead, and is only as
//! good as that center.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::config::defaults;
use crate::core::Point2D;
use crate::core::math::{index_at_fraction, normalize_degrees_signed, normalize_degrees_unsigned};

/// Configuration for the rotation estimator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Paths shorter than this report zero rotation.
    /// Default: 10
    #[serde(default = "defaults::min_samples")]
    pub min_samples: usize,

    /// Fraction of the path at which the leading chord ends.
    /// Default: 0.1
    #[serde(default = "defaults::lead_fraction")]
    pub lead_fraction: f64,

    /// Fraction of the path at which the trailing chord starts.
    /// Default: 0.9
    #[serde(default = "defaults::trail_fraction")]
    pub trail_fraction: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::min_samples(),
            lead_fraction: defaults::lead_fraction(),
            trail_fraction: defaults::trail_fraction(),
        }
    }
}

impl RotationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum sample count.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Builder-style setter for both chord fractions.
    pub fn with_chord_fractions(mut self, lead: f64, trail: f64) -> Self {
        self.lead_fraction = lead;
        self.trail_fraction = trail;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_samples < 2 {
            return Err(ConfigError::MinSamplesTooSmall(self.min_samples));
        }
        let (lead, trail) = (self.lead_fraction, self.trail_fraction);
        if !(0.0..=1.0).contains(&lead) || !(0.0..=1.0).contains(&trail) || lead >= trail {
            return Err(ConfigError::ChordFractions { lead, trail });
        }
        Ok(())
    }
}

/// Stateless rotation estimator.
///
/// Every call recomputes from the full path; the estimator holds only its
/// configuration and can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct RotationEstimator {
    config: RotationConfig,
}

impl RotationEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Chord-to-chord rotation of the path in degrees, in `[0, 360)`.
    ///
    /// Returns exactly `0.0` when the path is empty or has fewer than
    /// [`RotationConfig::min_samples`] points. Duplicate samples that make a
    /// chord zero-length give that chord a heading of `0.0`.
    pub fn estimate(&self, path: &[Point2D]) -> f32 {
        let n = path.len();
        if n == 0 || n < self.config.min_samples {
            log::trace!("rotation: {} samples, need {}", n, self.config.min_samples);
            return 0.0;
        }

        let start0 = path[0];
        let start1 = path[index_at_fraction(n, self.config.lead_fraction)];
        let end0 = path[index_at_fraction(n, self.config.trail_fraction)];
        let end1 = path[n - 1];

        let start_vec = start1 - start0;
        let end_vec = end1 - end0;
        if start_vec.length_squared() == 0.0 || end_vec.length_squared() == 0.0 {
            log::trace!("rotation: zero-length chord, heading taken as 0");
        }

        let degrees = (end_vec.heading() - start_vec.heading()).to_degrees();
        normalize_degrees_unsigned(degrees)
    }

    /// Center-relative rotation in degrees, in `(-180, 180]`.
    ///
    /// Measures the angle of the first and last samples around `center` and
    /// reports `angle(start) - angle(end)`. Returns `0.0` for empty paths and
    /// paths shorter than [`RotationConfig::min_samples`].
    pub fn estimate_about(&self, path: &[Point2D], center: Point2D) -> f32 {
        let n = path.len();
        if n == 0 || n < self.config.min_samples {
            return 0.0;
        }

        let start_angle = path[0].angle_from(&center);
        let end_angle = path[n - 1].angle_from(&center);

        normalize_degrees_signed((start_angle - end_angle).to_degrees())
    }
}

/// Chord-to-chord rotation with the default configuration.
///
/// # Example
/// ```
/// use bhramana::{Point2D, estimate_rotation};
///
/// let short = vec![Point2D::new(0.0, 0.0); 5];
/// assert_eq!(estimate_rotation(&short), 0.0);
/// ```
pub fn estimate_rotation(path: &[Point2D]) -> f32 {
    RotationEstimator::default().estimate(path)
}

/// Center-relative rotation with the default configuration.
pub fn estimate_rotation_about(path: &[Point2D], center: Point2D) -> f32 {
    RotationEstimator::default().estimate_about(path, center)
}
