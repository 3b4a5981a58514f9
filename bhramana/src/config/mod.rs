//! Unified configuration for the rotation and pivot estimators.
//!
//! All tunables are optional in YAML; missing keys fall back to the
//! defaults below.
//!
//! ## Example YAML
//!
//! ```yaml
//! rotation:
//!   min_samples: 10       # below this the rotation is 0
//!   lead_fraction: 0.1    # end of the leading chord
//!   trail_fraction: 0.9   # start of the trailing chord
//!
//! pivot:
//!   resolution: 4         # sample bands; resolution - 1 perpendiculars
//!   perp_offset: 60       # secant half-width in samples
//!   parallel_epsilon: 0.0 # |det| at or below this counts as parallel
//! ```
//!
//! `perp_offset` is measured in samples, so its best value depends on the
//! input sampling rate and display density. Tune it per device.

pub(crate) mod defaults;
mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pivot::PivotConfig;
use crate::rotation::RotationConfig;

pub use error::{ConfigError, ConfigLoadError};

/// Full estimator configuration loaded from YAML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Chord-to-chord rotation settings
    #[serde(default)]
    pub rotation: RotationConfig,

    /// Perpendicular-intersection pivot settings
    #[serde(default)]
    pub pivot: PivotConfig,
}

impl EstimatorConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EstimatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigLoadError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rotation.validate()?;
        self.pivot.validate()
    }

    /// Builder-style setter for the rotation section.
    pub fn with_rotation(mut self, rotation: RotationConfig) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style setter for the pivot section.
    pub fn with_pivot(mut self, pivot: PivotConfig) -> Self {
        self.pivot = pivot;
        self
    }
}
