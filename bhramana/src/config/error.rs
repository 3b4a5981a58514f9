//! Configuration errors.

use thiserror::Error;

/// Invalid estimator configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rotation.min_samples must be at least 2, got {0}")]
    MinSamplesTooSmall(usize),

    #[error("rotation chord fractions must satisfy 0 <= lead < trail <= 1, got lead={lead}, trail={trail}")]
    ChordFractions { lead: f64, trail: f64 },

    #[error("pivot.resolution must be at least 2, got {0}")]
    ResolutionTooSmall(usize),

    #[error("pivot.perp_offset must be at least 1")]
    ZeroPerpOffset,

    #[error("pivot.parallel_epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f32),
}

/// Failure loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config validation error: {0}")]
    Validation(#[from] ConfigError),
}
