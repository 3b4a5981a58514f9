//! Default value functions for serde deserialization.

pub fn min_samples() -> usize {
    10
}

pub fn lead_fraction() -> f64 {
    0.1
}

pub fn trail_fraction() -> f64 {
    0.9
}

pub fn resolution() -> usize {
    4
}

pub fn perp_offset() -> usize {
    60
}

pub fn parallel_epsilon() -> f32 {
    0.0
}
