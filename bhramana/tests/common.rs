//! Synthetic drag paths for integration tests.

#![allow(dead_code)]

use bhramana::Point2D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Samples at uniform angular steps on a circle.
///
/// Angles follow the math convention (counter-clockwise from +X); a negative
/// sweep runs clockwise.
pub fn arc(center: Point2D, radius: f32, start_deg: f32, sweep_deg: f32, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let a = (start_deg + sweep_deg * t).to_radians();
            Point2D::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Straight drag from `from` to `to`.
pub fn straight(from: Point2D, to: Point2D, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            from + (to - from) * t
        })
        .collect()
}

/// Add uniform jitter of up to `amplitude` to each coordinate.
pub fn jitter(path: &[Point2D], amplitude: f32, seed: u64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    path.iter()
        .map(|p| {
            Point2D::new(
                p.x + rng.random_range(-amplitude..=amplitude),
                p.y + rng.random_range(-amplitude..=amplitude),
            )
        })
        .collect()
}
