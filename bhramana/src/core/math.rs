//! Angle normalization and planar geometry primitives.
//!
//! Angles handed to the normalizers are in degrees. Headings produced by
//! [`Point2D::heading`] are in radians and converted with `f32::to_degrees`.

use super::Point2D;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Half turn in degrees.
pub const HALF_TURN_DEG: f32 = 180.0;

/// Normalize an angle difference into `(-180, 180]` degrees.
///
/// # Example
/// ```
/// use bhramana::core::math::normalize_degrees_signed;
///
/// assert_eq!(normalize_degrees_signed(270.0), -90.0);
/// assert_eq!(normalize_degrees_signed(-90.0), -90.0);
/// assert_eq!(normalize_degrees_signed(-180.0), 180.0);
/// ```
#[inline]
pub fn normalize_degrees_signed(degrees: f32) -> f32 {
    let mut a = degrees % FULL_TURN_DEG;
    if a < 0.0 {
        a += FULL_TURN_DEG;
    }
    if a > HALF_TURN_DEG {
        a -= FULL_TURN_DEG;
    }
    a
}

/// Normalize an angle difference into `[0, 360)` degrees.
///
/// Differences of two `atan2` headings lie in `(-360, 360)`, so a single
/// correction is enough. A tiny negative input can round up to exactly
/// `360.0` after the correction; that case folds to `0.0`.
///
/// # Example
/// ```
/// use bhramana::core::math::normalize_degrees_unsigned;
///
/// assert_eq!(normalize_degrees_unsigned(-90.0), 270.0);
/// assert_eq!(normalize_degrees_unsigned(45.0), 45.0);
/// ```
#[inline]
pub fn normalize_degrees_unsigned(degrees: f32) -> f32 {
    let mut a = degrees;
    if a < 0.0 {
        a += FULL_TURN_DEG;
    }
    if a >= FULL_TURN_DEG {
        a -= FULL_TURN_DEG;
    }
    a
}

/// Unit vector perpendicular to the direction `from -> to`.
///
/// The direction is rotated 90° counter-clockwise (`(-d.y, d.x)`) and scaled
/// to unit length. Returns `None` when `from == to`.
#[inline]
pub fn perpendicular_unit_vector(from: Point2D, to: Point2D) -> Option<Point2D> {
    (to - from).perpendicular().try_normalized()
}

/// Intersection of the infinite lines `p1-p2` and `p3-p4`.
///
/// Solved with Cramer's rule. Lines are treated as parallel only when the
/// determinant is exactly zero; coincident lines are reported as parallel.
///
/// # Example
/// ```
/// use bhramana::core::{Point2D, math::line_intersection};
///
/// let hit = line_intersection(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(10.0, 10.0),
///     Point2D::new(0.0, 10.0),
///     Point2D::new(10.0, 0.0),
/// );
/// assert_eq!(hit, Some(Point2D::new(5.0, 5.0)));
/// ```
#[inline]
pub fn line_intersection(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Option<Point2D> {
    line_intersection_with_tolerance(p1, p2, p3, p4, 0.0)
}

/// Intersection of two infinite lines, rejecting pairs with `|det| <= epsilon`.
///
/// With `epsilon = 0.0` this is the exact-equality test of [`line_intersection`].
pub fn line_intersection_with_tolerance(
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    p4: Point2D,
    epsilon: f32,
) -> Option<Point2D> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let det = d1.cross(d2);
    if det.abs() <= epsilon {
        return None;
    }

    // Parameter along the first line
    let t = (p3 - p1).cross(d2) / det;
    Some(p1 + d1 * t)
}

/// Componentwise mean of a set of points.
///
/// Returns `None` for an empty set.
///
/// # Example
/// ```
/// use bhramana::core::{Point2D, math::mean_point};
///
/// let points = [Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0), Point2D::new(1.0, 3.0)];
/// assert_eq!(mean_point(&points), Some(Point2D::new(1.0, 1.0)));
/// assert_eq!(mean_point(&[]), None);
/// ```
#[inline]
pub fn mean_point(points: &[Point2D]) -> Option<Point2D> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f32;
    let mut sum_x: f32 = 0.0;
    let mut sum_y: f32 = 0.0;

    for p in points {
        sum_x += p.x;
        sum_y += p.y;
    }

    Some(Point2D::new(sum_x / n, sum_y / n))
}

/// Index at `fraction` of the way through a sequence of `len` samples.
///
/// Computes `floor((len - 1) * fraction)` in double precision and clamps to
/// the last valid index. Returns `0` for an empty sequence, which is not a
/// valid index; callers check for an empty path first.
#[inline]
pub fn index_at_fraction(len: usize, fraction: f64) -> usize {
    let last = len.saturating_sub(1);
    let idx = (last as f64 * fraction).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(last)
    }
}
