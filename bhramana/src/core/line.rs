//! Infinite line through two points.

use serde::{Deserialize, Serialize};

use super::Point2D;
use super::math::{line_intersection_with_tolerance, perpendicular_unit_vector};

/// A 2D line defined by two points.
///
/// The line is conceptually infinite; `start` and `end` only fix its
/// position and direction. Perpendicular construction lines have
/// `end = start + unit_normal`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    /// First defining point.
    pub start: Point2D,
    /// Second defining point.
    pub end: Point2D,
}

impl Line2D {
    /// Create a line through two points.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Line through `point`, perpendicular to the direction `from -> to`.
    ///
    /// Returns `None` when `from == to` (no direction to be perpendicular to).
    #[inline]
    pub fn perpendicular_through(point: Point2D, from: Point2D, to: Point2D) -> Option<Line2D> {
        perpendicular_unit_vector(from, to).map(|unit| Line2D::new(point, point + unit))
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Point at parameter `t` along the line (`t = 0` start, `t = 1` end).
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }

    /// Intersection with another line, treating both as infinite.
    ///
    /// Returns `None` when `|det| <= epsilon`; pass `0.0` for exact parallel
    /// detection.
    #[inline]
    pub fn intersection(&self, other: &Line2D, epsilon: f32) -> Option<Point2D> {
        line_intersection_with_tolerance(self.start, self.end, other.start, other.end, epsilon)
    }
}
