//! Core geometric types and primitives.
//!
//! - [`Point2D`]: a sample on the drag surface, also used as a 2D vector
//! - [`Line2D`]: an infinite line through two points
//! - [`math`]: angle normalization, perpendiculars, line intersection
//!
//! Coordinates are in whatever space the input surface reports (usually
//! screen pixels, Y pointing down). Nothing here assumes a handedness.

mod line;
pub mod math;
mod point;

pub use line::Line2D;
pub use math::{
    line_intersection, mean_point, normalize_degrees_signed, normalize_degrees_unsigned,
    perpendicular_unit_vector,
};
pub use point::Point2D;
