//! Color mapping for rotation readouts.
//!
//! Renderers tint the path or the pivot marker by how far the gesture has
//! turned. Two mappings are provided: a full hue wheel (0° red, 120° green,
//! 240° blue) and a two-stop linear gradient over `[0, 360)`.

use crate::core::math::{FULL_TURN_DEG, normalize_degrees_unsigned};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Create a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(r), q(g), q(b))
    }
}

/// Hue-wheel color for a rotation: fully saturated, full value.
///
/// The angle is normalized into `[0, 360)` first, so any finite input works.
///
/// # Example
/// ```
/// use bhramana::color::{Rgb, rotation_hue};
///
/// assert_eq!(rotation_hue(0.0), Rgb::new(255, 0, 0));
/// assert_eq!(rotation_hue(120.0), Rgb::new(0, 255, 0));
/// assert_eq!(rotation_hue(-120.0), Rgb::new(0, 0, 255));
/// ```
pub fn rotation_hue(degrees: f32) -> Rgb {
    hsv_to_rgb(normalize_degrees_unsigned(degrees % FULL_TURN_DEG), 1.0, 1.0)
}

/// HSV to RGB. `hue` in degrees `[0, 360)`, `saturation` and `value` in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let c = value * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::from_unit(r + m, g + m, b + m)
}

/// Linear two-stop gradient over one full turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationGradient {
    /// Color at 0°
    pub start: Rgb,
    /// Color approached as the rotation nears 360°
    pub end: Rgb,
}

impl Default for RotationGradient {
    fn default() -> Self {
        Self {
            start: Rgb::new(0x22, 0x22, 0xAA),
            end: Rgb::new(0xAA, 0x22, 0x22),
        }
    }
}

impl RotationGradient {
    /// Create a gradient between two colors.
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Color for a rotation in degrees.
    pub fn color(&self, degrees: f32) -> Rgb {
        let t = normalize_degrees_unsigned(degrees % FULL_TURN_DEG) / FULL_TURN_DEG;
        let lerp = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * t;
        Rgb::new(
            lerp(self.start.r, self.end.r).round() as u8,
            lerp(self.start.g, self.end.g).round() as u8,
            lerp(self.start.b, self.end.b).round() as u8,
        )
    }
}
