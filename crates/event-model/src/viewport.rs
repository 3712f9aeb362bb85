//! Pan/zoom transform and point types.
//!
//! The view transform sits on top of rink rendering: content coordinates
//! (pixels produced by the rink scales) are scaled about the origin and then
//! translated to land on screen.

use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Translate-then-scale transform with origin at the top-left corner.
///
/// `screen = content * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl ViewTransform {
    /// No pan, no zoom.
    pub const IDENTITY: ViewTransform = ViewTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Create a transform, clamping scale to `[MIN_SCALE, MAX_SCALE]`.
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale: clamp_scale(scale),
        }
    }

    /// Map a content point to screen space.
    pub fn apply(&self, content: Point2D) -> Point2D {
        Point2D::new(
            content.x * self.scale + self.translate_x,
            content.y * self.scale + self.translate_y,
        )
    }

    /// Map a screen point back to content space.
    pub fn invert(&self, screen: Point2D) -> Point2D {
        Point2D::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Zoom as a whole-number percentage (e.g. `150` for 1.5x).
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Clamp a zoom factor to the allowed range.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
