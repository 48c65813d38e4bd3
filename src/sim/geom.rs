//! Axis-aligned geometry for the play field
//!
//! Everything in the field is a rectangle or a circle tested through its
//! bounding box, so the math stays small: overlap tests, per-axis overlap
//! depth and a helper that keeps reflected velocity components away from zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of half-extent `half` centered on `center`
    pub fn centered(center: Vec2, half: Vec2) -> Self {
        Self {
            pos: center - half,
            size: half * 2.0,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::centered(center, Vec2::splat(radius))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Closed-interval overlap: touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }

    /// Penetration depth on each axis, the shallower side of each
    ///
    /// Only meaningful when the rectangles overlap.
    pub fn overlap_depth(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            (self.right() - other.left()).min(other.right() - self.left()),
            (self.bottom() - other.top()).min(other.bottom() - self.top()),
        )
    }
}

/// Push a velocity component to at least `min` in magnitude, keeping its sign
///
/// Zero counts as negative (upward/leftward).
#[inline]
pub fn enforce_min_component(value: f32, min: f32) -> f32 {
    if value.abs() >= min {
        value
    } else if value > 0.0 {
        min
    } else {
        -min
    }
}

/// Anti-trap rule: a component below `threshold` in magnitude becomes `±min`
#[inline]
pub fn lift_small_component(value: f32, threshold: f32, min: f32) -> f32 {
    if value.abs() < threshold {
        if value > 0.0 { min } else { -min }
    } else {
        value
    }
}

/// Rescale `vel` to `speed`, keeping its direction
///
/// A zero vector stays zero.
#[inline]
pub fn with_speed(vel: Vec2, speed: f32) -> Vec2 {
    vel.normalize_or_zero() * speed
}
