//! Delete zone geometry
//!
//! An axis-aligned rectangle in world coordinates. Any world ball whose center
//! lies inside it (edges included) is removed at the end of a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle that destroys balls. Callers keep `x1 <= x2`, `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteZone {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl DeleteZone {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bottom "bowl" spanning the world width minus side margins
    pub fn bottom_bowl(width: f32, height: f32, zone_height: f32, side: f32, bottom: f32) -> Self {
        Self {
            x1: side,
            y1: height - zone_height - bottom,
            x2: width - side,
            y2: height - bottom,
        }
    }

    /// Inclusive point containment on all four edges
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        self.x1 <= pos.x && pos.x <= self.x2 && self.y1 <= pos.y && pos.y <= self.y2
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}
