//! Axis-aligned bounding boxes shared by every entity
//!
//! A bounding box is never stored: it is derived from an entity's current
//! position and fixed size each time it is asked for, so it cannot go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a top-left position and a size vector
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect,
    /// and empty rectangles intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Anything with a position and a fixed size
pub trait Entity {
    /// Top-left corner
    fn pos(&self) -> Vec2;

    /// Fixed width and height
    fn size(&self) -> Vec2;

    fn bounding_box(&self) -> Rect {
        Rect::from_pos_size(self.pos(), self.size())
    }
}
