//! Axis-aligned rectangle geometry shared by the player and obstacles
//!
//! Rectangles are center-origin: `pos` is the middle of the box and the
//! edges sit half a size away on each axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A center-origin axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center position
    pub pos: Vec2,
    /// Full width and height (both > 0)
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Half width and half height
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        (self.size * 0.5).abs()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half_extents().x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half_extents().x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half_extents().y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_extents().y
    }

    /// Top-left corner relative to the center (for drawing after a translate)
    #[inline]
    pub fn local_origin(&self) -> Vec2 {
        -self.half_extents()
    }

    /// Move the center so the whole rectangle lies inside `min..max`
    pub fn clamp_inside(&mut self, min: Vec2, max: Vec2) {
        let half = self.half_extents();
        if self.left() < min.x {
            self.pos.x = min.x + half.x;
        } else if self.right() > max.x {
            self.pos.x = max.x - half.x;
        }

        if self.top() < min.y {
            self.pos.y = min.y + half.y;
        } else if self.bottom() > max.y {
            self.pos.y = max.y - half.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(Vec2::new(320.0, 340.0), Vec2::new(32.0, 48.0));
        assert_eq!(rect.half_extents(), Vec2::new(16.0, 24.0));
        assert_eq!(rect.left(), 304.0);
        assert_eq!(rect.right(), 336.0);
        assert_eq!(rect.top(), 316.0);
        assert_eq!(rect.bottom(), 364.0);
        assert_eq!(rect.local_origin(), Vec2::new(-16.0, -24.0));
    }

    #[test]
    fn test_clamp_inside() {
        let min = Vec2::ZERO;
        let max = Vec2::new(640.0, 400.0);

        let mut rect = Rect::new(Vec2::new(-5.0, 395.0), Vec2::splat(32.0));
        rect.clamp_inside(min, max);
        assert_eq!(rect.pos, Vec2::new(16.0, 384.0));

        let mut rect = Rect::new(Vec2::new(700.0, 2.0), Vec2::splat(32.0));
        rect.clamp_inside(min, max);
        assert_eq!(rect.pos, Vec2::new(624.0, 16.0));

        // Already inside: untouched
        let mut rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0));
        rect.clamp_inside(min, max);
        assert_eq!(rect.pos, Vec2::new(100.0, 100.0));
    }
}
