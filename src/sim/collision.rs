//! Collision detection between axis-aligned boxes
//!
//! Boxes only collide when they overlap with positive area. Edges that
//! exactly touch are treated as a miss.

use super::obstacle::Obstacle;
use super::rect::Rect;

/// Check whether two rectangles overlap
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let separated = a.bottom() <= b.top()
        || a.top() >= b.bottom()
        || a.left() >= b.right()
        || a.right() <= b.left();
    !separated
}

/// Find the first obstacle (in list order) overlapping `rect`
///
/// Returns the obstacle index, stopping at the first hit.
pub fn first_overlap(rect: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| rects_overlap(rect, &obstacle.rect))
}
