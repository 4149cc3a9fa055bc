//! Axis-aligned collision tests
//!
//! Every entity is an axis-aligned square, so overlap is a single
//! open-interval AABB test: rectangles that merely share an edge do not
//! collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned square, addressed by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: f32,
}

impl Rect {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    /// Open-interval overlap test: true iff the interiors intersect.
    /// Exactly-touching edges are not an overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size
            && self.pos.x + self.size > other.pos.x
            && self.pos.y < other.pos.y + other.size
            && self.pos.y + self.size > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(Vec2::new(10.0, 10.0), 8.0);
        let b = Rect::new(Vec2::new(14.0, 14.0), 32.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_rects_do_not_collide() {
        let a = Rect::new(Vec2::new(0.0, 0.0), 8.0);
        let b = Rect::new(Vec2::new(100.0, 100.0), 32.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // b starts exactly where a ends on the x axis
        let a = Rect::new(Vec2::new(0.0, 0.0), 8.0);
        let b = Rect::new(Vec2::new(8.0, 0.0), 8.0);
        assert!(!a.overlaps(&b));

        // Same on the y axis
        let c = Rect::new(Vec2::new(0.0, 8.0), 8.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_corner_does_not_collide() {
        let a = Rect::new(Vec2::new(0.0, 0.0), 8.0);
        let b = Rect::new(Vec2::new(8.0, 8.0), 8.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Rect::new(Vec2::new(0.0, 0.0), 32.0);
        let inner = Rect::new(Vec2::new(12.0, 12.0), 8.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
