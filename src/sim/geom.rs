//! Axis-aligned geometry primitives
//!
//! Everything in the arena is either a circle (the ball) or an axis-aligned
//! rectangle. The ball's circle only matters for the corner distance gate;
//! all probing happens against rectangles, so a single `Rect` type carries
//! the containment and overlap queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus extent.
///
/// Arena coordinates: x grows right, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Containment test, inclusive on all edges
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }

    /// Axis-aligned overlap test, touching edges count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x <= b_max.x
            && other.min.x <= a_max.x
            && self.min.y <= b_max.y
            && other.min.y <= a_max.y
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.max().x, self.min.y)
    }

    #[inline]
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max().y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        self.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 60.0)));
        assert!(r.contains(r.center()));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert!(!r.contains(Vec2::new(25.0, 60.1)));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        // Touching edges count as overlap
        let d = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_corners() {
        let r = Rect::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(r.top_left(), Vec2::new(1.0, 2.0));
        assert_eq!(r.top_right(), Vec2::new(4.0, 2.0));
        assert_eq!(r.bottom_left(), Vec2::new(1.0, 6.0));
        assert_eq!(r.bottom_right(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_distance_uses_both_points() {
        // Distance between two distinct points must reflect both deltas,
        // not collapse to zero.
        let a = Vec2::new(3.0, 0.0);
        let b = Vec2::new(0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!(a.distance(b) > 0.0);
    }
}
