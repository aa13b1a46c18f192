//! Axis-aligned box geometry
//!
//! Everything on screen is a box: units, the ship, bolts, even the defense
//! line (a zero-height box). Stored as center plus half-extents; edges are
//! derived. Coordinates are y-up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    /// Build from outer edges
    pub fn from_edges(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            center: Vec2::new((left + right) / 2.0, (bottom + top) / 2.0),
            half: Vec2::new((right - left) / 2.0, (top - bottom) / 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Interval overlap on both axes; touching edges count as overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.bottom() <= other.top()
            && other.bottom() <= self.top()
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert!((rect.left() - 8.0).abs() < 0.001);
        assert!((rect.right() - 12.0).abs() < 0.001);
        assert!((rect.bottom() - 17.0).abs() < 0.001);
        assert!((rect.top() - 23.0).abs() < 0.001);
    }

    #[test]
    fn test_from_edges_round_trips() {
        let rect = Rect::from_edges(8.0, 12.0, 17.0, 23.0);
        assert_eq!(rect, Rect::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0)));
    }

    #[test]
    fn test_overlap_hit_and_miss() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(8.0, 8.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Overlapping x range, disjoint y range
        let b = Rect::new(Vec2::new(2.0, 40.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rect.contains_point(Vec2::new(3.0, -4.0)));
        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains_point(Vec2::new(5.1, 0.0)));
    }
}
