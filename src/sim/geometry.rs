//! Axis-aligned geometry for ball, paddle and brick collision tests
//!
//! All comparisons are strict: touching edges never count as contact, the
//! ball has to penetrate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (origin at top-left, y grows downward)
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

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal extent lies strictly inside `other`'s horizontal extent
    #[inline]
    pub fn within_horizontally(&self, other: &Rect) -> bool {
        self.left() > other.left() && self.right() < other.right()
    }

    /// Horizontal extents strictly overlap
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Vertical extents strictly overlap
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }
}

/// A circle, used for the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Strict AABB overlap test
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps_horizontally(b) && a.overlaps_vertically(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_penetration() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Sharing an edge is not a hit
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));

        assert!(overlaps(&a, &Rect::new(9.5, 9.5, 10.0, 10.0)));
        assert!(overlaps(&a, &Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!overlaps(&a, &Rect::new(30.0, 30.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn test_axis_overlaps() {
        let brick = Rect::new(45.0, 60.0, 70.0, 20.0);

        // Beside the brick: rows line up, columns don't
        let beside = Rect::new(120.0, 65.0, 20.0, 20.0);
        assert!(beside.overlaps_vertically(&brick));
        assert!(!beside.overlaps_horizontally(&brick));
        assert!(!overlaps(&beside, &brick));

        // Flush under the brick's bottom edge
        let below = Rect::new(70.0, 80.0, 20.0, 20.0);
        assert!(below.overlaps_horizontally(&brick));
        assert!(!below.overlaps_vertically(&brick));
        assert!(!overlaps(&below, &brick));

        let inside = Rect::new(70.0, 68.0, 20.0, 20.0);
        assert!(inside.overlaps_horizontally(&brick) && inside.overlaps_vertically(&brick));
        assert!(overlaps(&inside, &brick));
    }

    #[test]
    fn test_within_horizontally() {
        let paddle = Rect::new(360.0, 580.0, 80.0, 10.0);
        let ball = Circle::new(Vec2::new(390.0, 575.0), 10.0).bounds();
        assert!(ball.within_horizontally(&paddle));

        // Ball edge flush with paddle edge does not count
        let flush = Circle::new(Vec2::new(370.0, 575.0), 10.0).bounds();
        assert!(!flush.within_horizontally(&paddle));
    }

    #[test]
    fn test_circle_bounds() {
        let r = Circle::new(Vec2::new(400.0, 300.0), 10.0).bounds();
        assert_eq!(r, Rect::new(390.0, 290.0, 20.0, 20.0));
        assert_eq!(r.right(), 410.0);
        assert_eq!(r.bottom(), 310.0);
    }
}
