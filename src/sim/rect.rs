//! Axis-aligned rectangle geometry for the paddle, bricks and ball
//!
//! A rectangle is anchored at its lower-left corner (y-up). Containment is
//! inclusive on every edge so corner contacts register on the boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner
    pub min: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Check if a point lies inside or on the edge of the rectangle
    ///
    /// Total over all inputs: any NaN coordinate is outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// The four corners
    pub fn corners(&self) -> Corners {
        Corners {
            bottom_left: Vec2::new(self.left(), self.bottom()),
            bottom_right: Vec2::new(self.right(), self.bottom()),
            top_left: Vec2::new(self.left(), self.top()),
            top_right: Vec2::new(self.right(), self.top()),
        }
    }
}

/// Corner points of a [`Rect`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub top_left: Vec2,
    pub top_right: Vec2,
}

impl Corners {
    pub fn bottom(&self) -> [Vec2; 2] {
        [self.bottom_left, self.bottom_right]
    }

    pub fn top(&self) -> [Vec2; 2] {
        [self.top_left, self.top_right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_and_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 5.0);
        assert!(r.contains(Vec2::new(25.0, 22.0)));
        // Edges and corners are inside
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 25.0)));
        assert!(r.contains(Vec2::new(10.0, 25.0)));
        assert!(!r.contains(Vec2::new(9.99, 22.0)));
        assert!(!r.contains(Vec2::new(25.0, 25.01)));
    }

    #[test]
    fn test_contains_nan_is_outside() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.contains(Vec2::new(f32::NAN, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, f32::NAN)));
    }

    #[test]
    fn test_zero_size_rect_contains_its_anchor() {
        let r = Rect::new(3.0, 4.0, 0.0, 0.0);
        assert!(r.contains(Vec2::new(3.0, 4.0)));
        assert!(!r.contains(Vec2::new(3.0, 4.1)));
    }

    #[test]
    fn test_corners() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let c = r.corners();
        assert_eq!(c.bottom_left, Vec2::new(1.0, 2.0));
        assert_eq!(c.bottom_right, Vec2::new(4.0, 2.0));
        assert_eq!(c.top_left, Vec2::new(1.0, 6.0));
        assert_eq!(c.top_right, Vec2::new(4.0, 6.0));
        assert_eq!(r.center(), Vec2::new(2.5, 4.0));
    }
}
