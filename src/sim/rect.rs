//! Axis-aligned rectangle geometry
//!
//! Every hit box in the game is an unrotated rectangle anchored at its
//! top-left corner, in canvas pixels (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test on all four sides.
    ///
    /// Rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_partial() {
        let player = Rect::new(200.0, 390.0, 50.0, 27.0);
        let enemy = Rect::new(210.0, 395.0, 50.0, 27.0);
        assert!(player.overlaps(&enemy));
        assert!(enemy.overlaps(&player));
    }

    #[test]
    fn test_overlap_far_right() {
        let player = Rect::new(200.0, 390.0, 50.0, 27.0);
        let enemy = Rect::new(400.0, 395.0, 50.0, 27.0);
        assert!(!player.overlaps(&enemy));
    }

    #[test]
    fn test_identical_rects_overlap() {
        let r = Rect::new(12.5, -3.0, 50.0, 27.0);
        assert!(r.overlaps(&r));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 27.0);
        // Shares the right edge
        assert!(!a.overlaps(&Rect::new(50.0, 0.0, 50.0, 27.0)));
        // Shares the bottom edge
        assert!(!a.overlaps(&Rect::new(0.0, 27.0, 50.0, 27.0)));
        // Left and above
        assert!(!a.overlaps(&Rect::new(-50.0, 0.0, 50.0, 27.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -27.0, 50.0, 27.0)));
    }

    #[test]
    fn test_from_pos_size() {
        let r = Rect::from_pos_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
    }
}
