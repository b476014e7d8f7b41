//! Page-relative geometry primitives
//!
//! All coordinates are pixels measured from the top-left corner of the
//! document page container, so they do not change when the page scrolls.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// A 2D coordinate in page-relative pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cumulative `offsetLeft`/`offsetTop` of an element relative to an ancestor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, other: Self) {
        self.left += other.left;
        self.top += other.top;
    }
}

/// Axis-aligned box describing where an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Same size, re-based onto a page-relative offset
    pub fn with_offset(self, offset: Offset) -> Self {
        Self {
            top: offset.top,
            left: offset.left,
            ..self
        }
    }

    /// Middle of the left edge
    pub fn left_mid(&self) -> Point {
        Point::new(self.left, self.center_y())
    }

    /// Middle of the right edge
    pub fn right_mid(&self) -> Point {
        Point::new(self.right(), self.center_y())
    }

    /// Middle of the top edge
    pub fn top_mid(&self) -> Point {
        Point::new(self.center_x(), self.top)
    }

    /// Middle of the bottom edge
    pub fn bottom_mid(&self) -> Point {
        Point::new(self.center_x(), self.bottom())
    }

    /// Returns whichever box lies entirely above the other, if either does
    pub fn higher_of(a: Rect, b: Rect) -> Option<Rect> {
        if a.bottom() < b.top {
            Some(a)
        } else if a.top > b.bottom() {
            Some(b)
        } else {
            None
        }
    }

    /// Returns the box with the smaller left edge (`b` on ties)
    pub fn leftmost(a: Rect, b: Rect) -> Rect {
        if a.left < b.left {
            a
        } else {
            b
        }
    }
}

/// Y coordinate where a vertical connector coming from `from` meets `to`
///
/// `to.top` when `from` sits above `to`, `to.bottom()` when it sits below,
/// `None` when the two boxes overlap vertically.
pub fn top_offset(from: Rect, to: Rect) -> Option<f64> {
    if from.bottom() < to.top {
        Some(to.top)
    } else if to.bottom() < from.top {
        Some(to.bottom())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 10.0, 50.0, 20.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.left_mid(), Point::new(10.0, 110.0));
        assert_eq!(r.right_mid(), Point::new(60.0, 110.0));
        assert_eq!(r.top_mid(), Point::new(35.0, 100.0));
        assert_eq!(r.bottom_mid(), Point::new(35.0, 120.0));
    }

    #[test]
    fn test_with_offset_keeps_size() {
        let r = Rect::new(500.0, 300.0, 40.0, 12.0).with_offset(Offset::new(7.0, 9.0));
        assert_eq!(r, Rect::new(9.0, 7.0, 40.0, 12.0));
    }

    #[test]
    fn test_higher_of() {
        let upper = Rect::new(0.0, 0.0, 10.0, 10.0);
        let lower = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert_eq!(Rect::higher_of(upper, lower), Some(upper));
        assert_eq!(Rect::higher_of(lower, upper), Some(upper));

        // Touching edges count as overlap
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(Rect::higher_of(upper, touching), None);
    }

    #[test]
    fn test_leftmost() {
        let a = Rect::new(0.0, 5.0, 10.0, 10.0);
        let b = Rect::new(0.0, 15.0, 10.0, 10.0);
        assert_eq!(Rect::leftmost(a, b), a);
        assert_eq!(Rect::leftmost(b, a), a);
    }

    #[test]
    fn test_top_offset() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(30.0, 0.0, 10.0, 10.0);
        assert_eq!(top_offset(a, b), Some(30.0));
        assert_eq!(top_offset(b, a), Some(10.0));
        assert_eq!(top_offset(a, Rect::new(5.0, 0.0, 10.0, 10.0)), None);
    }
}
