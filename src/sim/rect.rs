//! Axis-aligned rectangle used for every solid thing on screen
//!
//! Screen space: origin top-left, x grows right, y grows down.

use glam::Vec2;

/// An axis-aligned rectangle (position is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rectangle. Panics on degenerate or non-finite geometry.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(
            x.is_finite() && y.is_finite(),
            "rect position must be finite: ({x}, {y})"
        );
        assert!(
            w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0,
            "rect size must be positive: {w}x{h}"
        );
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_x(&mut self, cx: f32) {
        self.x = cx - self.w / 2.0;
    }

    /// Change width, keeping the horizontal center fixed
    pub fn set_width(&mut self, w: f32) {
        assert!(w.is_finite() && w > 0.0, "rect width must be positive: {w}");
        let cx = self.center().x;
        self.w = w;
        self.set_center_x(cx);
    }

    /// Move by an offset
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Check if a point lies inside (edges included)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}
