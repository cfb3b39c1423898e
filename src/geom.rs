//! Shared geometry types
//!
//! Screen-style coordinates throughout: y grows downward, so `top()` is the
//! smaller y and `bottom()` the larger.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (goal region, hazard spawn zones)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
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
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Point containment, inclusive on all four edges
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Rectangle inset by `amount` on every side. Collapses to zero size
    /// rather than inverting when the inset exceeds the half-extent.
    pub fn shrink(&self, amount: f32) -> Self {
        let inset = amount.min(self.w * 0.5).min(self.h * 0.5);
        Self {
            x: self.x + inset,
            y: self.y + inset,
            w: (self.w - 2.0 * inset).max(0.0),
            h: (self.h - 2.0 * inset).max(0.0),
        }
    }
}
